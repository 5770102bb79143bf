use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::engine::config::BoardConfig;
use constants::board::{HOME_EDGE_OFFSET, HOME_HEIGHT};
use constants::interaction::{
    BASE_TILT, FLIP_ANGLE, ROTATION_STEP, SELECTED_BOB_AMPLITUDE, SELECTED_BOB_FREQUENCY,
};
use constants::palette;
use constants::segments::{SEGMENT_DEPTH, SEGMENT_LENGTH, SEGMENT_THICKNESS, SEGMENTS};

pub const DIGIT_COUNT: usize = 10;

/// Visual state a digit reports to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    Normal,
    Selected,
    Placed,
}

/// Authoritative state of one digit piece. Rendering derives from this,
/// never the other way round.
#[derive(Debug, Clone)]
pub struct DigitPiece {
    pub value: u8,
    pub home_position: Vec3,
    pub position: Vec3,
    /// Planar rotation in quarter-turn steps around the board normal.
    pub rotation_steps: i32,
    pub flipped: bool,
    pub placed: bool,
    pub occupied_cell: Option<(usize, usize)>,
}

impl DigitPiece {
    fn at_home(value: u8, home: Vec3) -> Self {
        Self {
            value,
            home_position: home,
            position: home,
            rotation_steps: 0,
            flipped: false,
            placed: false,
            occupied_cell: None,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.rotation_steps as f32 * ROTATION_STEP
    }

    /// Full orientation: base flat tilt, then planar yaw, then the flip
    /// half-turn, matching the euler composition the meshes were built for.
    pub fn orientation(&self) -> Quat {
        let flip = if self.flipped { FLIP_ANGLE } else { 0.0 };
        Quat::from_euler(EulerRot::XYZ, BASE_TILT, self.yaw(), flip)
    }
}

/// Master list of the ten pieces plus the single-selection slot. All
/// mutation goes through `&mut self` methods, so every operation is atomic
/// from the schedule's point of view.
#[derive(Resource)]
pub struct DigitRegistry {
    pieces: Vec<DigitPiece>,
    selected: Option<usize>,
}

impl DigitRegistry {
    /// Ten pieces with deterministic home positions: digits 0-4 spaced
    /// along the left board edge, 5-9 mirrored to the right.
    pub fn new(board_width: f32, board_height: f32) -> Self {
        let pieces = (0..DIGIT_COUNT as u8)
            .map(|value| {
                let side = if value < 5 { -1.0 } else { 1.0 };
                let slot = (value % 5) as f32;
                let home = Vec3::new(
                    side * (board_width / 2.0 + HOME_EDGE_OFFSET),
                    HOME_HEIGHT,
                    -board_height / 2.0 + slot * (board_height / 4.0),
                );
                DigitPiece::at_home(value, home)
            })
            .collect();
        Self {
            pieces,
            selected: None,
        }
    }

    pub fn pieces(&self) -> &[DigitPiece] {
        &self.pieces
    }

    pub fn piece(&self, value: u8) -> Option<&DigitPiece> {
        self.pieces.get(value as usize)
    }

    pub fn selected_value(&self) -> Option<u8> {
        self.selected.map(|index| self.pieces[index].value)
    }

    pub fn selected_piece(&self) -> Option<&DigitPiece> {
        self.selected.map(|index| &self.pieces[index])
    }

    /// Selects a piece, clearing any previous selection first. Placed
    /// pieces refuse selection.
    pub fn select(&mut self, value: u8) -> bool {
        let Some(index) = self.pieces.iter().position(|p| p.value == value) else {
            return false;
        };
        if self.pieces[index].placed {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn move_selected_to(&mut self, position: Vec3) -> bool {
        match self.selected {
            Some(index) => {
                self.pieces[index].position = position;
                true
            }
            None => false,
        }
    }

    pub fn rotate_selected(&mut self, steps: i32) -> bool {
        match self.selected {
            Some(index) => {
                self.pieces[index].rotation_steps += steps;
                true
            }
            None => false,
        }
    }

    pub fn flip_selected(&mut self) -> bool {
        match self.selected {
            Some(index) => {
                let piece = &mut self.pieces[index];
                piece.flipped = !piece.flipped;
                true
            }
            None => false,
        }
    }

    /// Commits the selected piece onto a cell: seats it, marks it placed,
    /// and clears the selection. Returns the placed value.
    pub fn place_selected(&mut self, cell: (usize, usize), seat: Vec3) -> Option<u8> {
        let index = self.selected.take()?;
        let piece = &mut self.pieces[index];
        piece.position = seat;
        piece.placed = true;
        piece.occupied_cell = Some(cell);
        Some(piece.value)
    }

    /// Rejection path: the selected piece snaps back home and the
    /// selection clears.
    pub fn return_selected_home(&mut self) -> Option<u8> {
        let index = self.selected.take()?;
        let piece = &mut self.pieces[index];
        piece.position = piece.home_position;
        Some(piece.value)
    }

    pub fn reset_all(&mut self) {
        for piece in &mut self.pieces {
            piece.position = piece.home_position;
            piece.rotation_steps = 0;
            piece.flipped = false;
            piece.placed = false;
            piece.occupied_cell = None;
        }
        self.selected = None;
    }

    pub fn placed_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.placed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.placed_count() == self.pieces.len()
    }
}

#[derive(Component)]
pub struct DigitBody {
    pub value: u8,
}

/// One seven-segment bar. `owner` maps a segment hit back to its digit
/// without a stored pointer cycle.
#[derive(Component)]
pub struct DigitSegment {
    pub owner: u8,
}

/// Full box size of a segment, for ray picking.
#[derive(Component, Clone, Copy)]
pub struct SegmentSize(pub Vec3);

/// Material shared by all segments of one digit; state colors write here.
#[derive(Component)]
pub struct DigitMaterial(pub Handle<StandardMaterial>);

/// Spawns the ten digit bodies with their segment children and inserts the
/// registry resource.
pub fn spawn_digits(
    mut commands: Commands,
    config: Res<BoardConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let registry = DigitRegistry::new(config.board_width, config.board_height);
    let segment_size = Vec3::new(SEGMENT_LENGTH, SEGMENT_THICKNESS, SEGMENT_DEPTH);
    let segment_mesh = meshes.add(Cuboid::new(segment_size.x, segment_size.y, segment_size.z));

    for piece in registry.pieces() {
        let material = materials.add(StandardMaterial {
            base_color: palette::DIGIT,
            perceptual_roughness: 0.35,
            ..default()
        });

        commands
            .spawn((
                DigitBody { value: piece.value },
                DigitMaterial(material.clone()),
                Name::new(format!("Digit_{}", piece.value)),
                Transform::from_translation(piece.position).with_rotation(piece.orientation()),
                Visibility::default(),
            ))
            .with_children(|digit| {
                for spec in SEGMENTS {
                    if !spec.digits.contains(&piece.value) {
                        continue;
                    }
                    let rotation = if spec.vertical {
                        Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)
                    } else {
                        Quat::IDENTITY
                    };
                    digit.spawn((
                        DigitSegment { owner: piece.value },
                        SegmentSize(segment_size),
                        Mesh3d(segment_mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(spec.offset[0], spec.offset[1], 0.0)
                            .with_rotation(rotation),
                        Name::new(format!("segment_{}_{}", piece.value, spec.name)),
                    ));
                }
            });
    }

    info!("spawned {} digit pieces", registry.pieces().len());
    commands.insert_resource(registry);
}

/// Derives each digit entity's transform from registry state. The selected
/// piece gets a time-based hover bob that never feeds back into the
/// registry.
pub fn sync_digit_transforms(
    registry: Res<DigitRegistry>,
    time: Res<Time>,
    mut bodies: Query<(&DigitBody, &mut Transform)>,
) {
    let bob = (time.elapsed_secs() * SELECTED_BOB_FREQUENCY * TAU).sin() * SELECTED_BOB_AMPLITUDE;
    for (body, mut transform) in &mut bodies {
        let Some(piece) = registry.piece(body.value) else {
            continue;
        };
        let mut translation = piece.position;
        if !piece.placed && registry.selected_value() == Some(body.value) {
            translation.y += bob;
        }
        transform.translation = translation;
        transform.rotation = piece.orientation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::board::{BOARD_HEIGHT, BOARD_WIDTH, PIECE_SEAT_CLEARANCE};

    fn registry() -> DigitRegistry {
        DigitRegistry::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[test]
    fn creates_one_piece_per_digit_with_unique_homes() {
        let registry = registry();
        assert_eq!(registry.pieces().len(), DIGIT_COUNT);
        for (i, piece) in registry.pieces().iter().enumerate() {
            assert_eq!(piece.value as usize, i);
            assert!(!piece.placed);
            assert!(piece.occupied_cell.is_none());
        }
        for a in registry.pieces() {
            for b in registry.pieces() {
                if a.value != b.value {
                    assert!(a.home_position.distance(b.home_position) > 0.5);
                }
            }
        }
    }

    #[test]
    fn at_most_one_piece_is_selected() {
        let mut registry = registry();
        assert!(registry.select(2));
        assert_eq!(registry.selected_value(), Some(2));
        assert!(registry.select(7));
        assert_eq!(registry.selected_value(), Some(7));
    }

    #[test]
    fn placed_pieces_refuse_selection() {
        let mut registry = registry();
        assert!(registry.select(4));
        registry.place_selected((0, 0), Vec3::new(0.0, 0.35, 0.0));
        assert!(!registry.select(4));
        assert_eq!(registry.selected_value(), None);
    }

    #[test]
    fn placement_sets_cell_and_seat_position() {
        let mut registry = registry();
        let seat = Vec3::new(1.0, 0.25 + PIECE_SEAT_CLEARANCE, -1.0);
        registry.select(7);
        let value = registry.place_selected((2, 3), seat);
        assert_eq!(value, Some(7));
        let piece = registry.piece(7).unwrap();
        assert!(piece.placed);
        assert_eq!(piece.occupied_cell, Some((2, 3)));
        assert_eq!(piece.position, seat);
        assert_eq!(registry.selected_value(), None);
    }

    #[test]
    fn rejection_returns_the_piece_home_and_clears_selection() {
        let mut registry = registry();
        registry.select(3);
        registry.move_selected_to(Vec3::new(8.0, 1.0, 1.0));
        let value = registry.return_selected_home();
        assert_eq!(value, Some(3));
        let piece = registry.piece(3).unwrap();
        assert!(!piece.placed);
        assert_eq!(piece.position, piece.home_position);
        assert_eq!(registry.selected_value(), None);
    }

    #[test]
    fn four_quarter_turns_are_the_identity() {
        let mut registry = registry();
        registry.select(5);
        for _ in 0..4 {
            registry.rotate_selected(1);
        }
        let piece = registry.piece(5).unwrap();
        assert_eq!(piece.rotation_steps, 4);
        let rest = DigitPiece::at_home(5, piece.home_position);
        assert!(piece.orientation().angle_between(rest.orientation()) < 1e-4);
    }

    #[test]
    fn flip_is_an_involution() {
        let mut registry = registry();
        registry.select(6);
        registry.flip_selected();
        assert!(registry.piece(6).unwrap().flipped);
        registry.flip_selected();
        assert!(!registry.piece(6).unwrap().flipped);
    }

    #[test]
    fn reset_all_is_idempotent() {
        let mut registry = registry();
        registry.select(1);
        registry.rotate_selected(3);
        registry.flip_selected();
        registry.place_selected((0, 1), Vec3::new(0.5, 0.35, 0.5));
        registry.select(2);
        registry.move_selected_to(Vec3::new(2.0, 3.0, 2.0));

        registry.reset_all();
        let snapshot: Vec<_> = registry.pieces().to_vec();
        registry.reset_all();

        assert_eq!(registry.selected_value(), None);
        assert_eq!(registry.placed_count(), 0);
        for (before, after) in snapshot.iter().zip(registry.pieces()) {
            assert_eq!(before.position, after.position);
            assert_eq!(before.rotation_steps, after.rotation_steps);
            assert_eq!(before.flipped, after.flipped);
            assert_eq!(before.placed, after.placed);
            assert_eq!(before.occupied_cell, after.occupied_cell);
        }
    }

    #[test]
    fn placed_count_tracks_registry_state_without_drift() {
        let mut registry = registry();
        assert_eq!(registry.placed_count(), 0);
        for value in 0..DIGIT_COUNT as u8 {
            registry.select(value);
            registry.place_selected((0, value as usize), Vec3::ZERO);
            assert_eq!(registry.placed_count(), value as usize + 1);
        }
        assert!(registry.is_complete());
        registry.reset_all();
        assert_eq!(registry.placed_count(), 0);
        assert!(!registry.is_complete());
    }
}
