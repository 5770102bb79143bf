use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::pick::resolve_digit_pick;
use super::placement::{PlacementOutcome, decide_placement};
use super::ray::ray_plane_intersection;
use super::state::{DragSession, PieceStateChanged, ProgressChanged};
use crate::engine::board::BoardLayout;
use crate::engine::camera::{cursor_ndc_y, cursor_ray};
use crate::engine::digits::{
    DIGIT_COUNT, DigitRegistry, DigitSegment, PieceState, SegmentSize,
};
use constants::interaction::{DRAG_HEIGHT_SENSITIVITY, DRAG_MIN_CLEARANCE};

/// Press with a resolved ray: pick a digit, select it, and begin the drag
/// in the same event. Placed digits are inert; a miss leaves everything
/// untouched. Mouse and touch both end up here.
pub(super) fn press_at(
    ray: Ray3d,
    plane_normal: Vec3,
    ndc_y: f32,
    segments: &Query<(&DigitSegment, &GlobalTransform, &SegmentSize)>,
    registry: &mut DigitRegistry,
    session: &mut DragSession,
    state_events: &mut EventWriter<PieceStateChanged>,
) {
    let Some(value) = resolve_digit_pick(&ray, segments) else {
        return;
    };
    if registry.piece(value).is_none_or(|piece| piece.placed) {
        return;
    }

    let previous = registry.selected_value();
    if previous != Some(value) && registry.select(value) {
        if let Some(prev) = previous {
            state_events.write(PieceStateChanged {
                value: prev,
                state: PieceState::Normal,
            });
        }
        state_events.write(PieceStateChanged {
            value,
            state: PieceState::Selected,
        });
    }

    let Some(piece) = registry.selected_piece() else {
        return;
    };

    // Camera-facing plane through the piece: vertical pointer motion stays
    // meaningful for height control instead of collapsing into XZ.
    session.dragging = true;
    session.pointer_captured = true;
    session.plane_origin = piece.position;
    session.plane_normal = plane_normal;
    session.initial_height = piece.position.y;
    session.height_modifier = 0.0;
    session.last_cursor_ndc_y = ndc_y;
    session.anchor_offset = ray_plane_intersection(&ray, piece.position, plane_normal)
        .map(|hit| piece.position - hit)
        .unwrap_or(Vec3::ZERO);
}

/// Move with a resolved ray: refresh the camera-facing plane at the piece,
/// intersect, and move the piece keeping the grab offset. Vertical pointer
/// travel accumulates into hover height, clamped to board clearance.
pub(super) fn drag_to(
    ray: Ray3d,
    plane_normal: Vec3,
    ndc_y: f32,
    board: &BoardLayout,
    registry: &mut DigitRegistry,
    session: &mut DragSession,
) {
    if !session.dragging {
        return;
    }
    let Some(piece_position) = registry.selected_piece().map(|piece| piece.position) else {
        return;
    };

    session.plane_normal = plane_normal;
    session.plane_origin = piece_position;
    let Some(hit) = ray_plane_intersection(&ray, session.plane_origin, session.plane_normal)
    else {
        return;
    };
    let target = hit + session.anchor_offset;

    session.height_modifier += (ndc_y - session.last_cursor_ndc_y) * DRAG_HEIGHT_SENSITIVITY;
    session.last_cursor_ndc_y = ndc_y;

    let min_height = board.top_y() + DRAG_MIN_CLEARANCE;
    let height = (session.initial_height + session.height_modifier).max(min_height);
    registry.move_selected_to(Vec3::new(target.x, height, target.z));
}

/// Release: commit or reject per the placement policy, then clear the
/// session either way.
pub(super) fn finish_release(
    board: &mut BoardLayout,
    registry: &mut DigitRegistry,
    session: &mut DragSession,
    state_events: &mut EventWriter<PieceStateChanged>,
    progress_events: &mut EventWriter<ProgressChanged>,
) {
    if let Some(piece) = registry.selected_piece() {
        let value = piece.value;
        match decide_placement(board, piece.position) {
            PlacementOutcome::Commit { cell, seat } => {
                board.occupy(cell.0, cell.1, value);
                registry.place_selected(cell, seat);
                info!("digit {} placed at cell ({}, {})", value, cell.0, cell.1);
                state_events.write(PieceStateChanged {
                    value,
                    state: PieceState::Placed,
                });
                progress_events.write(ProgressChanged {
                    placed: registry.placed_count(),
                    total: DIGIT_COUNT,
                });
            }
            PlacementOutcome::Reject => {
                registry.return_selected_home();
                state_events.write(PieceStateChanged {
                    value,
                    state: PieceState::Normal,
                });
            }
        }
    }

    session.clear();
}

pub fn handle_pointer_down(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    segments: Query<(&DigitSegment, &GlobalTransform, &SegmentSize)>,
    mut registry: ResMut<DigitRegistry>,
    mut session: ResMut<DragSession>,
    mut state_events: EventWriter<PieceStateChanged>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, camera_transform) else {
        return;
    };

    press_at(
        ray,
        camera_transform.forward().as_vec3(),
        cursor_ndc_y(window),
        &segments,
        &mut registry,
        &mut session,
        &mut state_events,
    );
}

pub fn handle_pointer_drag(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    board: Res<BoardLayout>,
    mut registry: ResMut<DigitRegistry>,
    mut session: ResMut<DragSession>,
) {
    if !session.dragging {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, camera_transform) else {
        return;
    };

    drag_to(
        ray,
        camera_transform.forward().as_vec3(),
        cursor_ndc_y(window),
        &board,
        &mut registry,
        &mut session,
    );
}

pub fn handle_pointer_release(
    buttons: Res<ButtonInput<MouseButton>>,
    mut board: ResMut<BoardLayout>,
    mut registry: ResMut<DigitRegistry>,
    mut session: ResMut<DragSession>,
    mut state_events: EventWriter<PieceStateChanged>,
    mut progress_events: EventWriter<ProgressChanged>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    if !session.dragging {
        session.pointer_captured = false;
        return;
    }

    finish_release(
        &mut board,
        &mut registry,
        &mut session,
        &mut state_events,
        &mut progress_events,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::BoardConfig;

    fn release_app(registry: DigitRegistry, board: BoardLayout) -> App {
        let mut app = App::new();
        app.add_event::<PieceStateChanged>();
        app.add_event::<ProgressChanged>();

        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
        app.insert_resource(buttons);

        app.insert_resource(board);
        app.insert_resource(registry);
        app.insert_resource(DragSession {
            dragging: true,
            pointer_captured: true,
            ..default()
        });
        app.add_systems(Update, handle_pointer_release);
        app
    }

    fn drain<E: Event + Clone>(app: &App) -> Vec<E> {
        let events = app.world().resource::<Events<E>>();
        events.get_cursor().read(events).cloned().collect()
    }

    #[test]
    fn releasing_over_the_board_announces_the_placed_state() {
        let config = BoardConfig::default();
        let board = BoardLayout::new(&config);
        let mut registry = DigitRegistry::new(config.board_width, config.board_height);
        registry.select(7);
        let over_cell = board.cell(1, 2).unwrap().world_position + Vec3::Y;
        registry.move_selected_to(over_cell);

        let mut app = release_app(registry, board);
        app.update();

        let changes = drain::<PieceStateChanged>(&app);
        assert!(
            changes
                .iter()
                .any(|c| c.value == 7 && c.state == PieceState::Placed)
        );
        let progress = drain::<ProgressChanged>(&app);
        assert_eq!(progress.last().map(|p| p.placed), Some(1));
        assert!(app.world().resource::<DigitRegistry>().piece(7).unwrap().placed);
    }

    #[test]
    fn releasing_outside_the_board_announces_a_return_to_normal() {
        let config = BoardConfig::default();
        let board = BoardLayout::new(&config);
        let mut registry = DigitRegistry::new(config.board_width, config.board_height);
        registry.select(3);
        registry.move_selected_to(Vec3::new(config.board_width, 1.0, 0.0));

        let mut app = release_app(registry, board);
        app.update();

        let changes = drain::<PieceStateChanged>(&app);
        assert!(
            changes
                .iter()
                .any(|c| c.value == 3 && c.state == PieceState::Normal)
        );
        let registry = app.world().resource::<DigitRegistry>();
        let piece = registry.piece(3).unwrap();
        assert!(!piece.placed);
        assert_eq!(piece.position, piece.home_position);
        assert!(!app.world().resource::<DragSession>().dragging);
    }
}
