use bevy::prelude::*;

use crate::engine::config::BoardConfig;
use constants::board::{
    BORDER_EXTRA_DEPTH, BORDER_MARGIN, CELL_HOLE_DEPTH, CORNER_RADIUS, PIECE_SEAT_CLEARANCE,
};
use constants::palette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardCell {
    pub row: usize,
    pub col: usize,
    pub world_position: Vec3,
}

impl BoardCell {
    /// Where a piece seats when it occupies this cell.
    pub fn seat_point(&self) -> Vec3 {
        self.world_position + Vec3::Y * PIECE_SEAT_CLEARANCE
    }
}

/// Cell geometry computed once from config, plus per-cell occupancy.
/// Occupancy is tracked explicitly so two pieces can never share a cell.
#[derive(Resource)]
pub struct BoardLayout {
    cells: Vec<BoardCell>,
    occupant: Vec<Option<u8>>,
    cols: usize,
    half_width: f32,
    half_height: f32,
    top_y: f32,
}

impl BoardLayout {
    pub fn new(config: &BoardConfig) -> Self {
        let top_y = config.top_y();
        let pitch = config.cell_size + config.cell_gap;
        let grid_width =
            config.cols as f32 * config.cell_size + (config.cols - 1) as f32 * config.cell_gap;
        let grid_height =
            config.rows as f32 * config.cell_size + (config.rows - 1) as f32 * config.cell_gap;
        let start_x = -grid_width / 2.0 + config.cell_size / 2.0;
        let start_z = -grid_height / 2.0 + config.cell_size / 2.0;

        let mut cells = Vec::with_capacity(config.rows * config.cols);
        for row in 0..config.rows {
            for col in 0..config.cols {
                cells.push(BoardCell {
                    row,
                    col,
                    world_position: Vec3::new(
                        start_x + col as f32 * pitch,
                        top_y,
                        start_z + row as f32 * pitch,
                    ),
                });
            }
        }

        Self {
            occupant: vec![None; cells.len()],
            cells,
            cols: config.cols,
            half_width: config.board_width / 2.0,
            half_height: config.board_height / 2.0,
            top_y,
        }
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&BoardCell> {
        self.cells
            .get(row.checked_mul(self.cols)?.checked_add(col)?)
            .filter(|cell| cell.row == row && cell.col == col)
    }

    pub fn cell_position(&self, row: usize, col: usize) -> Option<Vec3> {
        self.cell(row, col).map(|cell| cell.world_position)
    }

    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Strict containment test on the board's XZ footprint.
    pub fn contains_xz(&self, position: Vec3) -> bool {
        position.x.abs() < self.half_width && position.z.abs() < self.half_height
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col)
            .map(|cell| self.occupant[cell.row * self.cols + cell.col].is_some())
            .unwrap_or(false)
    }

    /// Nearest unoccupied cell by XZ distance. Equidistant candidates
    /// resolve to the first in row-major order.
    pub fn nearest_free_cell(&self, position: Vec3) -> Option<BoardCell> {
        let mut best: Option<(BoardCell, f32)> = None;
        for (cell, occupant) in self.cells.iter().zip(&self.occupant) {
            if occupant.is_some() {
                continue;
            }
            let d = Vec2::new(
                cell.world_position.x - position.x,
                cell.world_position.z - position.z,
            )
            .length_squared();
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((*cell, d));
            }
        }
        best.map(|(cell, _)| cell)
    }

    pub fn occupy(&mut self, row: usize, col: usize, value: u8) -> bool {
        let Some(cell) = self.cell(row, col) else {
            return false;
        };
        let index = cell.row * self.cols + cell.col;
        if self.occupant[index].is_some() {
            return false;
        }
        self.occupant[index] = Some(value);
        true
    }

    pub fn release_all(&mut self) {
        self.occupant.fill(None);
    }
}

#[derive(Component)]
pub struct BoardRoot;

/// Spawns the board visuals and inserts the layout resource.
pub fn create_board(
    mut commands: Commands,
    config: Res<BoardConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layout = BoardLayout::new(&config);

    let board_material = materials.add(StandardMaterial {
        base_color: palette::BOARD,
        perceptual_roughness: 0.8,
        metallic: 0.2,
        ..default()
    });
    let border_material = materials.add(StandardMaterial {
        base_color: palette::BOARD_BORDER,
        perceptual_roughness: 0.7,
        metallic: 0.3,
        ..default()
    });
    let hole_material = materials.add(StandardMaterial {
        base_color: palette::CELL_HOLE,
        perceptual_roughness: 0.9,
        metallic: 0.1,
        ..default()
    });

    commands
        .spawn((
            BoardRoot,
            Name::new("Board"),
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .with_children(|board| {
            board.spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    config.board_width,
                    config.board_depth,
                    config.board_height,
                ))),
                MeshMaterial3d(board_material),
                Transform::IDENTITY,
                Name::new("BoardSlab"),
            ));

            // Border frame sits slightly below the slab.
            board.spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    config.board_width + BORDER_MARGIN,
                    config.board_depth + BORDER_EXTRA_DEPTH,
                    config.board_height + BORDER_MARGIN,
                ))),
                MeshMaterial3d(border_material.clone()),
                Transform::from_xyz(0.0, -0.1, 0.0),
                Name::new("BoardBorder"),
            ));

            let corner_mesh = meshes.add(Cylinder::new(
                CORNER_RADIUS,
                config.board_depth + BORDER_EXTRA_DEPTH,
            ));
            let half_w = config.board_width / 2.0;
            let half_h = config.board_height / 2.0;
            for (x, z) in [
                (half_w, half_h),
                (half_w, -half_h),
                (-half_w, half_h),
                (-half_w, -half_h),
            ] {
                board.spawn((
                    Mesh3d(corner_mesh.clone()),
                    MeshMaterial3d(border_material.clone()),
                    Transform::from_xyz(x, 0.0, z),
                    Name::new("BoardCorner"),
                ));
            }

            // Recessed hole per placement cell.
            let hole_mesh = meshes.add(Cuboid::new(
                config.cell_size,
                CELL_HOLE_DEPTH,
                config.cell_size,
            ));
            for cell in layout.cells() {
                board.spawn((
                    Mesh3d(hole_mesh.clone()),
                    MeshMaterial3d(hole_material.clone()),
                    Transform::from_xyz(
                        cell.world_position.x,
                        layout.top_y() - CELL_HOLE_DEPTH / 2.0,
                        cell.world_position.z,
                    ),
                    Name::new(format!("Cell_{}_{}", cell.row, cell.col)),
                ));
            }
        });

    info!("board created with {} placement cells", layout.cells().len());
    commands.insert_resource(layout);
}
