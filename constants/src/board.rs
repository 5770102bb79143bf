/// Board slab dimensions in world units (x, y, z).
pub const BOARD_WIDTH: f32 = 10.0;
pub const BOARD_HEIGHT: f32 = 8.0;
pub const BOARD_DEPTH: f32 = 0.5;

/// Placement grid layout.
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 5;
pub const CELL_SIZE: f32 = 1.4;
pub const CELL_GAP: f32 = 0.4;

/// Depth of the recessed cell holes cut into the board top.
pub const CELL_HOLE_DEPTH: f32 = 0.3;

/// Pieces seat slightly above the board top when placed.
pub const PIECE_SEAT_CLEARANCE: f32 = 0.1;

/// Digit home positions sit this far outside the board edge.
pub const HOME_EDGE_OFFSET: f32 = 3.0;
pub const HOME_HEIGHT: f32 = 1.0;

/// Border frame around the board slab.
pub const BORDER_MARGIN: f32 = 0.5;
pub const BORDER_EXTRA_DEPTH: f32 = 0.2;
pub const CORNER_RADIUS: f32 = 0.5;
