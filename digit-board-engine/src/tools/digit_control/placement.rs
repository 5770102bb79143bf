use bevy::prelude::*;

use crate::engine::board::BoardLayout;

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// Final position lay inside the board: snap to this cell's seat.
    Commit { cell: (usize, usize), seat: Vec3 },
    /// Outside the board, or no free cell remained: return home.
    Reject,
}

/// The placement policy: strict bounds containment, then snap to the
/// nearest free cell. With occupancy tracked on the board, a full grid
/// turns an in-bounds drop into a rejection rather than a double
/// placement.
pub fn decide_placement(board: &BoardLayout, drop_position: Vec3) -> PlacementOutcome {
    if !board.contains_xz(drop_position) {
        return PlacementOutcome::Reject;
    }
    match board.nearest_free_cell(drop_position) {
        Some(cell) => PlacementOutcome::Commit {
            cell: (cell.row, cell.col),
            seat: cell.seat_point(),
        },
        None => PlacementOutcome::Reject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::BoardConfig;

    /// 10x10 board, bounds at ±5, like the reference scenarios.
    fn square_board() -> BoardLayout {
        BoardLayout::new(&BoardConfig {
            rows: 4,
            cols: 4,
            board_width: 10.0,
            board_height: 10.0,
            ..BoardConfig::default()
        })
    }

    #[test]
    fn inside_bounds_commits_to_the_nearest_cell() {
        let board = square_board();
        let drop = Vec3::new(1.0, 0.8, 1.0);
        match decide_placement(&board, drop) {
            PlacementOutcome::Commit { cell, seat } => {
                let expected = board.nearest_free_cell(drop).unwrap();
                assert_eq!(cell, (expected.row, expected.col));
                assert_eq!(seat, expected.seat_point());
            }
            PlacementOutcome::Reject => panic!("in-bounds drop must commit"),
        }
    }

    #[test]
    fn outside_bounds_rejects() {
        let board = square_board();
        assert_eq!(
            decide_placement(&board, Vec3::new(8.0, 0.8, 1.0)),
            PlacementOutcome::Reject
        );
        assert_eq!(
            decide_placement(&board, Vec3::new(1.0, 0.8, -7.0)),
            PlacementOutcome::Reject
        );
    }

    #[test]
    fn exactly_on_the_bound_rejects() {
        let board = square_board();
        assert_eq!(
            decide_placement(&board, Vec3::new(5.0, 0.8, 0.0)),
            PlacementOutcome::Reject
        );
    }

    #[test]
    fn full_board_rejects_even_inside_bounds() {
        let mut board = square_board();
        for cell in board.cells().to_vec() {
            assert!(board.occupy(cell.row, cell.col, 0));
        }
        assert_eq!(
            decide_placement(&board, Vec3::new(0.5, 0.8, 0.5)),
            PlacementOutcome::Reject
        );
    }

    #[test]
    fn commit_never_targets_an_occupied_cell() {
        let mut board = square_board();
        let drop = Vec3::new(0.2, 0.8, 0.2);
        let first = board.nearest_free_cell(drop).unwrap();
        board.occupy(first.row, first.col, 9);
        match decide_placement(&board, drop) {
            PlacementOutcome::Commit { cell, .. } => {
                assert_ne!(cell, (first.row, first.col));
            }
            PlacementOutcome::Reject => panic!("free cells remain"),
        }
    }
}
