mod rule;
mod window;

pub use self::window::BoardWindow;
use crate::{Board, Pos2};

/// Counts the live cells in the Moore neighborhood of `(x, y)`
///
/// The grid does not wrap: neighbors past an edge do not exist and never
/// contribute to the count.
pub fn live_neighbor_count(board: &Board, x: usize, y: usize) -> u8 {
    let center = Pos2::new(x as i32, y as i32);
    Pos2::MOORE
        .iter()
        .filter_map(|&offset| board.checked_coords(center + offset))
        .filter(|&(nx, ny)| board.is_alive(nx, ny))
        .count() as u8
}

/// Computes the next generation of `board`
pub fn advance(board: &Board) -> Board {
    let mut next = board.clone();
    advance_into(board, &mut next);
    next
}

/// Writes the next generation of `src` into `dst`
///
/// `src` is only ever read, so every cell of `dst` is derived from the same
/// generation. `dst` must have the same dimensions as `src`, its previous
/// contents are overwritten.
pub fn advance_into(src: &Board, dst: &mut Board) {
    assert!(
        src.same_size(dst),
        "cannot advance a {}x{} board into a {}x{} board",
        src.width(),
        src.height(),
        dst.width(),
        dst.height()
    );

    for (i, next) in dst.cells_mut().iter_mut().enumerate() {
        let (x, y) = src.coords_of(i);
        let neighbors = live_neighbor_count(src, x, y);
        *next = rule::next_state(src.cells()[i], neighbors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(width: usize, height: usize, alive: &[(i32, i32)]) -> Board {
        let alive = alive.iter().map(|&(x, y)| Pos2::new(x, y));
        let (board, skipped) = Board::from_alive(width, height, alive).unwrap();
        assert_eq!(skipped, 0);
        board
    }

    fn alive(board: &Board) -> Vec<(i32, i32)> {
        board.iter_alive().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn corner_counts_at_most_three() {
        let full = board_with(
            3,
            3,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        );

        assert_eq!(live_neighbor_count(&full, 0, 0), 3);
        assert_eq!(live_neighbor_count(&full, 2, 2), 3);
        assert_eq!(live_neighbor_count(&full, 1, 0), 5);
        assert_eq!(live_neighbor_count(&full, 1, 1), 8);
    }

    #[test]
    fn edges_do_not_wrap() {
        // a live column on the right edge must not be seen from the left edge
        let board = board_with(4, 3, &[(3, 0), (3, 1), (3, 2)]);

        assert_eq!(live_neighbor_count(&board, 0, 1), 0);
        assert_eq!(live_neighbor_count(&board, 2, 1), 3);
        // nor from the start of the next row
        let board = board_with(4, 3, &[(3, 0)]);
        assert_eq!(live_neighbor_count(&board, 0, 1), 0);
    }

    #[test]
    fn lone_cell_dies() {
        let board = board_with(5, 5, &[(2, 2)]);

        assert!(alive(&advance(&board)).is_empty());
    }

    #[test]
    fn block_is_still() {
        let board = board_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);

        let mut next = advance(&board);
        for _ in 0..10 {
            assert_eq!(next, board);
            next = advance(&next);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = board_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let vertical = advance(&horizontal);
        assert_eq!(alive(&vertical), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(advance(&vertical), horizontal);
    }

    #[test]
    fn blinker_on_edge_loses_outer_cell() {
        // vertical phase would need row -1, which does not exist
        let horizontal = board_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);

        assert_eq!(alive(&advance(&horizontal)), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn advance_into_overwrites_destination() {
        let board = board_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut dst = board_with(4, 4, &[(0, 0), (3, 3)]);

        advance_into(&board, &mut dst);

        assert_eq!(dst, board);
    }

    #[test]
    #[should_panic]
    fn advance_into_rejects_mismatched_sizes() {
        let board = Board::new(3, 3).unwrap();
        let mut dst = Board::new(3, 4).unwrap();

        advance_into(&board, &mut dst);
    }
}
