use crate::board::{Board, DIRECTIONS};
use crate::types::{Cell, Color, Position};

const STABLE_WEIGHT: i32 = 10;
const MOBILITY_WEIGHT: i32 = 3;

/// Conservative stability test: every ray from `(row, col)` must reach the
/// board edge without meeting an empty square or an opponent disc.
pub fn is_stable(board: &Board, row: usize, col: usize, color: Color) -> bool {
    let opp = Cell::from(color.opponent());

    DIRECTIONS.iter().all(|&(dr, dc)| {
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;

        while board.in_bounds(r, c) {
            let cell = board.get(r as usize, c as usize);
            if cell.is_empty() || cell == opp {
                return false;
            }
            r += dr;
            c += dc;
        }
        true
    })
}

pub fn count_stable(board: &Board, color: Color) -> usize {
    let disc = Cell::from(color);
    let size = board.size();

    (0..size * size)
        .filter(|&idx| {
            let (row, col) = (idx / size, idx % size);
            board.get(row, col) == disc && is_stable(board, row, col, color)
        })
        .count()
}

/// Midgame score of playing `mv`.
///
/// Stability and opponent mobility are measured after the move, the flip
/// bonus on the board before it.
pub fn evaluate_move(board: &Board, color: Color, mv: Position) -> i32 {
    let next = board.apply_move(mv, color);

    let stable = count_stable(&next, color) as i32;
    let opponent_mobility = next.legal_moves(color.opponent()).len() as i32;
    let flipped = board.count_flipped(mv, color) as i32;

    STABLE_WEIGHT * stable - MOBILITY_WEIGHT * opponent_mobility + flipped
}

/// Disc differential from `color`'s point of view.
pub fn disc_differential(board: &Board, color: Color) -> i32 {
    board.count(color) as i32 - board.count(color.opponent()) as i32
}
