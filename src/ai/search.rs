use log::debug;

use crate::ai::eval::disc_differential;
use crate::board::Board;
use crate::types::{Color, Position};

/// Exhaustive fixed-depth minimax over disc differential.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last `search_root` call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the root move with the strictly greatest minimax value; ties keep
    /// the earliest move in row-major order. Returns `None` when `color` must
    /// pass. A depth of 0 is treated as 1.
    pub fn search_root(&mut self, board: &Board, color: Color, depth: u8) -> Option<Position> {
        self.nodes = 0;

        let moves = board.legal_moves(color);
        let mut best: Option<(Position, i32)> = None;

        for mv in moves {
            let next = board.apply_move(mv, color);
            let value = self.minimax(
                &next,
                color,
                depth.saturating_sub(1),
                false,
                color.opponent(),
            );

            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        if let Some((mv, value)) = best {
            debug!(
                "minimax depth {depth}: {:?} plays {mv:?} (value {value}, {} nodes)",
                color, self.nodes
            );
        }
        best.map(|(mv, _)| mv)
    }

    /// Value of `board` for `root` with `mover` to play and `depth` plies left.
    ///
    /// A mover without legal moves passes: the same board is searched one ply
    /// shallower with the turn handed over.
    pub fn minimax(
        &mut self,
        board: &Board,
        root: Color,
        depth: u8,
        maximizing: bool,
        mover: Color,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return disc_differential(board, root);
        }

        let moves = board.legal_moves(mover);
        if moves.is_empty() {
            return self.minimax(board, root, depth - 1, !maximizing, mover.opponent());
        }

        let values = moves.into_iter().map(|mv| {
            let next = board.apply_move(mv, mover);
            self.minimax(&next, root, depth - 1, !maximizing, mover.opponent())
        });

        let best = if maximizing { values.max() } else { values.min() };
        best.unwrap_or_else(|| unreachable!("move list checked non-empty"))
    }
}

/// Runs a fresh [`Searcher`] from `board`.
pub fn search_root(board: &Board, color: Color, depth: u8) -> Option<Position> {
    Searcher::new().search_root(board, color, depth)
}
