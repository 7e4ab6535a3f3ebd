use log::{debug, trace};

use crate::ai::eval::evaluate_move;
use crate::ai::search::Searcher;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::types::{Color, Position};

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, color: Color) -> Option<Position>;
}

/// Corner-first, stability-weighted midgame policy that switches to
/// exhaustive minimax once the endgame starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StabilitySelector {
    config: EngineConfig,
}

impl StabilitySelector {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl MoveSelector for StabilitySelector {
    fn select_move(&self, board: &Board, color: Color) -> Option<Position> {
        let legal = board.legal_moves(color);
        let Some(&first) = legal.first() else {
            debug!("{color:?} has no legal move and must pass");
            return None;
        };

        if self.config.is_endgame(board) {
            debug!(
                "endgame with {} empty squares, searching {} plies",
                board.empty_count(),
                self.config.search_depth
            );
            return Searcher::new().search_root(board, color, self.config.search_depth);
        }

        if let Some(&corner) = legal.iter().find(|&&mv| board.is_corner(mv)) {
            debug!("{color:?} takes corner {corner:?}");
            return Some(corner);
        }

        let mut best: Option<(Position, i32)> = None;
        for &mv in legal.iter().filter(|&&mv| !is_dangerous(board, mv)) {
            let score = evaluate_move(board, color, mv);
            trace!("candidate {mv:?} scores {score}");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let chosen = best.map_or(first, |(mv, _)| mv);
        debug!("{color:?} plays {chosen:?} in midgame");
        Some(chosen)
    }
}

/// Selects a move for `color` with the default configuration.
pub fn select_move(board: &Board, color: Color) -> Option<Position> {
    StabilitySelector::default().select_move(board, color)
}

/// Non-corner squares touching a corner, diagonals included.
fn is_dangerous(board: &Board, mv: Position) -> bool {
    board.corners().iter().any(|corner| {
        mv != *corner && mv.col.abs_diff(corner.col) <= 1 && mv.row.abs_diff(corner.row) <= 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::search::search_root;

    fn pos(col: u8, row: u8) -> Position {
        Position::new(col, row)
    }

    #[test]
    fn returns_none_on_full_board() {
        let board = Board::from_diagram(&[
            "BBBB", //
            "BWWB", //
            "BWWB", //
            "BBBB",
        ]);

        assert_eq!(select_move(&board, Color::Black), None);
        assert_eq!(select_move(&board, Color::White), None);
    }

    #[test]
    fn returns_none_when_color_has_no_discs() {
        let board = Board::from_diagram(&[
            "......", //
            "......", //
            "..BB..", //
            "..BB..", //
            "......", //
            "......",
        ]);

        assert_eq!(select_move(&board, Color::White), None);
    }

    #[test]
    fn midgame_takes_corner_over_earlier_moves() {
        let board = Board::from_diagram(&[
            "......", //
            "......", //
            ".WB...", //
            "......", //
            "......", //
            "...BW.",
        ]);

        assert_eq!(board.legal_moves(Color::Black), vec![pos(0, 2), pos(5, 5)]);
        assert_eq!(select_move(&board, Color::Black), Some(pos(5, 5)));
    }

    #[test]
    fn falls_back_to_first_move_when_all_moves_are_dangerous() {
        let board = Board::from_diagram(&[
            "......", //
            ".W....", //
            ".B....", //
            "......", //
            "......", //
            "......",
        ]);

        assert_eq!(board.legal_moves(Color::Black), vec![pos(1, 0)]);
        assert_eq!(select_move(&board, Color::Black), Some(pos(1, 0)));
    }

    #[test]
    fn dangerous_squares_are_filtered_before_scoring() {
        let board = Board::from_diagram(&[
            "......", //
            ".W....", //
            ".B....", //
            "...WB.", //
            "......", //
            "......",
        ]);

        assert_eq!(board.legal_moves(Color::Black), vec![pos(1, 0), pos(2, 3)]);
        assert_eq!(select_move(&board, Color::Black), Some(pos(2, 3)));
    }

    #[test]
    fn midgame_ties_keep_enumeration_order() {
        let board = Board::new(8).unwrap();

        assert_eq!(select_move(&board, Color::Black), Some(pos(3, 2)));
    }

    #[test]
    fn endgame_threshold_switches_to_minimax() {
        let board = Board::from_diagram(&[
            "BW..", //
            "BW..", //
            "BWW.", //
            "B...",
        ]);

        assert_eq!(board.empty_count(), 2 * board.size());
        assert!(EngineConfig::default().is_endgame(&board));
        let expected = search_root(&board, Color::Black, 6);
        assert!(expected.is_some());
        assert_eq!(select_move(&board, Color::Black), expected);
    }

    #[test]
    fn endgame_ignores_corner_shortcut() {
        let board = Board::from_diagram(&[
            ".WB.", //
            "BWW.", //
            "....", //
            "....",
        ]);
        let selector = StabilitySelector::new(EngineConfig {
            search_depth: 1,
            endgame_empty_factor: 3,
        });

        assert_eq!(
            board.legal_moves(Color::Black),
            vec![pos(0, 0), pos(3, 1), pos(0, 2), pos(2, 2)]
        );
        // the double capture outscores the corner one ply deep
        assert_eq!(selector.select_move(&board, Color::Black), Some(pos(3, 1)));
        assert_eq!(
            StabilitySelector::default().select_move(&board, Color::Black),
            Some(pos(0, 0))
        );
    }

    fn play_out(mut board: Board, selector: &dyn MoveSelector) {
        let mut color = Color::Black;
        let mut passes = 0;

        while passes < 2 {
            match selector.select_move(&board, color) {
                Some(mv) => {
                    assert!(board.is_legal(mv, color));
                    let (black, white) = board.disc_counts();
                    let empty = board.empty_count();
                    assert!(board.place(mv, color) > 0);
                    let (next_black, next_white) = board.disc_counts();
                    assert_eq!(next_black + next_white, black + white + 1);
                    assert_eq!(board.empty_count(), empty - 1);
                    passes = 0;
                }
                None => {
                    assert!(board.legal_moves(color).is_empty());
                    passes += 1;
                }
            }
            color = color.opponent();
        }
    }

    #[test]
    fn self_play_only_selects_legal_moves() {
        play_out(Board::new(4).unwrap(), &StabilitySelector::default());

        let shallow = StabilitySelector::new(EngineConfig {
            search_depth: 2,
            ..EngineConfig::default()
        });
        play_out(Board::new(6).unwrap(), &shallow);
    }

    #[test]
    fn dangerous_squares_ring_each_corner() {
        let board = Board::empty(6).unwrap();

        assert!(is_dangerous(&board, pos(1, 0)));
        assert!(is_dangerous(&board, pos(1, 1)));
        assert!(is_dangerous(&board, pos(4, 5)));
        assert!(is_dangerous(&board, pos(5, 4)));
        assert!(!is_dangerous(&board, pos(0, 0)));
        assert!(!is_dangerous(&board, pos(2, 0)));
        assert!(!is_dangerous(&board, pos(2, 2)));
    }
}
