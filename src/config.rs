use serde::Deserialize;

use crate::board::Board;

pub const DEFAULT_SEARCH_DEPTH: u8 = 6;
pub const DEFAULT_ENDGAME_EMPTY_FACTOR: usize = 2;

/// Phase knobs for the move selector.
///
/// Deserializes from a partial object; missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by minimax once the endgame starts.
    pub search_depth: u8,
    /// Endgame starts when `empty squares <= factor * board size`.
    pub endgame_empty_factor: usize,
}

impl EngineConfig {
    pub fn is_endgame(&self, board: &Board) -> bool {
        board.empty_count() <= self.endgame_empty_factor.saturating_mul(board.size())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            endgame_empty_factor: DEFAULT_ENDGAME_EMPTY_FACTOR,
        }
    }
}
