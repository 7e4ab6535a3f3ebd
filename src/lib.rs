use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod selector;
pub mod types;

pub use board::Board;
pub use config::EngineConfig;
pub use error::BoardError;
pub use selector::{MoveSelector, StabilitySelector, select_move};
pub use types::{Cell, Color, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Chooses a move for `color` (1=black, 2=white) on a flat row-major board.
///
/// Returns `null` when the side must pass, otherwise `{ col, row }`.
/// `config` may be `undefined` or a partial `EngineConfig` object.
#[wasm_bindgen(js_name = selectMove)]
pub fn select_move_js(cells: &[u8], color: u8, config: JsValue) -> Result<JsValue, JsValue> {
    let (board, color) = decode_request(cells, color).map_err(to_js_error)?;
    let config = if config.is_undefined() || config.is_null() {
        EngineConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    match StabilitySelector::new(config).select_move(&board, color) {
        Some(mv) => Ok(serde_wasm_bindgen::to_value(&mv)?),
        None => Ok(JsValue::NULL),
    }
}

/// Validates raw board and color values coming from the JS side.
pub fn decode_request(cells: &[u8], color: u8) -> Result<(Board, Color), BoardError> {
    let color = Color::try_from(color)?;
    let board = Board::from_cells(cells)?;
    Ok((board, color))
}

fn to_js_error(err: BoardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_request_accepts_flat_opening() {
        let opening = Board::new(8).unwrap();

        let (board, color) = decode_request(&opening.to_cells(), 2).unwrap();

        assert_eq!(board, opening);
        assert_eq!(color, Color::White);
        assert_eq!(select_move(&board, color), Some(Position::new(4, 2)));
    }

    #[test]
    fn decode_request_rejects_bad_input() {
        let cells = Board::new(6).unwrap().to_cells();

        assert_eq!(decode_request(&cells, 0), Err(BoardError::InvalidColor(0)));
        assert_eq!(
            decode_request(&cells[..35], 1),
            Err(BoardError::NotPerfectSquare(35))
        );

        let mut bad = cells.clone();
        bad[7] = 9;
        assert_eq!(
            decode_request(&bad, 1),
            Err(BoardError::InvalidCell { index: 7, value: 9 })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let message = BoardError::UnsupportedSize(5).to_string();

        assert!(message.contains("unsupported board size: 5"));
    }
}
