use thiserror::Error;

/// Rejected engine input.
///
/// A [`Board`](crate::board::Board) that exists has already passed these
/// checks, so the search and scoring code never re-validates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side length must be even and within the supported range.
    #[error("unsupported board size: {0} (expected an even size between 4 and 16)")]
    UnsupportedSize(usize),

    #[error("board is not square: row {row} has {cols} cells but there are {rows} rows")]
    NotSquare { rows: usize, cols: usize, row: usize },

    #[error("flat board of {0} cells is not a square grid")]
    NotPerfectSquare(usize),

    #[error("invalid cell value {value} at index {index} (expected 0, 1 or 2)")]
    InvalidCell { index: usize, value: u8 },

    #[error("invalid color value {0} (expected 1=black or 2=white)")]
    InvalidColor(u8),
}
