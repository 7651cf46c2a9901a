//! Error types for board construction and request decoding.

/// Errors raised while building or editing a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OffBoard { x: i32, y: i32 },

    #[error("invalid cell value {0} (expected 0, 1 or 2)")]
    InvalidCell(u8),

    #[error("invalid player to move {0} (expected 1 or 2)")]
    InvalidNext(u8),

    #[error("board has {0} rows, expected 8")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("invalid move label {0:?}")]
    InvalidLabel(String),
}

/// Errors raised while decoding a request document.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}
