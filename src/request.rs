//! JSON request and move documents.
//!
//! A request looks like
//!
//! ```json
//! {"board": {"Pieces": [[0,0,0,0,0,0,0,0], ...], "Next": 1}}
//! ```
//!
//! `Pieces[y - 1][x - 1]` holds 0 (empty), 1 or 2. Other top-level fields are
//! ignored. Decoding rejects anything that is not a well-formed 8x8 board.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::engine::Move;
use crate::error::RequestError;

/// The board part of a request, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDoc {
    #[serde(rename = "Pieces")]
    pub pieces: Vec<Vec<u8>>,
    #[serde(rename = "Next")]
    pub next: u8,
}

/// A full request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRequest {
    pub board: BoardDoc,
}

impl TryFrom<BoardDoc> for Board {
    type Error = RequestError;

    fn try_from(doc: BoardDoc) -> Result<Self, Self::Error> {
        Ok(Board::from_raw(&doc.pieces, doc.next)?)
    }
}

impl From<&Board> for BoardDoc {
    fn from(board: &Board) -> Self {
        BoardDoc {
            pieces: board.to_raw(),
            next: board.next_player().raw(),
        }
    }
}

/// Decode and validate a request body.
pub fn parse_request(body: &str) -> Result<Board, RequestError> {
    let request: GameRequest = serde_json::from_str(body)?;
    Board::try_from(request.board)
}

/// Encode a board as a request body.
pub fn to_request(board: &Board) -> Result<String, RequestError> {
    let request = GameRequest { board: BoardDoc::from(board) };
    Ok(serde_json::to_string(&request)?)
}

/// A move on the wire: `{"Where": [x, y], "As": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDoc {
    #[serde(rename = "Where")]
    pub at: [i32; 2],
    #[serde(rename = "As")]
    pub player: u8,
}

impl From<&Move> for MoveDoc {
    fn from(mv: &Move) -> Self {
        MoveDoc {
            at: [mv.x, mv.y],
            player: mv.player.raw(),
        }
    }
}

impl TryFrom<MoveDoc> for Move {
    type Error = RequestError;

    fn try_from(doc: MoveDoc) -> Result<Self, Self::Error> {
        let player = Player::try_from(doc.player)?;
        Ok(Move::new(doc.at[0], doc.at[1], player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::error::BoardError;

    const OPENING: &str = r#"{
        "board": {
            "Pieces": [
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,1,1,0,0,0],
                [0,0,0,2,2,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0]
            ],
            "Next": 1
        },
        "gamekey": "ignored"
    }"#;

    #[test]
    fn test_parse_opening() {
        let board = parse_request(OPENING).unwrap();
        assert_eq!(board, Board::opening());
        assert_eq!(board.piece_at(4, 5), Some(Cell::Player2));
    }

    #[test]
    fn test_parse_rejects_bad_next() {
        let body = OPENING.replace("\"Next\": 1", "\"Next\": 0");
        let err = parse_request(&body).unwrap_err();
        assert!(matches!(err, RequestError::Board(BoardError::InvalidNext(0))));
    }

    #[test]
    fn test_parse_rejects_bad_cell() {
        let body = OPENING.replacen("[0,0,0,1,1,0,0,0]", "[0,0,0,1,7,0,0,0]", 1);
        let err = parse_request(&body).unwrap_err();
        assert!(matches!(err, RequestError::Board(BoardError::InvalidCell(7))));
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let body = OPENING.replacen("[0,0,0,2,2,0,0,0]", "[0,0,0,2,2,0,0]", 1);
        let err = parse_request(&body).unwrap_err();
        assert!(matches!(
            err,
            RequestError::Board(BoardError::RowLength { row: 5, len: 7 })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse_request("{not json"), Err(RequestError::Json(_))));
        assert!(matches!(parse_request("{}"), Err(RequestError::Json(_))));
    }

    #[test]
    fn test_request_roundtrip() {
        let board = Board::opening().with_next(Player::Player2);
        let body = to_request(&board).unwrap();
        assert_eq!(parse_request(&body).unwrap(), board);
    }

    #[test]
    fn test_move_doc_shape() {
        let mv = Move::new(3, 6, Player::Player1);
        let json = serde_json::to_string(&MoveDoc::from(&mv)).unwrap();
        assert_eq!(json, r#"{"Where":[3,6],"As":1}"#);

        let doc: MoveDoc = serde_json::from_str(r#"{"Where":[8,1],"As":2}"#).unwrap();
        assert_eq!(Move::try_from(doc).unwrap(), Move::new(8, 1, Player::Player2));
    }
}
