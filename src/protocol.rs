//! Line-oriented request loop.
//!
//! Each input line carries one JSON request (see [`crate::request`]). For
//! every request one response line is written:
//!
//! - `D3` - the chosen move
//! - `PASS` - the player to move has no legal move
//! - `? <reason>` - the request could not be decoded
//!
//! Empty lines and lines starting with `#` are skipped.
//!
//! ## Example
//!
//! ```
//! use reversi_turn::protocol::Responder;
//!
//! let input = r#"{"board":{"Pieces":[[0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0],[0,0,0,1,1,0,0,0],[0,0,0,2,2,0,0,0],[0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0]],"Next":1}}"#;
//! let mut out = Vec::new();
//! Responder::new().serve(input.as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "C6\n");
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::constants::DEFAULT_SEED;
use crate::engine::{pick_move_with, render, Strategy};
use crate::request::parse_request;

/// Answers one board per request line.
pub struct Responder {
    strategy: Strategy,
    rng: fastrand::Rng,
    served: usize,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// A responder using the material strategy.
    pub fn new() -> Self {
        Self::with_strategy(Strategy::default(), DEFAULT_SEED)
    }

    /// A responder with an explicit strategy and RNG seed.
    pub fn with_strategy(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: fastrand::Rng::with_seed(seed),
            served: 0,
        }
    }

    /// Number of requests answered so far, malformed ones included.
    pub fn served(&self) -> usize {
        self.served
    }

    /// Run the loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the loop until `input` is exhausted.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for (lineno, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read request line {}", lineno + 1))?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (success, message) = self.respond(line);
            if success {
                writeln!(output, "{message}")?;
            } else {
                warn!(line = lineno + 1, %message, "rejected request");
                writeln!(output, "? {message}")?;
            }
            output.flush().context("failed to flush response")?;
        }
        info!(served = self.served, "input closed");
        Ok(())
    }

    /// Answer a single request body. Returns (success, response).
    pub fn respond(&mut self, body: &str) -> (bool, String) {
        self.served += 1;
        match parse_request(body) {
            Ok(board) => {
                let choice = pick_move_with(&board, self.strategy, &mut self.rng);
                let response = render(choice.as_ref());
                debug!(request = self.served, %response, "answered");
                (true, response)
            }
            Err(err) => (false, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell, Player};
    use crate::request::to_request;

    fn serve_all(responder: &mut Responder, input: &str) -> Vec<String> {
        let mut out = Vec::new();
        responder.serve(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_respond_opening() {
        let mut responder = Responder::new();
        let body = to_request(&Board::opening()).unwrap();
        let (success, response) = responder.respond(&body);
        assert!(success);
        assert_eq!(response, "C6");
    }

    #[test]
    fn test_respond_pass() {
        let mut board = Board::empty(Player::Player1);
        for (x, y, _) in Board::empty(Player::Player1).cells() {
            board = board.with_piece_set(x, y, Cell::Player2).unwrap();
        }
        let mut responder = Responder::new();
        let (success, response) = responder.respond(&to_request(&board).unwrap());
        assert!(success);
        assert_eq!(response, "PASS");
    }

    #[test]
    fn test_respond_malformed() {
        let mut responder = Responder::new();
        let (success, response) = responder.respond("{\"board\": 3}");
        assert!(!success);
        assert!(response.starts_with("malformed JSON"), "got {response}");
    }

    #[test]
    fn test_serve_skips_comments_and_blanks() {
        let body = to_request(&Board::opening()).unwrap();
        let second = to_request(&Board::opening().with_next(Player::Player2)).unwrap();
        let input = format!("# opening\n\n{body}\nnot json\n{second}\n");

        let mut responder = Responder::new();
        let lines = serve_all(&mut responder, &input);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "C6");
        assert!(lines[1].starts_with("? "));
        // Player2 to move on the opening: first legal move in row-major order
        assert_eq!(lines[2], "C3");
        assert_eq!(responder.served(), 3);
    }
}
