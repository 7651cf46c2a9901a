//! Reversi-Turn: answer a single turn of 8x8 Reversi.
//!
//! Given one board snapshot, this crate lists the legal moves for the player
//! to move and picks one of them with a greedy one-ply heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, direction table and defaults
//! - [`board`] - Immutable board value with 1-indexed accessors
//! - [`engine`] - Capture scans, move application, enumeration and selection
//! - [`request`] - JSON request and move documents
//! - [`protocol`] - One-request-per-line answer loop
//! - [`error`] - Board and request errors
//!
//! ## Example
//!
//! ```
//! use reversi_turn::board::Board;
//! use reversi_turn::engine::{pick_move, render, valid_moves};
//!
//! let board = Board::opening();
//! assert_eq!(valid_moves(&board).len(), 4);
//!
//! let choice = pick_move(&board);
//! assert_eq!(render(choice.as_ref()), "C6");
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod request;
