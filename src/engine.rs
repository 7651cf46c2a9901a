//! Move engine: capture scans, move application, enumeration and selection.
//!
//! Every function here is pure over an explicit [`Board`] snapshot. Applying
//! a move never mutates its input; it returns a fresh board.

use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, Cell, Player};
use crate::constants::{COLUMNS, COORD_MAX, COORD_MIN, DEFAULT_SEED, DIRECTIONS, PASS};
use crate::error::BoardError;

/// A placement of `player`'s piece at 1-indexed `(x, y)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub x: i32,
    pub y: i32,
    pub player: Player,
}

impl Move {
    pub fn new(x: i32, y: i32, player: Player) -> Self {
        Self { x, y, player }
    }

    /// Two-character label such as `A1` or `H8`.
    ///
    /// Off-board moves never come out of the engine; for those the label
    /// falls back to `?` for the column.
    pub fn label(&self) -> String {
        let col = usize::try_from(self.x - 1)
            .ok()
            .and_then(|i| COLUMNS.get(i))
            .copied()
            .unwrap_or('?');
        format!("{col}{}", self.y)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parse a label like `D3` (case-insensitive) into a move for `player`.
pub fn parse_label(label: &str, player: Player) -> Result<Move, BoardError> {
    let invalid = || BoardError::InvalidLabel(label.to_string());
    let s = label.trim();
    let mut chars = s.chars();
    let col = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    let x = COLUMNS
        .iter()
        .position(|&c| c == col)
        .ok_or_else(invalid)? as i32
        + 1;
    let row = match (chars.next(), chars.next()) {
        (Some(d), None) => d.to_digit(10).ok_or_else(invalid)?,
        _ => return Err(invalid()),
    };
    let y = row as i32;
    if !(COORD_MIN..=COORD_MAX).contains(&y) {
        return Err(invalid());
    }
    Ok(Move::new(x, y, player))
}

/// Render the outcome of a selection: the move label, or `PASS`.
pub fn render(choice: Option<&Move>) -> String {
    choice.map_or_else(|| PASS.to_string(), Move::label)
}

// =============================================================================
// Capture scans
// =============================================================================

/// Scan from `(x, y)` along `(dx, dy)` for the player to move.
///
/// Returns the opponent cells that would flip, nearest first, or `None` if
/// this ray brackets nothing.
pub fn scan_direction(
    board: &Board,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
) -> Option<Vec<(i32, i32)>> {
    let mover = board.next_player();
    let own = Cell::from(mover);
    let opp = Cell::from(mover.opponent());
    let mut captures = Vec::new();
    let (mut cx, mut cy) = (x + dx, y + dy);
    while board.piece_at(cx, cy) == Some(opp) {
        captures.push((cx, cy));
        cx += dx;
        cy += dy;
    }
    if !captures.is_empty() && board.piece_at(cx, cy) == Some(own) {
        Some(captures)
    } else {
        None
    }
}

// =============================================================================
// Move application
// =============================================================================

/// Play `mv` on a copy of `board`.
///
/// The mover is always the board's player to move. Returns `None` when the
/// move is tagged for the other player, when the target is occupied or off
/// the board, or when no ray captures anything. On success the placed piece
/// and every captured piece belong to the mover and the opponent is to move.
pub fn apply_move(board: &Board, mv: &Move) -> Option<Board> {
    let mover = board.next_player();
    if mv.player != mover || board.piece_at(mv.x, mv.y) != Some(Cell::Empty) {
        return None;
    }

    let mut captured = false;
    let mut next = *board;
    let own = Cell::from(mover);
    for &(dx, dy) in &DIRECTIONS {
        if let Some(line) = scan_direction(board, mv.x, mv.y, dx, dy) {
            captured = true;
            for (fx, fy) in line {
                next = next.with_piece_set(fx, fy, own).ok()?;
            }
        }
    }
    if !captured {
        return None;
    }

    let next = next.with_piece_set(mv.x, mv.y, own).ok()?;
    Some(next.with_next(mover.opponent()))
}

/// All legal moves for the player to move, in row-major order.
pub fn valid_moves(board: &Board) -> Vec<Move> {
    let player = board.next_player();
    let mut moves = Vec::new();
    for y in COORD_MIN..=COORD_MAX {
        for x in COORD_MIN..=COORD_MAX {
            let mv = Move::new(x, y, player);
            if apply_move(board, &mv).is_some() {
                moves.push(mv);
            }
        }
    }
    moves
}

// =============================================================================
// Scoring and selection
// =============================================================================

/// Material balance: +1 per Player1 piece, -1 per Player2 piece.
pub fn score_board(board: &Board) -> i32 {
    board
        .cells()
        .map(|(_, _, c)| match c {
            Cell::Player1 => 1,
            Cell::Player2 => -1,
            Cell::Empty => 0,
        })
        .sum()
}

/// How [`pick_move_with`] ranks candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Every candidate is scored by the material of the board as given, so
    /// all candidates tie and the first legal move wins.
    #[default]
    Material,
    /// Each candidate is scored by the material after playing it, seen from
    /// the mover's side.
    Lookahead,
    /// Uniformly random legal move.
    Random,
}

fn candidate_score(board: &Board, mv: &Move, strategy: Strategy) -> i32 {
    match strategy {
        Strategy::Lookahead => {
            let after = apply_move(board, mv)
                .map_or_else(|| score_board(board), |b| score_board(&b));
            match mv.player {
                Player::Player1 => after,
                Player::Player2 => -after,
            }
        }
        Strategy::Material | Strategy::Random => score_board(board),
    }
}

/// Pick a move with [`Strategy::Material`]. `None` means pass.
pub fn pick_move(board: &Board) -> Option<Move> {
    let mut rng = fastrand::Rng::with_seed(DEFAULT_SEED);
    pick_move_with(board, Strategy::Material, &mut rng)
}

/// Pick a move with the given strategy. `None` means pass.
///
/// Ties go to the earliest candidate in enumeration order. `rng` is only
/// consulted by [`Strategy::Random`].
pub fn pick_move_with(
    board: &Board,
    strategy: Strategy,
    rng: &mut fastrand::Rng,
) -> Option<Move> {
    let moves = valid_moves(board);
    if moves.is_empty() {
        debug!(next = ?board.next_player(), "no legal move, passing");
        return None;
    }

    if strategy == Strategy::Random {
        let mv = moves[rng.usize(..moves.len())];
        debug!(candidates = moves.len(), chosen = %mv, "random pick");
        return Some(mv);
    }

    let mut best: Option<(Move, i32)> = None;
    for mv in &moves {
        let score = candidate_score(board, mv, strategy);
        trace!(label = %mv, score, "candidate");
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((*mv, score));
        }
    }
    let (mv, score) = best?;
    debug!(candidates = moves.len(), chosen = %mv, score, ?strategy, "picked move");
    Some(mv)
}
