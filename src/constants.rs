//! Board geometry and engine parameters.
//!
//! Coordinates are 1-indexed everywhere outside the board accessors:
//! `x` is the column (`A`..`H`), `y` is the row (`1`..`8`).

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Smallest valid coordinate.
pub const COORD_MIN: i32 = 1;

/// Largest valid coordinate.
pub const COORD_MAX: i32 = N as i32;

/// Column letters, indexed by `x - 1`.
pub const COLUMNS: [char; N] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

// =============================================================================
// Directions
// =============================================================================

/// The 8 compass rays as (dx, dy) steps.
/// Order: E, S, W, N, SE, SW, NE, NW
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

// =============================================================================
// Wire values
// =============================================================================

/// Raw value of an empty cell in a request document.
pub const RAW_EMPTY: u8 = 0;

/// Raw value of a Player1 cell.
pub const RAW_PLAYER1: u8 = 1;

/// Raw value of a Player2 cell.
pub const RAW_PLAYER2: u8 = 2;

/// Token reported when the player to move has no legal move.
pub const PASS: &str = "PASS";

// =============================================================================
// Selection
// =============================================================================

/// Seed used by the random strategy when none is given.
pub const DEFAULT_SEED: u64 = 0x5EED;
