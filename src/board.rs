//! Board model: an immutable 8x8 grid plus the player to move.
//!
//! All accessors take 1-indexed `(x, y)` coordinates. The conversion to the
//! 0-indexed backing array happens in [`Board::piece_at`] and
//! [`Board::with_piece_set`] and nowhere else.

use std::fmt;

use crate::constants::{COORD_MAX, COORD_MIN, N, RAW_EMPTY, RAW_PLAYER1, RAW_PLAYER2};
use crate::error::BoardError;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Wire value (1 or 2).
    pub fn raw(self) -> u8 {
        match self {
            Player::Player1 => RAW_PLAYER1,
            Player::Player2 => RAW_PLAYER2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            RAW_PLAYER1 => Ok(Player::Player1),
            RAW_PLAYER2 => Ok(Player::Player2),
            other => Err(BoardError::InvalidNext(other)),
        }
    }
}

/// Content of a single grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Cell::Empty => RAW_EMPTY,
            Cell::Player1 => RAW_PLAYER1,
            Cell::Player2 => RAW_PLAYER2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            RAW_EMPTY => Ok(Cell::Empty),
            RAW_PLAYER1 => Ok(Cell::Player1),
            RAW_PLAYER2 => Ok(Cell::Player2),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

/// A complete game state.
///
/// `Board` is `Copy`: editing methods return a new value and leave the
/// receiver untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
    next: Player,
}

impl Board {
    /// An empty grid with `next` to move.
    pub fn empty(next: Player) -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
            next,
        }
    }

    /// The standard opening: D4, E4 for Player1 and D5, E5 for Player2,
    /// Player1 to move.
    pub fn opening() -> Self {
        let mut board = Self::empty(Player::Player1);
        board.cells[3][3] = Cell::Player1;
        board.cells[3][4] = Cell::Player1;
        board.cells[4][3] = Cell::Player2;
        board.cells[4][4] = Cell::Player2;
        board
    }

    /// Builds a board from rows of raw wire values, `rows[y - 1][x - 1]`.
    pub fn from_raw<R: AsRef<[u8]>>(rows: &[R], next: u8) -> Result<Self, BoardError> {
        if rows.len() != N {
            return Err(BoardError::RowCount(rows.len()));
        }
        let next = Player::try_from(next)?;
        let mut cells = [[Cell::Empty; N]; N];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != N {
                return Err(BoardError::RowLength { row: y + 1, len: row.len() });
            }
            for (x, &raw) in row.iter().enumerate() {
                cells[y][x] = Cell::try_from(raw)?;
            }
        }
        Ok(Self { cells, next })
    }

    /// Rows of raw wire values, the inverse of [`Board::from_raw`].
    pub fn to_raw(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.raw()).collect())
            .collect()
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        if (COORD_MIN..=COORD_MAX).contains(&x) && (COORD_MIN..=COORD_MAX).contains(&y) {
            Some(((x - 1) as usize, (y - 1) as usize))
        } else {
            None
        }
    }

    /// Cell at `(x, y)`, or `None` when the coordinate is off the board.
    pub fn piece_at(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|(col, row)| self.cells[row][col])
    }

    /// A copy of this board with `(x, y)` set to `value`.
    pub fn with_piece_set(&self, x: i32, y: i32, value: Cell) -> Result<Board, BoardError> {
        let (col, row) = Self::index(x, y).ok_or(BoardError::OffBoard { x, y })?;
        let mut board = *self;
        board.cells[row][col] = value;
        Ok(board)
    }

    pub fn next_player(&self) -> Player {
        self.next
    }

    /// A copy of this board with a different player to move.
    pub fn with_next(&self, next: Player) -> Board {
        Board { next, ..*self }
    }

    /// Iterates all cells in row-major order as `(x, y, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &c)| (col as i32 + 1, row as i32 + 1, c))
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, _, c)| c == cell).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in COORD_MIN..=COORD_MAX {
            write!(f, "{y} ")?;
            for x in COORD_MIN..=COORD_MAX {
                let ch = match self.piece_at(x, y) {
                    Some(Cell::Player1) => 'X',
                    Some(Cell::Player2) => 'O',
                    _ => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  A B C D E F G H")?;
        write!(f, "next: {}", self.next.raw())
    }
}
