use crate::board::geometry::BOARD_SIZE;
use crate::error::ParseError::{BadChar, BadStringLen, EmptyString};
use crate::error::{BoardError, ParseError};
use crate::tiles::Direction::{NorthEast, NorthWest, SouthEast, SouthWest};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Add;
use std::str::FromStr;

/// The vertical component of a diagonal direction. Row indices grow towards the south.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Vertical {
    North = 0,
    South = 1
}

/// One of the four diagonal directions. The discriminants match the order in which
/// [`Board::diagonal_runs`](crate::board::state::Board::diagonal_runs) returns its rays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3
}

impl Direction {
    /// All four diagonal directions, in index order.
    pub const ALL: [Direction; 4] = [NorthWest, NorthEast, SouthWest, SouthEast];

    /// The change in row and column produced by a single step in this direction.
    pub fn step(&self) -> RowColOffset {
        match self {
            NorthWest => RowColOffset::new(-1, -1),
            NorthEast => RowColOffset::new(-1, 1),
            SouthWest => RowColOffset::new(1, -1),
            SouthEast => RowColOffset::new(1, 1),
        }
    }

    /// Whether a step in this direction goes north (towards row 0) or south.
    pub fn vertical(&self) -> Vertical {
        match self {
            NorthWest | NorthEast => Vertical::North,
            SouthWest | SouthEast => Vertical::South,
        }
    }

    /// The direction in which `offset` points, if it is a non-zero diagonal offset.
    pub fn of_offset(offset: RowColOffset) -> Option<Direction> {
        if offset.row == 0 || offset.row.unsigned_abs() != offset.col.unsigned_abs() {
            return None
        }
        Some(match (offset.row < 0, offset.col < 0) {
            (true, true) => NorthWest,
            (true, false) => NorthEast,
            (false, true) => SouthWest,
            (false, false) => SouthEast,
        })
    }
}

/// An offset which can be applied to [`Coords`] and which is composed of the row and column offset
/// to be applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RowColOffset {
    pub row: i8,
    pub col: i8,
}

impl RowColOffset {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The number of diagonal steps covered by this offset, assuming it is diagonal.
    pub fn diagonal_len(&self) -> u8 {
        self.row.unsigned_abs()
    }
}

/// An unbounded row-column pair representing a hypothetical location, which may or may not be on
/// the board. Used while walking a diagonal ray off the edge of the board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Coords {
    pub row: i8,
    pub col: i8,
}

impl Coords {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn row_col_offset_from(&self, other: Coords) -> RowColOffset {
        RowColOffset {
            row: self.row - other.row,
            col: self.col - other.col,
        }
    }
}

impl From<Tile> for Coords {
    fn from(t: Tile) -> Self {
        Self {
            row: t.row as i8,
            col: t.col as i8,
        }
    }
}

impl Add<RowColOffset> for Coords {
    type Output = Self;

    fn add(self, rhs: RowColOffset) -> Self {
        Self {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}

impl Add<Direction> for Coords {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self {
        self + rhs.step()
    }
}

/// The location of a single square on the board, ie, row and column. This struct is only a
/// reference to a location, and does not contain any other information such as piece placement.
///
/// Rows are numbered from the top (0) to the bottom (7), columns from the left (0) to the right
/// (7). The engine's input API speaks in `(x, y)`, which is `(col, row)`; see [`Tile::from_xy`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub row: u8,
    pub col: u8,
}

impl Tile {
    /// Create a new [`Tile`] with the given row and column.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a [`Tile`] from a column (`x`) and row (`y`), checking that it lies on the board.
    pub fn from_xy(x: u8, y: u8) -> Result<Self, BoardError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Self::new(y, x))
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    /// The column index.
    pub fn x(&self) -> u8 {
        self.col
    }

    /// The row index.
    pub fn y(&self) -> u8 {
        self.row
    }

    /// Whether this is a dark square, ie, one that may hold a piece.
    pub fn is_playable(&self) -> bool {
        (self.row ^ self.col) & 1 == 1
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile(x={}, y={})", self.col, self.row)
    }
}

impl Display for Tile {
    /// Algebraic name of the square: column letter from `A`, then the row name counted from the
    /// bottom of the board, so `(x=0, y=0)` is `A8`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, BOARD_SIZE - self.row)
    }
}

impl FromStr for Tile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        match chars.as_slice() {
            [] => Err(EmptyString),
            [col, row] => {
                let col = col.to_ascii_uppercase();
                if !('A'..='H').contains(&col) {
                    return Err(BadChar(col))
                }
                let row_name = row.to_digit(10)
                    .filter(|d| (1..=BOARD_SIZE as u32).contains(d))
                    .ok_or(BadChar(*row))?;
                Ok(Tile::new(BOARD_SIZE - row_name as u8, col as u8 - b'A'))
            }
            other => Err(BadStringLen(other.len())),
        }
    }
}

impl From<Tile> for (u8, u8) {
    /// The `(x, y)` pair of the tile.
    fn from(value: Tile) -> Self {
        (value.col, value.row)
    }
}

/// Iterator over the playable (dark) squares of the board, row by row from the top.
pub struct PlayableTiles {
    current: u8,
}

impl PlayableTiles {
    pub(crate) fn new() -> Self {
        Self { current: 0 }
    }
}

impl Iterator for PlayableTiles {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current < BOARD_SIZE * BOARD_SIZE {
            let tile = Tile::new(self.current / BOARD_SIZE, self.current % BOARD_SIZE);
            self.current += 1;
            if tile.is_playable() {
                return Some(tile)
            }
        }
        None
    }
}
