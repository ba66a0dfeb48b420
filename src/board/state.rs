use crate::board::geometry::{Ray, BOARD_SIZE};
use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadRowCount, BadRowLen, LightSquare};
use crate::pieces::PieceState::{Gone, Standby};
use crate::pieces::{Piece, PieceState, Player, KING_SUFFIX};
use crate::tiles::{Direction, PlayableTiles, Tile};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Text used for a chain marker in text boards.
pub const PHANTOM_TEXT: &str = "x";

/// A text board: eight rows of eight cells, each empty or holding the text encoding of a piece.
pub type TextBoard = Vec<Vec<String>>;

/// The contents of a single square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
    /// Marks a square the active piece has landed on during a capture chain. It belongs to no
    /// player, cannot be jumped or landed on, and is removed when the turn ends.
    Phantom
}

impl Cell {
    /// The piece in this cell, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Occupied(p) => Some(*p),
            _ => None,
        }
    }

    /// The owner of the piece in this cell. Phantoms and empty cells have none.
    pub fn owner(&self) -> Option<Player> {
        self.piece().map(|p| p.owner())
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// Whether the cell holds something that is logically out of play: a captured piece or a
    /// chain marker.
    pub fn is_redundant(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Occupied(p) => p.is_redundant(),
            Cell::Phantom => true,
        }
    }

    /// Whether the cell holds a live piece of the opponent of `player`.
    pub fn is_live_enemy_of(&self, player: Player) -> bool {
        match self {
            Cell::Occupied(p) => !p.is_redundant() && p.owner() != player,
            _ => false,
        }
    }

    /// Text encoding of the cell.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Occupied(p) => p.to_text(),
            Cell::Phantom => String::from(PHANTOM_TEXT),
        }
    }
}

/// The 8x8 grid of squares. Only dark squares ever hold anything.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard opening position: twelve men per player on the dark squares of the three rows
    /// nearest to them. White fills rows 0 to 2 and Black rows 5 to 7.
    pub fn standard() -> Self {
        let mut board = Self::new();
        let half = BOARD_SIZE / 2;
        for tile in PlayableTiles::new() {
            if tile.row < half - 1 {
                board.set_piece(tile, Piece::man(Player::White));
            } else if tile.row > half {
                board.set_piece(tile, Piece::man(Player::Black));
            }
        }
        board
    }

    pub fn cell(&self, t: Tile) -> Cell {
        self.cells[t.row as usize][t.col as usize]
    }

    pub fn set_cell(&mut self, t: Tile, cell: Cell) {
        self.cells[t.row as usize][t.col as usize] = cell;
    }

    /// Get the piece that occupies the given tile, if any.
    pub fn get_piece(&self, t: Tile) -> Option<Piece> {
        self.cell(t).piece()
    }

    /// Place a piece at the given position.
    pub fn set_piece(&mut self, t: Tile, piece: Piece) {
        self.set_cell(t, Cell::Occupied(piece));
    }

    /// Clear a tile.
    pub fn clear_tile(&mut self, t: Tile) {
        self.set_cell(t, Cell::Empty);
    }

    /// Check if there is anything occupying a tile (including a chain marker).
    pub fn tile_occupied(&self, t: Tile) -> bool {
        !self.cell(t).is_empty()
    }

    /// Remove and return the piece at the given tile, leaving the tile empty.
    pub fn take_piece(&mut self, t: Tile) -> Option<Piece> {
        let piece = self.get_piece(t);
        self.clear_tile(t);
        piece
    }

    /// Change the lifecycle state of the piece at the given tile, if there is one.
    pub fn set_piece_state(&mut self, t: Tile, state: PieceState) {
        if let Cell::Occupied(p) = &mut self.cells[t.row as usize][t.col as usize] {
            p.set_state(state);
        }
    }

    /// The contents of the squares along one diagonal from `origin`, nearest first, up to the edge
    /// of the board. The origin itself is not included.
    pub fn diagonal_run(&self, direction: Direction, origin: Tile) -> Vec<Cell> {
        Ray::new(origin, direction).map(|t| self.cell(t)).collect()
    }

    /// The diagonal runs in all four directions, indexed as [`Direction::ALL`].
    pub fn diagonal_runs(&self, origin: Tile) -> [Vec<Cell>; 4] {
        Direction::ALL.map(|d| self.diagonal_run(d, origin))
    }

    /// Physically remove every captured piece and chain marker from the board.
    pub fn purge_redundant(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if cell.is_redundant() {
                    *cell = Cell::Empty;
                }
            }
        }
    }

    /// Undo any partial turn: captured and selected pieces go back to standby and chain markers
    /// are removed.
    pub fn restore(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                match cell {
                    Cell::Occupied(p) => p.set_state(Standby),
                    Cell::Phantom => *cell = Cell::Empty,
                    Cell::Empty => {}
                }
            }
        }
    }

    /// Mark the pieces on the given tiles as captured.
    pub fn mark_gone(&mut self, tiles: &[Tile]) {
        for &t in tiles {
            self.set_piece_state(t, Gone);
        }
    }

    /// Return an iterator over the tiles holding pieces of the given player (whatever their state),
    /// row by row from the top.
    pub fn iter_occupied(&self, player: Player) -> impl Iterator<Item=Tile> + '_ {
        PlayableTiles::new().filter(move |t| self.cell(*t).owner() == Some(player))
    }

    /// Count the pieces of the given player that are still in play.
    pub fn count_pieces(&self, player: Player) -> usize {
        self.iter_occupied(player)
            .filter(|t| !self.cell(*t).is_redundant())
            .count()
    }

    /// Text encoding of the whole board, row by row.
    pub fn to_text_board(&self) -> TextBoard {
        self.cells.iter()
            .map(|row| row.iter().map(|c| c.to_text()).collect())
            .collect()
    }

    /// Build a board from its text encoding. Empty or whitespace-only cells are empty squares. The
    /// input must be exactly 8x8 and may only place pieces on dark squares.
    pub fn from_text_board(rows: &[Vec<String>]) -> Result<Self, ParseError> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(BadRowCount(rows.len()))
        }
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE as usize {
                return Err(BadRowLen(row.len()))
            }
            for (c, text) in row.iter().enumerate() {
                let text = text.trim();
                if text.is_empty() {
                    continue
                }
                let tile = Tile::new(r as u8, c as u8);
                let piece = Piece::from_text(text)?;
                if !tile.is_playable() {
                    return Err(LightSquare(tile))
                }
                board.set_piece(tile, piece);
            }
        }
        Ok(board)
    }

    /// Compact notation for the position: rows from the top separated by `/`, digits for runs of
    /// empty squares, player icons for men and an icon followed by `d` for kings. Chain markers and
    /// captured pieces are written as empty squares; selection is not recorded.
    pub fn to_notation(&self) -> String {
        let mut s = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            let mut n_empty = 0;
            for cell in row {
                match cell {
                    Cell::Occupied(p) if !p.is_redundant() => {
                        if n_empty > 0 {
                            s.push_str(&n_empty.to_string());
                            n_empty = 0;
                        }
                        s.push(p.owner().icon());
                        if p.can_take_multiple_steps() {
                            s.push(KING_SUFFIX);
                        }
                    }
                    _ => n_empty += 1,
                }
            }
            if n_empty > 0 {
                s.push_str(&n_empty.to_string());
            }
            if r < BOARD_SIZE as usize - 1 {
                s.push('/');
            }
        }
        s
    }

    /// Parse a position in the notation written by [`Self::to_notation`].
    pub fn from_notation(notation: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = notation.trim().split('/').collect();
        if lines.len() != BOARD_SIZE as usize {
            return Err(BadRowCount(lines.len()))
        }
        let mut board = Self::new();
        for (r, line) in lines.iter().enumerate() {
            let mut c = 0usize;
            let mut chars = line.chars().peekable();
            while let Some(chr) = chars.next() {
                if let Some(n) = chr.to_digit(10) {
                    c += n as usize;
                    continue
                }
                let player = Player::from_icon(chr).ok_or(BadChar(chr))?;
                let piece = if chars.peek() == Some(&KING_SUFFIX) {
                    chars.next();
                    Piece::king(player)
                } else {
                    Piece::man(player)
                };
                if c >= BOARD_SIZE as usize {
                    return Err(BadRowLen(c + 1))
                }
                let tile = Tile::new(r as u8, c as u8);
                if !tile.is_playable() {
                    return Err(LightSquare(tile))
                }
                board.set_piece(tile, piece);
                c += 1;
            }
            if c != BOARD_SIZE as usize {
                return Err(BadRowLen(c))
            }
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl Display for Board {
    /// One line per row, `.` for an empty square, the piece text otherwise (padded to four
    /// characters).
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            let line: Vec<String> = row.iter()
                .map(|c| match c {
                    Cell::Empty => format!("{:^4}", "."),
                    other => format!("{:^4}", other.to_text()),
                })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}
