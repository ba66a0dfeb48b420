use crate::board::geometry::BOARD_SIZE;
use crate::error::ParseError;
use crate::error::ParseError::{BadPlayerIcon, BadRank};
use crate::pieces::PieceState::{Gone, Selected, Standby};
use crate::pieces::Player::{Black, White};
use crate::pieces::Rank::{King, Man};
use crate::tiles::Vertical;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Suffix marking a king in the text encoding of a piece.
pub const KING_SUFFIX: char = 'd';

/// The two players. The discriminant is the player's index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First to move; starts on the bottom three rows and moves north.
    Black = 0,
    /// Starts on the top three rows and moves south.
    White = 1
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Black, White];

    /// Return the other player.
    pub fn other(&self) -> Self {
        match self {
            Black => White,
            White => Black,
        }
    }

    /// The player's index (0 or 1).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The single character used for this player's pieces in text boards.
    pub fn icon(&self) -> char {
        match self {
            Black => 'C',
            White => 'B',
        }
    }

    /// Look up a player by the icon used for their pieces.
    pub fn from_icon(icon: char) -> Option<Self> {
        Player::ALL.into_iter().find(|p| p.icon() == icon)
    }

    /// Colour name used in status messages.
    pub fn colour(&self) -> &'static str {
        match self {
            Black => "BLACK",
            White => "WHITE",
        }
    }

    /// The direction in which this player's men may slide.
    pub fn forward(&self) -> Vertical {
        match self {
            Black => Vertical::North,
            White => Vertical::South,
        }
    }

    /// The row on which this player's men are promoted.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Black => 0,
            White => BOARD_SIZE - 1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.index() + 1, self.colour())
    }
}

/// Whether a piece is an ordinary man or a promoted king.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King
}

/// Where a piece is in its lifecycle during a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    /// Idle on the board.
    Standby,
    /// Picked up by the current player and waiting for a destination.
    Selected,
    /// Captured during the current turn; still on the board until the turn ends.
    Gone
}

/// A man or king belonging to a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Piece {
    player: Player,
    pub rank: Rank,
    state: PieceState,
}

impl Piece {
    /// Create a new piece in the standby state.
    pub fn new(player: Player, rank: Rank) -> Self {
        Self { player, rank, state: Standby }
    }

    /// Create a new man for the given player.
    pub fn man(player: Player) -> Self {
        Self::new(player, Man)
    }

    /// Create a new king for the given player.
    pub fn king(player: Player) -> Self {
        Self::new(player, King)
    }

    /// The player that owns this piece.
    pub fn owner(&self) -> Player {
        self.player
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    pub fn set_state(&mut self, state: PieceState) {
        self.state = state;
    }

    /// Whether the piece is logically off the board, pending removal.
    pub fn is_redundant(&self) -> bool {
        self.state == Gone
    }

    /// Whether the piece may slide (without capturing) in the given vertical direction. Men only
    /// move forward; kings move in any direction.
    pub fn can_move_in_direction(&self, vertical: Vertical) -> bool {
        match self.rank {
            Man => vertical == self.player.forward(),
            King => true,
        }
    }

    /// Whether the piece may travel more than one square along a diagonal in a single move.
    pub fn can_take_multiple_steps(&self) -> bool {
        self.rank == King
    }

    /// The king this piece becomes on reaching its promotion row.
    pub fn promoted(&self) -> Self {
        Self { rank: King, ..*self }
    }

    /// Text encoding of the piece: the owner's icon, a `d` for a king, wrapped in brackets while
    /// the piece is selected.
    pub fn to_text(&self) -> String {
        let mut s = String::from(self.player.icon());
        if self.rank == King {
            s.push(KING_SUFFIX);
        }
        if self.state == Selected {
            s = format!("[{s}]");
        }
        s
    }

    /// Parse the text encoding of a single piece. Brackets marking a selected piece are accepted
    /// and dropped, so the parsed piece is always in standby.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let inner = text.strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(text);
        let mut chars = inner.chars();
        let icon = chars.next().ok_or_else(|| BadRank(text.to_string()))?;
        let player = Player::from_icon(icon).ok_or(BadPlayerIcon(icon))?;
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Piece::man(player)),
            (Some(KING_SUFFIX), None) => Ok(Piece::king(player)),
            _ => Err(BadRank(text.to_string())),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError::{BadPlayerIcon, BadRank};
    use crate::pieces::PieceState::{Gone, Selected, Standby};
    use crate::pieces::Player::{Black, White};
    use crate::pieces::Rank::{King, Man};
    use crate::pieces::{Piece, Player};
    use crate::tiles::Vertical::{North, South};

    #[test]
    fn test_players() {
        assert_eq!(Black.other(), White);
        assert_eq!(White.other(), Black);
        assert_eq!(Player::from_icon('C'), Some(Black));
        assert_eq!(Player::from_icon('B'), Some(White));
        assert_eq!(Player::from_icon('x'), None);
        assert_eq!(Black.promotion_row(), 0);
        assert_eq!(White.promotion_row(), 7);
        assert_eq!(White.to_string(), "2 (WHITE)");
    }

    #[test]
    fn test_movement_capabilities() {
        let man = Piece::man(Black);
        assert!(man.can_move_in_direction(North));
        assert!(!man.can_move_in_direction(South));
        assert!(!man.can_take_multiple_steps());

        let man = Piece::man(White);
        assert!(man.can_move_in_direction(South));
        assert!(!man.can_move_in_direction(North));

        let king = Piece::king(White);
        assert!(king.can_move_in_direction(North));
        assert!(king.can_move_in_direction(South));
        assert!(king.can_take_multiple_steps());
        assert_eq!(Piece::man(White).promoted(), king);
    }

    #[test]
    fn test_lifecycle() {
        let mut p = Piece::man(Black);
        assert_eq!(p.state(), Standby);
        assert!(!p.is_redundant());
        p.set_state(Selected);
        assert!(!p.is_redundant());
        p.set_state(Gone);
        assert!(p.is_redundant());
        assert_eq!(p.owner(), Black);
    }

    #[test]
    fn test_text_encoding() {
        let mut p = Piece::king(Black);
        assert_eq!(p.to_text(), "Cd");
        p.set_state(Selected);
        assert_eq!(p.to_text(), "[Cd]");
        assert_eq!(Piece::man(White).to_text(), "B");

        assert_eq!(Piece::from_text("B"), Ok(Piece::new(White, Man)));
        assert_eq!(Piece::from_text("Cd"), Ok(Piece::new(Black, King)));
        assert_eq!(Piece::from_text("[Cd]"), Ok(Piece::new(Black, King)));
        assert_eq!(Piece::from_text("X"), Err(BadPlayerIcon('X')));
        assert_eq!(Piece::from_text("x"), Err(BadPlayerIcon('x')));
        assert_eq!(Piece::from_text("CD"), Err(BadRank(String::from("CD"))));
        assert_eq!(Piece::from_text("Cdd"), Err(BadRank(String::from("Cdd"))));
        assert_eq!(Piece::from_text("[]"), Err(BadRank(String::from("[]"))));
    }
}
