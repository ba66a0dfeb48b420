use crate::tiles::Tile;
use thiserror::Error;

/// Errors that may be encountered when parsing a board fixture, a position string or a square
/// name.
#[derive(Debug, Eq, PartialEq, Clone, Error)]
pub enum ParseError {
    /// A text board did not have exactly eight rows. The given `usize` is the actual number.
    #[error("expected 8 rows, found {0}")]
    BadRowCount(usize),
    /// A row of a text board or position string was not eight squares long. The given `usize` is
    /// the actual length.
    #[error("expected rows of 8 squares, found one of {0}")]
    BadRowLen(usize),
    /// A cell started with a character that is not a known player icon.
    #[error("unknown player icon {0:?}")]
    BadPlayerIcon(char),
    /// A cell had a valid player icon followed by something other than a single `d`.
    #[error("malformed rank suffix in {0:?}")]
    BadRank(String),
    /// A piece was placed on a light square, which can never hold one.
    #[error("piece placed on light square {0}")]
    LightSquare(Tile),
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
    /// Encountered an unexpected character in a string.
    #[error("unexpected character {0:?}")]
    BadChar(char),
    /// Tried to parse a string which was not the expected length. The given `usize` is the actual
    /// length.
    #[error("unexpected string length {0}")]
    BadStringLen(usize),
    /// Parsed two squares that do not make up a diagonal play.
    #[error("invalid play: {0}")]
    BadPlay(PlayError)
}

/// Errors relating to the board.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Error)]
pub enum BoardError {
    /// Coordinates are out of bounds, ie, not on board.
    #[error("coordinates are not on the board")]
    OutOfBounds,
    /// There is no piece at the given tile, where one is expected.
    #[error("no piece on the given tile")]
    NoPiece
}

/// Errors that may be encountered when constructing a [`Play`](crate::play::Play).
#[derive(Debug, Eq, PartialEq, Clone, Copy, Error)]
pub enum PlayError {
    /// The tiles do not share a diagonal (or are the same tile).
    #[error("tiles are not on a common diagonal")]
    NotDiagonal
}

/// Different ways a chosen destination can be invalid. The engine reports all of these to the
/// player as a single "invalid move"; the reason is kept for logging and for callers of
/// [`GameLogic`](crate::game::logic::GameLogic).
#[derive(Debug, Eq, PartialEq, Clone, Copy, Error)]
pub enum PlayInvalid {
    /// Origin and destination are not on a common diagonal.
    #[error("destination is not on a diagonal")]
    NotDiagonal,
    /// The destination square already holds something.
    #[error("destination is occupied")]
    DestinationOccupied,
    /// A man tried to move further than it is permitted to.
    #[error("move is too far for a man")]
    TooFar,
    /// The path crosses one of the mover's own pieces.
    #[error("path is blocked by own piece")]
    BlockedByOwnPiece,
    /// The path crosses a piece that has already been captured this turn, or a chain marker.
    #[error("path crosses an already captured piece")]
    BlockedByCaptured,
    /// Two enemy pieces stand next to each other on the path.
    #[error("cannot jump two adjacent pieces")]
    GluedPieces,
    /// A man tried to slide towards its own back rank.
    #[error("men cannot move backwards")]
    BackwardMove,
    /// A capture is available, so a plain move is not allowed.
    #[error("a capture is mandatory")]
    CaptureRequired,
    /// There is no piece on the origin square.
    #[error("no piece to move")]
    NoPiece
}

impl From<PlayError> for PlayInvalid {
    fn from(value: PlayError) -> Self {
        match value {
            PlayError::NotDiagonal => PlayInvalid::NotDiagonal,
        }
    }
}
