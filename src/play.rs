use crate::board::geometry::tiles_between;
use crate::error::ParseError::BadStringLen;
use crate::error::{ParseError, PlayError};
use crate::tiles::{Coords, Direction, Tile};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single move of a piece from one tile to another along a diagonal. (Named "Play" rather than
/// "Move" as the lower-cased version of the latter would clash with the Rust keyword.)
///
/// A `Play` is only guaranteed to be diagonal and on the board; whether it is legal depends on the
/// board and is decided by [`GameLogic::validate_play`](crate::game::logic::GameLogic::validate_play).
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Play {
    pub from: Tile,
    pub to: Tile,
    /// The diagonal along which the piece travels.
    pub direction: Direction,
    /// Number of diagonal steps from `from` to `to`.
    pub distance: u8,
}

impl Play {

    /// Create a new [`Play`] from source and destination tiles.
    pub fn from_tiles(src: Tile, dst: Tile) -> Result<Self, PlayError> {
        let offset = Coords::from(dst).row_col_offset_from(Coords::from(src));
        let direction = Direction::of_offset(offset).ok_or(PlayError::NotDiagonal)?;
        Ok(Self { from: src, to: dst, direction, distance: offset.diagonal_len() })
    }

    /// The tiles strictly between origin and destination, nearest to the origin first. Its length
    /// is one less than [`Self::distance`].
    pub fn path(&self) -> Vec<Tile> {
        tiles_between(self.from, self.to)
    }
}

impl FromStr for Play {
    type Err = ParseError;

    /// Parse a play written as two square names joined by `-`, eg, `C3-D4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();
        if tokens.len() != 2 {
            return Err(BadStringLen(tokens.len()))
        }
        let from = Tile::from_str(tokens[0])?;
        let to = Tile::from_str(tokens[1])?;
        Play::from_tiles(from, to).map_err(ParseError::BadPlay)
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A [`Play`] that is known to be legal on the board it was validated against, together with the
/// tiles of the enemy pieces it jumps. Construct one with
/// [`GameLogic::validate_play`](crate::game::logic::GameLogic::validate_play).
#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub struct ValidPlay {
    pub play: Play,
    /// Tiles of the pieces captured by this play, nearest to the origin first.
    pub captures: Vec<Tile>,
}

impl ValidPlay {
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl Display for ValidPlay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.play)?;
        if self.is_capture() {
            write!(f, "x{}",
                self.captures.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("/"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError::{BadChar, BadPlay, BadStringLen};
    use crate::error::PlayError::NotDiagonal;
    use crate::play::{Play, ValidPlay};
    use crate::tiles::Direction::{NorthEast, SouthWest};
    use crate::tiles::Tile;
    use std::str::FromStr;

    fn xy(x: u8, y: u8) -> Tile {
        Tile::from_xy(x, y).unwrap()
    }

    #[test]
    fn test_from_tiles() {
        let play = Play::from_tiles(xy(0, 7), xy(3, 4)).unwrap();
        assert_eq!(play.direction, NorthEast);
        assert_eq!(play.distance, 3);
        assert_eq!(play.path(), vec![xy(1, 6), xy(2, 5)]);

        let play = Play::from_tiles(xy(3, 4), xy(2, 5)).unwrap();
        assert_eq!(play.direction, SouthWest);
        assert_eq!(play.distance, 1);
        assert!(play.path().is_empty());

        assert_eq!(Play::from_tiles(xy(3, 4), xy(3, 4)), Err(NotDiagonal));
        assert_eq!(Play::from_tiles(xy(3, 4), xy(5, 5)), Err(NotDiagonal));
    }

    #[test]
    fn test_parse_and_display() {
        let play = Play::from_str("a1-d4").unwrap();
        assert_eq!(play, Play::from_tiles(xy(0, 7), xy(3, 4)).unwrap());
        assert_eq!(play.to_string(), "A1-D4");
        assert_eq!(Play::from_str("a1"), Err(BadStringLen(1)));
        assert_eq!(Play::from_str("a1-d5"), Err(BadPlay(NotDiagonal)));
        assert_eq!(Play::from_str("a1-z5"), Err(BadChar('Z')));

        let vp = ValidPlay { play, captures: vec![xy(1, 6)] };
        assert!(vp.is_capture());
        assert_eq!(vp.to_string(), "A1-D4xB2");
    }
}
