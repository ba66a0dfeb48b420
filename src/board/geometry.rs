use crate::error::BoardError;
use crate::tiles::{Coords, Direction, Tile};

/// Length of a side of the board.
pub const BOARD_SIZE: u8 = 8;

/// Check whether the coords refer to a position on the board.
pub fn coords_in_bounds(coords: Coords) -> bool {
    let range = 0..(BOARD_SIZE as i8);
    range.contains(&coords.row) && range.contains(&coords.col)
}

/// Convert an unbounded [`Coords`] to a [`Tile`] representing a position on the board, if
/// possible. If the coords represent a position not on the board, return a
/// [`BoardError::OutOfBounds`] error.
pub fn coords_to_tile(coords: Coords) -> Result<Tile, BoardError> {
    if coords_in_bounds(coords) {
        Ok(Tile::new(coords.row as u8, coords.col as u8))
    } else {
        Err(BoardError::OutOfBounds)
    }
}

/// Iterator over the tiles along one diagonal, starting with the tile adjacent to the origin and
/// ending at the edge of the board. The origin itself is not included.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Coords,
    direction: Direction,
}

impl Ray {
    pub fn new(origin: Tile, direction: Direction) -> Self {
        Self { current: Coords::from(origin), direction }
    }
}

impl Iterator for Ray {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current + self.direction;
        let tile = coords_to_tile(next).ok()?;
        self.current = next;
        Some(tile)
    }
}

/// The tiles strictly between two tiles on a common diagonal, nearest to `from` first. Returns an
/// empty vector if the tiles are adjacent or do not share a diagonal.
pub fn tiles_between(from: Tile, to: Tile) -> Vec<Tile> {
    let offset = Coords::from(to).row_col_offset_from(Coords::from(from));
    match Direction::of_offset(offset) {
        Some(direction) => Ray::new(from, direction)
            .take_while(|t| *t != to)
            .collect(),
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use crate::board::geometry::{coords_to_tile, tiles_between, Ray};
    use crate::error::BoardError;
    use crate::tiles::Direction::{NorthEast, NorthWest, SouthEast};
    use crate::tiles::{Coords, Tile};

    #[test]
    fn test_coords_to_tile() {
        assert_eq!(coords_to_tile(Coords::new(3, 4)), Ok(Tile::new(3, 4)));
        assert_eq!(coords_to_tile(Coords::new(-1, 4)), Err(BoardError::OutOfBounds));
        assert_eq!(coords_to_tile(Coords::new(3, 8)), Err(BoardError::OutOfBounds));
    }

    #[test]
    fn test_rays() {
        let origin = Tile::from_xy(0, 7).unwrap();
        let ray: Vec<Tile> = Ray::new(origin, NorthEast).collect();
        assert_eq!(ray.len(), 7);
        assert_eq!(ray[0], Tile::from_xy(1, 6).unwrap());
        assert_eq!(ray[6], Tile::from_xy(7, 0).unwrap());
        assert_eq!(Ray::new(origin, NorthWest).count(), 0);
        assert_eq!(Ray::new(origin, SouthEast).count(), 0);

        let ray: Vec<Tile> = Ray::new(Tile::from_xy(2, 5).unwrap(), SouthEast).collect();
        assert_eq!(ray, vec![Tile::from_xy(3, 6).unwrap(), Tile::from_xy(4, 7).unwrap()]);
    }

    #[test]
    fn test_tiles_between() {
        let between = tiles_between(Tile::from_xy(0, 7).unwrap(), Tile::from_xy(3, 4).unwrap());
        assert_eq!(between, vec![Tile::from_xy(1, 6).unwrap(), Tile::from_xy(2, 5).unwrap()]);
        assert!(tiles_between(Tile::from_xy(0, 7).unwrap(), Tile::from_xy(1, 6).unwrap()).is_empty());
        assert!(tiles_between(Tile::from_xy(0, 7).unwrap(), Tile::from_xy(2, 7).unwrap()).is_empty());
    }
}
