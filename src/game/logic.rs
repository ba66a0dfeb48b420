use crate::board::geometry::Ray;
use crate::board::state::{Board, Cell};
use crate::error::PlayInvalid::{BackwardMove, BlockedByCaptured, BlockedByOwnPiece, DestinationOccupied, GluedPieces, TooFar};
use crate::error::{BoardError, PlayInvalid};
use crate::game::GameOutcome;
use crate::game::GameOutcome::{Draw, Win};
use crate::pieces::Player::{Black, White};
use crate::pieces::{Piece, Player};
use crate::play::{Play, ValidPlay};
use crate::tiles::{Direction, Tile};
use std::collections::HashSet;

/// Number of squares along a diagonal that a man looks at when checking for a capture: the enemy
/// it jumps and the square it lands on.
const MAN_CAPTURE_REACH: usize = 2;

/// This struct implements the rules of the game. It holds no data of its own; its methods take a
/// reference to the [`Board`] they evaluate, so that they can be used on copies of the board
/// without touching the live game.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameLogic;

impl GameLogic {

    /// Whether the given piece, standing at `tile`, has at least one capture available.
    ///
    /// Along some diagonal (only the nearest two squares, for a man) there must be a live enemy
    /// piece followed directly by an empty square, with nothing but empty squares before it.
    pub fn can_capture(&self, board: &Board, piece: Piece, tile: Tile) -> bool {
        let reach = if piece.can_take_multiple_steps() { usize::MAX } else { MAN_CAPTURE_REACH };
        board.diagonal_runs(tile).iter().any(|run| {
            let run = &run[..run.len().min(reach)];
            Self::run_allows_capture(run, piece.owner())
        })
    }

    fn run_allows_capture(run: &[Cell], player: Player) -> bool {
        let mut enemy_spotted = false;
        for cell in run {
            match cell {
                Cell::Empty => if enemy_spotted {
                    return true
                },
                c if c.is_live_enemy_of(player) => if enemy_spotted {
                    // Two enemies in a row cannot be jumped.
                    return false
                } else {
                    enemy_spotted = true
                },
                _ => return false,
            }
        }
        false
    }

    /// Check whether moving `piece` from `from` to `to` is legal on the given board. Returns a
    /// [`ValidPlay`] listing the tiles of the pieces that would be captured, or a [`PlayInvalid`]
    /// describing why the move is not allowed. The board is not modified.
    ///
    /// This does not take the obligation to capture into account; that depends on the rest of the
    /// turn and is enforced by the engine.
    pub fn validate_play(
        &self,
        board: &Board,
        piece: Piece,
        from: Tile,
        to: Tile
    ) -> Result<ValidPlay, PlayInvalid> {
        let play = Play::from_tiles(from, to)?;
        if board.tile_occupied(to) {
            return Err(DestinationOccupied)
        }
        let path = play.path();
        if !piece.can_take_multiple_steps() && !path.is_empty()
            && (path.len() > 1 || !board.tile_occupied(path[0])) {
            return Err(TooFar)
        }
        // Walk back from the square before the destination towards the origin.
        let mut glued = false;
        for &tile in path.iter().rev() {
            match board.cell(tile) {
                Cell::Empty => glued = false,
                c if c.is_redundant() => return Err(BlockedByCaptured),
                c if c.owner() == Some(piece.owner()) => return Err(BlockedByOwnPiece),
                _ if glued => return Err(GluedPieces),
                _ => glued = true,
            }
        }
        let captures: Vec<Tile> = path.into_iter()
            .filter(|t| board.tile_occupied(*t))
            .collect();
        if captures.is_empty() && !piece.can_move_in_direction(play.direction.vertical()) {
            return Err(BackwardMove)
        }
        Ok(ValidPlay { play, captures })
    }

    /// The tiles of the given player's pieces that have a capture available. If this is not empty,
    /// the player must capture and may only pick up one of these pieces.
    pub fn obligatory_origins(&self, board: &Board, player: Player) -> HashSet<Tile> {
        board.iter_occupied(player)
            .filter(|t| match board.get_piece(*t) {
                Some(piece) => !piece.is_redundant() && self.can_capture(board, piece, *t),
                None => false,
            })
            .collect()
    }

    /// All the moves (captures or slides) that the piece at `tile` could make in a single step,
    /// ignoring whether a capture is obligatory. Returns an error if there is no piece at `tile`.
    pub fn plays_from(&self, board: &Board, tile: Tile) -> Result<Vec<ValidPlay>, BoardError> {
        let piece = board.get_piece(tile).ok_or(BoardError::NoPiece)?;
        Ok(Direction::ALL.iter()
            .flat_map(|d| Ray::new(tile, *d))
            .filter_map(|to| self.validate_play(board, piece, tile, to).ok())
            .collect())
    }

    /// Determine whether the game is over, based on the number of live pieces each player has. A
    /// player with no pieces left loses; if both players have run out the game is drawn.
    pub fn game_outcome(&self, board: &Board) -> Option<GameOutcome> {
        match (board.count_pieces(Black), board.count_pieces(White)) {
            (0, 0) => Some(Draw),
            (0, _) => Some(Win(White)),
            (_, 0) => Some(Win(Black)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::state::{Board, Cell};
    use crate::error::BoardError;
    use crate::error::PlayInvalid::{BackwardMove, BlockedByCaptured, BlockedByOwnPiece, DestinationOccupied, GluedPieces, NotDiagonal, TooFar};
    use crate::game::logic::GameLogic;
    use crate::game::GameOutcome::{Draw, Win};
    use crate::pieces::PieceState::Gone;
    use crate::pieces::Player::{Black, White};
    use crate::pieces::Piece;
    use crate::play::Play;
    use crate::tiles::Tile;
    use crate::utils::text_board;
    use std::collections::HashSet;

    fn xy(x: u8, y: u8) -> Tile {
        Tile::from_xy(x, y).unwrap()
    }

    fn board(text: &str) -> Board {
        Board::from_text_board(&text_board(text)).unwrap()
    }

    #[test]
    fn test_man_capture_detection() {
        let logic = GameLogic;
        let b = board(
            " _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ B _ _ _ _ _ _ \n\
              _ _ C _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ "
        );
        assert!(logic.can_capture(&b, Piece::man(Black), xy(2, 5)));
        // A white man can capture backwards too.
        assert!(logic.can_capture(&b, Piece::man(White), xy(1, 4)));

        let b = board(
            " _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              B _ _ _ _ _ _ _ \n\
              _ B _ _ _ _ _ _ \n\
              _ _ C _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ "
        );
        // Landing square is taken.
        assert!(!logic.can_capture(&b, Piece::man(Black), xy(2, 5)));

        let b = board(
            " _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ C _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              B _ _ _ _ _ _ _ "
        );
        // Enemy is not adjacent, which only a king could make use of.
        assert!(!logic.can_capture(&b, Piece::man(Black), xy(2, 5)));
        let mut b = b;
        b.set_piece(xy(2, 5), Piece::king(Black));
        assert!(!logic.can_capture(&b, Piece::king(Black), xy(2, 5)));
        b.clear_tile(xy(0, 7));
        b.set_piece(xy(4, 3), Piece::man(White));
        assert!(logic.can_capture(&b, Piece::king(Black), xy(2, 5)));
        b.set_piece_state(xy(4, 3), Gone);
        assert!(!logic.can_capture(&b, Piece::king(Black), xy(2, 5)));
    }

    #[test]
    fn test_king_capture_detection() {
        let logic = GameLogic;
        let mut b = board(
            " _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ B _ _ _ \n\
              _ _ _ B _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ Cd _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ "
        );
        // Two glued enemies and no way round them.
        assert!(!logic.can_capture(&b, Piece::king(Black), xy(1, 6)));
        b.clear_tile(xy(4, 3));
        assert!(logic.can_capture(&b, Piece::king(Black), xy(1, 6)));
        b.set_cell(xy(4, 3), Cell::Phantom);
        assert!(!logic.can_capture(&b, Piece::king(Black), xy(1, 6)));
        b.set_cell(xy(4, 3), Cell::Occupied(Piece::man(Black)));
        assert!(!logic.can_capture(&b, Piece::king(Black), xy(1, 6)));
    }

    #[test]
    fn test_play_validity() {
        let logic = GameLogic;
        let b = board(
            " _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ C _ _ _ _ \n\
              _ _ C _ _ _ _ _ \n\
              _ _ _ B _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ "
        );
        let man = Piece::man(Black);
        let from = xy(2, 3);

        let slide = logic.validate_play(&b, man, from, xy(1, 2)).unwrap();
        assert_eq!(slide.play, Play::from_tiles(from, xy(1, 2)).unwrap());
        assert!(slide.captures.is_empty());

        let capture = logic.validate_play(&b, man, from, xy(4, 5)).unwrap();
        assert_eq!(capture.captures, vec![xy(3, 4)]);

        assert_eq!(logic.validate_play(&b, man, from, xy(3, 2)), Err(DestinationOccupied));
        assert_eq!(logic.validate_play(&b, man, from, xy(4, 1)), Err(BlockedByOwnPiece));
        assert_eq!(logic.validate_play(&b, man, from, xy(1, 4)), Err(BackwardMove));
        assert_eq!(logic.validate_play(&b, man, from, xy(0, 1)), Err(TooFar));
        assert_eq!(logic.validate_play(&b, man, from, xy(2, 1)), Err(NotDiagonal));
        assert_eq!(logic.validate_play(&b, man, from, xy(5, 6)), Err(TooFar));

        // The same moves are fine for a king, apart from jumping its own piece.
        let king = Piece::king(Black);
        assert!(logic.validate_play(&b, king, from, xy(1, 4)).is_ok());
        assert!(logic.validate_play(&b, king, from, xy(0, 1)).is_ok());
        assert_eq!(logic.validate_play(&b, king, from, xy(5, 6)).map(|vp| vp.captures), Ok(vec![xy(3, 4)]));
        assert_eq!(logic.validate_play(&b, king, from, xy(4, 1)), Err(BlockedByOwnPiece));
    }

    #[test]
    fn test_king_play_validity() {
        let logic = GameLogic;
        let mut b = board(
            " __ _ _ _ _ _ _ _ \n\
              __ _ _ _ _ _ _ _ \n\
              __ _ _ _ _ B _ _ \n\
              __ _ _ _ B _ _ _ \n\
              __ _ _ _ _ _ _ _ \n\
              __ _ B _ _ _ _ _ \n\
              __ _ _ _ _ _ _ _ \n\
              Cd _ _ _ _ _ _ _ "
        );
        let king = Piece::king(Black);
        let from = xy(0, 7);
        assert_eq!(logic.validate_play(&b, king, from, xy(3, 4)).map(|vp| vp.captures), Ok(vec![xy(2, 5)]));
        assert_eq!(logic.validate_play(&b, king, from, xy(6, 1)), Err(GluedPieces));

        // Separated enemies may be taken in one move.
        b.clear_tile(xy(5, 2));
        b.set_piece(xy(6, 1), Piece::man(White));
        assert_eq!(
            logic.validate_play(&b, king, from, xy(7, 0)).map(|vp| vp.captures),
            Ok(vec![xy(2, 5), xy(4, 3), xy(6, 1)])
        );
        b.set_piece_state(xy(4, 3), Gone);
        assert_eq!(logic.validate_play(&b, king, from, xy(5, 2)), Err(BlockedByCaptured));
        b.set_cell(xy(4, 3), Cell::Phantom);
        assert_eq!(logic.validate_play(&b, king, from, xy(5, 2)), Err(BlockedByCaptured));
    }

    #[test]
    fn test_obligatory_origins() {
        let logic = GameLogic;
        let b = board(
            " _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ B _ _ _ _ _ _ \n\
              _ _ C _ C _ _ _ \n\
              _ _ _ _ _ _ _ _ \n\
              _ _ _ _ _ _ _ _ "
        );
        assert_eq!(logic.obligatory_origins(&b, Black), hashset!(xy(2, 5)));
        assert_eq!(logic.obligatory_origins(&b, White), hashset!(xy(1, 4)));
        assert_eq!(logic.obligatory_origins(&Board::standard(), Black), HashSet::new());
    }

    #[test]
    fn test_plays_from() {
        let logic = GameLogic;
        let b = Board::standard();
        let plays: HashSet<Tile> = logic.plays_from(&b, xy(2, 5)).unwrap()
            .into_iter()
            .map(|vp| vp.play.to)
            .collect();
        assert_eq!(plays, hashset!(xy(1, 4), xy(3, 4)));
        assert!(logic.plays_from(&b, xy(0, 7)).unwrap().is_empty());
        assert_eq!(logic.plays_from(&b, xy(2, 4)), Err(BoardError::NoPiece));
    }

    #[test]
    fn test_game_outcome() {
        let logic = GameLogic;
        let mut b = Board::new();
        assert_eq!(logic.game_outcome(&b), Some(Draw));
        b.set_piece(xy(1, 0), Piece::man(White));
        assert_eq!(logic.game_outcome(&b), Some(Win(White)));
        b.set_piece(xy(0, 7), Piece::man(Black));
        assert_eq!(logic.game_outcome(&b), None);
        b.set_piece_state(xy(1, 0), Gone);
        assert_eq!(logic.game_outcome(&b), Some(Win(Black)));
        assert_eq!(logic.game_outcome(&Board::standard()), None);
    }
}
