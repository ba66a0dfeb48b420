pub mod logic;
pub mod state;

use crate::board::state::{Board, Cell, TextBoard};
use crate::error::{ParseError, PlayInvalid};
use crate::game::logic::GameLogic;
use crate::game::state::{GameState, Phase, Selection};
use crate::pieces::PieceState::{Selected, Standby};
use crate::pieces::Player;
use crate::pieces::Rank::Man;
use crate::tiles::Tile;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The outcome of a single game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game has been won by the specified player.
    Win(Player),
    /// Both players ran out of pieces at once.
    Draw
}

/// The phase of the turn, as reported to callers. See [`Phase`] for the same information with
/// its associated data.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum GameStage {
    TakeSelection,
    PutSelection,
    GameEnd
}

/// What happened as a result of the most recent input.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default, Serialize, Deserialize)]
pub enum TurnInfo {
    /// Nothing noteworthy; the state speaks for itself.
    #[default]
    Nothing,
    /// The player put the piece back where it came from.
    Cancelled,
    /// The player picked up a piece that cannot capture while another one can.
    ObligatoryFightViolation,
    /// A capture was made and the same piece can capture again.
    FightAgain,
    /// The player clicked one of the opponent's pieces.
    WrongPlayer,
    /// The chosen destination is not a legal move.
    InvalidMove
}

/// The checkers engine. It owns the board and all turn state, and advances the game one clicked
/// square at a time through [`Checkers::process_input`]. Everything else is read-only queries,
/// apart from a couple of setup methods intended for tests and debugging.
#[derive(Debug, Clone)]
pub struct Checkers {
    logic: GameLogic,
    state: GameState,
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkers {

    /// Create an engine with a new game already set up.
    pub fn new() -> Self {
        let mut game = Self::with_board(Board::new(), Player::Black);
        game.new_game();
        game
    }

    /// Create an engine starting from the given position with `player` to move. Obligatory
    /// captures are computed, but the position is not checked for a finished game.
    pub fn with_board(board: Board, player: Player) -> Self {
        let mut game = Self {
            logic: GameLogic,
            state: GameState::new(board, player),
        };
        game.update_obligatory();
        game
    }

    /// Reset to the standard opening position, with the first player to move.
    pub fn new_game(&mut self) {
        self.state = GameState::new(Board::standard(), Player::Black);
        self.update_obligatory();
        info!("New game started");
    }

    /// Handle a click on the square at column `x`, row `y`. Returns whether anything changed that
    /// needs redrawing. Clicks on light squares, off the board or after the game has ended are
    /// ignored.
    pub fn process_input(&mut self, x: u8, y: u8) -> bool {
        trace!("Input x={x} y={y}");
        self.state.turn_info = TurnInfo::Nothing;
        let tile = match Tile::from_xy(x, y) {
            Ok(t) if t.is_playable() => t,
            _ => return false,
        };
        match self.state.phase {
            Phase::TakeSelection => self.take_selection(tile),
            Phase::PutSelection(sel) => self.put_selection(sel, tile),
            Phase::GameEnd(_) => return false,
        }
        true
    }

    fn take_selection(&mut self, tile: Tile) {
        let Some(piece) = self.state.board.get_piece(tile) else {
            return
        };
        if piece.owner() != self.state.player {
            debug!("{} clicked an opposing piece at {tile}", self.state.player);
            self.state.turn_info = TurnInfo::WrongPlayer;
            return
        }
        if !self.state.obligatory.is_empty() && !self.state.obligatory.contains(&tile) {
            debug!("Piece at {tile} cannot capture but a capture is obligatory");
            self.state.turn_info = TurnInfo::ObligatoryFightViolation;
            return
        }
        self.state.board.set_piece_state(tile, Selected);
        self.state.phase = Phase::PutSelection(Selection::new(tile));
        debug!("Selected {piece} at {tile}");
    }

    fn put_selection(&mut self, sel: Selection, tile: Tile) {
        self.state.phase = Phase::TakeSelection;
        if tile == sel.origin {
            if sel.in_chain() {
                debug!("Captures from {} to {} undone", sel.origin, sel.fighting);
            }
            debug!("Move from {} cancelled", sel.origin);
            self.state.turn_info = TurnInfo::Cancelled;
            self.abandon_turn();
            return
        }
        let Some(piece) = self.state.board.get_piece(sel.origin) else {
            self.reject(PlayInvalid::NoPiece);
            return
        };
        let valid = match self.logic.validate_play(&self.state.board, piece, sel.fighting, tile) {
            Ok(vp) => vp,
            Err(reason) => {
                self.reject(reason);
                return
            }
        };
        // A piece that has started a chain is always in the obligatory set.
        if !valid.is_capture() && !self.state.obligatory.is_empty() {
            self.reject(PlayInvalid::CaptureRequired);
            return
        }
        self.state.board.mark_gone(&valid.captures);
        if valid.is_capture() && self.logic.can_capture(&self.state.board, piece, tile) {
            debug!("{valid}: can capture again");
            self.state.board.set_cell(tile, Cell::Phantom);
            self.state.phase = Phase::PutSelection(Selection { fighting: tile, ..sel });
            self.state.turn_info = TurnInfo::FightAgain;
        } else {
            debug!("{valid}");
            self.commit(sel.origin, tile);
        }
    }

    fn reject(&mut self, reason: PlayInvalid) {
        debug!("Move rejected: {reason}");
        self.state.turn_info = TurnInfo::InvalidMove;
        self.abandon_turn();
    }

    /// Put everything touched during the turn back as it was.
    fn abandon_turn(&mut self) {
        self.state.board.restore();
    }

    /// Move the selected piece to its final square, remove everything it captured and hand the
    /// turn over.
    fn commit(&mut self, origin: Tile, dest: Tile) {
        let Some(mut piece) = self.state.board.take_piece(origin) else {
            return
        };
        piece.set_state(Standby);
        self.state.board.purge_redundant();
        if piece.rank == Man && dest.row == piece.owner().promotion_row() {
            piece = piece.promoted();
            info!("{} promoted a man to king at {dest}", piece.owner());
        }
        self.state.board.set_piece(dest, piece);
        trace!("Board after move:\n{}", self.state.board);
        self.state.player = self.state.player.other();
        self.update_game_data();
    }

    fn update_obligatory(&mut self) {
        self.state.obligatory = self.logic.obligatory_origins(&self.state.board, self.state.player);
    }

    /// Refresh the obligatory captures for the player to move and check whether the game is over.
    fn update_game_data(&mut self) {
        self.update_obligatory();
        if let Some(outcome) = self.logic.game_outcome(&self.state.board) {
            if let GameOutcome::Win(winner) = outcome {
                self.state.player = winner;
            }
            self.state.phase = Phase::GameEnd(outcome);
            info!("{}", self.end_text(outcome));
        }
    }

    /// A copy of the board as text, one string per square: empty for an empty square, the owner's
    /// icon for a man, the icon followed by `d` for a king, wrapped in `[...]` while selected. A
    /// square reached mid-chain reads `x`.
    pub fn text_board(&self) -> TextBoard {
        self.state.board.to_text_board()
    }

    /// The phase of the turn, the result of the latest input, and the player to move (or the
    /// winner, once the game has been won).
    pub fn game_state(&self) -> (GameStage, TurnInfo, Player) {
        (self.state.phase.stage(), self.state.turn_info, self.state.player)
    }

    /// A status message for the player, describing the result of the latest input if it was
    /// noteworthy, or otherwise what is expected next.
    pub fn text_state(&self) -> String {
        match self.state.turn_info {
            TurnInfo::Nothing => self.phase_text(),
            TurnInfo::Cancelled => format!("Move cancelled. {}", self.phase_text()),
            TurnInfo::ObligatoryFightViolation =>
                String::from("No! You have at least one mandatory capture."),
            TurnInfo::FightAgain => String::from("You can capture again. Choose the next square:"),
            TurnInfo::WrongPlayer => String::from("That is not your piece!"),
            TurnInfo::InvalidMove => String::from("Move not allowed!"),
        }
    }

    fn phase_text(&self) -> String {
        match self.state.phase {
            Phase::TakeSelection => format!("Player {} to move.", self.state.player),
            Phase::PutSelection(_) => String::from("Choose where to put the piece:"),
            Phase::GameEnd(outcome) => self.end_text(outcome),
        }
    }

    fn end_text(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Win(winner) => format!("Game over. Player {winner} wins."),
            GameOutcome::Draw => String::from("Game over. Draw."),
        }
    }

    /// Replace the board with one parsed from text, in the format returned by
    /// [`Self::text_board`]. Any turn in progress is dropped and the current player must pick up
    /// a piece. On error nothing is changed.
    pub fn set_text_board(&mut self, rows: &[Vec<String>]) -> Result<(), ParseError> {
        let board = Board::from_text_board(rows)?;
        self.state = GameState::new(board, self.state.player);
        self.update_obligatory();
        Ok(())
    }

    /// Hand the turn to `player`. Any turn in progress is dropped.
    pub fn set_current_player(&mut self, player: Player) {
        self.state.board.restore();
        self.state = GameState::new(self.state.board, player);
        self.update_obligatory();
    }

    /// A copy of the current board.
    pub fn board(&self) -> Board {
        self.state.board
    }

    /// Tiles of the current player's pieces that can capture.
    pub fn obligatory_origins(&self) -> &HashSet<Tile> {
        &self.state.obligatory
    }

    /// The piece being moved, if one has been picked up.
    pub fn selection(&self) -> Option<Selection> {
        self.state.selection()
    }

    /// The outcome of the game, if it has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }
}
