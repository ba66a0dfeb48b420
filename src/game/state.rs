use crate::board::state::Board;
use crate::game::{GameOutcome, GameStage, TurnInfo};
use crate::pieces::Player;
use crate::tiles::Tile;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The piece being moved during a [`Phase::PutSelection`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// The square the piece was picked up from. The piece stays here until the move is committed.
    pub origin: Tile,
    /// The square the piece has reached so far. Same as `origin` until the first capture of a
    /// chain.
    pub fighting: Tile,
}

impl Selection {
    pub fn new(origin: Tile) -> Self {
        Self { origin, fighting: origin }
    }

    /// Whether at least one capture of this turn has already been made.
    pub fn in_chain(&self) -> bool {
        self.origin != self.fighting
    }
}

/// The phase of the current turn, together with the data that only makes sense in that phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to pick up a piece.
    TakeSelection,
    /// A piece has been picked up and is waiting for a destination.
    PutSelection(Selection),
    /// The game has finished.
    GameEnd(GameOutcome)
}

impl Phase {
    pub fn stage(&self) -> GameStage {
        match self {
            Phase::TakeSelection => GameStage::TakeSelection,
            Phase::PutSelection(_) => GameStage::PutSelection,
            Phase::GameEnd(_) => GameStage::GameEnd,
        }
    }
}

/// All the state of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Board state, ie, the current pieces on the board.
    pub board: Board,
    pub phase: Phase,
    /// Result of the most recent input.
    pub turn_info: TurnInfo,
    /// The player whose turn it is, or the winner once the game has been won.
    pub player: Player,
    /// Tiles of the current player's pieces that can capture. Non-empty means capturing is
    /// obligatory this turn.
    pub obligatory: HashSet<Tile>,
}

impl GameState {
    /// A state waiting for `player` to pick up a piece. The caller is responsible for filling
    /// in [`Self::obligatory`].
    pub fn new(board: Board, player: Player) -> Self {
        Self {
            board,
            phase: Phase::TakeSelection,
            turn_info: TurnInfo::Nothing,
            player,
            obligatory: HashSet::new(),
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.phase {
            Phase::PutSelection(sel) => Some(sel),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameEnd(outcome) => Some(outcome),
            _ => None,
        }
    }
}
