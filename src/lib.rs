//! This crate provides a rules engine for [checkers](https://en.wikipedia.org/wiki/Checkers)
//! (draughts) on an 8x8 board, with mandatory captures, multi-jump chains and long-range kings.
//! It includes structs and enums that encapsulate game data and logic, suitable for driving a
//! game client. It is not a goal of this crate to provide a concrete user interface or an AI; a
//! small console client is included behind the `demo` feature.
//!
//! # Getting started
//!
//! - [`game::Checkers`]: The engine. It owns the board and the state of the current turn, and is
//!   driven one clicked square at a time through [`game::Checkers::process_input`]. After each
//!   input, a client re-reads the board with [`game::Checkers::text_board`] and the status with
//!   [`game::Checkers::game_state`] or [`game::Checkers::text_state`].
//! - [`game::logic::GameLogic`]: Implements the rules themselves (capture detection, move
//!   validation, obligatory captures and the end of the game). It holds no state; its methods take
//!   a reference to a [`board::state::Board`], so it can be used to evaluate positions without
//!   touching a live game.
//! - [`board::state::Board`]: The 8x8 grid of [`board::state::Cell`]s, with helpers for reading
//!   diagonals and for converting to and from text.
//!
//! # Turns
//!
//! A turn is made of clicks. The first click picks up one of the current player's pieces; the
//! next chooses where to put it. If the move captures and the same piece can capture again, the
//! turn continues and the next click chooses the following square of the chain. Clicking the
//! square the piece was picked up from cancels the turn. Whenever any piece of the current player
//! can capture, only such pieces may be picked up and a plain move is not allowed.
//!
//! # Text boards
//!
//! Boards are exchanged as eight rows of eight strings. An empty string is an empty square; a
//! piece is its owner's icon (`C` for Black, `B` for White), followed by `d` if it is a king, and
//! wrapped in `[...]` while it is picked up. Positions can also be written in a compact notation
//! (see [`board::state::Board::from_notation`]); the opening position is
//! [`preset::boards::STANDARD`].

/// Miscellaneous utilities used elsewhere in the crate.
#[macro_use]
mod utils;

/// Code relating to game pieces and players.
pub mod pieces;

/// Errors used elsewhere in the crate.
pub mod error;

/// Code for implementing a game, including game logic and state.
pub mod game;

/// Code relating to board tiles and coordinates.
pub mod tiles;

/// Code relating to "plays" (ie, game moves).
pub mod play;

/// Pre-defined board positions.
pub mod preset;

/// Code relating to the board, including board state and geometry.
pub mod board;
