//! # Terminal Tic-Tac-Toe Core
//!
//! Game logic for a single-player Tic-Tac-Toe played on a configurable
//! N×N board against a random-move computer opponent.
//!
//! Two components cooperate:
//! - [`grid::Grid`] owns the cell array and answers the structural
//!   questions: bounds, emptiness, fullness, win lines.
//! - [`session::GameSession`] owns one grid and drives turn alternation,
//!   move validation and terminal-state detection.
//!
//! Front ends supply human moves through the [`session::RoundIo`] trait;
//! the `play` binary in this package implements it over stdin/stdout.

pub mod grid;
pub mod session;

pub use grid::{Cell, Grid, GridError, Mark, MAX_BOARD_SIZE};
pub use session::{
    GameSession, GameStatus, MoveResult, MoveValidationError, RoundIo, RoundOutcome,
};
