//! # Game Session Module - Turn Loop and Move Validation
//!
//! The session owns the authoritative board state for one round. All moves
//! pass through it:
//!
//! - **Human moves** are validated before application and rejected without
//!   touching state when the target cell is unusable.
//! - **Computer moves** are drawn uniformly at random from the empty cells
//!   by rejection sampling.
//! - After every half-turn the session evaluates the win and draw
//!   conditions, so a round terminates exactly once.
//!
//! The front end talks to a running round through the [`RoundIo`] trait,
//! which keeps the session free of any terminal or input concerns.

use crate::grid::{Grid, GridError, Mark};
use anyhow::Result;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The round is still being played.
    InProgress,
    /// The given mark completed a line.
    Win(Mark),
    /// The board is full and nobody completed a line.
    Draw,
}

/// Why a submitted move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveValidationError {
    /// The coordinate is out of bounds or the cell is already taken.
    #[error("illegal move")]
    IllegalMove,
    /// The round already reached a terminal state.
    #[error("game is already over")]
    GameAlreadyOver,
}

/// Result of attempting to apply a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The mark was placed; `status` describes the round afterwards.
    Accepted {
        /// Row the mark landed on.
        row: usize,
        /// Column the mark landed on.
        col: usize,
        /// Round status after the placement.
        status: GameStatus,
    },
    /// The move was refused and no state changed.
    Rejected(MoveValidationError),
}

/// Terminal outcome of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The given mark completed a line.
    Win(Mark),
    /// Full board, no line.
    Draw,
}

/// Front-end seam for a running round.
///
/// [`GameSession::run_round`] calls these hooks to obtain human moves and
/// to report progress. Only [`RoundIo::request_move`] is required; the
/// notification hooks default to doing nothing so test doubles only
/// implement what they assert on.
pub trait RoundIo {
    /// Called on the human's turn. Returns the chosen `(row, col)`.
    ///
    /// Fallible because the underlying input source can disappear
    /// (for example, stdin closing mid-round).
    fn request_move(&mut self, session: &GameSession) -> Result<(usize, usize)>;

    /// Called when a submitted coordinate was rejected. The session will
    /// request another move next.
    fn move_rejected(&mut self, _row: usize, _col: usize) {}

    /// Called after the computer placed its mark at `(row, col)`.
    fn computer_moved(&mut self, _session: &GameSession, _row: usize, _col: usize) {}

    /// Called once when the round reaches a terminal state, before the
    /// board is reset, so the final position can still be rendered.
    fn round_over(&mut self, _session: &GameSession, _outcome: RoundOutcome) {}
}

/// One game of Tic-Tac-Toe from empty board to win or draw.
///
/// Owns its [`Grid`] exclusively. The human always moves first; the turn
/// flips after every successful placement.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    to_move: Mark,
    moves_played: usize,
}

impl GameSession {
    /// Creates a session with a fresh `size`×`size` grid, human to move.
    ///
    /// # Errors
    /// [`GridError::InvalidSize`] for sizes outside 1 to
    /// [`crate::grid::MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size)?,
            to_move: Mark::Human,
            moves_played: 0,
        })
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read access to the board, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Number of marks placed so far this round.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// True iff `mark` holds a complete row, column or diagonal.
    pub fn check_win(&self, mark: Mark) -> bool {
        self.grid.has_line(mark)
    }

    /// True iff the board is full and neither side completed a line.
    pub fn is_draw(&self) -> bool {
        self.grid.is_full() && !self.check_win(Mark::Human) && !self.check_win(Mark::Computer)
    }

    /// Evaluates the round status from the board.
    pub fn status(&self) -> GameStatus {
        for mark in [Mark::Human, Mark::Computer] {
            if self.check_win(mark) {
                return GameStatus::Win(mark);
            }
        }
        if self.grid.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Attempts to place the human mark at `(row, col)`.
    ///
    /// Rejected moves leave the session untouched: the turn does not flip
    /// and the move count does not change.
    pub fn try_player_move(&mut self, row: usize, col: usize) -> MoveResult {
        if self.status() != GameStatus::InProgress {
            return MoveResult::Rejected(MoveValidationError::GameAlreadyOver);
        }
        if !self.grid.is_empty_at(row, col) {
            return MoveResult::Rejected(MoveValidationError::IllegalMove);
        }
        self.apply(row, col, Mark::Human);
        MoveResult::Accepted {
            row,
            col,
            status: self.status(),
        }
    }

    /// Places the computer mark on a uniformly random empty cell and
    /// returns its coordinate.
    ///
    /// Selection is rejection sampling over the whole board, which
    /// terminates because the caller only invokes this while the board
    /// still has an empty cell.
    pub fn computer_move(&mut self, rng: &mut impl Rng) -> (usize, usize) {
        debug_assert!(!self.grid.is_full(), "computer_move() on a full board");
        let size = self.grid.size();
        let (row, col) = loop {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            if self.grid.is_empty_at(row, col) {
                break (row, col);
            }
        };
        debug!(row, col, "computer places {}", Mark::Computer);
        self.apply(row, col, Mark::Computer);
        (row, col)
    }

    fn apply(&mut self, row: usize, col: usize, mark: Mark) {
        self.grid.place(row, col, mark);
        self.moves_played += 1;
        self.to_move = mark.opponent();
    }

    /// Clears the board and re-arms the session, human to move.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.to_move = Mark::Human;
        self.moves_played = 0;
    }

    /// Plays one round to completion.
    ///
    /// Alternates between requesting human moves through `io` (re-requesting
    /// on rejection) and drawing computer moves from `rng`, evaluating the
    /// terminal conditions after every half-turn. Reports the result through
    /// [`RoundIo::round_over`] while the final position is still on the
    /// board, then resets the session for the next round.
    ///
    /// # Errors
    /// Propagates failures from [`RoundIo::request_move`].
    pub fn run_round<I, R>(&mut self, io: &mut I, rng: &mut R) -> Result<RoundOutcome>
    where
        I: RoundIo,
        R: Rng,
    {
        let outcome = loop {
            match self.status() {
                GameStatus::Win(mark) => break RoundOutcome::Win(mark),
                GameStatus::Draw => break RoundOutcome::Draw,
                GameStatus::InProgress => {}
            }
            match self.to_move {
                Mark::Human => {
                    let (row, col) = io.request_move(self)?;
                    if let MoveResult::Rejected(reason) = self.try_player_move(row, col) {
                        debug!(row, col, %reason, "move rejected");
                        io.move_rejected(row, col);
                    }
                }
                Mark::Computer => {
                    let (row, col) = self.computer_move(rng);
                    io.computer_moved(self, row, col);
                }
            }
        };
        debug!(?outcome, moves = self.moves_played, "round finished");
        io.round_over(self, outcome);
        self.reset();
        Ok(outcome)
    }
}
