//! Authoritative game state: board, turn and outcome.

use super::action::{PlaceError, Placement};
use super::contracts::{Contract, PlacementContract};
use super::outcome::GameOutcome;
use super::rules::detect_outcome;
use super::{Board, Cell, Mark};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns one game's board, turn and outcome. Each instance is independent;
/// there is no shared state between games.
///
/// States are `InProgress` (outcome [`GameOutcome::InProgress`]) and
/// `Finished` (any terminal outcome). Finished is sticky: every later
/// placement is rejected with [`PlaceError::GameAlreadyFinished`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_turn: Mark,
    pub(crate) outcome: GameOutcome,
    pub(crate) history: Vec<Placement>,
}

impl GameEngine {
    /// The mark that moves first in every game.
    pub const FIRST_MOVER: Mark = Mark::X;

    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Self::FIRST_MOVER,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Places `mark` at `cell`.
    ///
    /// Returns the outcome after the placement. A rejected placement leaves
    /// the engine unchanged.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`PlaceError::GameAlreadyFinished`] once the game has ended
    /// - [`PlaceError::WrongTurn`] if `mark` is not the current turn
    /// - [`PlaceError::OutOfBounds`] if `cell` is off the 3x3 grid
    /// - [`PlaceError::CellOccupied`] if `cell` already holds a mark
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<GameOutcome, PlaceError> {
        let placement = Placement::new(mark, cell);

        if let Err(err) = PlacementContract::pre(self, &placement) {
            debug!(%placement, %err, "Placement rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.put(cell, mark);
        self.history.push(placement);

        let outcome = detect_outcome(&self.board, mark);
        self.outcome = outcome;
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            self.current_turn = mark.opponent();
        }

        #[cfg(debug_assertions)]
        {
            if let Err(violations) = PlacementContract::post(&before, self) {
                panic!("placement {placement} broke engine invariants: {violations:?}");
            }
        }

        debug!(%placement, %outcome, "Placement accepted");
        Ok(outcome)
    }

    /// Places a mark for whoever's turn it is.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::place`], except `WrongTurn` cannot occur.
    #[instrument(skip(self))]
    pub fn place_current(&mut self, cell: Cell) -> Result<GameOutcome, PlaceError> {
        self.place(cell, self.current_turn)
    }

    /// Discards the board and starts a new game with X to move.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Starting a new game");
        *self = Self::new();
    }

    /// Builds an engine by applying `placements` in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument(skip(placements), fields(count = placements.len()))]
    pub fn replay(placements: &[Placement]) -> Result<Self, PlaceError> {
        let mut game = Self::new();
        for placement in placements {
            game.place(placement.cell, placement.mark)?;
        }
        Ok(game)
    }

    /// Returns the mark whose turn it is.
    ///
    /// After the game finishes this stays on the final mover.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the outcome after the latest accepted placement.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns true once the game has reached a terminal outcome.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns accepted placements in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
