//! Contract-based validation for placements.
//!
//! Preconditions decide whether a placement is accepted. Postconditions
//! re-check the engine's invariants after a mutation.

use super::action::{PlaceError, Placement};
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlaceError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not finished.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Rejects placements once the outcome is terminal.
    #[instrument(skip(game))]
    pub fn check(_placement: &Placement, game: &GameEngine) -> Result<(), PlaceError> {
        if game.is_finished() {
            Err(PlaceError::GameAlreadyFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the mark's turn.
pub struct MarksTurn;

impl MarksTurn {
    /// Rejects a mark that does not match the current turn.
    #[instrument(skip(game))]
    pub fn check(placement: &Placement, game: &GameEngine) -> Result<(), PlaceError> {
        let expected = game.current_turn();
        if placement.mark != expected {
            Err(PlaceError::WrongTurn {
                expected,
                found: placement.mark,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell lies on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Rejects cells outside the 3x3 grid.
    #[instrument(skip(_game))]
    pub fn check(placement: &Placement, _game: &GameEngine) -> Result<(), PlaceError> {
        if placement.cell.is_on_board() {
            Ok(())
        } else {
            Err(PlaceError::OutOfBounds(placement.cell))
        }
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects cells that already hold a mark.
    #[instrument(skip(game))]
    pub fn check(placement: &Placement, game: &GameEngine) -> Result<(), PlaceError> {
        if game.board().is_empty(placement.cell) {
            Ok(())
        } else {
            Err(PlaceError::CellOccupied(placement.cell))
        }
    }
}

/// Composite precondition, checked in order: not finished, right turn,
/// in bounds, empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(placement: &Placement, game: &GameEngine) -> Result<(), PlaceError> {
        GameNotFinished::check(placement, game)?;
        MarksTurn::check(placement, game)?;
        CellInBounds::check(placement, game)?;
        CellIsEmpty::check(placement, game)?;
        Ok(())
    }
}

/// Contract for placements.
///
/// Preconditions are [`LegalPlacement`]. Postconditions are the engine
/// invariants in [`EngineInvariants`].
pub struct PlacementContract;

impl Contract<GameEngine, Placement> for PlacementContract {
    fn pre(game: &GameEngine, placement: &Placement) -> Result<(), PlaceError> {
        LegalPlacement::check(placement, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = EngineInvariants::check_all(after).err().unwrap_or_default();

        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "Exactly one placement is recorded per accepted move",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Postcondition failed");
            Err(violations)
        }
    }
}
