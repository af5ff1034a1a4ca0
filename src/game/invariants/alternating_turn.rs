//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: marks alternate, starting with X.
///
/// While the game is in progress the current turn must be the mark after
/// the last placement. Once finished, the turn stays with the final mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_turn() == Mark::X;
        };

        if first.mark != Mark::X {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let last = history[history.len() - 1].mark;
        let expected = if game.is_finished() {
            last
        } else {
            last.opponent()
        };

        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
