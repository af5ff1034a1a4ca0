//! Game outcome reported after each accepted placement.

use super::Mark;
use super::rules::WinLine;
use serde::{Deserialize, Serialize};

/// State of a game after the most recent placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameOutcome {
    /// No terminal state reached yet.
    #[default]
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line the presentation layer should highlight.
        line: WinLine,
    },
    /// Every square is filled and nobody completed a line.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game can accept no further placements.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win { mark, line } => write!(f, "{mark} wins on {line}"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
