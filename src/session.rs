//! A match between two named players on a pointer-driven surface.
//!
//! The session sits between the event source and the engine: it maps
//! pointer releases to cells, places the current player's mark and turns
//! outcomes into announcements. The engine itself never sees names.

use crate::config::Settings;
use crate::game::{Cell, GameEngine, GameOutcome, Mark, PlaceError};
use crate::mapper::{SurfaceSize, map_to_cell};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Players {
    /// Name of the player using X.
    x: String,
    /// Name of the player using O.
    o: String,
}

impl Players {
    /// Returns the name of the player using `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Window title in the form "X-name vs O-name : Tic Tac Toe".
    pub fn title(&self) -> String {
        format!("{} vs {} : Tic Tac Toe", self.x, self.o)
    }
}

/// A pointer release delivered by the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct PointerRelease {
    /// Horizontal position on the surface.
    pub x: u32,
    /// Vertical position on the surface.
    pub y: u32,
}

/// Result of handling one pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// Whether a mark was placed.
    accepted: bool,
    /// The cell that received a mark, when accepted.
    cell: Option<Cell>,
    /// Outcome after handling the release.
    outcome: GameOutcome,
    /// Why the release was ignored, when rejected.
    rejection: Option<PlaceError>,
}

impl MoveReport {
    /// The mark placed by this move, looked up on `engine`.
    pub fn placed_mark(&self, engine: &GameEngine) -> Option<Mark> {
        self.cell.and_then(|cell| engine.board().mark_at(cell))
    }
}

/// A game between two named players on a fixed surface.
#[derive(Debug, Clone, Getters)]
pub struct Match {
    /// Player names.
    players: Players,
    /// Surface used for coordinate mapping.
    surface: SurfaceSize,
    /// The game being played.
    engine: GameEngine,
}

impl Match {
    /// Creates a match with a fresh game.
    #[instrument]
    pub fn new(players: Players, surface: SurfaceSize) -> Self {
        info!(title = %players.title(), %surface, "Match created");
        Self {
            players,
            surface,
            engine: GameEngine::new(),
        }
    }

    /// Creates a match from validated settings.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::config::ConfigError`] when the surface is malformed.
    #[instrument(skip(settings))]
    pub fn from_settings(settings: &Settings) -> Result<Self, crate::config::ConfigError> {
        let surface = settings.surface()?;
        let players = Players::new(settings.player_x().clone(), settings.player_o().clone());
        Ok(Self::new(players, surface))
    }

    /// Handles a pointer release at `(x, y)` for the player whose turn it is.
    ///
    /// Rejections leave the game unchanged and are safe to ignore.
    #[instrument(skip(self))]
    pub fn release(&mut self, x: u32, y: u32) -> MoveReport {
        let cell = map_to_cell(x, y, self.surface);
        let mark = self.engine.current_turn();
        match self.engine.place(cell, mark) {
            Ok(outcome) => {
                debug!(%cell, %mark, player = self.players.name(mark), "Mark placed");
                if let Some(text) = self.announcement() {
                    info!(announcement = %text, "Game over");
                }
                MoveReport {
                    accepted: true,
                    cell: Some(cell),
                    outcome,
                    rejection: None,
                }
            }
            Err(err) => {
                debug!(%cell, %err, "Release ignored");
                MoveReport {
                    accepted: false,
                    cell: None,
                    outcome: self.engine.outcome(),
                    rejection: Some(err),
                }
            }
        }
    }

    /// Handles a sequence of releases in arrival order.
    pub fn release_all(
        &mut self,
        events: impl IntoIterator<Item = PointerRelease>,
    ) -> Vec<MoveReport> {
        events
            .into_iter()
            .map(|event| self.release(event.x, event.y))
            .collect()
    }

    /// Text announcing the end of the game, or `None` while in progress.
    pub fn announcement(&self) -> Option<String> {
        match self.engine.outcome() {
            GameOutcome::InProgress => None,
            GameOutcome::Win { mark, .. } => Some(format!("{} won", self.players.name(mark))),
            GameOutcome::Draw => Some("Game Draw".to_string()),
        }
    }

    /// Starts a new game with the same players and surface.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.engine.reset();
    }

    /// Replaces the surface, e.g. after the window was resized.
    #[instrument(skip(self))]
    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WinLine;

    fn sample() -> Match {
        Match::new(
            Players::new("Alice".to_string(), "Bob".to_string()),
            SurfaceSize::new(300, 300).unwrap(),
        )
    }

    #[test]
    fn test_release_places_current_mark() {
        let mut m = sample();
        let report = m.release(150, 150);
        assert!(*report.accepted());
        assert_eq!(*report.cell(), Some(Cell::new(1, 1)));
        assert_eq!(report.placed_mark(m.engine()), Some(Mark::X));
        assert_eq!(m.engine().current_turn(), Mark::O);
    }

    #[test]
    fn test_click_on_filled_cell_ignored() {
        let mut m = sample();
        m.release(10, 10);
        let report = m.release(20, 20);
        assert!(!*report.accepted());
        assert_eq!(
            *report.rejection(),
            Some(PlaceError::CellOccupied(Cell::new(0, 0)))
        );
        assert_eq!(m.engine().current_turn(), Mark::O);
    }

    #[test]
    fn test_click_off_surface_rejected() {
        let mut m = sample();
        let report = m.release(300, 0);
        assert_eq!(
            *report.rejection(),
            Some(PlaceError::OutOfBounds(Cell::new(0, 3)))
        );
    }

    #[test]
    fn test_win_announcement_uses_name() {
        let mut m = sample();
        let reports = m.release_all([
            PointerRelease::new(10, 210),
            PointerRelease::new(10, 10),
            PointerRelease::new(110, 210),
            PointerRelease::new(110, 10),
            PointerRelease::new(210, 110),
            PointerRelease::new(210, 10),
        ]);
        assert_eq!(
            *reports[5].outcome(),
            GameOutcome::Win {
                mark: Mark::O,
                line: WinLine::Row(0)
            }
        );
        assert_eq!(m.announcement().as_deref(), Some("Bob won"));
    }

    #[test]
    fn test_new_game_keeps_players() {
        let mut m = sample();
        m.release(10, 10);
        m.new_game();
        assert!(m.engine().history().is_empty());
        assert_eq!(m.players().name(Mark::X), "Alice");
        assert_eq!(m.players().title(), "Alice vs Bob : Tic Tac Toe");
    }
}
