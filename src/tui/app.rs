//! Application state for the terminal front end.

use crate::mapper::SurfaceSize;
use crate::session::{Match, MoveReport};
use ratatui::layout::Rect;
use tracing::{debug, instrument, warn};

/// Main application state.
pub struct App {
    game: Match,
    board_area: Rect,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a match.
    pub fn new(game: Match) -> Self {
        let status_message = turn_message(&game);
        Self {
            game,
            board_area: Rect::default(),
            status_message,
            should_quit: false,
        }
    }

    /// Gets the match being played.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests the main loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records where the board was laid out and resizes the surface to match.
    #[instrument(skip(self))]
    pub fn set_board_area(&mut self, area: Rect) {
        if area == self.board_area {
            return;
        }
        self.board_area = area;
        match SurfaceSize::new(u32::from(area.width), u32::from(area.height)) {
            Ok(surface) => self.game.resize(surface),
            Err(e) => warn!(error = %e, "Terminal too small for the board"),
        }
    }

    /// Handles a left-button release at terminal position `(column, row)`.
    ///
    /// Releases outside the board are dropped before reaching the session.
    #[instrument(skip(self))]
    pub fn handle_release(&mut self, column: u16, row: u16) -> Option<MoveReport> {
        let area = self.board_area;
        let inside = column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height);
        if !inside {
            debug!("Release outside the board");
            return None;
        }

        let report = self
            .game
            .release(u32::from(column - area.x), u32::from(row - area.y));
        if *report.accepted() {
            self.status_message = self
                .game
                .announcement()
                .map(|text| format!("{text}! Press 'r' to play again or 'q' to quit."))
                .unwrap_or_else(|| turn_message(&self.game));
        }
        Some(report)
    }

    /// Starts a new game with the same players.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.new_game();
        self.status_message = turn_message(&self.game);
    }
}

fn turn_message(game: &Match) -> String {
    let mark = game.engine().current_turn();
    format!("{}'s turn ({mark})", game.players().name(mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Players;

    fn app() -> App {
        let game = Match::new(
            Players::new("Ann".to_string(), "Ben".to_string()),
            SurfaceSize::new(1, 1).unwrap(),
        );
        let mut app = App::new(game);
        app.set_board_area(Rect::new(10, 5, 30, 15));
        app
    }

    #[test]
    fn test_board_area_resizes_surface() {
        let app = app();
        assert_eq!(app.game().surface().width(), 30);
        assert_eq!(app.game().surface().height(), 15);
    }

    #[test]
    fn test_release_outside_board_ignored() {
        let mut app = app();
        assert!(app.handle_release(9, 5).is_none());
        assert!(app.handle_release(40, 5).is_none());
        assert!(app.game().engine().history().is_empty());
    }

    #[test]
    fn test_release_translated_to_board_origin() {
        let mut app = app();
        let report = app.handle_release(39, 19).unwrap();
        assert_eq!(*report.cell(), Some(crate::game::Cell::new(2, 2)));
        assert_eq!(app.status_message(), "Ben's turn (O)");
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = app();
        app.handle_release(10, 5);
        app.restart();
        assert!(app.game().engine().history().is_empty());
        assert_eq!(app.status_message(), "Ann's turn (X)");
    }
}
