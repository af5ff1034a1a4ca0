//! Game settings: player names and surface dimensions.

use crate::mapper::SurfaceSize;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a session, loadable from TOML.
///
/// ```toml
/// player_x = "alice"
/// player_o = "bob"
/// width = 60
/// height = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Display name of the player using X.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Display name of the player using O.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// Logical surface width.
    #[serde(default = "default_width")]
    width: u32,

    /// Logical surface height.
    #[serde(default = "default_height")]
    height: u32,
}

fn default_player_x() -> String {
    "Player 1".to_string()
}

fn default_player_o() -> String {
    "Player 2".to_string()
}

fn default_width() -> u32 {
    60
}

fn default_height() -> u32 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// Missing keys fall back to defaults. Names are normalized.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        let settings = settings.normalized();

        info!(
            player_x = %settings.player_x,
            player_o = %settings.player_o,
            width = settings.width,
            height = settings.height,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Applies command-line overrides on top of these settings.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_x: Option<String>,
        player_o: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        self.normalized()
    }

    /// Validates the dimensions into a [`SurfaceSize`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either dimension is zero.
    #[track_caller]
    pub fn surface(&self) -> Result<SurfaceSize, ConfigError> {
        SurfaceSize::new(self.width, self.height)
    }

    fn normalized(mut self) -> Self {
        self.player_x = capitalize(&self.player_x).unwrap_or_else(default_player_x);
        self.player_o = capitalize(&self.player_o).unwrap_or_else(default_player_o);
        self
    }
}

/// Trims a name and uppercases its first letter, lowercasing the rest.
///
/// Returns `None` for a blank name.
pub fn capitalize(name: &str) -> Option<String> {
    let mut chars = name.trim().chars();
    let first = chars.next()?;
    Some(
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    )
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
