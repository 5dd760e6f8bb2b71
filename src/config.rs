use crate::board::START_POSITION;
use crate::error::SessionError;
use serde::{Deserialize, Serialize};

/// Share of the shorter viewport side the grid occupies by default.
pub const DEFAULT_VIEWPORT_FILL: f64 = 0.9;

/// Startup settings for a [`crate::session::GameSession`].
///
/// Every field has a default, so the page may pass a partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// FEN piece placement loaded at construction.
    pub start_position: String,
    /// Fraction of `min(width, height)` covered by the grid, in `(0, 1]`.
    pub viewport_fill: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            start_position: START_POSITION.to_string(),
            viewport_fill: DEFAULT_VIEWPORT_FILL,
        }
    }
}

impl SessionConfig {
    pub fn with_position(fen: impl Into<String>) -> Self {
        SessionConfig {
            start_position: fen.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.viewport_fill > 0.0 && self.viewport_fill <= 1.0 {
            Ok(())
        } else {
            Err(SessionError::ViewportFill(self.viewport_fill))
        }
    }
}
