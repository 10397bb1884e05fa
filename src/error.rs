//! Game-specific error types.
//!
//! Systems should propagate errors through these types rather than panicking
//! where practical, enabling graceful degradation instead of hard crashes.
//! A failed resource or config load aborts initialisation of the owning
//! state with a diagnostic; it never takes the process down.

use std::fmt;

/// Top-level error enum for the game core.
#[derive(Debug)]
pub enum GameError {
    /// `assets/game.toml` existed but could not be parsed.
    ConfigParse {
        /// Path that was being read.
        path: &'static str,
        /// Parser message, kept for the startup diagnostic.
        detail: String,
    },

    /// A configuration value is outside its safe operating range.
    /// Returned by [`crate::config::GameConfig::validate`] before the value
    /// can reach the simulation.
    UnsafeValue {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigParse { path, detail } => {
                write!(f, "failed to parse {path}: {detail}")
            }
            GameError::UnsafeValue {
                name,
                value,
                safe_range,
            } => {
                write!(f, "config value {name} = {value} outside safe range ({safe_range})")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_name_and_value() {
        let err = GameError::UnsafeValue {
            name: "playfield_width",
            value: -1.0,
            safe_range: "> 0",
        };
        let msg = err.to_string();
        assert!(msg.contains("playfield_width"));
        assert!(msg.contains("-1"));
    }
}
