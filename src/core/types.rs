//! src/core/types.rs
//!
//! Core type definitions for combo detection
//!
//! This module defines the fundamental types used throughout the engine:
//! - `CommandToken`: A single discrete input event (D-Pad direction or face button)
//! - `ComboAction`: The opaque payload dispatched when a combo completes
//!
//! All types implement serialization so rule files and configs can be
//! persisted, and tokens are plain `Copy` values compared by variant only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete recognised input event
///
/// The token set is fixed and closed: four D-Pad directions plus the four
/// face buttons of a standard pad. Tokens carry no state and are compared
/// by variant only, which keeps buffer and matcher logic to plain
/// pattern-matching.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CommandToken {
    /// D-Pad up
    Up,
    /// D-Pad down
    Down,
    /// D-Pad left
    Left,
    /// D-Pad right
    Right,
    /// X face button
    X,
    /// Y face button
    Y,
    /// A face button
    A,
    /// B face button
    B,
}

impl CommandToken {
    /// All tokens, in a stable display order.
    pub const ALL: [CommandToken; 8] = [
        CommandToken::Up,
        CommandToken::Down,
        CommandToken::Left,
        CommandToken::Right,
        CommandToken::X,
        CommandToken::Y,
        CommandToken::A,
        CommandToken::B,
    ];

    /// Canonical name used in rule files and script files.
    pub fn name(&self) -> &'static str {
        match self {
            CommandToken::Up => "Up",
            CommandToken::Down => "Down",
            CommandToken::Left => "Left",
            CommandToken::Right => "Right",
            CommandToken::X => "X",
            CommandToken::Y => "Y",
            CommandToken::A => "A",
            CommandToken::B => "B",
        }
    }

    /// Case-insensitive lookup by canonical name.
    ///
    /// Returns `None` for anything outside the closed token set; the
    /// parser turns that into a line-numbered error.
    pub fn from_name(name: &str) -> Option<CommandToken> {
        let lowered = name.to_lowercase();
        CommandToken::ALL
            .iter()
            .copied()
            .find(|t| t.name().to_lowercase() == lowered)
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The payload produced when a combo completes
///
/// The engine treats this as opaque: it is created when a rule is
/// registered and forwarded untouched to every dispatcher listener. The
/// `id`/`args` split mirrors a dispatcher-name-plus-arguments convention
/// so gameplay code can route on `id` and parameterise on `args`.
///
/// # Example
/// ```ignore
/// let action = ComboAction::new("dash_attack");
/// let action = ComboAction::with_args("spawn_effect", "dash_trail");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ComboAction {
    /// Identifier routed on by gameplay code (e.g. "dash_attack")
    pub id: String,

    /// Optional arguments for the receiving system
    pub args: Option<String>,
}

impl ComboAction {
    /// Create an action with no arguments.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            args: None,
        }
    }

    /// Create an action with arguments.
    pub fn with_args(id: &str, args: &str) -> Self {
        Self {
            id: id.to_string(),
            args: Some(args.to_string()),
        }
    }
}

impl fmt::Display for ComboAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;

        if let Some(args) = &self.args {
            write!(f, ", {}", args)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", CommandToken::Up), "Up");
        assert_eq!(format!("{}", CommandToken::X), "X");
    }

    #[test]
    fn test_token_from_name() {
        assert_eq!(CommandToken::from_name("up"), Some(CommandToken::Up));
        assert_eq!(CommandToken::from_name("Y"), Some(CommandToken::Y));
        assert_eq!(CommandToken::from_name("DOWN"), Some(CommandToken::Down));
        assert_eq!(CommandToken::from_name("start"), None);
    }

    #[test]
    fn test_token_round_trip_all() {
        for token in CommandToken::ALL {
            assert_eq!(CommandToken::from_name(token.name()), Some(token));
        }
    }

    #[test]
    fn test_action_display() {
        let action = ComboAction::new("jump_kick");
        assert_eq!(format!("{}", action), "jump_kick");

        let action = ComboAction::with_args("dash_attack", "forward");
        assert_eq!(format!("{}", action), "dash_attack, forward");
    }

    #[test]
    fn test_action_equality() {
        assert_eq!(ComboAction::new("dash"), ComboAction::new("dash"));
        assert_ne!(ComboAction::new("dash"), ComboAction::with_args("dash", "x"));
    }
}
