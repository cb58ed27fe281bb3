use thiserror::Error;

/// Errors that can occur while configuring a combo engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A registered rule is longer than the buffer can ever hold.
    #[error("Rule '{name}' has length {length} but the buffer holds at most {max_length} tokens")]
    RuleTooLong {
        name: String,
        length: usize,
        max_length: usize,
    },
    /// A rule with a zero-length pattern can never match anything.
    #[error("Rule '{0}' has an empty pattern")]
    EmptyRule(String),
    /// An engine without rules would clear every buffered token at the gate.
    #[error("No combo rules registered")]
    NoRules,
    /// Timing values must be positive for the window model to make sense.
    #[error("Invalid timing value for {name}: {value}")]
    InvalidTiming { name: &'static str, value: f32 },
    /// Buffer and length limits must be at least 1.
    #[error("Invalid limit for {name}: {value}")]
    InvalidLimit { name: &'static str, value: usize },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
