// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Rules-file and input-script parsers
//!
//! Two line-oriented text formats, both with `#` comments and blank lines
//! skipped, both reporting line numbers on errors:
//!
//! - Rules file, one rule per line:
//!   ```text
//!   combo = dash_attack, X X Y
//!   combo = jump_kick, Up B, rising
//!   ```
//!   (the optional third field becomes the action's arguments)
//!
//! - Input script for replay:
//!   ```text
//!   press = X
//!   wait = 0.25
//!   ```
//!
//! # Architecture
//! The parsers use nom combinators for composable, type-safe parsing. The
//! per-line loop lives outside nom so errors can carry human line numbers;
//! token-name resolution also happens outside nom so unknown tokens get
//! their own error variant instead of a generic syntax failure.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult, Parser,
};
use thiserror::Error;

use crate::core::rules::RuleSpec;
use crate::core::types::{ComboAction, CommandToken};

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Unknown token '{token}' on line {line}")]
    UnknownToken { token: String, line: usize },

    #[error("Duplicate rule name '{name}' on line {line}")]
    DuplicateName { name: String, line: usize },

    #[error("IO error reading file: {0}")]
    Io(#[from] std::io::Error),
}

/// One step of a replay script: an input event or a pause.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptEvent {
    /// Feed a token to the engine
    Press(CommandToken),
    /// Advance engine time by this many seconds
    Wait(f32),
}

/// Parse a complete rules file
///
/// # Arguments
/// * `content` - The full rules file content as a string
///
/// # Returns
/// The rule specs in file order (which becomes registration order), or the
/// first error encountered with its line number.
pub fn parse_rules_file(content: &str) -> Result<Vec<RuleSpec>, ParseError> {
    let mut specs: Vec<RuleSpec> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (_, (name, pattern_text, args)) = parse_combo_line(trimmed).map_err(|e| {
            ParseError::InvalidSyntax {
                line: line_num,
                message: format!("{:?}", e),
            }
        })?;

        if specs.iter().any(|spec| spec.name == name) {
            return Err(ParseError::DuplicateName {
                name,
                line: line_num,
            });
        }

        let pattern = resolve_tokens(&pattern_text, line_num)?;

        let action = match &args {
            Some(args) => ComboAction::with_args(&name, args),
            None => ComboAction::new(&name),
        };

        specs.push(RuleSpec {
            name,
            pattern,
            action,
        });
    }

    Ok(specs)
}

/// Parse a complete input script
///
/// Returns the events in file order, or the first error with its line
/// number. Negative waits are rejected.
pub fn parse_script_file(content: &str) -> Result<Vec<ScriptEvent>, ParseError> {
    let mut events = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with("press") {
            let (_, token_name) =
                parse_press_line(trimmed).map_err(|e| ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                })?;

            let token =
                CommandToken::from_name(token_name).ok_or_else(|| ParseError::UnknownToken {
                    token: token_name.to_string(),
                    line: line_num,
                })?;

            events.push(ScriptEvent::Press(token));
        } else if trimmed.starts_with("wait") {
            let (_, seconds_text) =
                parse_wait_line(trimmed).map_err(|e| ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                })?;

            let seconds: f32 =
                seconds_text
                    .parse()
                    .map_err(|_| ParseError::InvalidSyntax {
                        line: line_num,
                        message: format!("invalid duration '{}'", seconds_text),
                    })?;

            if seconds < 0.0 {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("negative duration '{}'", seconds_text),
                });
            }

            events.push(ScriptEvent::Wait(seconds));
        } else {
            return Err(ParseError::InvalidSyntax {
                line: line_num,
                message: "expected 'press = <token>' or 'wait = <seconds>'".to_string(),
            });
        }
    }

    Ok(events)
}

/// Parse a single combo rule line
///
/// Format: combo = NAME, TOKEN TOKEN ..., ARGS
/// Example: combo = dash_attack, X X Y
///
/// Returns (name, pattern text, optional args) or a nom error. Token names
/// are resolved by the caller so unknown tokens can be reported precisely.
pub fn parse_combo_line(input: &str) -> IResult<&str, (String, String, Option<String>)> {
    let (input, _) = tag("combo")(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = (space0, char(','), space0).parse(input)?;
    let (input, pattern_text) = take_while1(|c: char| c != ',' && c != '\n')(input)?;

    // Optional third field: action arguments
    let (input, args) = opt(preceded(
        (space0, char(','), space0),
        take_while1(|c: char| c != '\n'),
    ))
    .parse(input)?;

    Ok((
        input,
        (
            name.to_string(),
            pattern_text.trim().to_string(),
            args.map(|s: &str| s.trim().to_string()),
        ),
    ))
}

/// Parse a press line: press = TOKEN
pub fn parse_press_line(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag("press")(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, token) = take_while1(|c: char| c.is_alphanumeric())(input)?;

    Ok((input, token))
}

/// Parse a wait line: wait = SECONDS
pub fn parse_wait_line(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag("wait")(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, seconds) =
        take_while1(|c: char| c.is_ascii_digit() || c == '.' || c == '-')(input)?;

    Ok((input, seconds))
}

/// Resolve whitespace-separated token names against the closed token set
fn resolve_tokens(pattern_text: &str, line_num: usize) -> Result<Vec<CommandToken>, ParseError> {
    let mut tokens = Vec::new();

    for word in pattern_text.split_whitespace() {
        let token = CommandToken::from_name(word).ok_or_else(|| ParseError::UnknownToken {
            token: word.to_string(),
            line: line_num,
        })?;
        tokens.push(token);
    }

    Ok(tokens)
}
