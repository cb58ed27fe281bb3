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

//! src/core/mod.rs
//!
//! Core combo detection logic
//!
//! This module contains the fundamental data structures and algorithms
//! for combo detection, including:
//! - Token and action type definitions
//! - The bounded, timer-aged input buffer
//! - The rule list and first-match subsequence matcher
//! - The combo-executed observer registry
//! - Rules-file/script parsing and rule-set overlap analysis
//!
//! All detection logic is isolated from I/O and CLI concerns to enable
//! comprehensive unit testing with nothing but token sequences.

pub mod buffer;
pub mod dispatch;
pub mod engine;
pub mod matcher;
pub mod overlap;
pub mod parser;
pub mod rules;
pub mod types;

pub use buffer::ComboBuffer;
pub use dispatch::{ComboDispatcher, ListenerId};
pub use engine::ComboEngine;
pub use matcher::ComboMatcher;
pub use overlap::{OverlapDetector, RuleOverlap};
pub use parser::{parse_rules_file, parse_script_file, ParseError, ScriptEvent};
pub use rules::{builtin_rules, ComboRule, RuleSpec};
pub use types::*;

#[cfg(test)]
mod tests;
