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

//! Combo Detection Engine
//!
//! A fighting-game style combo detector: discrete input tokens flow into a
//! bounded, time-aged buffer, and a rule-based subsequence matcher
//! dispatches a gameplay action the moment a known pattern completes.
//!
//! # Features
//!
//! - **Timed input buffer:** Bounded FIFO with a combo window, per-input
//!   gap enforcement, and window extension as sequences grow
//! - **First-match precedence:** Earlier buffer offsets win; registration
//!   order breaks ties at the same offset
//! - **Gatekeeper pre-filter:** Sequences that can never match any rule
//!   are discarded before matching cost is paid
//! - **Observer dispatch:** Explicit subscribe/unsubscribe registry for
//!   "combo executed" notifications
//! - **Rules files:** Text-defined rule sets with overlap linting
//!
//! # Architecture
//!
//! - **`core`:** Detection logic (buffer, rules, matcher, engine,
//!   dispatcher, parsers, overlap analysis)
//! - **`config`:** Engine timing/limit configuration
//!
//! # Examples
//!
//! ## Detecting the built-in combos
//!
//! ```
//! use combo_engine::config::EngineConfig;
//! use combo_engine::core::{ComboEngine, CommandToken};
//!
//! let mut engine = ComboEngine::with_builtin_rules(EngineConfig::default())?;
//!
//! engine.add_command(CommandToken::X);
//! engine.tick(0.1);
//! engine.add_command(CommandToken::X);
//! engine.tick(0.1);
//!
//! let action = engine.add_command(CommandToken::Y);
//! assert_eq!(action.map(|a| a.id), Some("dash_attack".to_string()));
//! # Ok::<(), combo_engine::config::ConfigError>(())
//! ```
//!
//! ## Subscribing to combo notifications
//!
//! ```
//! use combo_engine::config::EngineConfig;
//! use combo_engine::core::{ComboEngine, CommandToken};
//!
//! let mut engine = ComboEngine::with_builtin_rules(EngineConfig::default())?;
//!
//! let id = engine.subscribe(|action| println!("combo: {}", action));
//!
//! engine.add_command(CommandToken::Up);
//! engine.add_command(CommandToken::B); // prints "combo: jump_kick"
//!
//! engine.unsubscribe(id);
//! # Ok::<(), combo_engine::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::{ComboAction, ComboEngine, ComboRule, CommandToken};
