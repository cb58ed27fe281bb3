//! src/core/engine.rs
//!
//! Combo engine orchestration
//!
//! Ties the buffer, matcher, and dispatcher together and implements the
//! exact ordered insertion policy that gives the system its fighting-game
//! feel: gatekeeper, trim, staleness, window extension, insert, match.
//!
//! The engine is single-threaded and tick-driven. `add_command` and `tick`
//! are the only mutators; callers age the buffer once per frame via `tick`
//! and insert tokens immediately as input events arrive, so several
//! same-frame inputs are each matched eagerly while aging happens once.

use crate::config::{ConfigError, EngineConfig};
use crate::core::buffer::ComboBuffer;
use crate::core::dispatch::{ComboDispatcher, ListenerId};
use crate::core::matcher::ComboMatcher;
use crate::core::rules::{builtin_rules, ComboRule};
use crate::core::types::{ComboAction, CommandToken};

/// The combo detection engine.
///
/// Owns the bounded token buffer, the ordered rule list, and the listener
/// registry. Configuration and rules are fixed at construction.
#[derive(Debug)]
pub struct ComboEngine {
    config: EngineConfig,
    buffer: ComboBuffer,
    matcher: ComboMatcher,
    dispatcher: ComboDispatcher,
}

impl ComboEngine {
    /// Builds an engine from a validated config and rule list.
    ///
    /// Rejects misconfiguration up front: inconsistent timing values, an
    /// empty rule list, zero-length rules, and rules longer than the
    /// buffer bound (such a rule could never match).
    pub fn new(config: EngineConfig, rules: Vec<ComboRule>) -> Result<Self, ConfigError> {
        config.validate()?;

        if rules.is_empty() {
            return Err(ConfigError::NoRules);
        }

        for rule in &rules {
            if rule.length() == 0 {
                return Err(ConfigError::EmptyRule(rule.name().to_string()));
            }
            if rule.length() > config.max_length {
                return Err(ConfigError::RuleTooLong {
                    name: rule.name().to_string(),
                    length: rule.length(),
                    max_length: config.max_length,
                });
            }
        }

        let buffer = ComboBuffer::new(config.max_length);
        let matcher = ComboMatcher::new(rules, config.minimum_combo_length);

        Ok(Self {
            config,
            buffer,
            matcher,
            dispatcher: ComboDispatcher::new(),
        })
    }

    /// Builds an engine with the built-in rule set (X X Y → dash_attack,
    /// Up B → jump_kick).
    pub fn with_builtin_rules(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config, builtin_rules())
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The registered rules, in registration order.
    pub fn rules(&self) -> &[ComboRule] {
        self.matcher.rules()
    }

    /// Registers a combo-executed listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ComboAction) + 'static,
    {
        self.dispatcher.subscribe(listener)
    }

    /// Removes a previously registered listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    /// Feeds one input token through the ordered insertion policy.
    ///
    /// Policy, in order:
    /// 1. Gatekeeper: a non-empty buffer whose oldest token cannot open
    ///    any rule is cleared (the stuck prefix could never match).
    /// 2. Trim: at capacity, the oldest token is evicted.
    /// 3. Staleness: if the gap since the last insertion has reached the
    ///    minimum, the buffer is cleared and the late token is dropped
    ///    entirely, without starting a fresh sequence.
    /// 4. Window extension: once the buffer has reached the extension
    ///    threshold, time is credited back to the window.
    /// 5. Insert: the token is appended and the timers re-anchored.
    /// 6. Match: the matcher scans the updated buffer; on a hit the buffer
    ///    is cleared, listeners are notified exactly once, and the action
    ///    is returned.
    pub fn add_command(&mut self, token: CommandToken) -> Option<ComboAction> {
        if let Some(oldest) = self.buffer.front() {
            if !self.matcher.can_start(oldest) {
                self.buffer.clear();
            }
        }

        self.buffer.trim_if_full();

        if self.buffer.is_stale(self.config.minimum_gap_between_inputs) {
            self.buffer.clear();
            return None;
        }

        if self.buffer.len() >= self.config.extension_threshold {
            self.buffer.extend_window(self.config.combo_time_extension);
        }

        self.buffer.push(token);

        let snapshot = self.buffer.snapshot();
        let matched = self.matcher.try_match(&snapshot).cloned();

        if let Some(action) = &matched {
            self.buffer.clear();
            self.dispatcher.notify(action);
        }

        matched
    }

    /// Ages the buffer by one frame's delta time.
    ///
    /// No-op while the buffer is empty. Returns `true` when the sequence
    /// outlived the combo window and was abandoned.
    pub fn tick(&mut self, delta_seconds: f32) -> bool {
        self.buffer.tick(delta_seconds, self.config.max_combo_window)
    }

    /// Read-only ordered view of the buffered tokens, oldest first.
    pub fn snapshot(&self) -> Vec<CommandToken> {
        self.buffer.snapshot()
    }

    /// Number of buffered tokens.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Abandons the current sequence and zeroes both timers. Idempotent.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
