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

//! src/config/mod.rs
//!
//! Engine configuration
//!
//! Timing and limit parameters for the combo engine, set at construction
//! and immutable thereafter. Defaults give a tight fighting-game feel:
//! half a second of total window, half a second maximum gap between
//! inputs, and a six-token buffer.

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Timing and limit parameters for a [`crate::core::engine::ComboEngine`].
///
/// All durations are in seconds, matching the per-frame delta-time model
/// the engine is ticked with.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum time a sequence may span before being abandoned.
    pub max_combo_window: f32,

    /// Gap at or beyond which the next input arrives too late to extend
    /// the current sequence.
    pub minimum_gap_between_inputs: f32,

    /// Time credited back to the window when the extension threshold is
    /// reached.
    pub combo_time_extension: f32,

    /// Buffer length at which the window extension kicks in. The default
    /// of 0 extends on every insertion.
    pub extension_threshold: usize,

    /// Maximum buffered tokens; the oldest is evicted beyond this.
    pub max_length: usize,

    /// Snapshots shorter than this never match.
    pub minimum_combo_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_combo_window: 0.5,
            minimum_gap_between_inputs: 0.5,
            combo_time_extension: 0.5,
            extension_threshold: 0,
            max_length: 6,
            minimum_combo_length: 2,
        }
    }
}

impl EngineConfig {
    /// Checks the parameters for internal consistency.
    ///
    /// Called by the engine constructor; exposed so a CLI or editor can
    /// validate user-supplied values before building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_combo_window > 0.0) {
            return Err(ConfigError::InvalidTiming {
                name: "max_combo_window",
                value: self.max_combo_window,
            });
        }

        if !(self.minimum_gap_between_inputs > 0.0) {
            return Err(ConfigError::InvalidTiming {
                name: "minimum_gap_between_inputs",
                value: self.minimum_gap_between_inputs,
            });
        }

        if self.combo_time_extension < 0.0 {
            return Err(ConfigError::InvalidTiming {
                name: "combo_time_extension",
                value: self.combo_time_extension,
            });
        }

        if self.max_length == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "max_length",
                value: self.max_length,
            });
        }

        if self.minimum_combo_length == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "minimum_combo_length",
                value: self.minimum_combo_length,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EngineConfig::default();

        assert_eq!(config.max_combo_window, 0.5);
        assert_eq!(config.minimum_gap_between_inputs, 0.5);
        assert_eq!(config.combo_time_extension, 0.5);
        assert_eq!(config.extension_threshold, 0);
        assert_eq!(config.max_length, 6);
        assert_eq!(config.minimum_combo_length, 2);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_window() {
        let config = EngineConfig {
            max_combo_window: 0.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTiming {
                name: "max_combo_window",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_extension() {
        let config = EngineConfig {
            combo_time_extension: -0.1,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_limits() {
        let config = EngineConfig {
            max_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            minimum_combo_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
