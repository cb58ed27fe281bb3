//! src/core/overlap.rs
//!
//! Rule-set overlap analysis
//!
//! With first-match precedence, a rule registered later can be made
//! unreachable by an earlier one. Two shapes of overlap are detected:
//!
//! - **Duplicate**: identical patterns. The earlier registration always
//!   wins the same-offset tie-break, so the later rule never fires.
//! - **Shadowed**: an earlier rule's full pattern is a strict prefix of a
//!   later rule's. Wherever the longer pattern would match, the shorter
//!   one matches first at the same offset and consumes the combo.
//!
//! Overlaps are lints, not rejections: the engine accepts such rule sets,
//! this analysis exists so `combo-engine check` can warn about them.

use crate::core::rules::RuleSpec;
use std::fmt;

/// One detected overlap between two registered rules.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleOverlap {
    /// Identical patterns; `unreachable` can never fire.
    Duplicate { kept: RuleSpec, unreachable: RuleSpec },
    /// `by`'s pattern is a strict prefix of `shadowed`'s.
    Shadowed { by: RuleSpec, shadowed: RuleSpec },
}

impl fmt::Display for RuleOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOverlap::Duplicate { kept, unreachable } => write!(
                f,
                "'{}' duplicates '{}' and can never fire",
                unreachable.name, kept.name
            ),
            RuleOverlap::Shadowed { by, shadowed } => write!(
                f,
                "'{}' is shadowed by the shorter prefix rule '{}'",
                shadowed.name, by.name
            ),
        }
    }
}

/// Detects unreachable rules in a registration-ordered rule set.
#[derive(Debug, Default)]
pub struct OverlapDetector {
    specs: Vec<RuleSpec>,
}

impl OverlapDetector {
    /// Creates an empty detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule spec in registration order.
    pub fn add_spec(&mut self, spec: RuleSpec) {
        self.specs.push(spec);
    }

    /// Scans every ordered pair for duplicates and prefix shadowing.
    ///
    /// Time complexity: O(n²) pairs with O(length) pattern comparison;
    /// rule sets are small (tens, not thousands), so this is plenty.
    pub fn find_overlaps(&self) -> Vec<RuleOverlap> {
        let mut overlaps = Vec::new();

        for (earlier_idx, earlier) in self.specs.iter().enumerate() {
            for later in self.specs.iter().skip(earlier_idx + 1) {
                if earlier.pattern == later.pattern {
                    overlaps.push(RuleOverlap::Duplicate {
                        kept: earlier.clone(),
                        unreachable: later.clone(),
                    });
                } else if is_strict_prefix(&earlier.pattern, &later.pattern) {
                    overlaps.push(RuleOverlap::Shadowed {
                        by: earlier.clone(),
                        shadowed: later.clone(),
                    });
                }
            }
        }

        overlaps
    }

    /// Number of rule specs tracked.
    pub fn total_specs(&self) -> usize {
        self.specs.len()
    }
}

fn is_strict_prefix<T: PartialEq>(shorter: &[T], longer: &[T]) -> bool {
    shorter.len() < longer.len() && longer[..shorter.len()] == *shorter
}
