//! src/core/matcher.rs
//!
//! Subsequence matcher over a buffer snapshot
//!
//! The matcher evaluates a snapshot against every registered rule at every
//! possible starting offset and returns the first action found, giving a
//! deterministic precedence:
//! - matches starting earlier in the buffer beat later ones
//! - at the same start offset, registration order breaks the tie
//!
//! It also provides the gatekeeper predicate (`can_start`): a cheap
//! pre-filter letting the engine discard sequences whose oldest token
//! cannot open any rule, before any matching cost is paid.

use crate::core::rules::ComboRule;
use crate::core::types::{ComboAction, CommandToken};

/// Evaluates buffer snapshots against an ordered rule list.
///
/// Rules are fixed at construction; registration order is significant
/// (see module docs). The matcher is stateless between calls.
#[derive(Debug)]
pub struct ComboMatcher {
    rules: Vec<ComboRule>,
    minimum_combo_length: usize,
}

impl ComboMatcher {
    /// Creates a matcher over `rules` in registration order.
    ///
    /// Snapshots shorter than `minimum_combo_length` are rejected without
    /// scanning. Rule-length validation against the buffer bound happens
    /// in the engine constructor, before a matcher is built.
    pub fn new(rules: Vec<ComboRule>, minimum_combo_length: usize) -> Self {
        Self {
            rules,
            minimum_combo_length,
        }
    }

    /// The registered rules, in registration order.
    pub fn rules(&self) -> &[ComboRule] {
        &self.rules
    }

    /// Gatekeeper: true when `token` can open at least one rule.
    pub fn can_start(&self, token: CommandToken) -> bool {
        self.rules.iter().any(|rule| rule.can_start(token))
    }

    /// Scans `snapshot` for the first matching rule.
    ///
    /// Outer loop walks start offsets from the oldest token forward (the
    /// inclusive upper bound yields an empty tail, which no rule of length
    /// ≥ 1 can match); inner loop tries rules in registration order. The
    /// first hit wins.
    pub fn try_match(&self, snapshot: &[CommandToken]) -> Option<&ComboAction> {
        if snapshot.len() < self.minimum_combo_length {
            return None;
        }

        for start_index in 0..=snapshot.len() {
            let suffix = &snapshot[start_index..];
            for rule in &self.rules {
                if rule.matches_head(suffix) {
                    return Some(rule.action());
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::builtin_rules;
    use crate::core::types::CommandToken::*;

    fn matcher() -> ComboMatcher {
        ComboMatcher::new(builtin_rules(), 2)
    }

    #[test]
    fn test_below_minimum_length_never_matches() {
        let m = matcher();

        assert!(m.try_match(&[]).is_none());
        assert!(m.try_match(&[X]).is_none());
        assert!(m.try_match(&[Up]).is_none());
    }

    #[test]
    fn test_match_at_offset_zero() {
        let m = matcher();

        let action = m.try_match(&[X, X, Y]);
        assert_eq!(action.map(|a| a.id.as_str()), Some("dash_attack"));
    }

    #[test]
    fn test_match_mid_buffer() {
        let m = matcher();

        // Noise before the pattern: match found at a later offset
        let action = m.try_match(&[A, A, Up, B]);
        assert_eq!(action.map(|a| a.id.as_str()), Some("jump_kick"));
    }

    #[test]
    fn test_no_match_has_no_effect() {
        let m = matcher();

        assert!(m.try_match(&[A, A, A, A]).is_none());
        assert!(m.try_match(&[X, Y, X, Y]).is_none());
    }

    #[test]
    fn test_gatekeeper_accepts_rule_openers_only() {
        let m = matcher();

        assert!(m.can_start(X)); // opens dash_attack
        assert!(m.can_start(Up)); // opens jump_kick
        assert!(!m.can_start(A));
        assert!(!m.can_start(Y));
        assert!(!m.can_start(B));
    }
}
