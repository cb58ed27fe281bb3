//! src/core/rules.rs
//!
//! Combo rule definitions
//!
//! A rule is a pure, stateless description of one recognisable pattern:
//! a start filter (can this token open the combo?), an exact-length match
//! predicate over a token window, and the action produced on a match.
//!
//! Two forms exist:
//! - [`ComboRule`]: the executable form held by the matcher. Predicates are
//!   boxed closures so exotic rules (e.g. "any direction then B") can be
//!   expressed without touching the matcher.
//! - [`RuleSpec`]: the data-only form produced by the rules-file parser and
//!   consumed by overlap analysis; converts into a `ComboRule` via
//!   [`ComboRule::exact`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{ComboAction, CommandToken};

type StartFilter = Box<dyn Fn(CommandToken) -> bool + Send + Sync>;
type MatchPredicate = Box<dyn Fn(&[CommandToken]) -> bool + Send + Sync>;

/// One recognisable combo pattern.
///
/// Immutable after construction and registered once; the matcher holds
/// rules in registration order, which doubles as the precedence tie-break
/// when two rules match at the same start offset.
pub struct ComboRule {
    name: String,
    length: usize,
    start: StartFilter,
    predicate: MatchPredicate,
    action: ComboAction,
}

impl ComboRule {
    /// Builds a rule from explicit predicates.
    ///
    /// `predicate` is only ever invoked with exactly `length` tokens; the
    /// matcher guards shorter suffixes before calling it.
    pub fn new<S, M>(name: &str, length: usize, start: S, predicate: M, action: ComboAction) -> Self
    where
        S: Fn(CommandToken) -> bool + Send + Sync + 'static,
        M: Fn(&[CommandToken]) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            length,
            start: Box::new(start),
            predicate: Box::new(predicate),
            action,
        }
    }

    /// Builds a rule matching a literal token sequence.
    ///
    /// The start filter accepts the first token of the pattern; the match
    /// predicate requires the window to equal the pattern exactly. This is
    /// the common case and covers every rule a rules file can express.
    pub fn exact(name: &str, pattern: &[CommandToken], action: ComboAction) -> Self {
        let first = pattern.first().copied();
        let expected: Vec<CommandToken> = pattern.to_vec();

        Self::new(
            name,
            pattern.len(),
            move |token| first == Some(token),
            move |window| window == expected.as_slice(),
            action,
        )
    }

    /// Rule name, for reports and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tokens this rule consumes. Fixed at construction.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The action produced when this rule matches.
    pub fn action(&self) -> &ComboAction {
        &self.action
    }

    /// True when `token` can open this combo. Used by the gatekeeper to
    /// discard sequences that can never match before matching cost is paid.
    pub fn can_start(&self, token: CommandToken) -> bool {
        (self.start)(token)
    }

    /// Tests this rule against the head of `suffix`.
    ///
    /// A suffix shorter than the rule's length can never match; otherwise
    /// the predicate sees exactly the first `length` tokens.
    pub fn matches_head(&self, suffix: &[CommandToken]) -> bool {
        if suffix.len() < self.length {
            return false;
        }
        (self.predicate)(&suffix[..self.length])
    }
}

impl fmt::Debug for ComboRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboRule")
            .field("name", &self.name)
            .field("length", &self.length)
            .field("action", &self.action)
            .finish()
    }
}

/// Data-only rule definition: a literal pattern plus the action it fires.
///
/// This is what the rules-file parser produces and what overlap analysis
/// inspects (predicates are opaque; patterns are not).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RuleSpec {
    /// Rule name (e.g. "dash_attack")
    pub name: String,

    /// The literal token sequence, oldest first
    pub pattern: Vec<CommandToken>,

    /// Action dispatched on a match
    pub action: ComboAction,
}

impl RuleSpec {
    /// Converts into the executable rule form.
    pub fn into_rule(self) -> ComboRule {
        ComboRule::exact(&self.name, &self.pattern, self.action)
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = self
            .pattern
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} = {}", self.name, pattern)
    }
}

/// The built-in rule set, in registration order:
/// X X Y → dash_attack, then Up B → jump_kick.
pub fn builtin_rules() -> Vec<ComboRule> {
    use CommandToken::{Up, B, X, Y};

    vec![
        ComboRule::exact("dash_attack", &[X, X, Y], ComboAction::new("dash_attack")),
        ComboRule::exact("jump_kick", &[Up, B], ComboAction::new("jump_kick")),
    ]
}
