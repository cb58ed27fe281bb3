//! src/core/buffer.rs
//!
//! Bounded input buffer with combo timing state
//!
//! This module owns the FIFO of recent command tokens and the two running
//! timers that make combos time-sensitive:
//! - `elapsed_since_first`: time since the oldest buffered token arrived
//! - `elapsed_since_last`: time since the most recent insertion
//!
//! The buffer applies the mechanical pieces of queue policy (trim, timeout,
//! staleness query, clear); the ordered decision-making that needs rule
//! knowledge lives in [`crate::core::engine::ComboEngine`].

use std::collections::VecDeque;

use crate::core::types::CommandToken;

/// Bounded FIFO of recent command tokens plus the two combo timers.
///
/// Insertion order is significant (oldest first). Length never exceeds
/// `max_length`: the oldest token is evicted before a new one is inserted.
/// Both timers are zeroed whenever the buffer empties, so an empty buffer
/// always reads as freshly reset.
#[derive(Debug)]
pub struct ComboBuffer {
    tokens: VecDeque<CommandToken>,
    max_length: usize,
    elapsed_since_first: f32,
    elapsed_since_last: f32,
}

impl ComboBuffer {
    /// Creates an empty buffer bounded by `max_length` tokens.
    pub fn new(max_length: usize) -> Self {
        Self {
            tokens: VecDeque::with_capacity(max_length),
            max_length,
            elapsed_since_first: 0.0,
            elapsed_since_last: 0.0,
        }
    }

    /// Number of buffered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens are buffered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The oldest buffered token, if any. This is the token the gatekeeper
    /// inspects: a sequence that cannot start any rule is cleared wholesale.
    pub fn front(&self) -> Option<CommandToken> {
        self.tokens.front().copied()
    }

    /// Time since the oldest buffered token arrived. Only meaningful while
    /// the buffer is non-empty; reads zero otherwise.
    pub fn elapsed_since_first(&self) -> f32 {
        self.elapsed_since_first
    }

    /// Time since the most recent insertion.
    pub fn elapsed_since_last(&self) -> f32 {
        self.elapsed_since_last
    }

    /// Evicts the oldest token when the buffer is at capacity.
    ///
    /// Keeps the queue focused on the most recent inputs and bounds the
    /// work the matcher has to do per insertion.
    pub fn trim_if_full(&mut self) {
        if self.tokens.len() >= self.max_length {
            self.tokens.pop_front();
        }
    }

    /// Credits time back to the window by reducing `elapsed_since_first`.
    /// The result may go negative; the timeout check only compares against
    /// the window upper bound, so a negative value simply means extra slack.
    pub fn extend_window(&mut self, credit: f32) {
        self.elapsed_since_first -= credit;
    }

    /// Appends a token and re-anchors the timers.
    ///
    /// The first token into an empty buffer zeroes `elapsed_since_first`;
    /// every insertion zeroes `elapsed_since_last`.
    pub fn push(&mut self, token: CommandToken) {
        self.tokens.push_back(token);

        if self.tokens.len() == 1 {
            self.elapsed_since_first = 0.0;
        }

        self.elapsed_since_last = 0.0;
    }

    /// Ages the buffer by `delta_seconds`.
    ///
    /// No-op while empty. Returns `true` when the sequence exceeded
    /// `max_window` and was abandoned (strictly greater, so a sequence
    /// completing exactly at the window boundary still counts).
    pub fn tick(&mut self, delta_seconds: f32, max_window: f32) -> bool {
        if self.tokens.is_empty() {
            return false;
        }

        self.elapsed_since_first += delta_seconds;
        self.elapsed_since_last += delta_seconds;

        if self.elapsed_since_first > max_window {
            self.clear();
            return true;
        }

        false
    }

    /// True when the gap since the last insertion has reached
    /// `minimum_gap`: the next input arrives too late to extend the
    /// current sequence.
    pub fn is_stale(&self, minimum_gap: f32) -> bool {
        self.elapsed_since_last >= minimum_gap
    }

    /// Empties the buffer and zeroes both timers. Idempotent.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.elapsed_since_first = 0.0;
        self.elapsed_since_last = 0.0;
    }

    /// Read-only ordered view of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<CommandToken> {
        self.tokens.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CommandToken::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = ComboBuffer::new(6);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.front(), None);
        assert_eq!(buffer.elapsed_since_first(), 0.0);
        assert_eq!(buffer.elapsed_since_last(), 0.0);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);
        buffer.push(Y);
        buffer.push(B);

        assert_eq!(buffer.snapshot(), vec![X, Y, B]);
        assert_eq!(buffer.front(), Some(X));
    }

    #[test]
    fn test_trim_evicts_oldest() {
        let mut buffer = ComboBuffer::new(3);
        for token in [X, Y, A] {
            buffer.trim_if_full();
            buffer.push(token);
        }
        assert_eq!(buffer.len(), 3);

        buffer.trim_if_full();
        buffer.push(B);

        assert_eq!(buffer.snapshot(), vec![Y, A, B]);
    }

    #[test]
    fn test_tick_noop_when_empty() {
        let mut buffer = ComboBuffer::new(6);
        let cleared = buffer.tick(10.0, 0.5);

        assert!(!cleared);
        assert_eq!(buffer.elapsed_since_first(), 0.0);
        assert_eq!(buffer.elapsed_since_last(), 0.0);
    }

    #[test]
    fn test_tick_ages_both_timers() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);
        buffer.tick(0.1, 0.5);
        buffer.tick(0.1, 0.5);

        assert!((buffer.elapsed_since_first() - 0.2).abs() < f32::EPSILON);
        assert!((buffer.elapsed_since_last() - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tick_timeout_is_strictly_greater() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);

        // Exactly at the window boundary: still alive
        assert!(!buffer.tick(0.5, 0.5));
        assert_eq!(buffer.len(), 1);

        // Past the boundary: abandoned
        assert!(buffer.tick(0.01, 0.5));
        assert!(buffer.is_empty());
        assert_eq!(buffer.elapsed_since_first(), 0.0);
        assert_eq!(buffer.elapsed_since_last(), 0.0);
    }

    #[test]
    fn test_push_resets_last_timer_only() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);
        buffer.tick(0.2, 5.0);
        buffer.push(Y);

        assert!((buffer.elapsed_since_first() - 0.2).abs() < f32::EPSILON);
        assert_eq!(buffer.elapsed_since_last(), 0.0);
    }

    #[test]
    fn test_first_push_resets_first_timer() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);
        buffer.tick(0.3, 5.0);
        buffer.clear();
        buffer.push(Y);

        assert_eq!(buffer.elapsed_since_first(), 0.0);
    }

    #[test]
    fn test_staleness_threshold_inclusive() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);

        buffer.tick(0.49, 5.0);
        assert!(!buffer.is_stale(0.5));

        buffer.tick(0.01, 5.0);
        assert!(buffer.is_stale(0.5));
    }

    #[test]
    fn test_extend_window_may_go_negative() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);
        buffer.tick(0.1, 5.0);
        buffer.extend_window(0.5);

        assert!(buffer.elapsed_since_first() < 0.0);
        // Negative credit just means extra slack before timeout
        assert!(!buffer.tick(0.5, 0.5));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);
        buffer.tick(0.2, 5.0);

        buffer.clear();
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.elapsed_since_first(), 0.0);
        assert_eq!(buffer.elapsed_since_last(), 0.0);
    }

    #[test]
    fn test_snapshot_does_not_alias_buffer() {
        let mut buffer = ComboBuffer::new(6);
        buffer.push(X);

        let snap = buffer.snapshot();
        buffer.push(Y);

        assert_eq!(snap, vec![X]);
        assert_eq!(buffer.snapshot(), vec![X, Y]);
    }
}
