//! Submission rate limiting.
//!
//! The limiter is an explicit collaborator: the caller supplies the current
//! instant and the previous state, and admission returns the updated state
//! instead of mutating anything shared. Like the validation layer, this is a
//! UX affordance; the backend enforces its own limits.

use std::time::{Duration, Instant};

/// Sliding-window rate limiter over submission timestamps.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    window: Duration,
    max_events: usize,
}

/// Timestamps of admitted events still inside the window.
#[derive(Debug, Clone, Default)]
pub struct RateLimiterState {
    timestamps: Vec<Instant>,
}

impl RateLimiterState {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl RateLimiter {
    pub fn new(window: Duration, max_events: usize) -> Self {
        Self { window, max_events }
    }

    pub fn window_secs(&self) -> u64 {
        self.window.as_secs()
    }

    /// Decide whether an event at `now` is admitted. Expired timestamps are
    /// dropped, then the event is recorded only if the window has room.
    pub fn admit(&self, state: &RateLimiterState, now: Instant) -> (RateLimiterState, bool) {
        let mut timestamps: Vec<Instant> = state
            .timestamps
            .iter()
            .copied()
            .filter(|t| now.saturating_duration_since(*t) < self.window)
            .collect();

        if timestamps.len() >= self.max_events {
            return (RateLimiterState { timestamps }, false);
        }

        timestamps.push(now);
        (RateLimiterState { timestamps }, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_up_to_capacity() {
        let limiter = RateLimiter::new(Duration::from_secs(10), 3);
        let now = Instant::now();

        let mut state = RateLimiterState::default();
        for _ in 0..3 {
            let (next, admitted) = limiter.admit(&state, now);
            assert!(admitted);
            state = next;
        }

        let (state, admitted) = limiter.admit(&state, now);
        assert!(!admitted);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_window_expiry_frees_capacity() {
        let limiter = RateLimiter::new(Duration::from_secs(10), 1);
        let start = Instant::now();

        let (state, admitted) = limiter.admit(&RateLimiterState::default(), start);
        assert!(admitted);

        let (_, admitted) = limiter.admit(&state, start + Duration::from_secs(5));
        assert!(!admitted);

        let (state, admitted) = limiter.admit(&state, start + Duration::from_secs(11));
        assert!(admitted);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_admit_does_not_mutate_input_state() {
        let limiter = RateLimiter::new(Duration::from_secs(10), 2);
        let now = Instant::now();
        let state = RateLimiterState::default();

        let (next, _) = limiter.admit(&state, now);
        assert!(state.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_rejection_still_prunes_expired_entries() {
        let limiter = RateLimiter::new(Duration::from_secs(10), 1);
        let start = Instant::now();

        let (state, _) = limiter.admit(&RateLimiterState::default(), start);
        // Second event in-window is rejected but the expired prune still ran
        let (state, admitted) = limiter.admit(&state, start + Duration::from_secs(1));
        assert!(!admitted);
        assert_eq!(state.len(), 1);
    }
}
