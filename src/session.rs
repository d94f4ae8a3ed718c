//! Per-session usage budget.

use std::time::{Duration, Instant};

/// Default session length: two hours.
pub const DEFAULT_SESSION_LIMIT: Duration = Duration::from_secs(7200);

/// Wall-clock budget for one studio session.
///
/// The clock starts when the budget is created. Remaining time saturates at
/// zero rather than going negative.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hero_shield::SessionBudget;
///
/// let budget = SessionBudget::new(Duration::from_secs(60));
/// assert!(!budget.is_expired());
/// assert!(budget.remaining() <= Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SessionBudget {
    started: Instant,
    limit: Duration,
}

impl SessionBudget {
    /// Starts a budget of `limit` now.
    pub fn new(limit: Duration) -> Self {
        Self::starting_at(Instant::now(), limit)
    }

    /// Starts a budget of `limit` at an explicit instant.
    pub fn starting_at(started: Instant, limit: Duration) -> Self {
        Self { started, limit }
    }

    /// Returns the configured limit.
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Returns time elapsed since the session started, as of `now`.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Returns the time left as of `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.limit.saturating_sub(self.elapsed_at(now))
    }

    /// Returns the time left.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    /// Returns `true` once no time is left.
    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

impl Default for SessionBudget {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down() {
        let start = Instant::now();
        let budget = SessionBudget::starting_at(start, Duration::from_secs(100));

        assert_eq!(budget.remaining_at(start), Duration::from_secs(100));
        assert_eq!(
            budget.remaining_at(start + Duration::from_secs(30)),
            Duration::from_secs(70)
        );
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let start = Instant::now();
        let budget = SessionBudget::starting_at(start, Duration::from_secs(10));
        assert_eq!(
            budget.remaining_at(start + Duration::from_secs(3600)),
            Duration::ZERO
        );
    }

    #[test]
    fn zero_limit_is_expired_immediately() {
        let budget = SessionBudget::new(Duration::ZERO);
        assert!(budget.is_expired());
    }

    #[test]
    fn default_is_two_hours() {
        let budget = SessionBudget::default();
        assert_eq!(budget.limit(), Duration::from_secs(2 * 60 * 60));
        assert!(!budget.is_expired());
    }
}
