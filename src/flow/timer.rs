// SPDX-License-Identifier: MPL-2.0
//! Deadline-based timers driven by an external clock.
//!
//! Nothing here sleeps or spawns: the owner feeds the current `Instant` in
//! through `fire_if_due`/`poll` (from the app's tick subscription, or
//! directly in tests). A disarmed timer is inert, so dropping or cancelling
//! it can never leave a callback behind.

use std::time::{Duration, Instant};

/// One-shot timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeout {
    deadline: Option<Instant>,
}

impl Timeout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarms the timer. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the deadline exactly once when it has been reached, and
    /// disarms the timer. The deadline, not `now`, is what the owner should
    /// treat as the firing time.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.deadline.take(),
            _ => None,
        }
    }
}

/// Periodic timer with a fixed schedule.
///
/// The schedule only depends on the period: re-applying the same period does
/// not restart the countdown, so the owner can call [`Interval::set_period`]
/// on every state change without disturbing the rhythm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    period: Option<Duration>,
    next_due: Option<Instant>,
}

impl Interval {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms, re-arms or disarms the interval.
    ///
    /// - same period as now: no-op
    /// - different period: the first tick is due one period after `now`
    /// - `None` or a zero period: disarmed
    pub fn set_period(&mut self, period: Option<Duration>, now: Instant) {
        let period = period.filter(|p| !p.is_zero());
        if period == self.period {
            return;
        }
        self.period = period;
        self.next_due = period.map(|p| now + p);
    }

    /// Disarms the interval.
    pub fn cancel(&mut self) {
        self.period = None;
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns `true` if a tick is due at `now`.
    ///
    /// At most one tick is reported per call; periods missed while the clock
    /// was not polled are skipped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(period), Some(due)) = (self.period, self.next_due) else {
            return false;
        };
        if now < due {
            return false;
        }

        let skipped = now.duration_since(due).as_nanos() / period.as_nanos();
        let next = u32::try_from(skipped + 1)
            .ok()
            .and_then(|periods| period.checked_mul(periods))
            .and_then(|offset| due.checked_add(offset))
            .unwrap_or(now + period);
        self.next_due = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn timeout_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timeout = Timeout::new();
        timeout.schedule(start, MS(250));

        assert_eq!(timeout.fire_if_due(start + MS(249)), None);
        assert_eq!(timeout.fire_if_due(start + MS(250)), Some(start + MS(250)));
        assert_eq!(timeout.fire_if_due(start + MS(1000)), None);
        assert!(!timeout.is_armed());
    }

    #[test]
    fn late_poll_reports_the_deadline() {
        let start = Instant::now();
        let mut timeout = Timeout::new();
        timeout.schedule(start, MS(250));

        assert_eq!(timeout.fire_if_due(start + MS(349)), Some(start + MS(250)));
    }

    #[test]
    fn timeout_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timeout = Timeout::new();
        timeout.schedule(start, MS(100));
        timeout.schedule(start + MS(50), MS(100));

        assert_eq!(timeout.fire_if_due(start + MS(120)), None);
        assert!(timeout.fire_if_due(start + MS(150)).is_some());
    }

    #[test]
    fn timeout_cancel_is_idempotent() {
        let start = Instant::now();
        let mut timeout = Timeout::new();
        timeout.schedule(start, MS(100));

        assert!(timeout.cancel());
        assert!(!timeout.cancel());
        assert_eq!(timeout.fire_if_due(start + MS(500)), None);
    }

    #[test]
    fn interval_ticks_once_per_period() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(MS(3000)), start);

        let ticks = (1..=90)
            .map(|i| start + MS(i * 100))
            .filter(|now| interval.poll(*now))
            .count();
        assert_eq!(ticks, 3);
    }

    #[test]
    fn interval_same_period_keeps_schedule() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(MS(3000)), start);
        interval.set_period(Some(MS(3000)), start + MS(2000));

        assert_eq!(interval.next_due(), Some(start + MS(3000)));
        assert!(interval.poll(start + MS(3000)));
    }

    #[test]
    fn interval_new_period_restarts_countdown() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(MS(3000)), start);
        interval.set_period(Some(MS(1000)), start + MS(2000));

        assert_eq!(interval.next_due(), Some(start + MS(3000)));
        assert_eq!(interval.period(), Some(MS(1000)));
    }

    #[test]
    fn interval_disarmed_by_none_or_zero() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(MS(100)), start);
        interval.set_period(None, start);
        assert!(!interval.is_armed());
        assert!(!interval.poll(start + MS(1000)));

        interval.set_period(Some(Duration::ZERO), start);
        assert!(!interval.is_armed());
    }

    #[test]
    fn interval_coalesces_missed_periods() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(MS(1000)), start);

        assert!(interval.poll(start + MS(5500)));
        assert!(!interval.poll(start + MS(5600)));
        assert_eq!(interval.next_due(), Some(start + MS(6000)));
    }

    #[test]
    fn long_stall_skips_to_the_next_boundary() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(Duration::from_nanos(1)), start);

        let later = start + Duration::from_secs(3600);
        assert!(interval.poll(later));
        assert_eq!(interval.next_due(), Some(later + Duration::from_nanos(1)));
    }

    #[test]
    fn poll_exactly_on_a_boundary_schedules_the_following_one() {
        let start = Instant::now();
        let mut interval = Interval::new();
        interval.set_period(Some(MS(1000)), start);

        assert!(interval.poll(start + MS(3000)));
        assert_eq!(interval.next_due(), Some(start + MS(4000)));
    }
}
