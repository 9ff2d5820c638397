//! Virtual-time timers.
//!
//! The engine never sleeps or registers callbacks. Instead it owns two
//! timer values and a clock, and the host moves the clock forward. A
//! [`Timer`] holds at most one pending one-shot action (arming it again
//! replaces the old one); an [`Interval`] fires on a fixed period until
//! cancelled.
//!
//! A zero-delay timer is due immediately, so a chain of zero-delay steps
//! runs to completion inside a single advance. Breaking an endless chain
//! is the owner's job.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending<A> {
    at: Duration,
    action: A,
}

/// A one-shot timer with a single pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer<A> {
    pending: Option<Pending<A>>,
}

impl<A: Copy> Timer<A> {
    /// An unarmed timer.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer, replacing anything already pending.
    pub fn arm(&mut self, now: Duration, delay: Duration, action: A) {
        self.pending = Some(Pending {
            at: now.saturating_add(delay),
            action,
        });
    }

    /// Drop the pending action, if any.
    #[inline]
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an action is pending.
    #[inline]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending action is scheduled to run.
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.at)
    }

    /// The deadline, if it falls at or before `target`.
    #[inline]
    pub fn due(&self, target: Duration) -> Option<Duration> {
        self.pending.map(|p| p.at).filter(|at| *at <= target)
    }

    /// Remove and return the pending action with its deadline.
    #[inline]
    pub fn take(&mut self) -> Option<(Duration, A)> {
        self.pending.take().map(|p| (p.at, p.action))
    }
}

impl<A: Copy> Default for Timer<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// A recurring timer with a fixed, non-zero period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    next: Option<Duration>,
    period: Duration,
}

impl Interval {
    /// Start an interval whose first tick is one period after `now`.
    pub fn start(now: Duration, period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "interval period must be non-zero");
        Self {
            next: Some(now.saturating_add(period)),
            period,
        }
    }

    /// Time of the next tick.
    #[inline]
    pub const fn deadline(&self) -> Option<Duration> {
        self.next
    }

    /// The next tick, if it falls at or before `target`.
    #[inline]
    pub fn due(&self, target: Duration) -> Option<Duration> {
        self.next.filter(|at| *at <= target)
    }

    /// Consume every tick at or before `end` in one step.
    ///
    /// Returns how many ticks fired and when the last one was, or `None`
    /// if nothing was due. The cost does not depend on the tick count.
    pub fn fire_until(&mut self, end: Duration) -> Option<(u128, Duration)> {
        let first = self.due(end)?;
        let period = self.period.as_nanos().max(1);
        let skipped = (end - first).as_nanos() / period;
        let last = first.saturating_add(duration_from_nanos(skipped * period));
        self.next = Some(last.saturating_add(self.period));
        Some((skipped + 1, last))
    }

    /// Stop ticking.
    #[inline]
    pub fn cancel(&mut self) {
        self.next = None;
    }
}

/// `Duration::from_nanos` for spans wider than `u64` nanoseconds, saturating.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    match u64::try_from(nanos / NANOS_PER_SEC) {
        // The remainder is below one second, so it fits a u32.
        Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}
