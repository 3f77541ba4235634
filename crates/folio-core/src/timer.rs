//! Time sources and timer values.
//!
//! Timers here are plain data: a deadline plus the rule for when it fires.
//! Whoever owns the timer decides when to poll it, so dropping the owner
//! cancels the timer and tests can drive everything with [`ManualClock`].

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Recurring task with a fixed cadence.
///
/// Fire times are `start + k * period`; polling late fires once and skips
/// the missed slots, and nothing outside [`Ticker::poll`] moves the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    period: Duration,
    next_due: Duration,
}

impl Ticker {
    pub fn start(period: Duration, now: Duration) -> Self {
        debug_assert!(!period.is_zero(), "ticker period must be non-zero");
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    /// True if a fire is due at `now`.
    ///
    /// A late poll fires once; the missed slots are skipped and the next
    /// fire stays on the original schedule.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.period.is_zero() || self.next_due > now {
            return false;
        }
        let period = self.period.as_nanos();
        let slots = (now - self.next_due).as_nanos() / period + 1;
        let ahead = u64::try_from(period.saturating_mul(slots)).unwrap_or(u64::MAX);
        self.next_due = self.next_due.saturating_add(Duration::from_nanos(ahead));
        true
    }
}

/// One-shot deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Duration,
}

impl Deadline {
    pub fn after(delay: Duration, now: Duration) -> Self {
        Self { at: now + delay }
    }

    pub fn at(&self) -> Duration {
        self.at
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.at
    }
}

/// Trailing-edge debounce: fires once, `wait` after the last call
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    pending: Option<Deadline>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a call, pushing the fire time out to `now + wait`
    pub fn call(&mut self, now: Duration) {
        self.pending = Some(Deadline::after(self.wait, now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True exactly once per burst of calls, when the trailing edge is due
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending {
            Some(deadline) if deadline.is_due(now) => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
