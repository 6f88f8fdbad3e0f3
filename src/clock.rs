//! Timestamp sources for last-writer-wins resolution.
//!
//! A dictionary replica never generates time itself; it is constructed with a
//! [`TimestampSource`] and asks it for a fresh timestamp on every local
//! mutation. The source only has to produce totally ordered `u64` values.
//! Monotonicity is not required for correctness: a source that goes backward
//! or repeats merely produces more timestamp ties, which the tie-break rules
//! resolve deterministically.

/// A source of logical timestamps, injected at dictionary construction.
///
/// The dictionary never inspects a timestamp beyond its ordering.
pub trait TimestampSource {
    /// Produce the next timestamp.
    fn now(&mut self) -> u64;
}

/// A strictly monotonic logical counter.
///
/// Starts at 0 and increments on every call. This is the deterministic
/// source to reach for in tests and single-process use.
///
/// # Example
///
/// ```
/// use lww_dict::clock::{CounterClock, TimestampSource};
///
/// let mut clock = CounterClock::new();
/// assert_eq!(clock.now(), 0);
/// assert_eq!(clock.now(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterClock {
    next: u64,
}

impl CounterClock {
    /// Create a counter clock starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Create a counter clock starting at `first`.
    ///
    /// Useful for scripting several replicas against one logical timeline.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl TimestampSource for CounterClock {
    fn now(&mut self) -> u64 {
        let timestamp = self.next;
        self.next += 1;
        timestamp
    }
}

/// A clock frozen at a single timestamp.
///
/// Every call returns the same value, so every local operation ties with
/// every other. Exists to exercise the tie-break paths deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedClock {
    timestamp: u64,
}

impl FixedClock {
    /// Create a clock that always reports `timestamp`.
    #[must_use]
    pub fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }
}

impl TimestampSource for FixedClock {
    fn now(&mut self) -> u64 {
        self.timestamp
    }
}

/// Adapts any `FnMut() -> u64` closure into a [`TimestampSource`].
///
/// A blanket impl directly over closures would conflict with the concrete
/// clock impls under coherence, so closures go through this adapter instead.
///
/// # Example
///
/// ```
/// use lww_dict::clock::{FnClock, TimestampSource};
///
/// let mut next = 0u64;
/// let mut clock = FnClock::new(move || {
///     let timestamp = next;
///     next += 1;
///     timestamp
/// });
/// assert_eq!(clock.now(), 0);
/// assert_eq!(clock.now(), 1);
/// ```
#[derive(Clone)]
pub struct FnClock<F>(F);

impl<F: FnMut() -> u64> FnClock<F> {
    /// Wrap a closure as a timestamp source.
    pub fn new(source: F) -> Self {
        Self(source)
    }
}

impl<F: FnMut() -> u64> TimestampSource for FnClock<F> {
    fn now(&mut self) -> u64 {
        (self.0)()
    }
}

/// Wall-clock time in microseconds since the Unix epoch.
///
/// Not monotonic across clock adjustments; two calls in the same microsecond
/// tie. Requires the `std` feature.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimestampSource for SystemClock {
    fn now(&mut self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_micros() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_clock_is_strictly_increasing() {
        let mut clock = CounterClock::new();
        let a = clock.now();
        let b = clock.now();
        let c = clock.now();
        assert!(a < b && b < c);
    }

    #[test]
    fn counter_clock_starts_where_told() {
        let mut clock = CounterClock::starting_at(7);
        assert_eq!(clock.now(), 7);
        assert_eq!(clock.now(), 8);
    }

    #[test]
    fn fn_clock_calls_through_to_the_closure() {
        let mut remaining = 3u64;
        let mut clock = FnClock::new(move || {
            remaining -= 1;
            remaining
        });
        assert_eq!(clock.now(), 2);
        assert_eq!(clock.now(), 1);
    }

    #[test]
    fn fixed_clock_never_advances() {
        let mut clock = FixedClock::new(42);
        assert_eq!(clock.now(), 42);
        assert_eq!(clock.now(), 42);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_nonzero() {
        let mut clock = SystemClock;
        assert!(clock.now() > 0);
    }
}
