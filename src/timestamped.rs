use crate::Crdt;

/// A value paired with the logical timestamp of its last accepted write.
///
/// An update is accepted only if its timestamp is strictly later, or ties the
/// current timestamp while the new value ranks higher in `V`'s total order.
/// The winner of any chain of merges is therefore the single pair with the
/// globally maximal `(timestamp, value)` among everything merged, no matter
/// how the merges were grouped or repeated.
///
/// The value order is purely a tie-break device: deterministic, content
/// derived, and otherwise arbitrary. It says nothing about recency or
/// priority.
///
/// # Example
///
/// ```
/// use lww_dict::TimestampedValue;
///
/// let mut held = TimestampedValue::new("draft", 1);
/// assert!(held.set("final", 2));   // later timestamp wins
/// assert!(!held.set("stale", 0));  // earlier timestamp loses
/// assert_eq!(*held.value(), "final");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimestampedValue<V> {
    value: V,
    timestamp: u64,
}

impl<V> TimestampedValue<V> {
    /// Create a timestamped value from its first observation.
    pub fn new(value: V, timestamp: u64) -> Self {
        Self { value, timestamp }
    }

    /// Get the held value.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get the timestamp of the last accepted write.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl<V: Ord> TimestampedValue<V> {
    /// Offer a new observation, accepting it only if it dominates.
    ///
    /// The offer wins if `timestamp` is strictly later than the held one, or
    /// equal while `value` ranks higher than the held value. Anything else is
    /// a no-op. Returns whether the offer was accepted.
    ///
    /// Ranking the value rather than arrival order is what lets two replicas
    /// that apply the same pair of same-timestamp writes in opposite orders
    /// end up holding the identical winner.
    pub fn set(&mut self, value: V, timestamp: u64) -> bool {
        let wins = timestamp > self.timestamp
            || (timestamp == self.timestamp && value > self.value);
        if wins {
            self.value = value;
            self.timestamp = timestamp;
        }
        wins
    }
}

impl<V: Ord + Clone> Crdt for TimestampedValue<V> {
    fn merge(&mut self, other: &Self) {
        self.set(other.value.clone(), other.timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(a: &TimestampedValue<i32>, b: &TimestampedValue<i32>) -> TimestampedValue<i32> {
        let mut out = a.clone();
        out.merge(b);
        out
    }

    #[test]
    fn new_holds_value_and_timestamp() {
        let held = TimestampedValue::new(1000, 1);
        assert_eq!(*held.value(), 1000);
        assert_eq!(held.timestamp(), 1);
    }

    #[test]
    fn later_timestamp_updates() {
        let mut held = TimestampedValue::new(1000, 1);
        assert!(held.set(2000, 2));
        assert_eq!(*held.value(), 2000);
        assert_eq!(held.timestamp(), 2);
    }

    #[test]
    fn earlier_timestamp_is_rejected() {
        let mut held = TimestampedValue::new(1000, 10);
        assert!(!held.set(2000, 5));
        assert_eq!(*held.value(), 1000);
        assert_eq!(held.timestamp(), 10);
    }

    #[test]
    fn equal_timestamp_higher_value_wins() {
        let mut held = TimestampedValue::new(1000, 10);
        assert!(held.set(2000, 10));
        assert_eq!(*held.value(), 2000);

        // the lower-ranked value loses the same tie
        assert!(!held.set(1500, 10));
        assert_eq!(*held.value(), 2000);
    }

    #[test]
    fn merge_takes_later_observation() {
        let a = TimestampedValue::new(1000, 10);
        let b = TimestampedValue::new(2000, 20);
        let out = merged(&a, &b);
        assert_eq!(*out.value(), 2000);
        assert_eq!(out.timestamp(), 20);
    }

    #[test]
    fn merge_is_commutative() {
        let a = TimestampedValue::new(1000, 10);
        let b = TimestampedValue::new(2000, 20);
        assert_eq!(merged(&a, &b), merged(&b, &a));
    }

    #[test]
    fn merge_is_commutative_on_timestamp_tie() {
        let a = TimestampedValue::new(1000, 10);
        let b = TimestampedValue::new(2000, 10);
        assert_eq!(merged(&a, &b), merged(&b, &a));
        assert_eq!(*merged(&a, &b).value(), 2000);
    }

    #[test]
    fn merge_is_associative() {
        let a = TimestampedValue::new(1000, 10);
        let b = TimestampedValue::new(2000, 20);
        let c = TimestampedValue::new(3000, 30);

        let left = merged(&merged(&a, &b), &c);
        let right = merged(&a, &merged(&b, &c));
        assert_eq!(left, right);
    }

    #[test]
    fn merge_is_idempotent() {
        let a = TimestampedValue::new(1000, 10);
        let b = TimestampedValue::new(2000, 20);

        assert_eq!(merged(&a, &a), a);

        let once = merged(&a, &b);
        assert_eq!(merged(&once, &b), once);
    }
}
