use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::clock::TimestampSource;
use crate::crdt::{Crdt, Dictionary};
use crate::timestamped::TimestampedValue;

/// A last-writer-wins element dictionary (LWW-Element-Dict).
///
/// A key-value mapping where each replica accepts local [`put`](Self::put)
/// and [`remove`](Self::remove) operations without coordination, and replicas
/// reconcile through [`Crdt::merge`]. Internally two tables are kept: an adds
/// table with the latest observed insertion per key, and a removes table with
/// the latest deletion timestamp per key (tombstones).
///
/// A key is present iff its add timestamp strictly exceeds its tombstone
/// timestamp; an exact tie counts as absent, so deletion wins ties. Equal-add
/// ties between replicas are broken by the value's own total order, which is
/// deterministic but otherwise arbitrary.
///
/// Timestamps come from the [`TimestampSource`] the replica is constructed
/// with. Equality compares the two tables only, never the clock.
///
/// A single replica is meant to be mutated by one logical actor at a time;
/// the only intended cross-replica interaction is `merge`.
///
/// # Example
///
/// ```
/// use lww_dict::prelude::*;
///
/// let mut this_device = LWWDictionary::new(CounterClock::new());
/// this_device.put("A", "Apple");
///
/// let mut other_device = LWWDictionary::new(CounterClock::new());
/// other_device.put("B", "Banana");
///
/// this_device.merge(&other_device);
/// assert_eq!(this_device.get(&"A"), Some(&"Apple"));
/// assert_eq!(this_device.get(&"B"), Some(&"Banana"));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LWWDictionary<K: Ord + Clone, V: Ord + Clone, S> {
    clock: S,
    adds: BTreeMap<K, TimestampedValue<V>>,
    removes: BTreeMap<K, u64>,
}

impl<K: Ord + Clone, V: Ord + Clone, S> PartialEq for LWWDictionary<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.adds == other.adds && self.removes == other.removes
    }
}

impl<K: Ord + Clone, V: Ord + Clone, S> Eq for LWWDictionary<K, V, S> {}

impl<K: Ord + Clone, V: Ord + Clone, S> LWWDictionary<K, V, S> {
    /// Create an empty dictionary drawing timestamps from `clock`.
    pub fn new(clock: S) -> Self {
        Self {
            clock,
            adds: BTreeMap::new(),
            removes: BTreeMap::new(),
        }
    }

    /// Get the value for `key`, or `None` if the key is not present.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        if self.contains(key) {
            self.adds.get(key).map(TimestampedValue::value)
        } else {
            None
        }
    }

    /// Check whether `key` is present.
    ///
    /// A key is present iff it has an add entry and either no tombstone or a
    /// tombstone strictly older than the add. The rule is evaluated from the
    /// raw tables every time, so it holds whether or not compaction has run.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        let added = match self.adds.get(key) {
            Some(entry) => entry,
            None => return false,
        };
        match self.removes.get(key) {
            None => true,
            Some(&tombstone) => tombstone < added.timestamp(),
        }
    }

    /// Get the number of present keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adds.keys().filter(|key| self.contains(key)).count()
    }

    /// Check whether no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over present entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.adds
            .iter()
            .filter(|(key, _)| self.contains(key))
            .map(|(key, added)| (key, added.value()))
    }

    /// Remove all entries from this replica, tombstones included.
    ///
    /// This is a local operation with no CRDT semantics: it is not
    /// timestamped and leaves nothing behind to merge. A replica that has not
    /// observed the clear will reintroduce any keys it independently holds on
    /// the next merge. Callers that need a replicated clear must instead
    /// record a tombstone per held key at the current timestamp.
    pub fn clear(&mut self) {
        self.adds.clear();
        self.removes.clear();
    }

    /// Drop whichever of `key`'s two entries the presence rule dominates.
    ///
    /// Purely a memory bound: queries and merge never rely on it having run.
    /// On a timestamp tie the add entry is dropped, keeping the remove bias.
    fn compact(&mut self, key: &K) {
        let add_timestamp = match self.adds.get(key) {
            Some(entry) => entry.timestamp(),
            None => return,
        };
        let remove_timestamp = match self.removes.get(key) {
            Some(&tombstone) => tombstone,
            None => return,
        };
        if add_timestamp > remove_timestamp {
            self.removes.remove(key);
        } else {
            self.adds.remove(key);
        }
    }
}

impl<K: Ord + Clone, V: Ord + Clone, S: TimestampSource> LWWDictionary<K, V, S> {
    /// Add a key-value entry at the clock's current timestamp.
    ///
    /// An existing entry for the key is overwritten only if the new
    /// observation dominates under the `(timestamp, value)` rule, so a `put`
    /// stamped in the past by a non-monotonic clock may be silently ignored.
    pub fn put(&mut self, key: K, value: V) {
        let timestamp = self.clock.now();
        match self.adds.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().set(value, timestamp);
            }
            Entry::Vacant(entry) => {
                entry.insert(TimestampedValue::new(value, timestamp));
            }
        }
        self.compact(&key);
    }

    /// Remove the entry for `key` at the clock's current timestamp.
    ///
    /// Records a tombstone holding the latest removal timestamp seen for the
    /// key. Removing a key that was never added is legal: the tombstone will
    /// suppress a `put` merged in later from another replica with an
    /// equal-or-earlier timestamp.
    ///
    /// Returns `true` if the key was present on this replica before the call.
    pub fn remove(&mut self, key: &K) -> bool {
        let was_present = self.contains(key);
        let timestamp = self.clock.now();
        let tombstone = self.removes.entry(key.clone()).or_insert(timestamp);
        *tombstone = (*tombstone).max(timestamp);
        self.compact(key);
        was_present
    }
}

impl<K: Ord + Clone, V: Ord + Clone, S> Crdt for LWWDictionary<K, V, S> {
    /// Key-wise union of both tables.
    ///
    /// Add conflicts resolve through [`TimestampedValue`]'s merge, remove
    /// conflicts through `max`, and keys held by one side pass through
    /// unchanged. No compaction runs afterward; none is needed, because each
    /// table's union is independently commutative, associative, and
    /// idempotent.
    fn merge(&mut self, other: &Self) {
        for (key, added) in &other.adds {
            match self.adds.entry(key.clone()) {
                Entry::Occupied(mut entry) => entry.get_mut().merge(added),
                Entry::Vacant(entry) => {
                    entry.insert(added.clone());
                }
            }
        }
        for (key, &timestamp) in &other.removes {
            let tombstone = self.removes.entry(key.clone()).or_insert(timestamp);
            *tombstone = (*tombstone).max(timestamp);
        }
    }
}

impl<K: Ord + Clone, V: Ord + Clone, S: TimestampSource> Dictionary<K, V>
    for LWWDictionary<K, V, S>
{
    fn put(&mut self, key: K, value: V) {
        LWWDictionary::put(self, key, value);
    }

    fn remove(&mut self, key: &K) -> bool {
        LWWDictionary::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        LWWDictionary::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LWWDictionary::contains(self, key)
    }

    fn clear(&mut self) {
        LWWDictionary::clear(self);
    }
}

impl<K: Ord + Clone, V: Ord + Clone, S: Default> Default for LWWDictionary<K, V, S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
