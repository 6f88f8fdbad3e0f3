/// Core trait that all CRDTs must implement.
///
/// A CRDT (Conflict-free Replicated Data Type) guarantees that concurrent
/// updates on different replicas will converge to the same state after merging,
/// without requiring coordination.
///
/// # Properties
///
/// All implementations must satisfy:
/// - **Commutativity:** `a.merge(b) == b.merge(a)`
/// - **Associativity:** `a.merge(b.merge(c)) == a.merge(b).merge(c)`
/// - **Idempotency:** `a.merge(a) == a`
pub trait Crdt {
    /// Merge another replica's state into this one.
    ///
    /// After merging, `self` contains the least upper bound of both states.
    /// This operation is commutative, associative, and idempotent.
    fn merge(&mut self, other: &Self);
}

/// The public contract of a replicated key-value dictionary.
///
/// Every operation is total over its input domain: looking up an absent key
/// is not an error, and no method panics for any key or value within the
/// type bounds. Cross-replica reconciliation happens exclusively through
/// [`Crdt::merge`].
pub trait Dictionary<K, V>: Crdt {
    /// Add a key-value entry. A later `put` of the same key overwrites the
    /// value, subject to last-writer-wins resolution.
    fn put(&mut self, key: K, value: V);

    /// Remove the entry for `key`, recording a deletion tombstone.
    ///
    /// Returns `true` if the key was present on this replica before the call.
    fn remove(&mut self, key: &K) -> bool;

    /// Get the value for `key`, or `None` if the key is not present.
    fn get(&self, key: &K) -> Option<&V>;

    /// Check whether `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Remove all entries from this replica.
    fn clear(&mut self);
}
