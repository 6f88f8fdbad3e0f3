//! # lww-dict
//!
//! A last-writer-wins element dictionary CRDT for local-first applications.
//!
//! A CRDT (Conflict-free Replicated Data Type) is a data structure that can
//! be replicated across multiple devices and updated independently. When
//! replicas are merged, they are guaranteed to converge to the same state
//! without requiring coordination or consensus.
//!
//! This crate provides one such structure: [`LWWDictionary`], a key-value
//! mapping in which every replica accepts local `put` and `remove` operations
//! stamped by an injected [`clock::TimestampSource`], and conflicting writes
//! are resolved in favor of the latest timestamp. Deletions are tracked as
//! tombstones so they order correctly against concurrent insertions, with
//! exact timestamp ties biased toward the deletion.
//!
//! ## Quick Start
//!
//! ```
//! use lww_dict::prelude::*;
//!
//! let mut phone = LWWDictionary::new(CounterClock::new());
//! phone.put("A", "Apple");
//!
//! let mut laptop = LWWDictionary::new(CounterClock::new());
//! laptop.put("B", "Banana");
//!
//! // Replicas converge by exchanging state and merging.
//! phone.merge(&laptop);
//! assert_eq!(phone.get(&"A"), Some(&"Apple"));
//! assert_eq!(phone.get(&"B"), Some(&"Banana"));
//! ```
//!
//! ## The `Crdt` Trait
//!
//! All replicated types implement the [`Crdt`] trait, which provides the
//! [`Crdt::merge`] method. Merge is guaranteed to be commutative,
//! associative, and idempotent, so replicas may exchange state in any order,
//! any grouping, and any number of times.
//!
//! ## Timestamps
//!
//! The dictionary never reads time itself; it is constructed with a
//! [`clock::TimestampSource`] and only compares the `u64` values it returns.
//! [`clock::CounterClock`] gives a deterministic logical timeline,
//! [`clock::SystemClock`] wall-clock microseconds, and [`clock::FnClock`]
//! wraps any `FnMut() -> u64` closure. A non-monotonic source is tolerated:
//! convergence still holds, you just hit the tie-break paths more often.
//!
//! ## Features
//!
//! - `std` (default) — enables `SystemClock`. Nothing else is gated; the
//!   crate always builds against the Rust standard library.
//! - `serde` — `Serialize`/`Deserialize` derives on the dictionary state.

mod crdt;
mod lww_dict;
mod timestamped;

pub mod clock;
pub mod prelude;

pub use crdt::{Crdt, Dictionary};
pub use lww_dict::LWWDictionary;
pub use timestamped::TimestampedValue;
