//! Convenient re-exports for common usage.
//!
//! ```
//! use lww_dict::prelude::*;
//! ```

pub use crate::clock::CounterClock;
pub use crate::clock::FixedClock;
pub use crate::clock::FnClock;
#[cfg(feature = "std")]
pub use crate::clock::SystemClock;
pub use crate::clock::TimestampSource;
pub use crate::Crdt;
pub use crate::Dictionary;
pub use crate::LWWDictionary;
pub use crate::TimestampedValue;
