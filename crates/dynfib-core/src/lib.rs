//! # dynfib-core
//!
//! A memoized Fibonacci cache that owns exactly one heap buffer.
//!
//! The buffer is sized once at construction and filled lazily by the
//! mutating accessor. Ownership moves between instances by destructive
//! transfer: the source is left without a buffer and can be dropped
//! without releasing anything.
//!
//! ```
//! use dynfib_core::DynFibonacci;
//!
//! let mut fib = DynFibonacci::new(12).unwrap();
//! assert_eq!(fib.get(10).unwrap(), 55);
//!
//! let fib_ = fib.take();
//! assert!(!fib.is_alive());
//! assert_eq!(fib_[10], 55);
//! ```
#![warn(missing_docs)]

pub mod buffer;
pub mod constants;
pub mod error;
pub mod fibonacci;
pub mod stats;

// Re-exports
pub use buffer::Buffer;
pub use constants::{exit_codes, FIB_TABLE, FIB_TABLE_LEN, MAX_FIB_INDEX, MIN_CAPACITY};
pub use error::FibError;
pub use fibonacci::DynFibonacci;
pub use stats::BufferStats;
