//! `DynFibonacci`: a lazily filled Fibonacci cache with a single owned buffer.
//!
//! An instance is either alive (owns a [`Buffer`] whose first `cached` slots
//! hold F(0)..F(cached-1)) or moved-from (owns nothing, `cached == 0`).
//! [`take`](DynFibonacci::take) and [`assign`](DynFibonacci::assign) are the
//! two ways a buffer changes owners; both leave the source moved-from.

use std::fmt;
use std::ops::Index;

use crate::buffer::Buffer;
use crate::constants::{MAX_FIB_INDEX, MIN_CAPACITY};
use crate::error::FibError;

/// Memoized Fibonacci sequence backed by one fixed-capacity buffer.
///
/// `Default` yields a moved-from instance.
#[derive(Default)]
pub struct DynFibonacci {
    cache: Option<Buffer>,
    cached: usize,
}

impl DynFibonacci {
    /// Allocate a cache of `capacity` slots seeded with F(0) and F(1).
    ///
    /// Capacities below 2 are rejected: there is no room for the seeds.
    pub fn new(capacity: usize) -> Result<Self, FibError> {
        if capacity < MIN_CAPACITY {
            return Err(FibError::CapacityTooSmall(capacity));
        }

        let mut cache = Buffer::zeroed(capacity);
        cache[0] = 0;
        cache[1] = 1;
        tracing::debug!(capacity, "cache created");
        Ok(Self {
            cache: Some(cache),
            cached: MIN_CAPACITY,
        })
    }

    /// Move construction: transfer the buffer into a new instance.
    ///
    /// `self` is left moved-from. The returned instance owns the very same
    /// allocation; nothing is copied or allocated.
    #[must_use = "the taken cache is released immediately if unused"]
    pub fn take(&mut self) -> Self {
        tracing::debug!(
            capacity = self.capacity(),
            cached = self.cached,
            "ownership transferred"
        );
        std::mem::take(self)
    }

    /// Move assignment: release the current buffer, then adopt `other`'s.
    ///
    /// The old buffer (if any) is released exactly once. A cache that was
    /// taken from `self` can be assigned straight back, which leaves every
    /// value unchanged and releases nothing.
    pub fn assign(&mut self, other: Self) -> &mut Self {
        tracing::debug!(
            released = self.capacity(),
            adopted = other.capacity(),
            "move assignment"
        );
        *self = other;
        self
    }

    /// Move assignment out of a place, leaving `other` moved-from.
    ///
    /// `self` and `other` are distinct by construction of `&mut`.
    pub fn assign_from(&mut self, other: &mut Self) -> &mut Self {
        let incoming = other.take();
        self.assign(incoming)
    }

    /// Return F(i), computing and caching every missing value up to `i`.
    ///
    /// Already cached indices return without side effects. The buffer never
    /// grows: `i` must be below the capacity given at construction. Indices
    /// past F(93) are rejected before anything is computed.
    pub fn get(&mut self, i: usize) -> Result<u64, FibError> {
        let cache = self.cache.as_mut().ok_or(FibError::MovedFrom)?;
        if i < self.cached {
            return Ok(cache[i]);
        }
        if i >= cache.len() {
            return Err(FibError::OutOfCapacity {
                index: i,
                capacity: cache.len(),
            });
        }
        if i > MAX_FIB_INDEX {
            return Err(FibError::Overflow(i));
        }

        for j in self.cached..=i {
            cache[j] = cache[j - 1] + cache[j - 2];
        }
        tracing::debug!(from = self.cached, to = i + 1, "cache extended");
        self.cached = i + 1;
        Ok(cache[i])
    }

    /// Read an already cached F(i).
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`cached_len`](Self::cached_len), which
    /// includes every read of a moved-from instance.
    #[must_use]
    pub fn at(&self, i: usize) -> u64 {
        self[i]
    }

    /// Read an already cached F(i), or `None` where [`at`](Self::at) would panic.
    #[must_use]
    pub fn peek(&self, i: usize) -> Option<u64> {
        self.cached_values().get(i).copied()
    }

    /// Whether this instance currently owns a buffer.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.cache.is_some()
    }

    /// Capacity allocated at construction; 0 once moved-from.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.as_ref().map_or(0, Buffer::len)
    }

    /// Number of valid leading entries.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cached
    }

    /// The valid prefix F(0)..F(cached_len - 1); empty once moved-from.
    #[must_use]
    pub fn cached_values(&self) -> &[u64] {
        match self.cache.as_deref() {
            Some(cache) => &cache[..self.cached],
            None => &[],
        }
    }

    /// Address of the owned buffer, for identity checks across moves.
    #[must_use]
    pub fn as_ptr(&self) -> Option<*const u64> {
        self.cache.as_ref().map(Buffer::as_ptr)
    }
}

impl Index<usize> for DynFibonacci {
    type Output = u64;

    fn index(&self, i: usize) -> &u64 {
        assert!(
            i < self.cached,
            "index {i} out of range (cached {})",
            self.cached
        );
        &self.cached_values()[i]
    }
}

impl Drop for DynFibonacci {
    fn drop(&mut self) {
        if let Some(cache) = self.cache.take() {
            tracing::trace!(capacity = cache.len(), cached = self.cached, "cache dropped");
            drop(cache);
        }
    }
}

impl fmt::Debug for DynFibonacci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynFibonacci")
            .field("capacity", &self.capacity())
            .field("cached", &self.cached)
            .field("alive", &self.is_alive())
            .finish()
    }
}
