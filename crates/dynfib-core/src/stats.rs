//! Per-thread buffer allocation and release counters.
//!
//! Every [`Buffer`](crate::Buffer) records itself here when it is created and
//! again when it is dropped, so tests can check that a move assignment
//! releases the old buffer exactly once and that a moved-from instance
//! releases nothing. The counters are thread-local: tests running in
//! parallel each see only their own buffers.

use std::cell::Cell;

use serde::Serialize;

/// Snapshot of buffer counters for the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BufferStats {
    /// Number of buffers allocated.
    pub allocations: u64,
    /// Number of buffers released.
    pub releases: u64,
    /// Total bytes allocated.
    pub bytes_allocated: u64,
    /// Total bytes released.
    pub bytes_released: u64,
}

impl BufferStats {
    /// Buffers allocated but not yet released.
    #[must_use]
    pub fn live(&self) -> u64 {
        self.allocations - self.releases
    }

    /// Counter deltas between an earlier snapshot and this one.
    #[must_use]
    pub fn since(&self, earlier: &Self) -> Self {
        Self {
            allocations: self.allocations - earlier.allocations,
            releases: self.releases - earlier.releases,
            bytes_allocated: self.bytes_allocated - earlier.bytes_allocated,
            bytes_released: self.bytes_released - earlier.bytes_released,
        }
    }
}

struct Counters {
    allocations: Cell<u64>,
    releases: Cell<u64>,
    bytes_allocated: Cell<u64>,
    bytes_released: Cell<u64>,
}

impl Counters {
    const fn new() -> Self {
        Self {
            allocations: Cell::new(0),
            releases: Cell::new(0),
            bytes_allocated: Cell::new(0),
            bytes_released: Cell::new(0),
        }
    }
}

thread_local! {
    static COUNTERS: Counters = const { Counters::new() };
}

fn bump(cell: &Cell<u64>, by: u64) {
    cell.set(cell.get() + by);
}

/// Record a buffer allocation of `bytes` bytes.
pub(crate) fn record_allocation(bytes: u64) {
    COUNTERS.with(|c| {
        bump(&c.allocations, 1);
        bump(&c.bytes_allocated, bytes);
    });
}

/// Record a buffer release of `bytes` bytes.
pub(crate) fn record_release(bytes: u64) {
    COUNTERS.with(|c| {
        bump(&c.releases, 1);
        bump(&c.bytes_released, bytes);
    });
}

/// Take a snapshot of the current thread's counters.
#[must_use]
pub fn snapshot() -> BufferStats {
    COUNTERS.with(|c| BufferStats {
        allocations: c.allocations.get(),
        releases: c.releases.get(),
        bytes_allocated: c.bytes_allocated.get(),
        bytes_released: c.bytes_released.get(),
    })
}

/// Reset the current thread's counters.
pub fn reset() {
    COUNTERS.with(|c| {
        c.allocations.set(0);
        c.releases.set(0);
        c.bytes_allocated.set(0);
        c.bytes_released.set(0);
    });
}
