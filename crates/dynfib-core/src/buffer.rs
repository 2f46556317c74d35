//! Fixed-size owned storage for cached values.

use std::ops::{Deref, DerefMut};

use crate::stats;

/// A heap buffer of `u64` that records its allocation and release.
///
/// The length is fixed at creation. `Buffer` is not `Clone`; it changes
/// owners only by move.
#[derive(Debug)]
pub struct Buffer {
    slots: Box<[u64]>,
}

impl Buffer {
    /// Allocate a zero-filled buffer of `len` slots.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        let slots = vec![0u64; len].into_boxed_slice();
        let bytes = Self::byte_len(len);
        stats::record_allocation(bytes);
        tracing::trace!(len, bytes, "buffer allocated");
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Address of the first slot.
    #[must_use]
    pub fn as_ptr(&self) -> *const u64 {
        self.slots.as_ptr()
    }

    fn byte_len(len: usize) -> u64 {
        (len * std::mem::size_of::<u64>()) as u64
    }
}

impl Deref for Buffer {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.slots
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u64] {
        &mut self.slots
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        let bytes = Self::byte_len(self.slots.len());
        stats::record_release(bytes);
        tracing::trace!(len = self.slots.len(), bytes, "buffer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_requested_len() {
        let buf = Buffer::zeroed(12);
        assert_eq!(buf.len(), 12);
        assert!(!buf.is_empty());
        assert!(buf.iter().all(|&v| v == 0));
    }

    #[test]
    fn allocation_and_release_are_counted() {
        stats::reset();
        let buf = Buffer::zeroed(6);
        let snap = stats::snapshot();
        assert_eq!(snap.allocations, 1);
        assert_eq!(snap.bytes_allocated, 48);
        assert_eq!(snap.releases, 0);

        drop(buf);
        let snap = stats::snapshot();
        assert_eq!(snap.releases, 1);
        assert_eq!(snap.bytes_released, 48);
        assert_eq!(snap.live(), 0);
    }

    #[test]
    fn moving_does_not_reallocate() {
        stats::reset();
        let buf = Buffer::zeroed(4);
        let ptr = buf.as_ptr();
        let moved = buf;
        assert_eq!(moved.as_ptr(), ptr);
        assert_eq!(stats::snapshot().allocations, 1);
        assert_eq!(stats::snapshot().releases, 0);
    }

    #[test]
    fn slots_are_writable() {
        let mut buf = Buffer::zeroed(3);
        buf[2] = 7;
        assert_eq!(buf[2], 7);
        assert_eq!(&buf[..], &[0, 0, 7]);
    }
}
