//! Capacity-managed output buffer.
//!
//! The serializer never writes a byte without first reserving room for the
//! worst case of the operation in flight, so the write helpers here only
//! `debug_assert!` that spare capacity exists instead of re-checking on every
//! byte. Growth is amortized doubling: [`ByteBuffer::ensure`] doubles the
//! allocation until the pending write fits, and must be called strictly
//! before the bytes it covers are pushed.

use alloc::vec::Vec;

#[derive(Debug)]
pub(crate) struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Grows the allocation, doubling, until at least `extra` more bytes fit.
    pub(crate) fn ensure(&mut self, extra: usize) {
        let needed = self.data.len() + extra;
        if needed <= self.data.capacity() {
            return;
        }
        let mut target = self.data.capacity().max(1);
        while target < needed {
            target *= 2;
        }
        self.data.reserve_exact(target - self.data.len());
    }

    /// Appends a single byte. Capacity must already be ensured.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert!(self.data.len() < self.data.capacity());
        self.data.push(byte);
    }

    /// Appends a slice of bytes. Capacity must already be ensured.
    #[inline]
    pub(crate) fn push_slice(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.len() <= self.data.capacity() - self.data.len());
        self.data.extend_from_slice(bytes);
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copies the logical prefix into an independent byte sequence.
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Rewinds the write cursor, retaining the allocation for reuse.
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }
}
