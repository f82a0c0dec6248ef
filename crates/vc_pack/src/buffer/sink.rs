use alloc::vec::Vec;

use crate::config::{DEFAULT_INITIAL_CAPACITY, PackConfig, TextUnit};

// -----------------------------------------------------------------------------
// ByteSink

/// Append-only output buffer.
///
/// The length of the inner vector is the write cursor. Capacity doubles when
/// more room is needed, or grows to the exact requirement when doubling is
/// not enough, and never shrinks. Writes cannot fail.
///
/// # Examples
///
/// ```
/// use vc_pack::ByteSink;
///
/// let mut sink = ByteSink::with_capacity(2);
/// sink.write_i32(300);
///
/// assert!(sink.capacity() >= 4);
/// assert_eq!(sink.into_vec(), [0x2C, 0x01, 0x00, 0x00]);
/// ```
#[derive(Debug, Clone)]
pub struct ByteSink {
    buf: Vec<u8>,
    text_unit: TextUnit,
}

impl Default for ByteSink {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ByteSink {
    /// Creates a sink with the default initial capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates a sink with room for `capacity` bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            text_unit: TextUnit::Utf8,
        }
    }

    /// Creates a sink following the capacity and text unit of `config`.
    #[inline]
    pub fn with_config(config: &PackConfig) -> Self {
        Self::with_capacity(config.initial_capacity()).with_text_unit(config.text_unit())
    }

    /// Sets the unit used for the native string length.
    #[inline]
    pub const fn with_text_unit(mut self, text_unit: TextUnit) -> Self {
        self.text_unit = text_unit;
        self
    }

    #[inline]
    pub const fn text_unit(&self) -> TextUnit {
        self.text_unit
    }

    /// Ensures room for `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.buf.len().saturating_add(additional);
        let capacity = self.buf.capacity();
        if required <= capacity {
            return;
        }
        let target = capacity.saturating_mul(2).max(required);
        self.buf.reserve_exact(target - self.buf.len());
    }

    /// Appends one byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.reserve(1);
        self.buf.push(value);
    }

    /// Appends a fixed-size block.
    #[inline]
    pub fn write_fixed<const N: usize>(&mut self, bytes: [u8; N]) {
        self.write_raw(&bytes);
    }

    /// Appends `bytes` verbatim.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes written.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The bytes written so far.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Discards the content, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Drops everything written after the first `len` bytes.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Consumes the sink, returning the bytes written.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::ByteSink;

    #[test]
    fn growth_doubles() {
        let mut sink = ByteSink::with_capacity(8);
        sink.write_raw(&[1; 8]);
        assert!(sink.capacity() >= 8);

        sink.write_u8(2);
        assert!(sink.capacity() >= 16);
        assert_eq!(sink.len(), 9);
    }

    #[test]
    fn growth_exact_when_doubling_is_short() {
        let mut sink = ByteSink::with_capacity(4);
        sink.write_raw(&[0; 100]);
        assert!(sink.capacity() >= 100);
        assert_eq!(sink.as_slice(), &[0; 100][..]);
    }

    #[test]
    fn zero_capacity() {
        let mut sink = ByteSink::with_capacity(0);
        assert!(sink.is_empty());
        sink.write_fixed([1, 2, 3]);
        assert_eq!(sink.into_vec(), [1, 2, 3]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut sink = ByteSink::with_capacity(16);
        sink.write_raw(&[9; 10]);
        let capacity = sink.capacity();
        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.capacity(), capacity);
    }
}
