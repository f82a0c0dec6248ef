use crate::error::{PackError, PackResult};

// -----------------------------------------------------------------------------
// ByteSource

/// Read cursor over a borrowed byte slice.
///
/// Every read either advances the cursor by exactly the bytes it consumed
/// or fails with [`PackError::TruncatedInput`] without moving it.
///
/// # Examples
///
/// ```
/// use vc_pack::{ByteSource, PackError};
///
/// let mut source = ByteSource::new(&[0x2C, 0x01, 0x00]);
///
/// assert_eq!(source.read_u8(), Ok(0x2C));
/// assert_eq!(
///     source.read_u32(),
///     Err(PackError::TruncatedInput { needed: 4, remaining: 2 }),
/// );
/// assert_eq!(source.position(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ByteSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteSource<'a> {
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of unread bytes.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `needed` bytes remain.
    #[inline]
    pub fn ensure(&self, needed: usize) -> PackResult<()> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(PackError::TruncatedInput { needed, remaining });
        }
        Ok(())
    }

    /// Returns the next `n` bytes without consuming them.
    #[inline]
    pub fn peek(&self, n: usize) -> PackResult<&'a [u8]> {
        self.ensure(n)?;
        Ok(&self.data[self.pos..self.pos + n])
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek_u8(&self) -> PackResult<u8> {
        self.ensure(1)?;
        Ok(self.data[self.pos])
    }

    /// Returns the next `N` bytes without consuming them.
    #[inline]
    pub fn peek_fixed<const N: usize>(&self) -> PackResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.peek(N)?);
        Ok(out)
    }

    /// Consumes `n` bytes.
    #[inline]
    pub fn skip(&mut self, n: usize) -> PackResult<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Consumes and returns the next `n` bytes.
    #[inline]
    pub fn read_raw(&mut self, n: usize) -> PackResult<&'a [u8]> {
        let bytes = self.peek(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// Consumes and returns the next `N` bytes.
    #[inline]
    pub fn read_fixed<const N: usize>(&mut self) -> PackResult<[u8; N]> {
        let out = self.peek_fixed::<N>()?;
        self.pos += N;
        Ok(out)
    }

    /// Consumes one byte.
    #[inline]
    pub fn read_u8(&mut self) -> PackResult<u8> {
        let value = self.peek_u8()?;
        self.pos += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::ByteSource;
    use crate::PackError;

    #[test]
    fn reads_advance() {
        let mut source = ByteSource::new(&[1, 2, 3, 4, 5]);
        assert_eq!(source.read_u8(), Ok(1));
        assert_eq!(source.read_fixed::<2>(), Ok([2, 3]));
        assert_eq!(source.read_raw(2), Ok(&[4, 5][..]));
        assert!(source.is_empty());
        assert_eq!(source.position(), 5);
    }

    #[test]
    fn peek_does_not_move() {
        let mut source = ByteSource::new(&[7, 8]);
        assert_eq!(source.peek_u8(), Ok(7));
        assert_eq!(source.peek(2), Ok(&[7, 8][..]));
        assert_eq!(source.position(), 0);
        source.skip(1).unwrap();
        assert_eq!(source.peek_fixed::<1>(), Ok([8]));
    }

    #[test]
    fn failed_reads_keep_cursor() {
        let mut source = ByteSource::new(&[1, 2, 3]);
        source.skip(1).unwrap();

        let truncated = PackError::TruncatedInput {
            needed: 4,
            remaining: 2,
        };
        assert_eq!(source.read_fixed::<4>(), Err(truncated.clone()));
        assert_eq!(source.read_raw(4), Err(truncated.clone()));
        assert_eq!(source.skip(4), Err(truncated));
        assert_eq!(source.position(), 1);

        let mut empty = ByteSource::new(&[]);
        assert_eq!(
            empty.read_u8(),
            Err(PackError::TruncatedInput {
                needed: 1,
                remaining: 0
            })
        );
    }
}
