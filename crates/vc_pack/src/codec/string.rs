use alloc::string::String;

use super::{FORMAT_VERSION, NULL_COLLECTION};
use crate::buffer::{ByteSink, ByteSource};
use crate::error::{PackError, PackResult};

#[inline]
fn header_of(len: usize) -> PackResult<i32> {
    i32::try_from(len).map_err(|_| PackError::LengthOverflow { len })
}

impl ByteSink {
    /// Writes a string.
    ///
    /// The empty string is the header `0`. Any other string is `!utf8_len`,
    /// the native length in the sink's [`TextUnit`](crate::TextUnit), then
    /// the UTF-8 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_pack::ByteSink;
    ///
    /// let mut sink = ByteSink::new();
    /// sink.write_string("").unwrap();
    /// sink.write_string("hi").unwrap();
    ///
    /// assert_eq!(
    ///     sink.as_slice(),
    ///     [0, 0, 0, 0, 0xFD, 0xFF, 0xFF, 0xFF, 2, 0, 0, 0, b'h', b'i'],
    /// );
    /// ```
    pub fn write_string(&mut self, value: &str) -> PackResult<()> {
        if value.is_empty() {
            self.write_i32(0);
            return Ok(());
        }
        let utf8_len = header_of(value.len())?;
        let native_len = header_of(self.text_unit().measure(value))?;

        self.reserve(8 + value.len());
        self.write_i32(!utf8_len);
        self.write_i32(native_len);
        self.write_raw(value.as_bytes());
        Ok(())
    }

    /// Writes the null string header `-1`.
    #[inline]
    pub fn write_null_string(&mut self) {
        self.write_i32(NULL_COLLECTION);
    }

    /// Writes a byte sequence: its length, then the raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> PackResult<()> {
        let header = header_of(bytes.len())?;
        self.reserve(4 + bytes.len());
        self.write_i32(header);
        self.write_raw(bytes);
        Ok(())
    }

    /// Writes the format version byte.
    #[inline]
    pub fn write_format_version(&mut self) {
        self.write_u8(FORMAT_VERSION);
    }
}

impl<'a> ByteSource<'a> {
    /// Reads a string, borrowing from the input.
    ///
    /// The null header `-1`, the empty header `0` and any other
    /// non-negative header decode to `""`.
    pub fn read_str(&mut self) -> PackResult<&'a str> {
        let header = i32::from_le_bytes(self.peek_fixed()?);
        if header >= NULL_COLLECTION {
            self.skip(4)?;
            return Ok("");
        }

        // `header <= -2`, so `!header` is at least 1.
        let utf8_len =
            usize::try_from(!header).map_err(|_| PackError::MalformedHeader { header })?;
        let framed = self.peek(8 + utf8_len)?;
        let text = core::str::from_utf8(&framed[8..]).map_err(|_| PackError::InvalidUtf8)?;
        self.skip(framed.len())?;
        Ok(text)
    }

    /// Reads a string into an owned [`String`].
    #[inline]
    pub fn read_string(&mut self) -> PackResult<String> {
        self.read_str().map(String::from)
    }

    /// Reads a byte sequence, `None` for the null sequence.
    pub fn read_bytes(&mut self) -> PackResult<Option<&'a [u8]>> {
        let mut probe = self.clone();
        let Some(len) = probe.read_collection_header()? else {
            self.skip(4)?;
            return Ok(None);
        };
        let framed = self.peek(4 + len)?;
        self.skip(framed.len())?;
        Ok(Some(&framed[4..]))
    }

    /// Reads and checks the format version byte.
    pub fn read_format_version(&mut self) -> PackResult<()> {
        let found = self.peek_u8()?;
        if found != FORMAT_VERSION {
            return Err(PackError::UnsupportedVersion { found });
        }
        self.skip(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteSink, ByteSource, PackError, TextUnit};

    #[test]
    fn string_round_trip() {
        let texts = ["", "a", "hello world", "日本語", "é😀", "line\nbreak\0nul"];

        let mut sink = ByteSink::new();
        for text in texts {
            sink.write_string(text).unwrap();
        }

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        for text in texts {
            assert_eq!(source.read_str(), Ok(text));
        }
        assert!(source.is_empty());
    }

    #[test]
    fn native_length_units() {
        let mut sink = ByteSink::new().with_text_unit(TextUnit::Utf16);
        sink.write_string("é😀").unwrap();

        let bytes = sink.as_slice();
        assert_eq!(i32::from_le_bytes(bytes[0..4].try_into().unwrap()), !6);
        assert_eq!(i32::from_le_bytes(bytes[4..8].try_into().unwrap()), 3);

        let mut source = ByteSource::new(bytes);
        assert_eq!(source.read_string().unwrap(), "é😀");
    }

    #[test]
    fn null_and_positive_headers_are_empty() {
        let mut sink = ByteSink::new();
        sink.write_null_string();
        sink.write_i32(5);

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        assert_eq!(source.read_str(), Ok(""));
        assert_eq!(source.read_str(), Ok(""));
        assert!(source.is_empty());
    }

    #[test]
    fn invalid_utf8() {
        let mut sink = ByteSink::new();
        sink.write_i32(!2);
        sink.write_i32(2);
        sink.write_raw(&[0xC3, 0x28]);

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        assert_eq!(source.read_str(), Err(PackError::InvalidUtf8));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn truncated_string_keeps_cursor() {
        let mut sink = ByteSink::new();
        sink.write_string("abcdef").unwrap();

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes[..10]);
        assert_eq!(
            source.read_str(),
            Err(PackError::TruncatedInput {
                needed: 14,
                remaining: 10
            })
        );
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn byte_sequences() {
        let mut sink = ByteSink::new();
        sink.write_bytes(&[]).unwrap();
        sink.write_bytes(&[1, 2, 3]).unwrap();
        sink.write_null_collection();

        let bytes = sink.into_vec();
        assert_eq!(&bytes[..4], [0; 4]);
        assert_eq!(&bytes[11..], [0xFF; 4]);

        let mut source = ByteSource::new(&bytes);
        assert_eq!(source.read_bytes(), Ok(Some(&[][..])));
        assert_eq!(source.read_bytes(), Ok(Some(&[1, 2, 3][..])));
        assert_eq!(source.read_bytes(), Ok(None));
        assert!(source.is_empty());
    }

    #[test]
    fn truncated_bytes_keep_cursor() {
        let bytes = [4, 0, 0, 0, 1, 2];
        let mut source = ByteSource::new(&bytes);
        assert_eq!(
            source.read_bytes(),
            Err(PackError::TruncatedInput {
                needed: 8,
                remaining: 6
            })
        );
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn format_version() {
        let mut sink = ByteSink::new();
        sink.write_format_version();
        assert_eq!(sink.as_slice(), [0x07]);

        let mut source = ByteSource::new(&[0x07, 0x08]);
        assert_eq!(source.read_format_version(), Ok(()));
        assert_eq!(
            source.read_format_version(),
            Err(PackError::UnsupportedVersion { found: 0x08 })
        );
        assert_eq!(source.position(), 1);
    }
}
