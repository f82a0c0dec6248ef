use super::{MAX_OBJECT_MEMBERS, NULL_COLLECTION, NULL_OBJECT, RESERVED_TAGS};
use crate::buffer::{ByteSink, ByteSource};
use crate::error::{PackError, PackResult};

impl ByteSink {
    /// Writes the length of a present collection.
    ///
    /// Fails with [`PackError::LengthOverflow`] if `len` exceeds `i32::MAX`.
    #[inline]
    pub fn write_collection_header(&mut self, len: usize) -> PackResult<()> {
        let header = i32::try_from(len).map_err(|_| PackError::LengthOverflow { len })?;
        self.write_i32(header);
        Ok(())
    }

    /// Writes the null collection header `-1`.
    #[inline]
    pub fn write_null_collection(&mut self) {
        self.write_i32(NULL_COLLECTION);
    }

    /// Writes the member count of a present object.
    ///
    /// Fails with [`PackError::SchemaTooLarge`] if `count` exceeds 249.
    #[inline]
    pub fn write_object_header(&mut self, count: usize) -> PackResult<()> {
        match u8::try_from(count) {
            Ok(header) if header <= MAX_OBJECT_MEMBERS => {
                self.write_u8(header);
                Ok(())
            }
            _ => Err(PackError::SchemaTooLarge { count }),
        }
    }

    /// Writes the null object header `255`.
    #[inline]
    pub fn write_null_object(&mut self) {
        self.write_u8(NULL_OBJECT);
    }
}

impl ByteSource<'_> {
    /// Reads a collection header, `None` for the null collection.
    ///
    /// Negative headers other than `-1` fail with [`PackError::MalformedHeader`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_pack::{ByteSource, PackError};
    ///
    /// let mut source = ByteSource::new(&[3, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF]);
    /// assert_eq!(source.read_collection_header(), Ok(Some(3)));
    /// assert_eq!(source.read_collection_header(), Ok(None));
    /// assert_eq!(
    ///     source.read_collection_header(),
    ///     Err(PackError::MalformedHeader { header: -2 }),
    /// );
    /// ```
    pub fn read_collection_header(&mut self) -> PackResult<Option<usize>> {
        let header = i32::from_le_bytes(self.peek_fixed()?);
        let len = match header {
            NULL_COLLECTION => None,
            0.. => usize::try_from(header).ok(),
            _ => return Err(PackError::MalformedHeader { header }),
        };
        self.skip(4)?;
        Ok(len)
    }

    /// Returns `true` if the next four bytes are the null collection header.
    #[inline]
    pub fn peek_null_collection(&self) -> bool {
        matches!(self.peek_fixed(), Ok(bytes) if i32::from_le_bytes(bytes) == NULL_COLLECTION)
    }

    /// Reads an object header, `None` for the null object.
    ///
    /// The reserved tags 250 to 254 fail with [`PackError::UnsupportedTag`].
    pub fn read_object_header(&mut self) -> PackResult<Option<u8>> {
        let tag = self.peek_u8()?;
        let count = match tag {
            NULL_OBJECT => None,
            tag if RESERVED_TAGS.contains(&tag) => return Err(PackError::UnsupportedTag { tag }),
            count => Some(count),
        };
        self.skip(1)?;
        Ok(count)
    }

    /// Returns `true` if the next byte is the null object header.
    #[inline]
    pub fn peek_null_object(&self) -> bool {
        self.peek_u8() == Ok(NULL_OBJECT)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteSink, ByteSource, PackError};

    #[test]
    fn collection_headers() {
        let mut sink = ByteSink::new();
        sink.write_collection_header(0).unwrap();
        sink.write_collection_header(i32::MAX as usize).unwrap();
        sink.write_null_collection();
        assert_eq!(
            sink.write_collection_header(i32::MAX as usize + 1),
            Err(PackError::LengthOverflow {
                len: i32::MAX as usize + 1
            })
        );

        let bytes = sink.into_vec();
        assert_eq!(&bytes[8..], [0xFF; 4]);

        let mut source = ByteSource::new(&bytes);
        assert_eq!(source.read_collection_header(), Ok(Some(0)));
        assert_eq!(
            source.read_collection_header(),
            Ok(Some(i32::MAX as usize))
        );
        assert!(source.peek_null_collection());
        assert_eq!(source.read_collection_header(), Ok(None));
        assert!(!source.peek_null_collection());
    }

    #[test]
    fn malformed_header_keeps_cursor() {
        let bytes = i32::MIN.to_le_bytes();
        let mut source = ByteSource::new(&bytes);
        assert_eq!(
            source.read_collection_header(),
            Err(PackError::MalformedHeader { header: i32::MIN })
        );
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn object_headers() {
        let mut sink = ByteSink::new();
        sink.write_object_header(0).unwrap();
        sink.write_object_header(249).unwrap();
        sink.write_null_object();
        assert_eq!(
            sink.write_object_header(250),
            Err(PackError::SchemaTooLarge { count: 250 })
        );
        assert_eq!(
            sink.write_object_header(1000),
            Err(PackError::SchemaTooLarge { count: 1000 })
        );
        assert_eq!(sink.as_slice(), [0, 249, 255]);

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        assert_eq!(source.read_object_header(), Ok(Some(0)));
        assert_eq!(source.read_object_header(), Ok(Some(249)));
        assert!(source.peek_null_object());
        assert_eq!(source.read_object_header(), Ok(None));
    }

    #[test]
    fn reserved_tags() {
        for tag in 250..=254 {
            let bytes = [tag];
            let mut source = ByteSource::new(&bytes);
            assert_eq!(
                source.read_object_header(),
                Err(PackError::UnsupportedTag { tag })
            );
            assert_eq!(source.position(), 0);
        }
    }
}
