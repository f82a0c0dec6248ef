use crate::buffer::{ByteSink, ByteSource};
use crate::error::{PackError, PackResult};

macro_rules! impl_fixed_codec {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        impl ByteSink {
            $(
                #[doc = concat!("Writes a little-endian `", stringify!($ty), "`.")]
                #[inline]
                pub fn $write(&mut self, value: $ty) {
                    self.write_fixed(value.to_le_bytes());
                }
            )*
        }

        impl ByteSource<'_> {
            $(
                #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
                #[inline]
                pub fn $read(&mut self) -> PackResult<$ty> {
                    self.read_fixed().map(<$ty>::from_le_bytes)
                }
            )*
        }
    };
}

impl_fixed_codec! {
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
}

impl ByteSink {
    /// Writes `1` for `true` and `0` for `false`.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes a `usize` as 64 bits.
    #[inline]
    pub fn write_usize(&mut self, value: usize) {
        self.write_u64(value as u64);
    }

    /// Writes an `isize` as 64 bits.
    #[inline]
    pub fn write_isize(&mut self, value: isize) {
        self.write_i64(value as i64);
    }
}

impl ByteSource<'_> {
    /// Reads a bool, any nonzero byte is `true`.
    #[inline]
    pub fn read_bool(&mut self) -> PackResult<bool> {
        self.read_u8().map(|byte| byte != 0)
    }

    /// Reads a 64-bit value into a `usize`.
    ///
    /// Fails with [`PackError::OutOfRange`] on targets narrower than 64 bits.
    #[inline]
    pub fn read_usize(&mut self) -> PackResult<usize> {
        let value = self.read_u64()?;
        usize::try_from(value).map_err(|_| PackError::OutOfRange {
            type_path: "usize",
            value: i128::from(value),
        })
    }

    /// Reads a 64-bit value into an `isize`.
    ///
    /// Fails with [`PackError::OutOfRange`] on targets narrower than 64 bits.
    #[inline]
    pub fn read_isize(&mut self) -> PackResult<isize> {
        let value = self.read_i64()?;
        isize::try_from(value).map_err(|_| PackError::OutOfRange {
            type_path: "isize",
            value: i128::from(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteSink, ByteSource};

    #[test]
    fn little_endian_layout() {
        let mut sink = ByteSink::new();
        sink.write_i32(300);
        sink.write_i16(-2);
        sink.write_u64(1);
        sink.write_bool(true);
        sink.write_bool(false);

        assert_eq!(
            sink.as_slice(),
            [
                0x2C, 0x01, 0x00, 0x00, // i32
                0xFE, 0xFF, // i16
                1, 0, 0, 0, 0, 0, 0, 0, // u64
                1, 0, // bools
            ]
        );
    }

    #[test]
    fn bool_nonzero_is_true() {
        let mut source = ByteSource::new(&[0, 1, 2, 0xFF]);
        assert_eq!(source.read_bool(), Ok(false));
        assert_eq!(source.read_bool(), Ok(true));
        assert_eq!(source.read_bool(), Ok(true));
        assert_eq!(source.read_bool(), Ok(true));
    }

    #[test]
    fn extremes_round_trip() {
        let mut sink = ByteSink::new();
        sink.write_i8(i8::MIN);
        sink.write_i16(i16::MIN);
        sink.write_i32(i32::MIN);
        sink.write_i64(i64::MIN);
        sink.write_u16(u16::MAX);
        sink.write_u32(u32::MAX);
        sink.write_u64(u64::MAX);
        sink.write_usize(usize::MAX);
        sink.write_isize(isize::MIN);

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        assert_eq!(source.read_i8(), Ok(i8::MIN));
        assert_eq!(source.read_i16(), Ok(i16::MIN));
        assert_eq!(source.read_i32(), Ok(i32::MIN));
        assert_eq!(source.read_i64(), Ok(i64::MIN));
        assert_eq!(source.read_u16(), Ok(u16::MAX));
        assert_eq!(source.read_u32(), Ok(u32::MAX));
        assert_eq!(source.read_u64(), Ok(u64::MAX));
        assert_eq!(source.read_usize(), Ok(usize::MAX));
        assert_eq!(source.read_isize(), Ok(isize::MIN));
        assert!(source.is_empty());
    }

    #[test]
    fn float_bit_patterns() {
        let values_32 = [0.0_f32, -0.0, f32::INFINITY, f32::NEG_INFINITY, f32::MIN_POSITIVE / 2.0];
        let nan_32 = f32::from_bits(0x7FC0_1234);
        let values_64 = [0.0_f64, -0.0, f64::INFINITY, f64::NEG_INFINITY, 5e-324];
        let nan_64 = f64::from_bits(0xFFF8_0000_0000_0042);

        let mut sink = ByteSink::new();
        values_32.iter().chain([&nan_32]).for_each(|v| sink.write_f32(*v));
        values_64.iter().chain([&nan_64]).for_each(|v| sink.write_f64(*v));

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        for expected in values_32.iter().chain([&nan_32]) {
            assert_eq!(source.read_f32().unwrap().to_bits(), expected.to_bits());
        }
        for expected in values_64.iter().chain([&nan_64]) {
            assert_eq!(source.read_f64().unwrap().to_bits(), expected.to_bits());
        }
    }
}
