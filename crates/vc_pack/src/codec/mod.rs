//! Wire codecs, written as inherent methods on [`ByteSink`] and [`ByteSource`].
//!
//! All multi-byte values are little-endian.
//!
//! | Element | Layout |
//! |---|---|
//! | bool | one byte, `0` or `1`; any nonzero byte reads as `true` |
//! | integers, floats | fixed width, `isize`/`usize` as 64-bit |
//! | collection header | `i32` length, `-1` for null |
//! | object header | one byte member count `0..=249`, `255` for null |
//! | string | `i32` `0` if empty, else `!utf8_len`, `i32` native length, UTF-8 bytes |
//! | bytes | collection header, then the raw bytes |
//!
//! [`ByteSink`]: crate::ByteSink
//! [`ByteSource`]: crate::ByteSource

// -----------------------------------------------------------------------------
// Modules

mod header;
mod primitive;
mod string;

// -----------------------------------------------------------------------------
// Constants

/// The optional leading format version byte.
pub const FORMAT_VERSION: u8 = 0x07;

/// Collection header of a null collection or null string.
pub const NULL_COLLECTION: i32 = -1;

/// Object header of a null object.
pub const NULL_OBJECT: u8 = 255;

/// Largest member count an object header can carry.
pub const MAX_OBJECT_MEMBERS: u8 = 249;

/// Object header tags reserved by the format (wide tag, reference id, ...).
pub const RESERVED_TAGS: core::ops::RangeInclusive<u8> = 250..=254;
