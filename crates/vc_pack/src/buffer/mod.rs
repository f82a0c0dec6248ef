//! Growable output buffer and borrowed input cursor.
//!
//! The codecs in [`crate::codec`] are inherent methods on these two types.

// -----------------------------------------------------------------------------
// Modules

mod sink;
mod source;

// -----------------------------------------------------------------------------
// Exports

pub use sink::ByteSink;
pub use source::ByteSource;
