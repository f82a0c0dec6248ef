//! The generic value walker.
//!
//! [`PackWriter`] and [`PackReader`] dispatch on the reflected kind of each
//! value. A registered [`TypeTraitFormatter`](crate::TypeTraitFormatter) is
//! checked first and takes over the whole value.

// -----------------------------------------------------------------------------
// Debug utils

#[cfg(all(debug_assertions, feature = "debug"))]
mod info_stack;

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;
mod skip;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use de::PackReader;
pub(crate) use ser::PackWriter;

use vc_reflect::info::{ScalarKind, TypeInfo};

/// How an absent `Option` is written, chosen by the kind of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NullMarker {
    /// The null collection header `-1`, for lists and maps.
    Collection,
    /// The null string header `-1`. Reads back as an empty string.
    String,
    /// The null object byte `255`, for everything else.
    ///
    /// Fixed-size arrays have no null header of their own and land here.
    Object,
}

impl NullMarker {
    fn of(some_info: &TypeInfo) -> Self {
        match some_info.pointee() {
            TypeInfo::List(_) | TypeInfo::Map(_) => Self::Collection,
            TypeInfo::Scalar(info) if info.scalar_kind() == ScalarKind::String => Self::String,
            _ => Self::Object,
        }
    }
}
