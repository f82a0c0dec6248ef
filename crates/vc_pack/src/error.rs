use alloc::string::{String, ToString};
use core::fmt::Display;

use thiserror::Error;
use vc_reflect::info::ReflectKind;

// -----------------------------------------------------------------------------
// PackError

/// Errors produced while packing or unpacking a value.
///
/// A failed call never leaves a partial result behind: `serialize` returns no
/// bytes and `deserialize` stops at the first error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PackError {
    #[error("input truncated: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("malformed collection header {header}")]
    MalformedHeader { header: i32 },

    #[error("member count mismatch for `{type_path}`: expected {expected}, found {found}")]
    SchemaMismatch {
        type_path: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{count} members exceed the object header limit of 249")]
    SchemaTooLarge { count: usize },

    #[error("`{type_path}` ({kind}) cannot be packed without a formatter")]
    UnsupportedType {
        type_path: &'static str,
        kind: ReflectKind,
    },

    #[error("unsupported object header tag {tag}")]
    UnsupportedTag { tag: u8 },

    #[error("target `{type_path}` cannot be written in place")]
    InvalidTarget { type_path: &'static str },

    #[error("max depth {max_depth} exceeded at `{type_path}`, possible circular reference")]
    DepthExceeded {
        max_depth: usize,
        type_path: &'static str,
    },

    #[error("length {len} does not fit in an i32 header")]
    LengthOverflow { len: usize },

    #[error("value {value} is out of range for `{type_path}`")]
    OutOfRange {
        type_path: &'static str,
        value: i128,
    },

    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("unsupported format version {found:#04x}")]
    UnsupportedVersion { found: u8 },

    #[error("{0}")]
    Custom(String),
}

impl PackError {
    /// Creates a [`PackError::Custom`], for use by formatters.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_pack::PackError;
    ///
    /// let err = PackError::custom("color channel out of range");
    /// assert_eq!(err.to_string(), "color channel out of range");
    /// ```
    #[inline]
    pub fn custom(msg: impl Display) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// Result alias used throughout the crate.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::PackError;
    use vc_reflect::info::ReflectKind;

    #[test]
    fn display() {
        let err = PackError::TruncatedInput {
            needed: 4,
            remaining: 1,
        };
        assert_eq!(
            err.to_string(),
            "input truncated: needed 4 bytes, 1 remaining"
        );

        let err = PackError::UnsupportedType {
            type_path: "char",
            kind: ReflectKind::Opaque,
        };
        assert_eq!(
            err.to_string(),
            "`char` (opaque) cannot be packed without a formatter"
        );

        let err = PackError::UnsupportedVersion { found: 8 };
        assert_eq!(err.to_string(), "unsupported format version 0x08");
    }
}
