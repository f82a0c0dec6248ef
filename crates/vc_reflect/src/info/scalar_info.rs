use core::any::Any;
use core::fmt;

use crate::info::{Type, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// The concrete representation of a [`Scalar`](crate::info::ReflectKind::Scalar) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
}

impl ScalarKind {
    /// Encoded width in bytes of fixed-width scalars.
    ///
    /// `isize` and `usize` always count as 64-bit. Returns `None` for `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::ScalarKind;
    ///
    /// assert_eq!(ScalarKind::Bool.fixed_width(), Some(1));
    /// assert_eq!(ScalarKind::Usize.fixed_width(), Some(8));
    /// assert_eq!(ScalarKind::String.fixed_width(), None);
    /// ```
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::I32 | Self::U32 | Self::F32 => Some(4),
            Self::I64 | Self::U64 | Self::F64 | Self::Isize | Self::Usize => Some(8),
            Self::String => None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
        })
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// Type info for scalar types.
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Creates the info of scalar type `T`.
    #[inline]
    pub fn new<T: Any>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the scalar representation.
    #[inline(always)]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.kind
    }
}
