use core::{error, fmt};

use crate::info::{ArrayInfo, ListInfo, MapInfo, OpaqueInfo};
use crate::info::{OptionalInfo, PointerInfo, ScalarInfo, StructInfo};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected value, without its data.
///
/// The set is closed: every reflected type reports exactly one of these, and
/// consumers such as serializers can match on it exhaustively.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::ReflectKind;
///
/// assert_eq!(ReflectKind::Optional.to_string(), "optional");
/// assert_eq!(format!("{:>8}", ReflectKind::Map), "     map");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Booleans, fixed-width numbers and `String`.
    Scalar,
    /// A record with named (or positional) fields.
    Struct,
    /// A growable sequence, e.g. `Vec<T>`.
    List,
    /// A fixed-size sequence, e.g. `[T; N]`.
    Array,
    /// An associative container, e.g. `HashMap<K, V>`.
    Map,
    /// A value that may be absent, e.g. `Option<T>`.
    Optional,
    /// An owning pointer that is never absent, e.g. `Box<T>`.
    Pointer,
    /// A type whose internals are not reflected.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("scalar"),
            Self::Struct => f.pad("struct"),
            Self::List => f.pad("list"),
            Self::Array => f.pad("array"),
            Self::Map => f.pad("map"),
            Self::Optional => f.pad("optional"),
            Self::Pointer => f.pad("pointer"),
            Self::Opaque => f.pad("opaque"),
        }
    }
}

/// Error returned by the `as_*` casts of [`TypeInfo`].
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) or
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Optional(OptionalInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`] or a [`ReflectKindError`].")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`Type`](crate::info::Type) of the described type.
    pub const fn ty(&self) -> &crate::info::Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] matching this variant.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Follows [`Pointer`](TypeInfo::Pointer) infos down to the pointee.
    ///
    /// Returns `self` for every other kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::{ReflectKind, Typed};
    ///
    /// let info = <Box<Box<Vec<u8>>> as Typed>::type_info();
    /// assert_eq!(info.kind(), ReflectKind::Pointer);
    /// assert_eq!(info.pointee().kind(), ReflectKind::List);
    /// ```
    pub fn pointee(&self) -> &TypeInfo {
        let mut info = self;
        while let Self::Pointer(pointer) = info {
            info = pointer.pointee_info();
        }
        info
    }
}
