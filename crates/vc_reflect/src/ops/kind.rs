use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, List, Map, Optional, Pointer, Struct};
use crate::ops::{ScalarMut, ScalarRef};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::ops::{ReflectRef, ScalarRef};
///
/// let value: Vec<i16> = vec![1, 2];
/// let ReflectRef::List(list) = value.reflect_ref() else { unreachable!() };
///
/// let ReflectRef::Scalar(ScalarRef::I16(item)) = list.get(1).unwrap().reflect_ref() else {
///     unreachable!()
/// };
/// assert_eq!(item, 2);
/// ```
pub enum ReflectRef<'a> {
    Scalar(ScalarRef<'a>),
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Optional(&'a dyn Optional),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of this view.
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
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
pub enum ReflectMut<'a> {
    Scalar(ScalarMut<'a>),
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Optional(&'a mut dyn Optional),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of this view.
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
}
