use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`TypeInfo`] of a type.
///
/// Implemented by `#[derive(Reflect)]` and by the built-in impls. The info is
/// built on first access and stored for the rest of the program, usually in a
/// [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`].
///
/// Implementations must not call another type's `type_info` while building
/// their own. Nested types are stored as `fn() -> &'static TypeInfo` pointers
/// and resolved on demand, which also keeps recursive types finite.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{ReflectKind, Typed};
///
/// let info = <Vec<i32> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
/// assert!(info.as_list().unwrap().item_is::<i32>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dyn-compatible version of [`Typed`], blanket implemented for all `Typed` types.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
