use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of runtime reflection.
///
/// A reflected value can report its static [`TypeInfo`](crate::info::TypeInfo)
/// and hand out a kind-specific view of itself through [`reflect_ref`] and
/// [`reflect_mut`]. Consumers walk values through these views instead of
/// knowing the concrete types.
///
/// Implement it with `#[derive(Reflect)]`. The built-in impls cover
/// scalars, `String`, `Vec<T>`, `[T; N]`, `HashMap`, `BTreeMap`, `Option<T>`,
/// `Box<T>` and `Arc<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::info::ReflectKind;
///
/// let value: Box<dyn Reflect> = Box::new(vec![1_u8, 2, 3]);
///
/// assert_eq!(value.reflect_kind(), ReflectKind::List);
/// assert!(value.is::<Vec<u8>>());
/// assert_eq!(value.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`ReflectKind`] of the value.
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_type_info().kind()
    }

    /// Returns an immutable, kind-specific view of the value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind-specific view of the value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Returns the full type path of the underlying value.
    #[inline]
    pub fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts a boxed value, giving it back unchanged on mismatch.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type id was checked before downcasting"),
        }
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.reflect_kind(), self.reflect_type_path())
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn boxed_downcast() {
        let value: Box<dyn Reflect> = Box::new(String::from("text"));
        let value = value.downcast::<u32>().unwrap_err();
        assert_eq!(*value.downcast::<String>().unwrap(), "text");
    }

    #[test]
    fn debug_shows_kind_and_path() {
        let value = 3_u8;
        assert_eq!(format!("{:?}", value.as_reflect()), "scalar(u8)");
    }
}
