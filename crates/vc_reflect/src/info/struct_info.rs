use alloc::boxed::Box;
use core::any::Any;

use crate::info::{NamedField, Type, impl_type_fn};

/// Type info for structs, holding every declared field in declaration order.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_reflect::info::Typed;
///
/// #[derive(Reflect)]
/// struct Point {
///     x: f32,
///     #[reflect(order = 0)]
///     y: f32,
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_at(1).unwrap().name(), "y");
/// assert_eq!(info.index_of("x"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates the info of struct `T` from its declared fields.
    pub fn new<T: Any>(fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the field with the given name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the field at the given declaration index.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the named field.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Number of declared fields, skipped ones included.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
