use alloc::boxed::Box;
use core::slice::Iter;

use vc_reflect::info::TypeInfo;

// -----------------------------------------------------------------------------
// FieldDescriptor

/// One packed field of a struct.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    index: usize,
    name: &'static str,
    order: i32,
    settable: bool,
    type_info: &'static TypeInfo,
}

impl FieldDescriptor {
    #[inline]
    pub(crate) const fn new(
        index: usize,
        name: &'static str,
        order: i32,
        settable: bool,
        type_info: &'static TypeInfo,
    ) -> Self {
        Self {
            index,
            name,
            order,
            settable,
            type_info,
        }
    }

    /// Declaration index, as accepted by `Struct::field_at`.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The sort key: the explicit order, or the declaration index.
    #[inline]
    pub const fn order(&self) -> i32 {
        self.order
    }

    /// `false` for read-only fields, which are skipped on read.
    #[inline]
    pub const fn is_settable(&self) -> bool {
        self.settable
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }
}

// -----------------------------------------------------------------------------
// TypeSchema

/// The packed fields of one struct type, in wire order.
#[derive(Debug, Clone)]
pub struct TypeSchema {
    type_path: &'static str,
    fields: Box<[FieldDescriptor]>,
}

impl TypeSchema {
    #[inline]
    pub(crate) fn new(type_path: &'static str, fields: Box<[FieldDescriptor]>) -> Self {
        Self { type_path, fields }
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Number of packed fields, the member count of the object header.
    #[inline]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a TypeSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = Iter<'a, FieldDescriptor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
