use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Describes one declared field of a struct.
///
/// Tuple-struct fields are named by their position (`"0"`, `"1"`, …).
///
/// Besides the name and declaration index, a field carries the serialization
/// markers set through `#[reflect(...)]`:
///
/// - `order = N`: explicit position in serialized output.
/// - `skip`: not reflected at all, [`NamedField::type_info`] is `None`.
/// - `read_only`: reflected and written, but ignored when reading back.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::NamedField;
///
/// let field = NamedField::new::<i32>("id", 0).with_order(3);
/// assert_eq!(field.name(), "id");
/// assert_eq!(field.order(), Some(3));
/// assert!(!field.is_skipped());
///
/// let hidden = NamedField::skipped("cache", 1);
/// assert!(hidden.type_info().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    index: usize,
    order: Option<i32>,
    read_only: bool,
    // `None` for skipped fields, whose type need not be reflected.
    type_info: Option<fn() -> &'static TypeInfo>,
}

impl NamedField {
    /// Creates a reflected field of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            order: None,
            read_only: false,
            type_info: Some(T::type_info),
        }
    }

    /// Creates a field that is excluded from reflection.
    #[inline]
    pub const fn skipped(name: &'static str, index: usize) -> Self {
        Self {
            name,
            index,
            order: None,
            read_only: false,
            type_info: None,
        }
    }

    /// Sets an explicit serialization order.
    #[inline]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Marks the field as read-only for deserialization.
    #[inline]
    pub const fn with_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declaration position of the field, counting skipped fields.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub const fn order(&self) -> Option<i32> {
        self.order
    }

    #[inline(always)]
    pub const fn is_skipped(&self) -> bool {
        self.type_info.is_none()
    }

    #[inline(always)]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the [`TypeInfo`] of the field type, `None` if skipped.
    #[inline]
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.type_info.map(|f| f())
    }
}
