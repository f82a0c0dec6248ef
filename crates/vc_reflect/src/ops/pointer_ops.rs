use crate::Reflect;

/// Access to owning pointers that always hold a value, such as `Box<T>`.
pub trait Pointer: Reflect {
    /// Returns the pointed-to value.
    fn pointee(&self) -> &dyn Reflect;

    /// Returns the pointed-to value mutably.
    ///
    /// `None` when the pointee is shared with other owners, as for an `Arc`
    /// with more than one strong reference.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;
}
