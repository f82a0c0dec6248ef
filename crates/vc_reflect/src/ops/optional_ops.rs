use crate::Reflect;

/// Access to values that may be absent, such as `Option<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Optional;
///
/// let mut value: Option<i64> = None;
/// assert!(Optional::value(&value).is_none());
///
/// *value.insert_default().downcast_mut::<i64>().unwrap() = 5;
/// assert_eq!(value, Some(5));
///
/// value.set_none();
/// assert_eq!(value, None);
/// ```
pub trait Optional: Reflect {
    /// Returns the contained value, if any.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the contained value mutably, if any.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Drops the contained value.
    fn set_none(&mut self);

    /// Replaces the content with a default value and returns it.
    fn insert_default(&mut self) -> &mut dyn Reflect;
}
