use alloc::vec::Vec;

use crate::Reflect;

/// Access to growable sequences such as `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::List;
///
/// let mut list: Vec<u16> = vec![9, 9, 9];
/// list.resize_default(2);
/// assert_eq!(list, vec![0, 0]);
/// assert_eq!(List::len(&list), 2);
/// ```
pub trait List: Reflect {
    /// Number of items.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Iterates over the items in order.
    fn iter(&self) -> ListIter<'_>;

    /// Removes all items.
    fn clear(&mut self);

    /// Replaces the content with `len` default items, allocated exactly once.
    fn resize_default(&mut self, len: usize);

    /// Returns the items as a byte slice when the list is a `Vec<u8>`.
    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Returns the underlying `Vec<u8>` when the list is one.
    #[inline]
    fn as_bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        None
    }
}

/// Iterator over the items of a [`List`].
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListIter<'_> {}
