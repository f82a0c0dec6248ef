use alloc::boxed::Box;

use crate::Reflect;

/// Access to associative containers such as `HashMap<K, V>` and `BTreeMap<K, V>`.
///
/// Entries are rebuilt from boxed values: [`Map::new_entry`] produces a
/// default key and value of the right types, the caller fills them in, and
/// [`Map::insert_boxed`] moves them into the map.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::ops::Map;
///
/// let mut map: BTreeMap<u8, String> = BTreeMap::new();
///
/// let (mut key, mut value) = map.new_entry();
/// *key.downcast_mut::<u8>().unwrap() = 1;
/// value.downcast_mut::<String>().unwrap().push_str("one");
/// map.insert_boxed(key, value).unwrap();
///
/// assert_eq!(map.get(&1).map(String::as_str), Some("one"));
/// assert_eq!(map.iter_entries().count(), 1);
/// ```
pub trait Map: Reflect {
    /// Number of entries.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the entries in the container's own order.
    fn iter_entries(&self) -> MapIter<'_>;

    /// Replaces the content with an empty map able to hold `capacity` entries.
    fn reset(&mut self, capacity: usize);

    /// Creates a default key and a default value.
    fn new_entry(&self) -> (Box<dyn Reflect>, Box<dyn Reflect>);

    /// Inserts an entry, giving both values back if either has the wrong type.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)>;
}

/// Iterator over the entries of a [`Map`].
pub struct MapIter<'a> {
    inner: Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>,
    remaining: usize,
}

impl<'a> MapIter<'a> {
    /// Wraps an entry iterator yielding exactly `len` items.
    #[inline]
    pub fn new(
        inner: impl Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a,
        len: usize,
    ) -> Self {
        Self {
            inner: Box::new(inner),
            remaining: len,
        }
    }
}

impl<'a> Iterator for MapIter<'a> {
    type Item = (&'a dyn Reflect, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next();
        self.remaining -= entry.is_some() as usize;
        entry
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MapIter<'_> {}
