use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// Per-type storage, such as type metadata or resolved schemas.
///
/// A [`TypeId`] is already a well-mixed hash, so keys go through
/// [`NoOpHashState`] unchanged. [`new`](TypeIdMap::new) is `const`, which
/// lets the map live inside `static` cells and locks.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_utils::TypeIdMap;
///
/// let mut schemas = TypeIdMap::new();
/// assert!(schemas.try_insert(TypeId::of::<u8>(), || "u8 schema"));
/// assert!(!schemas.try_insert(TypeId::of::<u8>(), || unreachable!()));
///
/// assert_eq!(schemas.get(&TypeId::of::<u8>()), Some(&"u8 schema"));
/// assert_eq!(schemas.len(), 1);
/// ```
pub struct TypeIdMap<V> {
    entries: HashMap<TypeId, V, NoOpHashState>,
}

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(NoOpHashState),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, NoOpHashState),
        }
    }

    /// Stores `make()` under `type_id` unless an entry exists.
    ///
    /// Returns whether `make` ran.
    pub fn try_insert(&mut self, type_id: TypeId, make: impl FnOnce() -> V) -> bool {
        let Entry::Vacant(slot) = self.entries.entry(type_id) else {
            return false;
        };
        slot.insert(make());
        true
    }

    /// Returns the entry of `type_id`, storing `make()` first when absent.
    ///
    /// An existing entry is never replaced.
    pub fn get_or_insert(&mut self, type_id: TypeId, make: impl FnOnce() -> V) -> &mut V {
        self.entries.entry(type_id).or_insert_with(make)
    }

    /// Stores `value`, returning the entry it replaced.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.entries.insert(type_id, value)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.entries.get(type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: &TypeId) -> Option<&mut V> {
        self.entries.get_mut(type_id)
    }

    #[inline]
    pub fn remove(&mut self, type_id: &TypeId) -> Option<V> {
        self.entries.remove(type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.entries.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &V)> {
        self.entries.iter()
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn first_value_is_kept() {
        let mut map = TypeIdMap::new();
        *map.get_or_insert(TypeId::of::<i32>(), || 1) += 1;
        assert_eq!(*map.get_or_insert(TypeId::of::<i32>(), || 100), 2);
        assert!(!map.try_insert(TypeId::of::<i32>(), || 7));
    }

    #[test]
    fn insert_remove_clear() {
        let mut map = TypeIdMap::with_capacity(2);
        assert_eq!(map.insert(TypeId::of::<u8>(), 'a'), None);
        assert_eq!(map.insert(TypeId::of::<u8>(), 'b'), Some('a'));
        map.insert(TypeId::of::<u16>(), 'c');

        assert_eq!(map.remove(&TypeId::of::<u16>()), Some('c'));
        assert!(!map.contains(&TypeId::of::<u16>()));
        assert_eq!(map.values().copied().collect::<alloc::vec::Vec<_>>(), ['b']);

        map.clear();
        assert!(map.is_empty());
    }
}
