use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vc_reflect::info::StructInfo;
use vc_utils::TypeIdMap;

use super::{TypeSchema, resolve_schema};

// -----------------------------------------------------------------------------
// SchemaCache

/// Read-through cache of resolved [`TypeSchema`]s, keyed by type.
///
/// A hit only takes the read lock. A miss resolves the schema outside any
/// lock and publishes it under the write lock; if another thread published
/// first, its schema is kept and returned to every caller.
///
/// # Examples
///
/// ```
/// use vc_pack::schema::SchemaCache;
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Point { x: f32, y: f32 }
///
/// let cache = SchemaCache::new();
/// let info = Point::type_info().as_struct().unwrap();
///
/// let first = cache.get_or_resolve(info);
/// let second = cache.get_or_resolve(info);
///
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct SchemaCache {
    schemas: RwLock<TypeIdMap<Arc<TypeSchema>>>,
}

impl Default for SchemaCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaCache {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            schemas: RwLock::new(TypeIdMap::new()),
        }
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, TypeIdMap<Arc<TypeSchema>>> {
        self.schemas.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, TypeIdMap<Arc<TypeSchema>>> {
        self.schemas.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached schema of `type_id`, if any.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<Arc<TypeSchema>> {
        self.read().get(&type_id).cloned()
    }

    /// Returns the schema of the struct described by `info`, resolving and
    /// publishing it on first use.
    pub fn get_or_resolve(&self, info: &StructInfo) -> Arc<TypeSchema> {
        let type_id = info.type_id();

        if let Some(schema) = self.get(type_id) {
            return schema;
        }

        let resolved = resolve_schema(info);

        let mut schemas = self.write();
        let schema = schemas.get_or_insert(type_id, || {
            log::debug!(
                "resolved schema of `{}` with {} fields",
                resolved.type_path(),
                resolved.len(),
            );
            Arc::new(resolved)
        });
        Arc::clone(schema)
    }

    /// Returns `true` if the schema of `type_id` is cached.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.read().contains(&type_id)
    }

    /// Number of cached schemas.
    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Drops every cached schema. Schemas already handed out stay valid.
    #[inline]
    pub fn clear(&self) {
        self.write().clear();
    }
}

impl fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.read().values().map(|schema| schema.type_path()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::any::TypeId;
    use std::sync::Barrier;

    use super::SchemaCache;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    #[derive(Reflect)]
    struct Sample {
        #[reflect(order = 3)]
        a: u32,
        b: String,
    }

    #[test]
    fn concurrent_resolution_publishes_once() {
        const THREADS: usize = 8;

        let cache = SchemaCache::new();
        let barrier = Barrier::new(THREADS);
        let info = Sample::type_info().as_struct().unwrap();

        let schemas: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get_or_resolve(info)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.len(), 1);
        let published = cache.get(TypeId::of::<Sample>()).unwrap();
        for schema in &schemas {
            assert!(Arc::ptr_eq(schema, &published));
        }

        let names: Vec<_> = published.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn clear_and_contains() {
        let cache = SchemaCache::default();
        assert!(cache.is_empty());

        let info = Sample::type_info().as_struct().unwrap();
        let kept = cache.get_or_resolve(info);
        assert!(cache.contains(TypeId::of::<Sample>()));

        cache.clear();
        assert!(!cache.contains(TypeId::of::<Sample>()));
        assert_eq!(kept.len(), 2);
    }
}
