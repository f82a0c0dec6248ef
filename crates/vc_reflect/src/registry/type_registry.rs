use alloc::string::String;
use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use vc_utils::TypeIdMap;
use vc_utils::hash::HashMap;

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A container of [`TypeMeta`], keyed by [`TypeId`] and by type path.
///
/// # Examples
///
/// ```
/// use vc_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<Vec<Option<u16>>>();
///
/// // Dependencies are registered along with the root type.
/// assert!(registry.contains(core::any::TypeId::of::<Option<u16>>()));
/// assert!(registry.contains(core::any::TypeId::of::<u16>()));
/// assert!(registry.get_with_type_path("u16").is_some());
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
        }
    }

    /// Creates a registry with the scalar types registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    // Returns `false` without calling `get_type_meta` if the type exists.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            self.type_path_to_id.insert(meta.type_path(), type_id);
            meta
        })
    }

    /// Registers `T` and, the first time, its dependencies.
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Inserts a [`TypeMeta`], replacing any existing entry for the same type.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        let type_id = type_meta.type_id();
        self.type_path_to_id.insert(type_meta.type_path(), type_id);
        self.type_meta_table.insert(type_id, type_meta);
    }

    /// Attaches capability `D` to the already registered type `T`.
    ///
    /// Returns `false` if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) -> bool {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => {
                type_meta.insert_trait(D::from_type());
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns capability `T` of the type with the given [`TypeId`].
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Iterates over the types supporting capability `T`.
    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table.values().filter_map(|item| {
            let type_trait = item.get_trait::<T>();
            type_trait.map(|t| (item, t))
        })
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A [`TypeRegistry`] shared behind `Arc<RwLock<_>>`.
///
/// Poisoned locks are recovered, a panic while registering cannot leave
/// a `TypeMeta` half inserted.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Wraps an existing registry.
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().type_path_to_id.keys().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{TypeRegistry, TypeRegistryArc};
    use crate::derive::Reflect;
    use crate::registry::FromType;
    use crate::info::Typed;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    #[derive(Clone)]
    struct TypeName(&'static str);

    impl<T: Typed> FromType<T> for TypeName {
        fn from_type() -> Self {
            TypeName(T::type_info().type_name())
        }
    }

    #[derive(Reflect, Default)]
    #[reflect(type_trait = TypeName)]
    struct Inner {
        value: Option<Box<u64>>,
    }

    #[derive(Reflect, Default)]
    struct Outer {
        items: Vec<Inner>,
        label: String,
    }

    #[test]
    fn register_walks_dependencies() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Outer>();

        for id in [
            TypeId::of::<Outer>(),
            TypeId::of::<Vec<Inner>>(),
            TypeId::of::<Inner>(),
            TypeId::of::<Option<Box<u64>>>(),
            TypeId::of::<Box<u64>>(),
            TypeId::of::<u64>(),
            TypeId::of::<String>(),
        ] {
            assert!(registry.contains(id));
        }
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn derived_type_traits_are_inserted() {
        let mut registry = TypeRegistry::new();
        registry.register::<Outer>();

        let name = registry.get_type_trait::<TypeName>(TypeId::of::<Inner>());
        assert_eq!(name.map(|n| n.0), Some("Inner"));
        assert!(registry.get_type_trait::<TypeName>(TypeId::of::<Outer>()).is_none());
        assert_eq!(registry.iter_with_trait::<TypeName>().count(), 1);
    }

    #[test]
    fn runtime_type_traits() {
        let mut registry = TypeRegistry::empty();
        assert!(!registry.register_type_trait::<u8, TypeName>());
        registry.register::<u8>();
        assert!(registry.register_type_trait::<u8, TypeName>());
        assert!(registry.get_type_trait::<TypeName>(TypeId::of::<u8>()).is_some());
    }

    #[test]
    fn shared_registry() {
        let shared = TypeRegistryArc::default();
        shared.write().register::<i32>();
        let clone = shared.clone();
        assert!(clone.read().contains(TypeId::of::<i32>()));
    }
}
