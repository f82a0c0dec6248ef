use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapIter, ReflectMut, ReflectRef};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// The shared part of every map impl, `$reset` rebuilds the map for `capacity`.
macro_rules! impl_reflect_map {
    (
        [$($generics:tt)*] $ty:ty where [$($bounds:tt)*],
        $reset:expr
    ) => {
        impl<$($generics)*> Typed for $ty where $($bounds)* {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<$($generics)*> Reflect for $ty where $($bounds)* {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Map(self)
            }
        }

        impl<$($generics)*> Map for $ty where $($bounds)* {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter_entries(&self) -> MapIter<'_> {
                MapIter::new(
                    <$ty>::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
                    <$ty>::len(self),
                )
            }

            fn reset(&mut self, capacity: usize) {
                let reset: fn(usize) -> Self = $reset;
                *self = reset(capacity);
            }

            fn new_entry(&self) -> (Box<dyn Reflect>, Box<dyn Reflect>) {
                (Box::new(K::default()), Box::new(V::default()))
            }

            fn insert_boxed(
                &mut self,
                key: Box<dyn Reflect>,
                value: Box<dyn Reflect>,
            ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)> {
                if !key.is::<K>() || !value.is::<V>() {
                    return Err((key, value));
                }
                match (key.downcast::<K>(), value.downcast::<V>()) {
                    (Ok(key), Ok(value)) => {
                        self.insert(*key, *value);
                        Ok(())
                    }
                    (key, value) => Err((
                        key.map_or_else(|k| k, |k| k as Box<dyn Reflect>),
                        value.map_or_else(|v| v, |v| v as Box<dyn Reflect>),
                    )),
                }
            }
        }

        impl<$($generics)*> GetTypeMeta for $ty
        where
            $($bounds)*
            K: GetTypeMeta,
            V: GetTypeMeta,
        {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<K>();
                registry.register::<V>();
            }
        }
    };
}

impl_reflect_map!(
    [K, V, S] HashMap<K, V, S> where [
        K: Reflect + Typed + Default + Eq + Hash,
        V: Reflect + Typed + Default,
        S: BuildHasher + Default + Send + Sync + 'static,
    ],
    |capacity| HashMap::with_capacity_and_hasher(capacity, S::default())
);

impl_reflect_map!(
    [K, V] BTreeMap<K, V> where [
        K: Reflect + Typed + Default + Ord,
        V: Reflect + Typed + Default,
    ],
    |_| BTreeMap::new()
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::Map;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    #[test]
    fn insert_boxed_rejects_wrong_types() {
        let mut map: HashMap<u8, u8> = HashMap::new();
        let key: Box<dyn Reflect> = Box::new(1_u16);
        let value: Box<dyn Reflect> = Box::new(2_u8);
        let (key, value) = map.insert_boxed(key, value).unwrap_err();
        assert!(key.is::<u16>());
        assert!(value.is::<u8>());
        assert!(map.is_empty());
    }

    #[test]
    fn reset_and_refill() {
        let mut map: BTreeMap<String, i32> = BTreeMap::new();
        map.insert("old".into(), 1);
        map.reset(2);
        assert!(Map::is_empty(&map));

        let (mut key, mut value) = map.new_entry();
        *key.downcast_mut::<String>().unwrap() = "new".into();
        *value.downcast_mut::<i32>().unwrap() = 2;
        map.insert_boxed(key, value).unwrap();

        let entries: Vec<_> = map
            .iter_entries()
            .map(|(k, v)| (k.downcast_ref::<String>().unwrap().clone(), *v.downcast_ref::<i32>().unwrap()))
            .collect();
        assert_eq!(entries, [("new".into(), 2)]);
    }
}
