use core::any::TypeId;

use vc_reflect::Reflect;
use vc_reflect::info::{ReflectKind, StructInfo, TypeInfo};
use vc_reflect::ops::{Array, List, Map, Optional, ReflectMut, ScalarMut, Struct};
use vc_reflect::registry::TypeRegistry;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::info_stack::TypeInfoStack;

use super::NullMarker;
use crate::buffer::ByteSource;
use crate::error::{PackError, PackResult};
use crate::formatter::TypeTraitFormatter;
use crate::schema::SchemaCache;

// -----------------------------------------------------------------------------
// PackReader

/// Reads encoded values into reflected targets, in place.
///
/// Containers are sized exactly to their headers. Struct fields that are
/// not settable are consumed with [`skip_value`](Self::skip_value).
pub(crate) struct PackReader<'a, 'de> {
    pub(super) source: &'a mut ByteSource<'de>,
    pub(super) registry: &'a TypeRegistry,
    pub(super) schemas: &'a SchemaCache,
    #[cfg(all(debug_assertions, feature = "debug"))]
    pub(super) stack: TypeInfoStack,
}

impl<'a, 'de> PackReader<'a, 'de> {
    pub fn new(
        source: &'a mut ByteSource<'de>,
        registry: &'a TypeRegistry,
        schemas: &'a SchemaCache,
    ) -> Self {
        Self {
            source,
            registry,
            schemas,
            #[cfg(all(debug_assertions, feature = "debug"))]
            stack: TypeInfoStack::new(),
        }
    }

    /// Reads the root value, logging the visited types on failure.
    pub fn read_root(mut self, target: &mut dyn Reflect) -> PackResult<()> {
        let result = self.read_value(target);

        #[cfg(all(debug_assertions, feature = "debug"))]
        if let Err(err) = &result {
            log::debug!("unpack failed: {err}\nstack:\n{:?}", self.stack);
        }

        result
    }

    pub fn read_value(&mut self, target: &mut dyn Reflect) -> PackResult<()> {
        let info = target.reflect_type_info();

        #[cfg(all(debug_assertions, feature = "debug"))]
        self.stack.push(info);

        let result = self.read_dispatch(target, info);

        #[cfg(all(debug_assertions, feature = "debug"))]
        if result.is_ok() {
            self.stack.pop();
        }

        result
    }

    #[inline]
    pub(super) fn formatter(&self, type_id: TypeId) -> Option<&'a TypeTraitFormatter> {
        let registry: &'a TypeRegistry = self.registry;
        registry.get_type_trait::<TypeTraitFormatter>(type_id)
    }

    /// Returns `true` if a value of this type can be encoded in zero bytes.
    ///
    /// Only formatters can do that, possibly behind `Option` or a pointer.
    fn may_be_empty(&self, info: &TypeInfo) -> bool {
        match info {
            _ if self.formatter(info.type_id()).is_some() => true,
            TypeInfo::Optional(info) => self.may_be_empty(info.some_info()),
            TypeInfo::Pointer(info) => self.may_be_empty(info.pointee_info()),
            _ => false,
        }
    }

    /// Rejects a header that announces more elements than bytes remain.
    pub(super) fn check_len(&self, len: usize, items: &[&TypeInfo]) -> PackResult<()> {
        let remaining = self.source.remaining();
        if len > remaining && !items.iter().all(|info| self.may_be_empty(info)) {
            return Err(PackError::TruncatedInput {
                needed: len,
                remaining,
            });
        }
        Ok(())
    }

    fn read_dispatch(
        &mut self,
        target: &mut dyn Reflect,
        info: &'static TypeInfo,
    ) -> PackResult<()> {
        if let Some(formatter) = self.formatter(target.ty_id()) {
            return formatter.deserialize(target, self.source);
        }

        let type_path = info.type_path();
        let invalid = |_| PackError::InvalidTarget { type_path };

        match target.reflect_mut() {
            ReflectMut::Scalar(scalar) => self.read_scalar(scalar),
            ReflectMut::Struct(target) => {
                self.read_struct(target, type_path, info.as_struct().map_err(invalid)?)
            }
            ReflectMut::List(list) => {
                let item_info = info.as_list().map_err(invalid)?.item_info();
                self.read_list(list, item_info)
            }
            ReflectMut::Array(array) => self.read_array(array, type_path),
            ReflectMut::Map(map) => {
                let map_info = info.as_map().map_err(invalid)?;
                self.read_map(map, type_path, map_info.key_info(), map_info.value_info())
            }
            ReflectMut::Optional(target) => {
                let some_info = info.as_optional().map_err(invalid)?.some_info();
                self.read_optional(target, some_info)
            }
            ReflectMut::Pointer(pointer) => match pointer.pointee_mut() {
                Some(pointee) => self.read_value(pointee),
                None => Err(PackError::InvalidTarget { type_path }),
            },
            ReflectMut::Opaque(_) => Err(PackError::UnsupportedType {
                type_path,
                kind: ReflectKind::Opaque,
            }),
        }
    }

    fn read_scalar(&mut self, scalar: ScalarMut<'_>) -> PackResult<()> {
        let source = &mut *self.source;
        match scalar {
            ScalarMut::Bool(v) => *v = source.read_bool()?,
            ScalarMut::I8(v) => *v = source.read_i8()?,
            ScalarMut::I16(v) => *v = source.read_i16()?,
            ScalarMut::I32(v) => *v = source.read_i32()?,
            ScalarMut::I64(v) => *v = source.read_i64()?,
            ScalarMut::Isize(v) => *v = source.read_isize()?,
            ScalarMut::U8(v) => *v = source.read_u8()?,
            ScalarMut::U16(v) => *v = source.read_u16()?,
            ScalarMut::U32(v) => *v = source.read_u32()?,
            ScalarMut::U64(v) => *v = source.read_u64()?,
            ScalarMut::Usize(v) => *v = source.read_usize()?,
            ScalarMut::F32(v) => *v = source.read_f32()?,
            ScalarMut::F64(v) => *v = source.read_f64()?,
            ScalarMut::String(v) => {
                let text = source.read_str()?;
                v.clear();
                v.push_str(text);
            }
        }
        Ok(())
    }

    fn read_struct(
        &mut self,
        target: &mut dyn Struct,
        type_path: &'static str,
        info: &StructInfo,
    ) -> PackResult<()> {
        let schema = self.schemas.get_or_resolve(info);

        let Some(count) = self.source.read_object_header()? else {
            return Ok(());
        };
        if usize::from(count) != schema.len() {
            return Err(PackError::SchemaMismatch {
                type_path,
                expected: schema.len(),
                found: usize::from(count),
            });
        }

        for field in schema.iter() {
            if !field.is_settable() {
                self.skip_value(field.type_info())?;
                continue;
            }
            let value = target
                .field_at_mut(field.index())
                .ok_or(PackError::InvalidTarget { type_path })?;
            self.read_value(value)?;
        }
        Ok(())
    }

    fn read_list(&mut self, list: &mut dyn List, item_info: &'static TypeInfo) -> PackResult<()> {
        if let Some(bytes) = list.as_bytes_mut() {
            match self.source.read_bytes()? {
                Some(data) => *bytes = data.to_vec(),
                None => bytes.clear(),
            }
            return Ok(());
        }

        let len = self.source.read_collection_header()?.unwrap_or(0);
        self.check_len(len, &[item_info])?;

        list.clear();
        list.resize_default(len);
        for index in 0..len {
            let item = list.get_mut(index).ok_or(PackError::InvalidTarget {
                type_path: item_info.type_path(),
            })?;
            self.read_value(item)?;
        }
        Ok(())
    }

    fn read_array(&mut self, array: &mut dyn Array, type_path: &'static str) -> PackResult<()> {
        let Some(len) = self.source.read_collection_header()? else {
            return Ok(());
        };
        if len != array.len() {
            return Err(PackError::SchemaMismatch {
                type_path,
                expected: array.len(),
                found: len,
            });
        }

        for index in 0..len {
            let item = array
                .get_mut(index)
                .ok_or(PackError::InvalidTarget { type_path })?;
            self.read_value(item)?;
        }
        Ok(())
    }

    fn read_map(
        &mut self,
        map: &mut dyn Map,
        type_path: &'static str,
        key_info: &'static TypeInfo,
        value_info: &'static TypeInfo,
    ) -> PackResult<()> {
        let len = self.source.read_collection_header()?.unwrap_or(0);
        self.check_len(len, &[key_info, value_info])?;

        map.reset(len);
        for _ in 0..len {
            let (mut key, mut value) = map.new_entry();
            self.read_value(&mut *key)?;
            self.read_value(&mut *value)?;
            map.insert_boxed(key, value)
                .map_err(|_| PackError::InvalidTarget { type_path })?;
        }
        Ok(())
    }

    fn read_optional(
        &mut self,
        target: &mut dyn Optional,
        some_info: &'static TypeInfo,
    ) -> PackResult<()> {
        let null_width = match NullMarker::of(some_info) {
            NullMarker::Collection if self.source.peek_null_collection() => Some(4),
            NullMarker::Object if self.source.peek_null_object() => Some(1),
            _ => None,
        };

        if let Some(width) = null_width {
            self.source.skip(width)?;
            target.set_none();
            return Ok(());
        }
        self.read_value(target.insert_default())
    }
}
