use vc_reflect::Reflect;
use vc_reflect::info::{ReflectKind, TypeInfo};
use vc_reflect::ops::{Optional, ReflectRef, ScalarRef, Struct};
use vc_reflect::registry::TypeRegistry;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::info_stack::TypeInfoStack;

use super::NullMarker;
use crate::buffer::ByteSink;
use crate::depth::DepthGuard;
use crate::error::{PackError, PackResult};
use crate::formatter::TypeTraitFormatter;
use crate::schema::SchemaCache;

// -----------------------------------------------------------------------------
// PackWriter

/// Writes reflected values to a [`ByteSink`].
///
/// Lives for one top-level call. Every `write_value` is bracketed by the
/// depth guard.
pub(crate) struct PackWriter<'a> {
    sink: &'a mut ByteSink,
    registry: &'a TypeRegistry,
    schemas: &'a SchemaCache,
    depth: DepthGuard,
    #[cfg(all(debug_assertions, feature = "debug"))]
    stack: TypeInfoStack,
}

impl<'a> PackWriter<'a> {
    pub fn new(
        sink: &'a mut ByteSink,
        registry: &'a TypeRegistry,
        schemas: &'a SchemaCache,
        max_depth: usize,
    ) -> Self {
        Self {
            sink,
            registry,
            schemas,
            depth: DepthGuard::new(max_depth),
            #[cfg(all(debug_assertions, feature = "debug"))]
            stack: TypeInfoStack::new(),
        }
    }

    /// Writes the root value, logging the visited types on failure.
    pub fn write_root(mut self, value: &dyn Reflect) -> PackResult<()> {
        let result = self.write_value(value);

        #[cfg(all(debug_assertions, feature = "debug"))]
        if let Err(err) = &result {
            log::debug!("pack failed: {err}\nstack:\n{:?}", self.stack);
        }

        result
    }

    pub fn write_value(&mut self, value: &dyn Reflect) -> PackResult<()> {
        let info = value.reflect_type_info();
        self.depth.enter(info.type_path())?;

        #[cfg(all(debug_assertions, feature = "debug"))]
        self.stack.push(info);

        let result = self.write_dispatch(value, info);
        self.depth.exit();

        #[cfg(all(debug_assertions, feature = "debug"))]
        if result.is_ok() {
            self.stack.pop();
        }

        result
    }

    fn write_dispatch(
        &mut self,
        value: &dyn Reflect,
        info: &'static TypeInfo,
    ) -> PackResult<()> {
        if let Some(formatter) = self
            .registry
            .get_type_trait::<TypeTraitFormatter>(value.ty_id())
        {
            return formatter.serialize(value, self.sink);
        }

        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => self.write_scalar(scalar),
            ReflectRef::Struct(value) => self.write_struct(value, info),
            ReflectRef::List(list) => {
                if let Some(bytes) = list.as_bytes() {
                    return self.sink.write_bytes(bytes);
                }
                self.sink.write_collection_header(list.len())?;
                list.iter().try_for_each(|item| self.write_value(item))
            }
            ReflectRef::Array(array) => {
                self.sink.write_collection_header(array.len())?;
                array.iter().try_for_each(|item| self.write_value(item))
            }
            ReflectRef::Map(map) => {
                self.sink.write_collection_header(map.len())?;
                map.iter_entries().try_for_each(|(key, value)| {
                    self.write_value(key)?;
                    self.write_value(value)
                })
            }
            ReflectRef::Optional(value) => self.write_optional(value, info),
            ReflectRef::Pointer(pointer) => self.write_value(pointer.pointee()),
            ReflectRef::Opaque(_) => Err(PackError::UnsupportedType {
                type_path: info.type_path(),
                kind: ReflectKind::Opaque,
            }),
        }
    }

    fn write_scalar(&mut self, scalar: ScalarRef<'_>) -> PackResult<()> {
        let sink = &mut *self.sink;
        match scalar {
            ScalarRef::Bool(v) => sink.write_bool(v),
            ScalarRef::I8(v) => sink.write_i8(v),
            ScalarRef::I16(v) => sink.write_i16(v),
            ScalarRef::I32(v) => sink.write_i32(v),
            ScalarRef::I64(v) => sink.write_i64(v),
            ScalarRef::Isize(v) => sink.write_isize(v),
            ScalarRef::U8(v) => sink.write_u8(v),
            ScalarRef::U16(v) => sink.write_u16(v),
            ScalarRef::U32(v) => sink.write_u32(v),
            ScalarRef::U64(v) => sink.write_u64(v),
            ScalarRef::Usize(v) => sink.write_usize(v),
            ScalarRef::F32(v) => sink.write_f32(v),
            ScalarRef::F64(v) => sink.write_f64(v),
            ScalarRef::String(v) => return sink.write_string(v),
        }
        Ok(())
    }

    fn write_struct(&mut self, value: &dyn Struct, info: &'static TypeInfo) -> PackResult<()> {
        let type_path = info.type_path();
        let struct_info = info
            .as_struct()
            .map_err(|_| PackError::InvalidTarget { type_path })?;
        let schema = self.schemas.get_or_resolve(struct_info);

        self.sink.write_object_header(schema.len())?;
        for field in schema.iter() {
            let field_value = value
                .field_at(field.index())
                .ok_or(PackError::InvalidTarget { type_path })?;
            self.write_value(field_value)?;
        }
        Ok(())
    }

    fn write_optional(
        &mut self,
        value: &dyn Optional,
        info: &'static TypeInfo,
    ) -> PackResult<()> {
        if let Some(inner) = value.value() {
            return self.write_value(inner);
        }

        let type_path = info.type_path();
        let some_info = info
            .as_optional()
            .map_err(|_| PackError::InvalidTarget { type_path })?
            .some_info();

        match NullMarker::of(some_info) {
            NullMarker::Collection => self.sink.write_null_collection(),
            NullMarker::String => self.sink.write_null_string(),
            NullMarker::Object => self.sink.write_null_object(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;

    use crate::{ByteSink, ByteSource, MemoryPack, PackConfig, PackError};
    use crate::{PackFormatter, PackResult, TypeTraitFormatter};

    fn pack<T: vc_reflect::Reflect + vc_reflect::registry::GetTypeMeta>(value: &T) -> Vec<u8> {
        MemoryPack::new().serialize(value).unwrap()
    }

    #[derive(Reflect, Default)]
    struct Tagged {
        #[reflect(order = 2)]
        a: u8,
        #[reflect(order = 1)]
        b: u8,
        #[reflect(order = 0)]
        c: u8,
    }

    #[derive(Reflect, Default)]
    struct Pair(u8, i8);

    #[derive(Reflect, Default)]
    struct Unit;

    #[derive(Reflect, Default)]
    struct Wide(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8);

    #[derive(Reflect, Default)]
    struct Node {
        value: i32,
        next: Option<Box<Node>>,
    }

    fn chain(len: usize) -> Node {
        let mut head = Node::default();
        for value in 1..len {
            head = Node {
                value: value as i32,
                next: Some(Box::new(head)),
            };
        }
        head
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(type_trait = TypeTraitFormatter)]
    struct Glyph {
        code: char,
    }

    impl PackFormatter for Glyph {
        fn serialize(&self, sink: &mut ByteSink) -> PackResult<()> {
            sink.write_u32(u32::from(self.code));
            Ok(())
        }

        fn deserialize(&mut self, source: &mut ByteSource<'_>) -> PackResult<()> {
            let code = source.read_u32()?;
            self.code = char::from_u32(code).ok_or_else(|| PackError::custom("invalid char"))?;
            Ok(())
        }
    }

    #[test]
    fn scalars_are_little_endian() {
        assert_eq!(pack(&0x0102_0304_u32), [4, 3, 2, 1]);
        assert_eq!(pack(&-2_i16), [0xFE, 0xFF]);
        assert_eq!(pack(&true), [1]);
        assert_eq!(pack(&5_usize), [5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(pack(&1.0_f32), [0, 0, 0x80, 0x3F]);
    }

    #[test]
    fn strings_and_bytes() {
        assert_eq!(pack(&String::new()), [0, 0, 0, 0]);
        assert_eq!(
            pack(&String::from("hi")),
            [0xFD, 0xFF, 0xFF, 0xFF, 2, 0, 0, 0, b'h', b'i']
        );
        assert_eq!(pack(&vec![1_u8, 2]), [2, 0, 0, 0, 1, 2]);
        assert_eq!(pack(&Vec::<u8>::new()), [0, 0, 0, 0]);
        assert_eq!(pack(&vec![1_u16, 2]), [2, 0, 0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn structs_use_object_headers() {
        assert_eq!(pack(&Unit), [0]);
        assert_eq!(pack(&Pair(7, -1)), [2, 7, 0xFF]);
        assert_eq!(pack(&[3_u8, 4]), [2, 0, 0, 0, 3, 4]);
    }

    #[test]
    fn tagged_order() {
        let value = Tagged { a: 0xA, b: 0xB, c: 0xC };
        assert_eq!(pack(&value), [3, 0xC, 0xB, 0xA]);
    }

    #[test]
    fn null_markers_follow_inner_kind() {
        assert_eq!(pack(&None::<Vec<u8>>), [0xFF; 4]);
        assert_eq!(pack(&None::<[u16; 2]>), [0xFF]);
        assert_eq!(pack(&None::<Box<Vec<String>>>), [0xFF; 4]);
        assert_eq!(pack(&None::<String>), [0xFF; 4]);
        assert_eq!(pack(&None::<u64>), [0xFF]);
        assert_eq!(pack(&None::<Pair>), [0xFF]);
        assert_eq!(pack(&Some(9_u16)), [9, 0]);
    }

    #[test]
    fn linked_list() {
        assert_eq!(pack(&chain(2)), [2, 1, 0, 0, 0, 2, 0, 0, 0, 0, 0xFF]);
    }

    #[test]
    fn too_many_members() {
        let engine = MemoryPack::new();
        assert_eq!(
            engine.serialize(&Wide::default()),
            Err(PackError::SchemaTooLarge { count: 250 })
        );
    }

    #[test]
    fn opaque_without_formatter() {
        assert!(matches!(
            MemoryPack::new().serialize(&'x'),
            Err(PackError::UnsupportedType { type_path: "char", .. })
        ));
    }

    #[test]
    fn formatter_replaces_fields() {
        // `char` has no wire format, so reaching the field would fail.
        let bytes = pack(&vec![Glyph { code: 'A' }]);
        assert_eq!(bytes, [1, 0, 0, 0, 0x41, 0, 0, 0]);
    }

    #[test]
    fn configured_depth_limit() {
        let engine = MemoryPack::with_config(PackConfig::new().with_max_depth(3));

        assert!(engine.serialize(&chain(1)).is_ok());
        assert!(matches!(
            engine.serialize(&chain(2)),
            Err(PackError::DepthExceeded { max_depth: 3, .. })
        ));
    }
}
