use vc_reflect::info::{ReflectKind, TypeInfo};

use super::{NullMarker, PackReader};
use crate::error::{PackError, PackResult};

impl PackReader<'_, '_> {
    /// Consumes one encoded value of the described type without a target.
    ///
    /// Follows the same dispatch as reading, so the cursor ends exactly
    /// where a read would have left it.
    pub fn skip_value(&mut self, info: &'static TypeInfo) -> PackResult<()> {
        #[cfg(all(debug_assertions, feature = "debug"))]
        self.stack.push(info);

        let result = self.skip_dispatch(info);

        #[cfg(all(debug_assertions, feature = "debug"))]
        if result.is_ok() {
            self.stack.pop();
        }

        result
    }

    fn skip_dispatch(&mut self, info: &'static TypeInfo) -> PackResult<()> {
        if let Some(formatter) = self.formatter(info.type_id()) {
            return formatter.skip(self.source);
        }

        match info {
            TypeInfo::Scalar(scalar) => match scalar.scalar_kind().fixed_width() {
                Some(width) => self.source.skip(width),
                None => self.source.read_str().map(drop),
            },
            TypeInfo::List(list) if list.item_is::<u8>() => self.source.read_bytes().map(drop),
            TypeInfo::List(list) => self.skip_items(list.item_info()),
            TypeInfo::Array(array) => {
                let Some(len) = self.source.read_collection_header()? else {
                    return Ok(());
                };
                if len != array.capacity() {
                    return Err(PackError::SchemaMismatch {
                        type_path: info.type_path(),
                        expected: array.capacity(),
                        found: len,
                    });
                }
                (0..len).try_for_each(|_| self.skip_value(array.item_info()))
            }
            TypeInfo::Map(map) => {
                let len = self.source.read_collection_header()?.unwrap_or(0);
                self.check_len(len, &[map.key_info(), map.value_info()])?;
                for _ in 0..len {
                    self.skip_value(map.key_info())?;
                    self.skip_value(map.value_info())?;
                }
                Ok(())
            }
            TypeInfo::Struct(struct_info) => {
                let schema = self.schemas.get_or_resolve(struct_info);
                let Some(count) = self.source.read_object_header()? else {
                    return Ok(());
                };
                if usize::from(count) != schema.len() {
                    return Err(PackError::SchemaMismatch {
                        type_path: info.type_path(),
                        expected: schema.len(),
                        found: usize::from(count),
                    });
                }
                schema
                    .iter()
                    .try_for_each(|field| self.skip_value(field.type_info()))
            }
            TypeInfo::Optional(optional) => {
                let some_info = optional.some_info();
                match NullMarker::of(some_info) {
                    NullMarker::Collection if self.source.peek_null_collection() => {
                        self.source.skip(4)
                    }
                    NullMarker::Object if self.source.peek_null_object() => self.source.skip(1),
                    _ => self.skip_value(some_info),
                }
            }
            TypeInfo::Pointer(pointer) => self.skip_value(pointer.pointee_info()),
            TypeInfo::Opaque(_) => Err(PackError::UnsupportedType {
                type_path: info.type_path(),
                kind: ReflectKind::Opaque,
            }),
        }
    }

    fn skip_items(&mut self, item_info: &'static TypeInfo) -> PackResult<()> {
        let len = self.source.read_collection_header()?.unwrap_or(0);
        self.check_len(len, &[item_info])?;
        (0..len).try_for_each(|_| self.skip_value(item_info))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;
    use vc_reflect::registry::TypeRegistry;

    use crate::buffer::ByteSource;
    use crate::schema::SchemaCache;
    use crate::walker::PackReader;
    use crate::{MemoryPack, PackError};

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Inner {
        name: String,
        tags: Vec<u16>,
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Outer {
        id: u32,
        inner: Option<Inner>,
        blob: Vec<u8>,
        map: BTreeMap<u8, String>,
        grid: [i64; 2],
        boxed: Option<Box<f64>>,
        label: Option<String>,
    }

    fn skip_all<T: Typed>(bytes: &[u8]) -> Result<usize, PackError> {
        let registry = TypeRegistry::new();
        let schemas = SchemaCache::new();
        let mut source = ByteSource::new(bytes);
        PackReader::new(&mut source, &registry, &schemas).skip_value(T::type_info())?;
        Ok(source.position())
    }

    #[test]
    fn skip_consumes_exactly_one_value() {
        let value = Outer {
            id: 9,
            inner: Some(Inner {
                name: String::from("héllo"),
                tags: vec![1, 2, 3],
            }),
            blob: vec![0xAA; 5],
            map: BTreeMap::from([(1, String::from("one")), (2, String::new())]),
            grid: [-1, 1],
            boxed: None,
            label: None,
        };
        let mut bytes = MemoryPack::new().serialize(&value).unwrap();
        let len = bytes.len();
        bytes.extend_from_slice(&[0xEE; 3]);

        assert_eq!(skip_all::<Outer>(&bytes), Ok(len));
    }

    #[test]
    fn skip_reports_truncation() {
        let bytes = MemoryPack::new().serialize(&Outer::default()).unwrap();
        assert!(matches!(
            skip_all::<Outer>(&bytes[..bytes.len() - 1]),
            Err(PackError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn skip_rejects_opaque() {
        assert!(matches!(
            skip_all::<char>(&[0, 0, 0, 0]),
            Err(PackError::UnsupportedType { type_path: "char", .. })
        ));
    }
}
