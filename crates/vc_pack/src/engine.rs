use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use std::sync::OnceLock;

use vc_reflect::Reflect;
use vc_reflect::registry::{GetTypeMeta, TypeRegistry, TypeRegistryArc};

use crate::buffer::{ByteSink, ByteSource};
use crate::config::PackConfig;
use crate::error::PackResult;
use crate::formatter::{PackFormatter, TypeTraitFormatter};
use crate::schema::SchemaCache;
use crate::walker::{PackReader, PackWriter};

// -----------------------------------------------------------------------------
// MemoryPack

/// A packing engine: configuration plus the shared type registry and
/// schema cache.
///
/// Cloning is cheap and clones share both caches. The typed entry points
/// register the root type and everything it contains on first use.
///
/// # Examples
///
/// ```
/// use vc_pack::MemoryPack;
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// struct Player {
///     name: String,
///     #[reflect(order = -1)]
///     level: u16,
/// }
///
/// let engine = MemoryPack::new();
/// let player = Player { name: "ada".into(), level: 3 };
///
/// let bytes = engine.serialize(&player).unwrap();
/// assert_eq!(&bytes[..3], [2, 3, 0]); // header, then `level` first
///
/// let mut decoded = Player::default();
/// engine.deserialize(&bytes, &mut decoded).unwrap();
/// assert_eq!(decoded, player);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryPack {
    config: PackConfig,
    registry: TypeRegistryArc,
    schemas: Arc<SchemaCache>,
}

impl Default for MemoryPack {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPack {
    /// Creates an engine with the default [`PackConfig`].
    #[inline]
    pub fn new() -> Self {
        Self::with_config(PackConfig::new())
    }

    pub fn with_config(config: PackConfig) -> Self {
        Self {
            config,
            registry: TypeRegistryArc::new(TypeRegistry::new()),
            schemas: Arc::new(SchemaCache::new()),
        }
    }

    #[inline]
    pub const fn config(&self) -> &PackConfig {
        &self.config
    }

    #[inline]
    pub const fn registry(&self) -> &TypeRegistryArc {
        &self.registry
    }

    #[inline]
    pub fn schemas(&self) -> &SchemaCache {
        &self.schemas
    }

    /// Registers `T` and its dependencies, if not already known.
    pub fn register<T: GetTypeMeta>(&self) {
        if self.registry.read().contains(TypeId::of::<T>()) {
            return;
        }
        self.registry.write().register::<T>();
    }

    /// Registers `T` with its [`PackFormatter`] as the type's wire format.
    ///
    /// Takes effect for every later call, including values already known
    /// to the engine.
    pub fn register_formatter<T: PackFormatter + GetTypeMeta + Reflect + Default>(&self) {
        let mut registry = self.registry.write();
        registry.register::<T>();
        registry.register_type_trait::<T, TypeTraitFormatter>();
    }

    // -------------------------------------------------------------------------
    // Write

    /// Packs `value` into a new byte vector.
    pub fn serialize<T: Reflect + GetTypeMeta>(&self, value: &T) -> PackResult<Vec<u8>> {
        let mut sink = ByteSink::with_config(&self.config);
        self.serialize_into(value, &mut sink)?;
        Ok(sink.into_vec())
    }

    /// Appends `value` to `sink`.
    ///
    /// On failure the sink is left as it was before the call.
    pub fn serialize_into<T: Reflect + GetTypeMeta>(
        &self,
        value: &T,
        sink: &mut ByteSink,
    ) -> PackResult<()> {
        self.register::<T>();
        self.write_root(value.as_reflect(), sink)
    }

    /// Packs a type-erased value.
    ///
    /// Registers nothing: formatters of the types inside `value` must
    /// already be known to the engine.
    pub fn serialize_reflect(&self, value: &dyn Reflect) -> PackResult<Vec<u8>> {
        let mut sink = ByteSink::with_config(&self.config);
        self.write_root(value, &mut sink)?;
        Ok(sink.into_vec())
    }

    fn write_root(&self, value: &dyn Reflect, sink: &mut ByteSink) -> PackResult<()> {
        let start = sink.len();
        if self.config.format_version_header() {
            sink.write_format_version();
        }

        let registry = self.registry.read();
        let writer = PackWriter::new(sink, &registry, &self.schemas, self.config.max_depth());

        if let Err(err) = writer.write_root(value) {
            sink.truncate(start);
            return Err(err);
        }

        log::trace!(
            "packed `{}` into {} bytes",
            value.reflect_type_path(),
            sink.len() - start,
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Read

    /// Unpacks `bytes` into `target`, in place.
    ///
    /// Bytes after the first complete value are ignored.
    pub fn deserialize<T: Reflect + GetTypeMeta>(
        &self,
        bytes: &[u8],
        target: &mut T,
    ) -> PackResult<()> {
        self.deserialize_from(&mut ByteSource::new(bytes), target)
    }

    /// Unpacks the next value of `source` into `target`.
    ///
    /// On success the cursor is left after the value, so several values can
    /// be read from one input.
    pub fn deserialize_from<T: Reflect + GetTypeMeta>(
        &self,
        source: &mut ByteSource<'_>,
        target: &mut T,
    ) -> PackResult<()> {
        self.register::<T>();
        self.read_root(source, target.as_reflect_mut())
    }

    /// Unpacks into a type-erased target. Registers nothing, see
    /// [`serialize_reflect`](Self::serialize_reflect).
    pub fn deserialize_reflect(&self, bytes: &[u8], target: &mut dyn Reflect) -> PackResult<()> {
        self.read_root(&mut ByteSource::new(bytes), target)
    }

    fn read_root(&self, source: &mut ByteSource<'_>, target: &mut dyn Reflect) -> PackResult<()> {
        let start = source.position();
        if self.config.format_version_header() {
            source.read_format_version()?;
        }

        let registry = self.registry.read();
        PackReader::new(source, &registry, &self.schemas).read_root(target)?;

        log::trace!(
            "unpacked `{}` from {} bytes",
            target.reflect_type_path(),
            source.position() - start,
        );
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Default engine

/// The engine behind [`serialize`] and [`deserialize`], built on first use.
pub fn default_engine() -> &'static MemoryPack {
    static ENGINE: OnceLock<MemoryPack> = OnceLock::new();
    ENGINE.get_or_init(MemoryPack::new)
}

/// Packs `value` with the [`default_engine`].
///
/// # Examples
///
/// ```
/// let bytes = vc_pack::serialize(&vec![1_u16, 2]).unwrap();
/// assert_eq!(bytes, [2, 0, 0, 0, 1, 0, 2, 0]);
///
/// let mut decoded: Vec<u16> = Vec::new();
/// vc_pack::deserialize(&bytes, &mut decoded).unwrap();
/// assert_eq!(decoded, [1, 2]);
/// ```
#[inline]
pub fn serialize<T: Reflect + GetTypeMeta>(value: &T) -> PackResult<Vec<u8>> {
    default_engine().serialize(value)
}

/// Unpacks `bytes` into `target` with the [`default_engine`].
#[inline]
pub fn deserialize<T: Reflect + GetTypeMeta>(bytes: &[u8], target: &mut T) -> PackResult<()> {
    default_engine().deserialize(bytes, target)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::any::TypeId;
    use std::thread;

    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;

    use super::MemoryPack;
    use crate::{ByteSink, ByteSource, PackConfig, PackError, PackFormatter, PackResult, TextUnit};

    #[derive(Reflect, Default, Debug, PartialEq)]
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
    #[reflect(opaque)]
    struct Millis(u64);

    impl PackFormatter for Millis {
        fn serialize(&self, sink: &mut ByteSink) -> PackResult<()> {
            sink.write_u32(u32::try_from(self.0).map_err(PackError::custom)?);
            Ok(())
        }

        fn deserialize(&mut self, source: &mut ByteSource<'_>) -> PackResult<()> {
            self.0 = u64::from(source.read_u32()?);
            Ok(())
        }
    }

    #[test]
    fn format_version_header() {
        let engine = MemoryPack::with_config(PackConfig::new().with_format_version_header(true));
        let bytes = engine.serialize(&3_u8).unwrap();
        assert_eq!(bytes, [0x07, 3]);

        let mut value = 0_u8;
        engine.deserialize(&bytes, &mut value).unwrap();
        assert_eq!(value, 3);

        assert_eq!(
            engine.deserialize(&[0x08, 3], &mut value),
            Err(PackError::UnsupportedVersion { found: 0x08 })
        );
        assert_eq!(MemoryPack::new().serialize(&3_u8).unwrap(), [3]);
    }

    #[test]
    fn utf16_native_length() {
        let engine = MemoryPack::with_config(PackConfig::new().with_text_unit(TextUnit::Utf16));
        let text = String::from("é😀");
        let bytes = engine.serialize(&text).unwrap();
        assert_eq!(&bytes[..8], [!6_i32 as u8, 0xFF, 0xFF, 0xFF, 3, 0, 0, 0]);

        // The native length is ignored on read.
        let mut decoded = String::new();
        MemoryPack::new().deserialize(&bytes, &mut decoded).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn failed_write_leaves_sink_untouched() {
        let engine = MemoryPack::new();
        let mut sink = ByteSink::new();
        engine.serialize_into(&7_u16, &mut sink).unwrap();

        assert!(engine.serialize_into(&vec!['a'], &mut sink).is_err());
        assert_eq!(sink.as_slice(), [7, 0]);
    }

    #[test]
    fn sequential_values_and_trailing_bytes() {
        let engine = MemoryPack::new();
        let mut sink = ByteSink::new();
        engine.serialize_into(&String::from("one"), &mut sink).unwrap();
        engine.serialize_into(&2_i64, &mut sink).unwrap();
        sink.write_u8(0xEE);

        let bytes = sink.into_vec();
        let mut source = ByteSource::new(&bytes);
        let mut text = String::new();
        let mut number = 0_i64;
        engine.deserialize_from(&mut source, &mut text).unwrap();
        engine.deserialize_from(&mut source, &mut number).unwrap();
        assert_eq!((text.as_str(), number), ("one", 2));
        assert_eq!(source.remaining(), 1);

        let mut text = String::new();
        engine.deserialize(&bytes, &mut text).unwrap();
        assert_eq!(text, "one");
    }

    #[test]
    fn runtime_formatter_registration() {
        let engine = MemoryPack::new();
        assert!(matches!(
            engine.serialize(&Millis(5)),
            Err(PackError::UnsupportedType { .. })
        ));

        engine.register_formatter::<Millis>();
        let bytes = engine.serialize(&vec![Millis(5)]).unwrap();
        assert_eq!(bytes, [1, 0, 0, 0, 5, 0, 0, 0]);

        assert_eq!(
            engine.serialize(&Millis(u64::MAX)).map_err(|err| err.to_string()),
            Err(String::from("out of range integral type conversion attempted"))
        );

        let mut decoded: Vec<Millis> = Vec::new();
        engine.deserialize(&bytes, &mut decoded).unwrap();
        assert_eq!(decoded, [Millis(5)]);
    }

    #[test]
    fn type_erased_entry_points() {
        let engine = MemoryPack::new();
        let value: Box<dyn Reflect> = Box::new(vec![String::from("a")]);
        let bytes = engine.serialize_reflect(&*value).unwrap();
        assert_eq!(bytes, engine.serialize(&vec![String::from("a")]).unwrap());

        let mut target: Box<dyn Reflect> = Box::new(Vec::<String>::new());
        engine.deserialize_reflect(&bytes, &mut *target).unwrap();
        assert_eq!(target.downcast_ref::<Vec<String>>(), Some(&vec![String::from("a")]));
    }

    #[test]
    fn registration_is_recursive() {
        let engine = MemoryPack::new();
        engine.serialize(&chain(1)).unwrap();

        let registry = engine.registry().read();
        assert!(registry.contains(TypeId::of::<Node>()));
        assert!(registry.contains(TypeId::of::<Option<Box<Node>>>()));
        assert!(registry.contains(TypeId::of::<Box<Node>>()));
    }

    #[test]
    fn default_depth_limit() {
        // Each list node takes three levels: the node, the option and the box.
        let handle = thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(|| {
                let engine = MemoryPack::new();

                let shallow = chain(300);
                let bytes = engine.serialize(&shallow).unwrap();
                let mut decoded = Node::default();
                engine.deserialize(&bytes, &mut decoded).unwrap();
                assert_eq!(decoded, shallow);

                assert!(matches!(
                    engine.serialize(&chain(400)),
                    Err(PackError::DepthExceeded {
                        max_depth: 1000,
                        ..
                    })
                ));
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn shared_across_threads() {
        let engine = MemoryPack::new();
        thread::scope(|scope| {
            for index in 0..8_i32 {
                let engine = engine.clone();
                scope.spawn(move || {
                    let value = chain(index as usize + 1);
                    let bytes = engine.serialize(&value).unwrap();
                    let mut decoded = Node::default();
                    engine.deserialize(&bytes, &mut decoded).unwrap();
                    assert_eq!(decoded, value);
                });
            }
        });
        assert!(engine.schemas().contains(TypeId::of::<Node>()));
        assert_eq!(engine.schemas().len(), 1);
    }
}
