use vc_reflect::Reflect;
use vc_reflect::info::Typed;
use vc_reflect::registry::FromType;

use crate::buffer::{ByteSink, ByteSource};
use crate::error::{PackError, PackResult};

// -----------------------------------------------------------------------------
// PackFormatter

/// Hand-written wire format for a type.
///
/// A type with a registered formatter is packed and unpacked entirely by it;
/// the walker never looks at its fields. Register it with
/// [`MemoryPack::register_formatter`] or `#[reflect(type_trait = TypeTraitFormatter)]`.
///
/// # Examples
///
/// ```
/// use vc_pack::{ByteSink, ByteSource, MemoryPack, PackFormatter, PackResult, TypeTraitFormatter};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// #[reflect(type_trait = TypeTraitFormatter)]
/// struct Rgb(u8, u8, u8);
///
/// impl PackFormatter for Rgb {
///     fn serialize(&self, sink: &mut ByteSink) -> PackResult<()> {
///         sink.write_raw(&[self.0, self.1, self.2]);
///         Ok(())
///     }
///
///     fn deserialize(&mut self, source: &mut ByteSource<'_>) -> PackResult<()> {
///         [self.0, self.1, self.2] = source.read_fixed()?;
///         Ok(())
///     }
/// }
///
/// let engine = MemoryPack::new();
/// let bytes = engine.serialize(&Rgb(1, 2, 3)).unwrap();
/// assert_eq!(bytes, [1, 2, 3]);
///
/// let mut color = Rgb::default();
/// engine.deserialize(&bytes, &mut color).unwrap();
/// assert_eq!(color, Rgb(1, 2, 3));
/// ```
///
/// [`MemoryPack::register_formatter`]: crate::MemoryPack::register_formatter
pub trait PackFormatter {
    /// Writes `self` to the sink.
    fn serialize(&self, sink: &mut ByteSink) -> PackResult<()>;

    /// Overwrites `self` with a value read from the source.
    fn deserialize(&mut self, source: &mut ByteSource<'_>) -> PackResult<()>;

    /// Consumes one encoded value without producing it.
    ///
    /// Used for read-only fields. The default decodes into a scratch
    /// `Self::default()` and drops it.
    fn skip(source: &mut ByteSource<'_>) -> PackResult<()>
    where
        Self: Sized + Default,
    {
        Self::default().deserialize(source)
    }
}

// -----------------------------------------------------------------------------
// TypeTraitFormatter

/// The [`PackFormatter`] capability of a type, stored in the type registry.
///
/// Built through [`FromType`]; the walker consults it before dispatching on
/// the reflected kind.
#[derive(Clone)]
pub struct TypeTraitFormatter {
    serialize: fn(&dyn Reflect, &mut ByteSink) -> PackResult<()>,
    deserialize: fn(&mut dyn Reflect, &mut ByteSource<'_>) -> PackResult<()>,
    skip: fn(&mut ByteSource<'_>) -> PackResult<()>,
}

impl TypeTraitFormatter {
    /// Packs `value`, which must be of the type this formatter was built for.
    ///
    /// Fails with [`PackError::InvalidTarget`] otherwise.
    #[inline]
    pub fn serialize(&self, value: &dyn Reflect, sink: &mut ByteSink) -> PackResult<()> {
        (self.serialize)(value, sink)
    }

    /// Unpacks into `target`, which must be of the type this formatter was built for.
    ///
    /// Fails with [`PackError::InvalidTarget`] otherwise.
    #[inline]
    pub fn deserialize(
        &self,
        target: &mut dyn Reflect,
        source: &mut ByteSource<'_>,
    ) -> PackResult<()> {
        (self.deserialize)(target, source)
    }

    /// Consumes one encoded value, see [`PackFormatter::skip`].
    #[inline]
    pub fn skip(&self, source: &mut ByteSource<'_>) -> PackResult<()> {
        (self.skip)(source)
    }
}

impl<T: PackFormatter + Reflect + Typed + Default> FromType<T> for TypeTraitFormatter {
    fn from_type() -> Self {
        Self {
            serialize: |value, sink| match value.downcast_ref::<T>() {
                Some(value) => value.serialize(sink),
                None => Err(PackError::InvalidTarget {
                    type_path: value.reflect_type_path(),
                }),
            },
            deserialize: |target, source| {
                let type_path = target.reflect_type_path();
                match target.downcast_mut::<T>() {
                    Some(target) => target.deserialize(source),
                    None => Err(PackError::InvalidTarget { type_path }),
                }
            },
            skip: <T as PackFormatter>::skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PackFormatter, TypeTraitFormatter};
    use crate::{ByteSink, ByteSource, PackError, PackResult};
    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;
    use vc_reflect::registry::FromType;

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(opaque)]
    struct Celsius(i16);

    impl PackFormatter for Celsius {
        fn serialize(&self, sink: &mut ByteSink) -> PackResult<()> {
            sink.write_i16(self.0);
            Ok(())
        }

        fn deserialize(&mut self, source: &mut ByteSource<'_>) -> PackResult<()> {
            self.0 = source.read_i16()?;
            Ok(())
        }

        fn skip(source: &mut ByteSource<'_>) -> PackResult<()> {
            source.skip(2)
        }
    }

    #[test]
    fn dispatches_through_reflect() {
        let formatter = <TypeTraitFormatter as FromType<Celsius>>::from_type();

        let mut sink = ByteSink::new();
        formatter.serialize(&Celsius(-3), &mut sink).unwrap();
        assert_eq!(sink.as_slice(), [0xFD, 0xFF]);

        let bytes = sink.into_vec();
        let mut target = Celsius::default();
        formatter
            .deserialize(&mut target, &mut ByteSource::new(&bytes))
            .unwrap();
        assert_eq!(target, Celsius(-3));

        let mut source = ByteSource::new(&bytes);
        formatter.skip(&mut source).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn wrong_type_is_invalid_target() {
        let formatter = <TypeTraitFormatter as FromType<Celsius>>::from_type();

        let mut sink = ByteSink::new();
        assert_eq!(
            formatter.serialize(7_u32.as_reflect(), &mut sink),
            Err(PackError::InvalidTarget { type_path: "u32" })
        );
        assert!(sink.is_empty());

        let mut target = 0_u32;
        assert_eq!(
            formatter.deserialize(target.as_reflect_mut(), &mut ByteSource::new(&[0, 0])),
            Err(PackError::InvalidTarget { type_path: "u32" })
        );
    }
}
