use crate::info::Typed;

/// Creates a [`TypeTrait`](crate::registry::TypeTrait) for the type `T`.
///
/// This is the seam through which `#[reflect(type_trait = Path)]` builds
/// capabilities: the derive calls `<Path as FromType<Self>>::from_type()`.
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
