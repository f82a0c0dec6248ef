use syn::{Data, DeriveInput, spanned::Spanned};

use super::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    /// Named, tuple and unit structs.
    Struct(ReflectStruct<'a>),
    /// Types marked with `#[reflect(opaque)]`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        match &input.data {
            _ if is_opaque => Ok(Self::Opaque(meta)),
            Data::Struct(data) => Ok(Self::Struct(ReflectStruct::new(meta, &data.fields)?)),
            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span(),
                "`Reflect` cannot be derived for enums, mark it `#[reflect(opaque)]` and register a formatter",
            )),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}
