use proc_macro2::Span;
use syn::{Path, Token, parenthesized, punctuated::Punctuated, spanned::Spanned};

/// Attributes applied at the type level.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(opaque)]`, the type exposes no fields.
    pub opaque: Option<Span>,
    /// `#[reflect(type_trait = ...)]`, inserted into `get_type_meta`.
    pub extra_type_trait: Vec<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in super::reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    if this.opaque.is_some() {
                        return Err(meta.error("duplicate `opaque` attribute"));
                    }
                    this.opaque = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("type_trait") {
                    let value = meta.value()?;
                    if value.peek(syn::token::Paren) {
                        let content;
                        parenthesized!(content in value);
                        let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;
                        this.extra_type_trait.extend(paths);
                    } else {
                        this.extra_type_trait.push(value.parse()?);
                    }
                    Ok(())
                } else if meta.path.is_ident("order")
                    || meta.path.is_ident("skip")
                    || meta.path.is_ident("read_only")
                {
                    Err(meta.error("this attribute can only be applied to fields"))
                } else {
                    Err(meta.error("unsupported type attribute, expected `opaque` or `type_trait`"))
                }
            })?;
        }

        Ok(this)
    }
}
