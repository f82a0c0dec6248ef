use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Member, Type};

use super::{FieldAttributes, ReflectMeta};

/// A field of a reflected struct.
#[derive(Debug)]
pub(crate) struct StructField<'a> {
    /// The original field.
    pub data: &'a Field,
    /// Parsed `#[reflect(...)]` attributes.
    pub attrs: FieldAttributes,
    /// Declaration index.
    pub index: usize,
    /// `self.#member` accessor, an ident or a tuple index.
    pub member: Member,
    /// Reflected name: the ident, or the index for tuple structs.
    pub name: String,
}

impl StructField<'_> {
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !self.attrs.skip
    }
}

/// A struct whose fields are visible to reflection.
#[derive(Debug)]
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a syn::Fields) -> syn::Result<Self> {
        let fields = fields
            .iter()
            .enumerate()
            .map(|(index, data)| {
                let (member, name) = match &data.ident {
                    Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
                    None => (Member::Unnamed(index.into()), index.to_string()),
                };
                Ok(StructField {
                    data,
                    attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                    index,
                    member,
                    name,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        meta.set_active_types(fields.iter().filter(|f| f.is_active()).map(StructField::ty));

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// All declared fields, skipped ones included.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection.
    #[inline]
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::Struct(_path_::StructInfo::new::<Self>(&[
    ///     _path_::NamedField::new::<u32>("id", 0).with_order(1),
    ///     _path_::NamedField::skipped("cache", 1),
    /// ]))
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);
        let named_field_ = crate::path::named_field_(vc_reflect_path);

        let fields = self.fields.iter().map(|field| {
            let name = &field.name;
            let index = field.index;

            if !field.is_active() {
                return quote! { #named_field_::skipped(#name, #index) };
            }

            let ty = field.ty();
            let with_order = field.attrs.order.map(|order| quote!( .with_order(#order) ));
            let with_read_only = field.attrs.read_only.then(|| quote!( .with_read_only() ));

            quote! {
                #named_field_::new::<#ty>(#name, #index) #with_order #with_read_only
            }
        });

        quote! {
            #type_info_::Struct(#struct_info_::new::<Self>(&[ #(#fields),* ]))
        }
    }
}
