use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{Ident, spanned::Spanned};

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `GetTypeMeta` trait.
///
/// `register_deps_tokens` is usually related to the type of field.
pub(crate) fn impl_trait_get_type_meta(
    meta: &ReflectMeta,
    register_deps_tokens: TokenStream,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(vc_reflect_path);
    let type_meta_ = crate::path::type_meta_(vc_reflect_path);
    let from_type_ = crate::path::from_type_(vc_reflect_path);

    let outer_ = Ident::new("__outer", Span::call_site());

    let extra_type_trait = &meta.attrs().extra_type_trait;
    let trait_counter = extra_type_trait.len();

    let insert_extra_traits = extra_type_trait.iter().map(|extra_path| {
        let span = extra_path.span();
        quote_spanned! { span =>
            #type_meta_::insert_trait::<#extra_path>(&mut #outer_, <#extra_path as #from_type_<Self>>::from_type());
        }
    });

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #get_type_meta_ for #type_ident #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn get_type_meta() -> #type_meta_ {
                let mut #outer_ = #type_meta_::with_capacity::<Self>(#trait_counter);
                #(#insert_extra_traits)*
                #outer_
            }

            #register_deps_tokens
        }
    }
}
