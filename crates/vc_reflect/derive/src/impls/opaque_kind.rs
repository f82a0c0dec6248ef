use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_get_type_meta, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::ReflectMeta;

/// Implement reflect for `#[reflect(opaque)]` types.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(vc_reflect_path);

    let typed_trait_tokens = impl_trait_typed(
        meta,
        quote! {
            #type_info_::Opaque(#opaque_info_::new::<Self>())
        },
    );
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque));
    let get_type_meta_tokens = impl_trait_get_type_meta(meta, crate::utils::empty());

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens
    }
}
