use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_get_type_meta, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{ReflectStruct, StructField};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct));

    // trait: GetTypeMeta
    let get_type_meta_tokens = impl_trait_get_type_meta(meta, get_registry_dependencies(info));

    quote! {
        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens
    }
}

/// Generate `register_dependencies`, registering every active field type.
fn get_registry_dependencies(info: &ReflectStruct) -> TokenStream {
    let vc_reflect_path = info.meta().vc_reflect_path();
    let type_registry_ = crate::path::type_registry_(vc_reflect_path);

    let field_types = info.active_fields().map(StructField::ty);

    quote! {
        fn register_dependencies(_registry: &mut #type_registry_) {
            #( _registry.register::<#field_types>(); )*
        }
    }
}

fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_reflect_path);
    let option_ = crate::path::option_();

    let field_len = info.fields().len();

    let all_indices = info.fields().iter().map(|field| field.index);
    let all_names = info.fields().iter().map(|field| &field.name);

    let indices = info.active_fields().map(|field| field.index).collect::<Vec<_>>();
    let names = info.active_fields().map(|field| &field.name).collect::<Vec<_>>();
    let members = info.active_fields().map(|field| &field.member).collect::<Vec<_>>();

    let type_ident = meta.type_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #struct_ for #type_ident #ty_generics #where_clause {
            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            fn name_at(&self, index: usize) -> #option_<&'static str> {
                match index {
                    #( #all_indices => #option_::Some(#all_names), )*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #( #indices => #option_::Some(&self.#members as &dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #( #indices => #option_::Some(&mut self.#members as &mut dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #( #names => #option_::Some(&self.#members as &dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #( #names => #option_::Some(&mut self.#members as &mut dyn #reflect_), )*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
