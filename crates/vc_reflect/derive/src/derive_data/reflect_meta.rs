use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Token, Type, TypeGenerics, punctuated::Punctuated};

use super::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    type_ident: &'a Ident,
    generics: &'a Generics,
    // Field types that mention a type parameter.
    active_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("type_ident", &self.type_ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            type_ident,
            generics,
            vc_reflect_path: crate::path::vc_reflect(),
            active_types: Vec::new(),
        }
    }

    /// Used for [`ReflectStruct`](crate::derive_data::ReflectStruct),
    /// set the active field types during initialization.
    pub(super) fn set_active_types<'b>(&mut self, types: impl Iterator<Item = &'b Type>) {
        let idents = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect::<Vec<Ident>>();

        if idents.is_empty() {
            return;
        }

        for ty in types {
            if crate::utils::mentions_any(ty.to_token_stream(), &idents)
                && !self.active_types.contains(ty)
            {
                self.active_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn type_ident(&self) -> &Ident {
        self.type_ident
    }

    /// Generic types need one type info per instantiation.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some() || self.generics.const_params().next().is_some()
    }

    /// Return the required generic parameters.
    ///
    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let type_ident = meta.type_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #type_ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// For generic types the where clause gains:
    ///
    /// - `Self: Any + Send + Sync` if there are type params, or `Self: 'static`
    ///   if there are only lifetimes.
    /// - `Reflect + Typed` on every field type mentioning a type param.
    /// - `GetTypeMeta` on those field types as well, if `add_get_type_meta`.
    ///
    /// Only field types mentioning a type param are constrained. Bounding
    /// concrete field types would make recursive types unprovable.
    pub fn split_generics(
        &self,
        add_get_type_meta: bool,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let mut generic_where_clause = quote! { where };

        if self.generics.type_params().next().is_some() {
            let any_ = crate::path::any_();
            let send_ = crate::path::send_();
            let sync_ = crate::path::sync_();
            generic_where_clause.extend(quote! { Self: #any_ + #send_ + #sync_, });
        } else if self.generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let vc_reflect_path = &self.vc_reflect_path;
        let reflect_ = crate::path::reflect_(vc_reflect_path);
        let typed_ = crate::path::typed_(vc_reflect_path);
        let get_type_meta_ = if add_get_type_meta {
            let get_type_meta_ = crate::path::get_type_meta_(vc_reflect_path);
            quote!( + #get_type_meta_ )
        } else {
            crate::utils::empty()
        };

        let predicates = self
            .active_types
            .iter()
            .map(|ty| quote!( #ty: #reflect_ + #typed_ #get_type_meta_ ))
            .collect::<Punctuated<TokenStream, Token![,]>>();

        generic_where_clause.extend(quote! { #predicates });

        (impl_generics, ty_generics, generic_where_clause)
    }
}
