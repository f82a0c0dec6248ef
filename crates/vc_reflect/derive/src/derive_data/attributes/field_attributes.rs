use syn::spanned::Spanned;

/// Attributes applied to a single field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`, excluded from reflection and packing.
    pub skip: bool,
    /// `#[reflect(read_only)]`, written but not assigned on read.
    pub read_only: bool,
    /// `#[reflect(order = N)]`, the explicit sort key.
    pub order: Option<i32>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in super::reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("read_only") {
                    this.read_only = true;
                    Ok(())
                } else if meta.path.is_ident("order") {
                    if this.order.is_some() {
                        return Err(meta.error("duplicate `order` attribute"));
                    }
                    let value = meta.value()?;
                    let negative = value.parse::<Option<syn::Token![-]>>()?.is_some();
                    let lit: syn::LitInt = value.parse()?;
                    let magnitude = lit.base10_parse::<i64>()?;
                    let order = if negative { -magnitude } else { magnitude };
                    let order = i32::try_from(order)
                        .map_err(|_| syn::Error::new(lit.span(), "`order` must fit in an i32"))?;
                    this.order = Some(order);
                    Ok(())
                } else if meta.path.is_ident("opaque") || meta.path.is_ident("type_trait") {
                    Err(meta.error("this attribute can only be applied to types"))
                } else {
                    Err(meta.error(
                        "unsupported field attribute, expected `order`, `skip` or `read_only`",
                    ))
                }
            })?;
        }

        if this.skip && (this.read_only || this.order.is_some()) {
            let span = attrs.first().map_or_else(proc_macro2::Span::call_site, |a| a.span());
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with `order` or `read_only`",
            ));
        }

        Ok(this)
    }
}
