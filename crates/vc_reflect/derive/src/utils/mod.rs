use proc_macro2::TokenStream;

/// Returns an empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Returns `true` if any of `idents` appears in `tokens`, groups included.
pub(crate) fn mentions_any(tokens: TokenStream, idents: &[syn::Ident]) -> bool {
    use proc_macro2::TokenTree;

    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => idents.contains(&ident),
        TokenTree::Group(group) => mentions_any(group.stream(), idents),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}
