use syn::{Field, Token, punctuated::Punctuated};

pub(crate) fn has_field_named_in(named: &Punctuated<Field, Token![,]>, name: &syn::Ident) -> bool {
    named
        .iter()
        .any(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false))
}
