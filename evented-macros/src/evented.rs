use crate::field_utils::has_field_named_in;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Ident, Item, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input,
};

/// #[evented] 宏实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventedAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[evented] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let args_ty = cfg.args_ty.unwrap_or_else(|| syn::parse_quote! { () });
    let field = cfg
        .field
        .unwrap_or_else(|| Ident::new("emitter", proc_macro2::Span::call_site()));

    // 已声明同名字段时复用其定义，否则追加到末尾
    if !has_field_named_in(&fields_named.named, &field) {
        fields_named
            .named
            .push(syn::parse_quote! { #field: ::evented::EventEmitter<#args_ty> });
    }

    let ident = &st.ident;
    let generics = st.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::evented::Evented<#args_ty> for #ident #ty_generics #where_clause {
            fn emitter(&self) -> &::evented::EventEmitter<#args_ty> {
                &self.#field
            }
        }
    };

    TokenStream::from(expanded)
}

// 解析 evented 宏键值参数：args = <Type>、field = <ident>
struct EventedAttrConfig {
    args_ty: Option<Type>,
    field: Option<Ident>,
}

impl Parse for EventedAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args_ty: Option<Type> = None;
        let mut field: Option<Ident> = None;

        if input.is_empty() {
            return Ok(Self { args_ty, field });
        }

        let pairs: Punctuated<KvArg, Token![,]> =
            Punctuated::<KvArg, Token![,]>::parse_terminated(input)?;

        for kv in pairs.into_iter() {
            match kv {
                KvArg::Args(key, ty) => {
                    if args_ty.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'args' in attribute",
                        ));
                    }
                    args_ty = Some(ty);
                }
                KvArg::Field(key, name) => {
                    if field.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'field' in attribute",
                        ));
                    }
                    field = Some(name);
                }
            }
        }

        Ok(Self { args_ty, field })
    }
}

enum KvArg {
    Args(Ident, Type),
    Field(Ident, Ident),
}

impl Parse for KvArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        match key.to_string().as_str() {
            "args" => Ok(Self::Args(key, input.parse()?)),
            "field" => Ok(Self::Field(key, input.parse()?)),
            _ => Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'args' or 'field'",
            )),
        }
    }
}
