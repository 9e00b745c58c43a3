use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input};

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as RequestAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];

    let (ident, generics) = match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            (st.ident.clone(), st.generics.clone())
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            (en.ident.clone(), en.generics.clone())
        }
        other => {
            return syn::Error::new(other.span(), "#[request] only supports struct or enum")
                .to_compile_error()
                .into();
        }
    };

    let name = cfg
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let response = cfg.response.unwrap_or_else(|| syn::parse_quote! { () });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #input

        impl #impl_generics ::mediator::request::Request for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            type Response = #response;
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct RequestAttrConfig {
    response: Option<Type>,
    name: Option<LitStr>,
}

impl Parse for RequestAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            response: None,
            name: None,
        };
        if input.is_empty() {
            return Ok(cfg);
        }

        let elems: Punctuated<RequestAttrElem, Token![,]> = Punctuated::parse_terminated(input)?;
        for elem in elems {
            match elem {
                RequestAttrElem::Response(span, ty) => {
                    if cfg.response.replace(ty).is_some() {
                        return Err(syn::Error::new(span, "duplicate key 'response' in attribute"));
                    }
                }
                RequestAttrElem::Name(span, lit) => {
                    if cfg.name.replace(lit).is_some() {
                        return Err(syn::Error::new(span, "duplicate key 'name' in attribute"));
                    }
                }
            }
        }
        Ok(cfg)
    }
}

enum RequestAttrElem {
    Response(proc_macro2::Span, Type),
    Name(proc_macro2::Span, LitStr),
}

impl Parse for RequestAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        match key.to_string().as_str() {
            "response" => Ok(Self::Response(key.span(), input.parse()?)),
            "name" => {
                let lit: LitStr = input.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "'name' must not be empty"));
                }
                Ok(Self::Name(key.span(), lit))
            }
            _ => Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'response' or 'name'",
            )),
        }
    }
}
