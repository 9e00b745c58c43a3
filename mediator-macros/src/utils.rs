use quote::ToTokens;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
fn derive_key(p: &Path) -> String {
    match p.segments.last().map(|s| s.ident.to_string()) {
        Some(last) if last == "Serialize" || last == "Deserialize" => format!("serde::{last}"),
        Some(last) => last,
        None => p.to_token_stream().to_string(),
    }
}

/// 将所需派生与已有 `#[derive(...)]` 合并为一条（去重，required 在前），其余属性保持原序
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let mut merged: Vec<Path> = required;
    let mut retained: Vec<Attribute> = Vec::new();

    for attr in attrs.drain(..) {
        if !attr.path().is_ident("derive") {
            retained.push(attr);
            continue;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            merged.extend(list);
        }
    }

    let mut seen = std::collections::HashSet::new();
    merged.retain(|p| seen.insert(derive_key(p)));

    attrs.push(syn::parse_quote!(#[derive(#(#merged),*)]));
    attrs.extend(retained);
}
