//! Procedural macros for Horizon Trellis parameter projection.
//!
//! This crate provides `#[derive(Parameters)]`, which turns a flat
//! configuration struct into an attribute map at render time.
//!
//! # Attributes
//!
//! ## `#[parameter]`
//!
//! Field-level attribute adjusting how a field is projected:
//!
//! ```ignore
//! #[derive(Parameters, Default)]
//! struct GridParameters {
//!     allow_paging: bool,          // projected as "AllowPaging"
//!
//!     #[parameter(rename = "Class")]
//!     css_class: Option<String>,   // projected as "Class"
//!
//!     #[parameter(skip)]
//!     cached_rows: usize,          // not projected
//! }
//! ```
//!
//! Parameter attributes:
//! - `rename = "Key"`: Use `Key` as the attribute key instead of the PascalCase field name
//! - `skip`: Excludes the field from projection

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Ident, LitStr};

/// Derive the `Parameters` trait.
///
/// This macro generates:
/// - `FIELDS`, the projected attribute keys in declaration order
/// - `project`, which converts each field with `ToValue` and inserts it under its key
///
/// Every projected field must implement `horizon_trellis_core::ToValue`.
///
/// # Example
///
/// ```ignore
/// use horizon_trellis_core::Parameters;
/// use horizon_trellis_macros::Parameters;
///
/// #[derive(Parameters, Default)]
/// struct ButtonParameters {
///     text: String,
///     full_width: bool,
/// }
///
/// assert_eq!(ButtonParameters::FIELDS, &["Text", "FullWidth"]);
/// ```
#[proc_macro_derive(Parameters, attributes(parameter))]
pub fn derive_parameters(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive_parameters(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A field that takes part in projection.
struct ProjectedField {
    ident: Ident,
    key: String,
}

fn impl_derive_parameters(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Parameters derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Parameters derive only supports structs",
            ))
        }
    };

    let mut projected = Vec::new();
    for field in fields {
        if let Some(info) = parse_field(field)? {
            projected.push(info);
        }
    }

    if let Some(duplicate) = find_duplicate_key(&projected) {
        return Err(syn::Error::new_spanned(
            &duplicate.ident,
            format!("duplicate parameter key `{}`", duplicate.key),
        ));
    }

    let keys: Vec<&str> = projected.iter().map(|f| f.key.as_str()).collect();
    let idents: Vec<&Ident> = projected.iter().map(|f| &f.ident).collect();
    let capacity = projected.len();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::horizon_trellis_core::Parameters for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#keys),*];

            fn project(&self) -> ::horizon_trellis_core::AttributeMap {
                let mut map = ::horizon_trellis_core::AttributeMap::with_capacity(#capacity);
                #(
                    map.insert(
                        ::std::string::String::from(#keys),
                        ::horizon_trellis_core::ToValue::to_value(&self.#idents),
                    );
                )*
                map
            }
        }
    })
}

/// Parse the `#[parameter(...)]` attributes of one field.
///
/// Returns `None` for skipped fields.
fn parse_field(field: &Field) -> syn::Result<Option<ProjectedField>> {
    let Some(ident) = field.ident.clone() else {
        return Ok(None);
    };

    let mut rename = None;
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("parameter") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("parameter key cannot be empty"));
                }
                rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported parameter attribute, expected `rename` or `skip`"))
            }
        })?;
    }

    if skip {
        return Ok(None);
    }

    let key = rename.unwrap_or_else(|| pascal_case(&ident.to_string()));
    Ok(Some(ProjectedField { ident, key }))
}

/// Convert a snake_case field name to a PascalCase attribute key.
fn pascal_case(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    let mut out = String::with_capacity(name.len());
    for segment in name.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn find_duplicate_key(fields: &[ProjectedField]) -> Option<&ProjectedField> {
    fields
        .iter()
        .enumerate()
        .find(|(i, field)| fields[..*i].iter().any(|earlier| earlier.key == field.key))
        .map(|(_, field)| field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("selected_value"), "SelectedValue");
        assert_eq!(pascal_case("text"), "Text");
        assert_eq!(pascal_case("r#type"), "Type");
        assert_eq!(pascal_case("page_size_options"), "PageSizeOptions");
        assert_eq!(pascal_case("_leading"), "Leading");
    }

    #[test]
    fn test_expansion_lists_fields_in_order() {
        let input: DeriveInput = syn::parse_quote! {
            struct TabParameters {
                active_index: usize,
                #[parameter(skip)]
                cache: String,
                #[parameter(rename = "Class")]
                css_class: String,
            }
        };

        let expanded = impl_derive_parameters(&input).unwrap().to_string();
        let active = expanded.find("\"ActiveIndex\"").unwrap();
        let class = expanded.find("\"Class\"").unwrap();
        assert!(active < class);
        assert!(!expanded.contains("\"Cache\""));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            struct Clash {
                text: String,
                #[parameter(rename = "Text")]
                label: String,
            }
        };

        let err = impl_derive_parameters(&input).err().unwrap();
        assert!(err.to_string().contains("duplicate parameter key `Text`"));
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair(String, bool);
        };
        assert!(impl_derive_parameters(&input).is_err());
    }
}
