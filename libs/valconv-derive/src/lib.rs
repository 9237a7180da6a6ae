use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, LitStr};

/// Derive macro for bounded value types.
///
/// Generates the name/code table of a fieldless enum and implements
/// `valconv::Scalar` and `valconv::BoundedValue` on it:
///
/// - `VARIANTS` — every declared member, in declaration order.
/// - `name()` — canonical name (the variant ident unless renamed).
/// - `code()` — the variant discriminant as `i64`.
/// - `aliases()` — extra spellings accepted when parsing.
///
/// The enum must also derive `Clone`, `Copy`, `PartialEq` and `Eq`.
///
/// # Example
///
/// ```ignore
/// #[derive(BoundedValue, Clone, Copy, PartialEq, Eq, Debug)]
/// #[bounded(type_name = "color")]
/// pub enum Color {
///     Red = 0,
///     #[bounded(alias = "lime")]
///     Green = 1,
///     #[bounded(name = "blue")]
///     Blue = 2,
/// }
/// ```
///
/// Structs, unions, empty enums and variants carrying data are rejected
/// with a compile error.
#[proc_macro_derive(BoundedValue, attributes(bounded))]
pub fn derive_bounded_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Parsed `#[bounded(...)]` on a variant.
#[derive(Default)]
struct VariantAttrs {
    name: Option<String>,
    aliases: Vec<String>,
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let ident = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "BoundedValue only supports enums, found a struct",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "BoundedValue only supports enums, found a union",
            ))
        }
    };

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "BoundedValue requires at least one variant",
        ));
    }

    check_repr_fits_code(&input.attrs)?;
    let type_name = container_type_name(&input.attrs)?.unwrap_or_else(|| ident.to_string());

    let mut idents: Vec<&Ident> = Vec::with_capacity(variants.len());
    let mut name_arms = Vec::with_capacity(variants.len());
    let mut code_arms = Vec::with_capacity(variants.len());
    let mut alias_arms = Vec::with_capacity(variants.len());
    // Every spelling accepted by the parser, to keep name -> variant a function.
    let mut spellings: Vec<String> = Vec::new();

    for variant in variants {
        let variant_ident = &variant.ident;
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("BoundedValue variant '{variant_ident}' must not carry fields"),
            ));
        }

        let attrs = variant_attrs(&variant.attrs)?;
        let name = attrs.name.unwrap_or_else(|| variant_ident.to_string());
        if name.is_empty() {
            return Err(syn::Error::new_spanned(variant_ident, "canonical name must not be empty"));
        }

        for spelling in std::iter::once(&name).chain(attrs.aliases.iter()) {
            if spelling.is_empty() {
                return Err(syn::Error::new_spanned(variant_ident, "alias must not be empty"));
            }
            if spellings.contains(spelling) {
                return Err(syn::Error::new_spanned(
                    variant_ident,
                    format!("duplicate name '{spelling}' in {type_name}"),
                ));
            }
            spellings.push(spelling.clone());
        }

        let aliases = &attrs.aliases;
        name_arms.push(quote! { Self::#variant_ident => #name });
        code_arms.push(quote! { Self::#variant_ident => Self::#variant_ident as i64 });
        alias_arms.push(quote! { Self::#variant_ident => &[#(#aliases),*] });
        idents.push(variant_ident);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::valconv::Scalar for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;

            fn parse_scalar(
                text: &str,
                options: &::valconv::ParseOptions,
            ) -> ::core::result::Result<Self, ::valconv::ConvertError> {
                ::valconv::bounded::parse_name::<Self>(text, options)
            }
        }

        impl #impl_generics ::valconv::BoundedValue for #ident #ty_generics #where_clause {
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            fn code(&self) -> i64 {
                match self {
                    #(#code_arms,)*
                }
            }

            fn aliases(&self) -> &'static [&'static str] {
                match self {
                    #(#alias_arms,)*
                }
            }
        }
    })
}

/// Codes are `i64`. A wider discriminant would wrap and two members could
/// share a code, so those reprs are refused.
fn check_repr_fits_code(attrs: &[Attribute]) -> Result<(), syn::Error> {
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if let Some(repr) = meta.path.get_ident() {
                if matches!(repr.to_string().as_str(), "u64" | "u128" | "i128" | "usize") {
                    return Err(meta.error(format!(
                        "BoundedValue codes are i64, repr({repr}) does not fit"
                    )));
                }
            }
            // align(N), packed(N)
            if meta.input.peek(syn::token::Paren) {
                let args;
                syn::parenthesized!(args in meta.input);
                args.parse::<TokenStream2>()?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

/// Read `#[bounded(type_name = "...")]` from the enum itself.
fn container_type_name(attrs: &[Attribute]) -> Result<Option<String>, syn::Error> {
    let mut type_name = None;
    for attr in attrs {
        if !attr.path().is_ident("bounded") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type_name") {
                let value: LitStr = meta.value()?.parse()?;
                type_name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown bounded attribute on enum (expected 'type_name')"))
            }
        })?;
    }
    Ok(type_name)
}

fn variant_attrs(attrs: &[Attribute]) -> Result<VariantAttrs, syn::Error> {
    let mut parsed = VariantAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("bounded") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if parsed.name.is_some() {
                    return Err(meta.error("canonical name declared twice"));
                }
                parsed.name = Some(value.value());
            } else if meta.path.is_ident("alias") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.aliases.push(value.value());
            } else {
                return Err(meta.error("unknown bounded attribute on variant (expected 'name' or 'alias')"));
            }
            Ok(())
        })?;
    }
    Ok(parsed)
}
