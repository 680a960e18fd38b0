use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Ident, parse_macro_input, spanned::Spanned};

/// Variant attributes: `#[weight(<expr>)]` or `#[percentage(<expr>)]`, one
/// kind per enum. The enum must also be `Copy`.
#[proc_macro_derive(Pickable, attributes(weight, percentage))]
pub fn derive_pickable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Weight,
    Percentage,
}

impl Kind {
    fn from_attr(name: &Ident) -> Option<Self> {
        if name == "weight" {
            Some(Kind::Weight)
        } else if name == "percentage" {
            Some(Kind::Percentage)
        } else {
            None
        }
    }

    fn attr(self) -> &'static str {
        match self {
            Kind::Weight => "weight",
            Kind::Percentage => "percentage",
        }
    }

    fn variant(self) -> Ident {
        match self {
            Kind::Weight => format_ident!("Weight"),
            Kind::Percentage => format_ident!("Percentage"),
        }
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "Pickable can only be derived for enums",
        ));
    };
    if data_enum.variants.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "Pickable needs at least one variant",
        ));
    }

    let mut kind: Option<Kind> = None;
    let mut entries = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "Pickable only supports fieldless variants",
            ));
        }

        let (variant_kind, expr) = priority_attr(&variant.attrs)?.ok_or_else(|| {
            syn::Error::new(
                variant.span(),
                "missing #[weight(...)] or #[percentage(...)] on variant",
            )
        })?;

        match kind {
            Some(k) if k != variant_kind => {
                return Err(syn::Error::new(
                    variant.span(),
                    format!(
                        "cannot mix #[{}] and #[{}] in one enum",
                        k.attr(),
                        variant_kind.attr()
                    ),
                ));
            }
            _ => kind = Some(variant_kind),
        }

        let ident = &variant.ident;
        entries.push(quote! { (Self::#ident, (#expr)) });
    }

    let kind = kind.map(Kind::variant);

    Ok(quote! {
        impl ::randpick::Pickable for #enum_ident {
            const KIND: ::randpick::PriorityKind = ::randpick::PriorityKind::#kind;
            const ENTRIES: &'static [(Self, i32)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Validated `randpick::Entries` from the annotated priorities.
            pub fn entries(
            ) -> ::core::result::Result<::randpick::Entries<Self>, ::randpick::PickError> {
                <Self as ::randpick::Pickable>::entries()
            }
        }
    })
}

/// The single priority attribute on a variant, if any.
fn priority_attr(attrs: &[Attribute]) -> syn::Result<Option<(Kind, Expr)>> {
    let mut found: Option<(Kind, Expr)> = None;
    for attr in attrs {
        let Some(kind) = attr.path().get_ident().and_then(Kind::from_attr) else {
            continue;
        };
        if found.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "only one #[weight(...)] or #[percentage(...)] per variant",
            ));
        }
        let syn::Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new(
                attr.span(),
                format!("use #[{}(<expr>)]", kind.attr()),
            ));
        };
        // Parse inside as an expression (e.g. 30 or BASE * 2)
        let expr = list.parse_args::<Expr>().map_err(|e| {
            syn::Error::new(list.span(), format!("invalid {} expr: {e}", kind.attr()))
        })?;
        found = Some((kind, expr));
    }
    Ok(found)
}
