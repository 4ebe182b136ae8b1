use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, parse_macro_input, spanned::Spanned,
};

/// Variant attribute: #[glyph('<char>')]
///
/// Generates `tripled::Glyphs` for a fieldless enum: every variant in
/// declaration order, its display glyph and its name.
#[proc_macro_derive(Glyphs, attributes(glyph))]
pub fn derive_glyphs(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(input.ident.span(), "Glyphs can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut vars = Vec::new();
    let mut glyph_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "Glyphs only supports fieldless variants")
                .to_compile_error()
                .into();
        }

        let glyph = match find_glyph(&variant.attrs) {
            Ok(Some(c)) => c,
            Ok(None) => {
                return syn::Error::new(variant.span(), "missing #[glyph('...')] on variant")
                    .to_compile_error()
                    .into();
            }
            Err(err) => return err.to_compile_error().into(),
        };

        let ident = &variant.ident;
        let name = ident.to_string();

        vars.push(quote! { Self::#ident });
        glyph_arms.push(quote! { Self::#ident => #glyph });
        name_arms.push(quote! { Self::#ident => #name });
    }

    let expanded = quote! {
        impl tripled::Glyphs for #enum_ident {
            const ALL: &'static [Self] = &[
                #(#vars),*
            ];

            fn glyph(self) -> char {
                match self {
                    #(#glyph_arms),*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    expanded.into()
}

/// Find `#[glyph('c')]` among the variant attributes.
fn find_glyph(attrs: &[Attribute]) -> syn::Result<Option<char>> {
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("glyph") {
            continue;
        }
        let syn::Meta::List(list) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[glyph('<char>')]"));
        };
        let expr = syn::parse2::<Expr>(list.tokens.clone())
            .map_err(|e| syn::Error::new(list.span(), format!("invalid glyph: {e}")))?;
        return match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Char(c), ..
            }) => Ok(Some(c.value())),
            other => Err(syn::Error::new(other.span(), "glyph must be a char literal")),
        };
    }
    Ok(None)
}
