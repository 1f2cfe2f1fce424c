//! `#[derive(Record)]` for godence.
//!
//! Generates a `godence::Record` implementation listing the struct's named
//! fields, plus a `godence::Decode` implementation that routes through
//! `godence::decode_record`.
//!
//! Field attributes:
//!
//! - `#[godence(name = "cadenceName")]` reads the field from a differently
//!   named Cadence field.
//! - `#[godence(skip)]` leaves the field out of decoding entirely.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

#[proc_macro_derive(Record, attributes(godence))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impl_record(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct RecordField<'a> {
    ident: &'a syn::Ident,
    ty: &'a syn::Type,
    native: String,
    external: String,
}

#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    skip: bool,
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("godence")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("godence field name cannot be empty"));
                }
                attrs.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                attrs.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported godence attribute, expected `name` or `skip`"))
            }
        })?;
    }
    Ok(attrs)
}

fn impl_record(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &ast.ident;
    let named = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let attrs = parse_field_attrs(field)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let raw = ident.to_string();
        let native = raw.strip_prefix("r#").unwrap_or(&raw).to_string();
        let external = attrs.name.unwrap_or_else(|| native.clone());
        fields.push(RecordField {
            ident,
            ty: &field.ty,
            native,
            external,
        });
    }

    // Concrete field types are checked by the generated calls themselves.
    let mut generics = ast.generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for field in &fields {
            let ty = field.ty;
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: ::godence::Decode));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mappings = fields.iter().map(|f| {
        let native = &f.native;
        let external = &f.external;
        if native == external {
            quote! { ::godence::FieldMapping::same(#native) }
        } else {
            quote! { ::godence::FieldMapping::new(#native, #external) }
        }
    });
    let arms = fields.iter().enumerate().map(|(index, f)| {
        let ident = f.ident;
        quote! { #index => ::godence::decode(value, &mut self.#ident), }
    });
    let record_name = name.to_string();

    Ok(quote! {
        impl #impl_generics ::godence::Record for #name #ty_generics #where_clause {
            const FIELDS: &'static [::godence::FieldMapping] = &[#(#mappings),*];

            fn decode_field(
                &mut self,
                index: usize,
                value: &::godence::Value,
            ) -> ::core::result::Result<(), ::godence::DecodeError> {
                match index {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::godence::DecodeError::FieldIndex {
                        record: #record_name,
                        index,
                    }),
                }
            }
        }

        impl #impl_generics ::godence::Decode for #name #ty_generics #where_clause {
            fn decode_from(
                &mut self,
                value: &::godence::Value,
            ) -> ::core::result::Result<(), ::godence::DecodeError> {
                ::godence::decode_record(value, self)
            }
        }
    })
}
