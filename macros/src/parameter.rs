//! Parameter derive macro - generates the member table and override lookup.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attr::get_wire_value;

/// Generate the `Parameter` implementation for a fieldless enum.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => return quote! { compile_error!("Parameter only works on enums"); },
    };

    if variants.is_empty() {
        return quote! { compile_error!("Parameter needs at least one enum member"); };
    }

    let mut members = Vec::with_capacity(variants.len());
    let mut name_arms = Vec::with_capacity(variants.len());
    let mut override_arms = Vec::with_capacity(variants.len());

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(variant, "Parameter only works on fieldless enums")
                .to_compile_error();
        }

        let ident = &variant.ident;
        let member_name = ident.to_string();
        let wire = match get_wire_value(&variant.attrs) {
            Ok(Some(lit)) => quote! { ::core::option::Option::Some(#lit) },
            Ok(None) => quote! { ::core::option::Option::None },
            Err(err) => return err.to_compile_error(),
        };

        members.push(quote! { Self::#ident });
        name_arms.push(quote! { Self::#ident => #member_name, });
        override_arms.push(quote! { Self::#ident => #wire, });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::repo_routes::parameter::Parameter for #name #ty_generics #where_clause {
            const MEMBERS: &'static [Self] = &[#(#members),*];

            fn member_name(self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            fn wire_override(self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#override_arms)*
                }
            }
        }
    }
}
