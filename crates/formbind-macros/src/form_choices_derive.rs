//! FormChoices derive macro
//!
//! Implements `FormChoices` and `FieldTyped` for fieldless enums. Variants may
//! carry `#[choice(label = "...")]`; when any variant does, the enum exposes
//! display labels and unlabelled variants fall back to their identifier.

use crate::crate_paths::get_formbind_crate;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

/// Parse `#[choice(label = "...")]` on a variant
fn variant_label(attrs: &[syn::Attribute]) -> Result<Option<String>> {
	let mut label = None;

	for attr in attrs {
		if !attr.path().is_ident("choice") {
			continue;
		}
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("label") {
				let value: syn::LitStr = meta.value()?.parse()?;
				label = Some(value.value());
				Ok(())
			} else {
				Err(meta.error("unsupported choice attribute"))
			}
		})?;
	}

	Ok(label)
}

/// Implementation of the FormChoices derive macro
pub(crate) fn form_choices_derive_impl(input: DeriveInput) -> Result<TokenStream> {
	let enum_name = &input.ident;

	let Data::Enum(data_enum) = &input.data else {
		return Err(syn::Error::new_spanned(
			enum_name,
			"FormChoices can only be derived for enums",
		));
	};
	if data_enum.variants.is_empty() {
		return Err(syn::Error::new_spanned(
			enum_name,
			"FormChoices requires at least one variant",
		));
	}

	let mut variants = Vec::new();
	let mut identifiers = Vec::new();
	let mut labels = Vec::new();

	for variant in &data_enum.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(
				variant,
				"FormChoices variants cannot have fields",
			));
		}
		variants.push(&variant.ident);
		identifiers.push(variant.ident.to_string());
		labels.push(variant_label(&variant.attrs)?);
	}

	let krate = get_formbind_crate()?;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let display_label = if labels.iter().any(Option::is_some) {
		let label_exprs = labels.iter().map(|label| match label {
			Some(text) => quote!(::std::option::Option::Some(#text)),
			None => quote!(::std::option::Option::None),
		});
		quote! {
			fn display_label(&self) -> ::std::option::Option<&'static str> {
				match self {
					#(Self::#variants => #label_exprs,)*
				}
			}
		}
	} else {
		quote!()
	};

	Ok(quote! {
		impl #impl_generics #krate::FormChoices for #enum_name #ty_generics #where_clause {
			fn variants() -> ::std::vec::Vec<Self> {
				::std::vec![#(Self::#variants),*]
			}

			fn identifier(&self) -> &'static str {
				match self {
					#(Self::#variants => #identifiers,)*
				}
			}

			#display_label
		}

		impl #impl_generics #krate::FieldTyped for #enum_name #ty_generics #where_clause {
			fn field_kind() -> #krate::FieldKind {
				#krate::FieldKind::Enumeration(
					<Self as #krate::FormChoices>::choices(),
				)
			}
		}
	})
}
