//! FormModel derive macro
//!
//! Generates the `FormModel` implementation: field metadata read from
//! `#[form(...)]` attributes plus by-name field access through serde.
//! Fields without a `#[form]` attribute are invisible to the form.

use crate::crate_paths::get_formbind_crate;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

/// Field configuration from #[form(...)] attribute
#[derive(Debug, Clone, Default)]
struct FieldConfig {
	order: Option<i32>,
	label: Option<String>,
	widget: Option<String>,
	width: Option<String>,
	height: Option<String>,
	read_only: Option<bool>,
}

impl FieldConfig {
	/// Parse #[form(...)] attributes; `None` when the field has none
	fn from_attrs(attrs: &[syn::Attribute]) -> Result<Option<Self>> {
		let mut config = None;

		for attr in attrs {
			if !attr.path().is_ident("form") {
				continue;
			}
			let config = config.get_or_insert_with(Self::default);

			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("order") {
					let value: syn::LitInt = meta.value()?.parse()?;
					config.order = Some(value.base10_parse()?);
					Ok(())
				} else if meta.path.is_ident("label") {
					let value: syn::LitStr = meta.value()?.parse()?;
					config.label = Some(value.value());
					Ok(())
				} else if meta.path.is_ident("widget") {
					let value: syn::LitStr = meta.value()?.parse()?;
					config.widget = Some(value.value());
					Ok(())
				} else if meta.path.is_ident("width") {
					let value: syn::LitStr = meta.value()?.parse()?;
					config.width = Some(value.value());
					Ok(())
				} else if meta.path.is_ident("height") {
					let value: syn::LitStr = meta.value()?.parse()?;
					config.height = Some(value.value());
					Ok(())
				} else if meta.path.is_ident("read_only") {
					// Bare `read_only` means `read_only = true`
					if meta.input.peek(syn::Token![=]) {
						let value: syn::LitBool = meta.value()?.parse()?;
						config.read_only = Some(value.value);
					} else {
						config.read_only = Some(true);
					}
					Ok(())
				} else {
					Err(meta.error("unsupported form attribute"))
				}
			})?;
		}

		Ok(config)
	}
}

/// Implementation of the FormModel derive macro
pub(crate) fn form_model_derive_impl(input: DeriveInput) -> Result<TokenStream> {
	let struct_name = &input.ident;

	let fields = match &input.data {
		Data::Struct(data_struct) => match &data_struct.fields {
			Fields::Named(fields) => &fields.named,
			_ => {
				return Err(syn::Error::new_spanned(
					struct_name,
					"FormModel can only be derived for structs with named fields",
				));
			}
		},
		_ => {
			return Err(syn::Error::new_spanned(
				struct_name,
				"FormModel can only be derived for structs",
			));
		}
	};

	let krate = get_formbind_crate()?;

	let mut meta_exprs = Vec::new();
	let mut names = Vec::new();
	let mut idents = Vec::new();

	for field in fields {
		let Some(config) = FieldConfig::from_attrs(&field.attrs)? else {
			continue;
		};
		let Some(ident) = field.ident.clone() else {
			continue;
		};
		let name = ident.to_string().trim_start_matches("r#").to_string();
		let ty = &field.ty;

		let mut expr = quote! {
			#krate::FieldMeta::new(#name, <#ty as #krate::FieldTyped>::field_kind())
		};
		if let Some(order) = config.order {
			expr = quote!(#expr.with_order(#order));
		}
		if let Some(label) = &config.label {
			expr = quote!(#expr.with_label(#label));
		}
		if let Some(widget) = &config.widget {
			expr = quote!(#expr.with_widget(#widget));
		}
		if let Some(width) = &config.width {
			expr = quote!(#expr.with_width(#width));
		}
		if let Some(height) = &config.height {
			expr = quote!(#expr.with_height(#height));
		}
		if let Some(read_only) = config.read_only {
			expr = quote!(#expr.with_read_only(#read_only));
		}

		meta_exprs.push(expr);
		names.push(name);
		idents.push(ident);
	}

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
	let json = quote!(#krate::__private::serde_json);

	Ok(quote! {
		impl #impl_generics #krate::FormModel for #struct_name #ty_generics #where_clause {
			fn declared_fields() -> ::std::vec::Vec<#krate::FieldMeta> {
				::std::vec![#(#meta_exprs),*]
			}

			#[allow(unused_variables)]
			fn field_value(&self, name: &str) -> ::std::option::Option<#json::Value> {
				match name {
					#(#names => #json::to_value(&self.#idents).ok(),)*
					_ => ::std::option::Option::None,
				}
			}

			#[allow(unused_variables)]
			fn set_field_value(
				&mut self,
				name: &str,
				value: #json::Value,
			) -> ::std::result::Result<(), #krate::FieldAccessError> {
				match name {
					#(
						#names => {
							self.#idents = #json::from_value(value).map_err(|source| {
								#krate::FieldAccessError::Deserialize {
									field: ::std::string::ToString::to_string(name),
									source,
								}
							})?;
							::std::result::Result::Ok(())
						}
					)*
					_ => ::std::result::Result::Err(#krate::FieldAccessError::UnknownField(
						::std::string::ToString::to_string(name),
					)),
				}
			}
		}
	})
}
