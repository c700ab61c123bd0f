//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path generated code uses to reach formbind's core types.
///
/// Prefers the `formbind` facade crate, falling back to `formbind-core` when
/// only the core crate is a dependency. Renamed dependencies are honored.
pub(crate) fn get_formbind_crate() -> syn::Result<TokenStream> {
	use proc_macro_crate::{FoundCrate, crate_name};

	for candidate in ["formbind", "formbind-core"] {
		match crate_name(candidate) {
			Ok(FoundCrate::Itself) => {
				let ident = syn::Ident::new(
					&candidate.replace('-', "_"),
					proc_macro2::Span::call_site(),
				);
				return Ok(quote!(::#ident));
			}
			Ok(FoundCrate::Name(name)) => {
				let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
				return Ok(quote!(::#ident));
			}
			Err(_) => continue,
		}
	}

	Err(syn::Error::new(
		proc_macro2::Span::call_site(),
		"failed to resolve `formbind` crate. Ensure `formbind` or `formbind-core` is listed in Cargo.toml dependencies.",
	))
}
