//! Derive macros for formbind
//!
//! - `#[derive(FormModel)]` reads `#[form(...)]` field attributes
//! - `#[derive(FormChoices)]` exposes a fieldless enum as a choice list

mod crate_paths;
mod form_choices_derive;
mod form_model_derive;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive `FormModel` for a struct with named fields.
///
/// Only fields with a `#[form(...)]` attribute take part in the form, and only
/// those with an `order` are shown. Supported options:
///
/// - `order = <int>`: display position, ascending
/// - `label = "..."`: label text, defaults to the field name
/// - `widget = "..."`: name of a registered widget, bypassing type inference
/// - `width = "..."`, `height = "..."`: CSS lengths for sizable widgets
/// - `read_only` or `read_only = <bool>`
///
/// Annotated field types must implement `FieldTyped`, `Serialize` and
/// `Deserialize`. This holds for fields with a `widget` override too. A type
/// outside the built-in kinds can still be bound through an explicit widget
/// by implementing `FieldTyped` to return `FieldKind::Other`:
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// #[serde(transparent)]
/// struct HexColour(String);
///
/// impl FieldTyped for HexColour {
///     fn field_kind() -> FieldKind {
///         FieldKind::Other("HexColour".to_string())
///     }
/// }
/// ```
///
/// Without a `widget`, such a field fails form generation with
/// `FormBuildError::UnsupportedType`.
///
/// ```ignore
/// #[derive(FormModel, Serialize, Deserialize)]
/// struct Person {
///     #[form(order = 1, label = "Name")]
///     name: String,
///     #[form(order = 2, width = "6em")]
///     age: i16,
///     #[form(order = 3, widget = "text_field")]
///     nicknames: Vec<String>,
/// }
/// ```
#[proc_macro_derive(FormModel, attributes(form))]
pub fn derive_form_model(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	form_model_derive::form_model_derive_impl(input)
		.unwrap_or_else(|e| e.to_compile_error())
		.into()
}

/// Derive `FormChoices` and `FieldTyped` for a fieldless enum.
///
/// ```ignore
/// #[derive(FormChoices, Serialize, Deserialize)]
/// enum Priority {
///     #[choice(label = "Low priority")]
///     Low,
///     #[choice(label = "High priority")]
///     High,
/// }
/// ```
#[proc_macro_derive(FormChoices, attributes(choice))]
pub fn derive_form_choices(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	form_choices_derive::form_choices_derive_impl(input)
		.unwrap_or_else(|e| e.to_compile_error())
		.into()
}
