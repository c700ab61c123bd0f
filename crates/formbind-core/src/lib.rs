//! Declarative form generation for formbind
//!
//! This crate turns an annotated data model into a bound form:
//! - Field metadata (order, label, widget override, size, read-only)
//! - Widget inference from the declared field type
//! - Converters between widget values and narrower model types
//! - Two-way binding with per-field conversion errors
//!
//! Models usually implement [`FormModel`] through the derive macro exported
//! by the `formbind` facade crate.

pub mod binder;
pub mod content;
pub mod converter;
pub mod creator;
pub mod error;
pub mod field;
pub mod layout;
pub mod metadata;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod widget;

pub use binder::{Binder, Binding, FormBinder};
pub use content::{RichText, TextBlock};
pub use converter::{
	Converter, ConverterRegistry, IntegerListConverter, NarrowingConverter, StringListConverter,
};
pub use creator::{FormCreator, bind_and_create_fields};
pub use error::{
	ConversionError, ConversionResult, FieldAccessError, FormBuildError, FormBuildResult,
	SettingsError, ValidationErrors, WriteError,
};
pub use field::{Choice, FieldKind, FieldTyped, FormChoices, kind_of};
pub use layout::{FormContainer, FormLayout};
pub use metadata::{FieldDescriptor, FieldMeta, FormModel, read_descriptors};
pub use registry::{WidgetFactory, WidgetRegistry};
pub use resolver::{WidgetResolver, WidgetStrategy};
pub use settings::FormSettings;
pub use widget::{
	ContentElement, ContentKind, InputKind, InputWidget, Size, ValueType, Widget, WidgetHandle,
};

// Used by code generated in formbind-macros
#[doc(hidden)]
pub mod __private {
	pub use serde_json;
}
