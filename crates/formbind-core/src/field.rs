//! Declared field kinds and their mapping from Rust types
//!
//! [`FieldKind`] is the closed set of model field types the resolver knows
//! how to dispatch on. Rust types advertise their kind through
//! [`FieldTyped`]; the `FormModel` derive calls it for every annotated field,
//! so a field whose type has no implementation is rejected at compile time.

use crate::content::{RichText, TextBlock};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use serde_json::Value;

/// Declared type of a model field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
	Text,
	/// 32-bit integer
	Integer,
	/// 16-bit integer
	Short,
	/// Single-precision float
	Float,
	/// Double-precision float
	Double,
	Boolean,
	Date,
	DateTime,
	Time,
	/// Enumeration with every constant it declares
	Enumeration(Vec<Choice>),
	/// Plain text block, rendered as a non-interactive paragraph
	TextBlock,
	/// Rich (HTML) text block, rendered as a non-interactive element
	RichText,
	/// Sequence of values of the element kind
	List(Box<FieldKind>),
	/// Any type outside the closed set, identified by name
	Other(String),
}

impl FieldKind {
	/// Human-readable name of the declared type, used in error messages
	pub fn type_name(&self) -> String {
		match self {
			Self::Text => "String".to_string(),
			Self::Integer => "i32".to_string(),
			Self::Short => "i16".to_string(),
			Self::Float => "f32".to_string(),
			Self::Double => "f64".to_string(),
			Self::Boolean => "bool".to_string(),
			Self::Date => "NaiveDate".to_string(),
			Self::DateTime => "NaiveDateTime".to_string(),
			Self::Time => "NaiveTime".to_string(),
			Self::Enumeration(_) => "enum".to_string(),
			Self::TextBlock => "TextBlock".to_string(),
			Self::RichText => "RichText".to_string(),
			Self::List(element) => format!("Vec<{}>", element.type_name()),
			Self::Other(name) => name.clone(),
		}
	}

	/// Element kind when this is a list
	pub fn element_kind(&self) -> Option<&FieldKind> {
		match self {
			Self::List(element) => Some(element),
			_ => None,
		}
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, Self::Integer | Self::Short | Self::Float | Self::Double)
	}

	pub fn is_decorative(&self) -> bool {
		matches!(self, Self::TextBlock | Self::RichText)
	}
}

/// One selectable constant of an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
	/// Serialized form of the constant, as stored in the model
	pub value: Value,
	/// Constant identifier as declared
	pub identifier: String,
	/// Display label, when the enumeration provides one
	pub label: Option<String>,
}

impl Choice {
	pub fn new(value: Value, identifier: impl Into<String>) -> Self {
		Self {
			value,
			identifier: identifier.into(),
			label: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Item text shown in the choice list
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::Choice;
	/// use serde_json::json;
	///
	/// let plain = Choice::new(json!("Red"), "Red");
	/// assert_eq!(plain.text(), "Red");
	///
	/// let labelled = Choice::new(json!("Red"), "Red").with_label("Bright red");
	/// assert_eq!(labelled.text(), "Bright red");
	/// ```
	pub fn text(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.identifier)
	}
}

/// Enumerations usable as form fields.
///
/// Usually derived with `#[derive(FormChoices)]`, which also implements
/// [`FieldTyped`] for the enum.
pub trait FormChoices: Serialize + Sized {
	/// Every constant, in declaration order
	fn variants() -> Vec<Self>;

	/// Declared identifier of the constant
	fn identifier(&self) -> &'static str;

	/// Display label of the constant, if the enumeration provides one
	fn display_label(&self) -> Option<&'static str> {
		None
	}

	/// Choices for every constant, in declaration order
	fn choices() -> Vec<Choice> {
		Self::variants()
			.iter()
			.map(|variant| {
				let identifier = variant.identifier();
				let value = serde_json::to_value(variant)
					.unwrap_or_else(|_| Value::String(identifier.to_string()));
				let choice = Choice::new(value, identifier);
				match variant.display_label() {
					Some(label) => choice.with_label(label),
					None => choice,
				}
			})
			.collect()
	}
}

/// Rust types that map to a [`FieldKind`].
pub trait FieldTyped {
	fn field_kind() -> FieldKind;
}

macro_rules! impl_field_typed {
	($($ty:ty => $kind:ident),* $(,)?) => {
		$(
			impl FieldTyped for $ty {
				fn field_kind() -> FieldKind {
					FieldKind::$kind
				}
			}
		)*
	};
}

impl_field_typed! {
	String => Text,
	i32 => Integer,
	i16 => Short,
	f32 => Float,
	f64 => Double,
	bool => Boolean,
	NaiveDate => Date,
	NaiveDateTime => DateTime,
	NaiveTime => Time,
	TextBlock => TextBlock,
	RichText => RichText,
}

impl<T: FieldTyped> FieldTyped for Option<T> {
	fn field_kind() -> FieldKind {
		T::field_kind()
	}
}

impl<T: FieldTyped> FieldTyped for Vec<T> {
	fn field_kind() -> FieldKind {
		FieldKind::List(Box::new(T::field_kind()))
	}
}

/// Declared kind of `T`
pub fn kind_of<T: FieldTyped + ?Sized>() -> FieldKind {
	T::field_kind()
}
