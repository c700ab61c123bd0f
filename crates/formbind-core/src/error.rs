//! Error types for form construction, conversion and model access

use std::collections::BTreeMap;
use std::fmt;

/// Fatal failure while building a form from model declarations.
///
/// These indicate a programming error in the model's declarations rather
/// than bad user input. The whole build is aborted on the first one.
#[derive(Debug, thiserror::Error)]
pub enum FormBuildError {
	#[error("Unsupported member type {type_name} for field '{field}'")]
	UnsupportedType { field: String, type_name: String },
	#[error("No widget named '{widget}' is registered (field '{field}')")]
	UnknownWidget { field: String, widget: String },
	#[error("Failed to construct widget '{widget}' for field '{field}': {source}")]
	WidgetConstruction {
		field: String,
		widget: String,
		#[source]
		source: anyhow::Error,
	},
}

pub type FormBuildResult<T> = Result<T, FormBuildError>;

/// Per-field failure converting a presentation value into the model representation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
	#[error("{target} value out of range")]
	OutOfRange { target: &'static str, value: f64 },
	#[error("{message}")]
	InvalidFormat { message: String },
	#[error("Expected {expected} value")]
	TypeMismatch { expected: &'static str },
}

impl ConversionError {
	pub fn invalid_format(message: impl Into<String>) -> Self {
		Self::InvalidFormat {
			message: message.into(),
		}
	}
}

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Failure reading or writing a model field by name.
#[derive(Debug, thiserror::Error)]
pub enum FieldAccessError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
	#[error("Cannot assign value to field '{field}': {source}")]
	Deserialize {
		field: String,
		#[source]
		source: serde_json::Error,
	},
}

/// Conversion failures collected across every binding of a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
	errors: BTreeMap<String, ConversionError>,
}

impl ValidationErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, field: impl Into<String>, error: ConversionError) {
		self.errors.insert(field.into(), error);
	}

	pub fn get(&self, field: &str) -> Option<&ConversionError> {
		self.errors.get(field)
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	/// Field names with errors, in ascending name order
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.errors.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ConversionError)> {
		self.errors.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (field, error) in &self.errors {
			if !first {
				write!(f, "; ")?;
			}
			write!(f, "{}: {}", field, error)?;
			first = false;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

/// Failure loading [`FormSettings`](crate::settings::FormSettings).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid form settings: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Failure writing a bound form back into its model.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
	#[error("Validation failed: {0}")]
	Validation(ValidationErrors),
	#[error(transparent)]
	Access(#[from] FieldAccessError),
}
