//! Form generation settings

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

/// Tunables applied while building forms.
///
/// # Examples
///
/// ```
/// use formbind_core::FormSettings;
///
/// let settings = FormSettings::from_toml_str(r#"
///     humanize_labels = true
///     default_width = "100%"
/// "#).unwrap();
/// assert!(settings.humanize_labels);
/// assert_eq!(settings.default_width.as_deref(), Some("100%"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Derive missing labels as `First name` from `first_name` instead of using the raw name
	pub humanize_labels: bool,
	/// Width applied to sizable widgets without an explicit width
	pub default_width: Option<String>,
}

impl FormSettings {
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn with_humanize_labels(mut self, humanize: bool) -> Self {
		self.humanize_labels = humanize;
		self
	}

	pub fn with_default_width(mut self, width: impl Into<String>) -> Self {
		self.default_width = Some(width.into());
		self
	}

	/// Label for a field without an explicit one
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::FormSettings;
	///
	/// assert_eq!(FormSettings::default().label_for("first_name"), "first_name");
	/// assert_eq!(
	///     FormSettings::default().with_humanize_labels(true).label_for("first_name"),
	///     "First name"
	/// );
	/// ```
	pub fn label_for(&self, field_name: &str) -> String {
		if self.humanize_labels {
			humanize(field_name)
		} else {
			field_name.to_string()
		}
	}
}

fn humanize(name: &str) -> String {
	let spaced = name.trim_matches('_').replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
