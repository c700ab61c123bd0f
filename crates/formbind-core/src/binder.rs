//! Two-way binding between widgets and model fields
//!
//! [`Binder`] is the registration surface the form creator talks to.
//! [`FormBinder`] is a complete implementation that moves values between a
//! [`FormModel`] and the bound widgets, running each binding's converter and
//! collecting per-field conversion failures.

use crate::converter::Converter;
use crate::error::{ConversionResult, ValidationErrors, WriteError};
use crate::metadata::FormModel;
use crate::widget::WidgetHandle;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Accepts widget-to-field registrations.
pub trait Binder {
	/// Bind `widget` to the model field named `property`, converting through
	/// `converter` when one is given
	fn bind(
		&mut self,
		property: &str,
		widget: WidgetHandle,
		converter: Option<Arc<dyn Converter>>,
	);
}

/// One widget bound to one model field.
#[derive(Clone)]
pub struct Binding {
	property: String,
	widget: WidgetHandle,
	converter: Option<Arc<dyn Converter>>,
}

impl Binding {
	pub fn new(
		property: impl Into<String>,
		widget: WidgetHandle,
		converter: Option<Arc<dyn Converter>>,
	) -> Self {
		Self {
			property: property.into(),
			widget,
			converter,
		}
	}

	pub fn property(&self) -> &str {
		&self.property
	}

	pub fn widget(&self) -> &WidgetHandle {
		&self.widget
	}

	pub fn converter(&self) -> Option<&Arc<dyn Converter>> {
		self.converter.as_ref()
	}

	/// Current widget value in model representation
	pub fn model_value(&self) -> ConversionResult<Value> {
		let presentation = self.widget.borrow().value();
		match &self.converter {
			Some(converter) => converter.to_model(&presentation),
			None => Ok(presentation),
		}
	}

	/// Show a model value in the widget
	pub fn show(&self, model_value: &Value) -> ConversionResult<()> {
		let presentation = match &self.converter {
			Some(converter) => converter.to_presentation(model_value),
			None => model_value.clone(),
		};
		self.widget.borrow_mut().set_value(presentation)
	}
}

impl fmt::Debug for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("property", &self.property)
			.field("widget", &self.widget.borrow().kind())
			.field("converter", &self.converter.as_ref().map(|c| c.name()))
			.finish()
	}
}

/// Binder holding its bindings in registration order.
#[derive(Debug, Clone, Default)]
pub struct FormBinder {
	bindings: Vec<Binding>,
}

impl FormBinder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bindings(&self) -> &[Binding] {
		&self.bindings
	}

	pub fn binding(&self, property: &str) -> Option<&Binding> {
		self.bindings.iter().find(|b| b.property == property)
	}

	pub fn is_bound(&self, property: &str) -> bool {
		self.binding(property).is_some()
	}

	/// Bound property names, in registration order
	pub fn properties(&self) -> Vec<&str> {
		self.bindings.iter().map(|b| b.property.as_str()).collect()
	}

	/// Load every bound field of `model` into its widget.
	///
	/// Fields the model reports no value for are left untouched. Values the
	/// widget rejects are reported per field; the remaining fields are still
	/// loaded.
	pub fn read_model<M: FormModel>(&self, model: &M) -> Result<(), ValidationErrors> {
		let mut errors = ValidationErrors::new();
		for binding in &self.bindings {
			let Some(value) = model.field_value(&binding.property) else {
				continue;
			};
			if let Err(error) = binding.show(&value) {
				tracing::warn!(
					field = %binding.property,
					%error,
					"model value rejected by widget"
				);
				errors.insert(binding.property.clone(), error);
			}
		}
		if errors.is_empty() {
			Ok(())
		} else {
			Err(errors)
		}
	}

	/// Convert every bound widget value to its model representation.
	///
	/// Returns the converted values keyed by property, or every conversion
	/// failure keyed by property.
	pub fn validate(&self) -> Result<BTreeMap<String, Value>, ValidationErrors> {
		let mut values = BTreeMap::new();
		let mut errors = ValidationErrors::new();
		for binding in &self.bindings {
			match binding.model_value() {
				Ok(value) => {
					values.insert(binding.property.clone(), value);
				}
				Err(error) => {
					tracing::warn!(field = %binding.property, %error, "conversion failed");
					errors.insert(binding.property.clone(), error);
				}
			}
		}
		if errors.is_empty() {
			Ok(values)
		} else {
			Err(errors)
		}
	}

	/// Write widget values back into `model`.
	///
	/// Nothing is written unless every binding converts cleanly and every
	/// converted value is accepted by its field; the assignments are staged
	/// on a copy of `model`. Read-only widgets are never written back.
	pub fn write_model<M: FormModel + Clone>(&self, model: &mut M) -> Result<(), WriteError> {
		let values = self.validate().map_err(WriteError::Validation)?;
		let mut staged = model.clone();
		for binding in &self.bindings {
			if binding.widget.borrow().is_read_only() {
				continue;
			}
			if let Some(value) = values.get(&binding.property) {
				staged.set_field_value(&binding.property, value.clone())?;
			}
		}
		*model = staged;
		Ok(())
	}
}

impl Binder for FormBinder {
	fn bind(
		&mut self,
		property: &str,
		widget: WidgetHandle,
		converter: Option<Arc<dyn Converter>>,
	) {
		self.bindings.push(Binding::new(property, widget, converter));
	}
}
