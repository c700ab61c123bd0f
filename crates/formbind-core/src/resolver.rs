//! Field-to-widget resolution
//!
//! An explicit widget name on the descriptor wins and is built from the
//! [`WidgetRegistry`] without looking at the field type. Otherwise the
//! declared [`FieldKind`] is dispatched through an exhaustive table; kinds
//! with no widget (lists, foreign types) are reported as unsupported.

use crate::error::{FormBuildError, FormBuildResult};
use crate::field::{Choice, FieldKind};
use crate::metadata::FieldDescriptor;
use crate::registry::WidgetRegistry;
use crate::settings::FormSettings;
use crate::widget::{ContentElement, ContentKind, InputKind, InputWidget, Widget};
use serde_json::Value;

/// How a field kind is turned into a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetStrategy {
	Input(InputKind),
	Choice(Vec<Choice>),
	Content(ContentKind),
}

impl WidgetStrategy {
	/// Strategy for `kind`, or `None` when no widget is inferred for it
	pub fn for_kind(kind: &FieldKind) -> Option<Self> {
		match kind {
			FieldKind::Text => Some(Self::Input(InputKind::TextField)),
			FieldKind::Integer | FieldKind::Short | FieldKind::Float | FieldKind::Double => {
				Some(Self::Input(InputKind::NumberField))
			}
			FieldKind::Boolean => Some(Self::Input(InputKind::Checkbox)),
			FieldKind::Date => Some(Self::Input(InputKind::DatePicker)),
			FieldKind::DateTime => Some(Self::Input(InputKind::DateTimePicker)),
			FieldKind::Time => Some(Self::Input(InputKind::TimePicker)),
			FieldKind::Enumeration(choices) => Some(Self::Choice(choices.clone())),
			FieldKind::TextBlock => Some(Self::Content(ContentKind::Paragraph)),
			FieldKind::RichText => Some(Self::Content(ContentKind::Html)),
			FieldKind::List(_) | FieldKind::Other(_) => None,
		}
	}
}

/// Builds the widget for a field descriptor.
#[derive(Debug, Clone, Copy)]
pub struct WidgetResolver<'a> {
	registry: &'a WidgetRegistry,
	settings: &'a FormSettings,
}

impl<'a> WidgetResolver<'a> {
	pub fn new(registry: &'a WidgetRegistry, settings: &'a FormSettings) -> Self {
		Self { registry, settings }
	}

	/// Label shown for the field
	pub fn label_for(&self, descriptor: &FieldDescriptor) -> String {
		descriptor
			.label
			.clone()
			.unwrap_or_else(|| self.settings.label_for(&descriptor.name))
	}

	/// Build, label and size the widget for `descriptor`.
	///
	/// `current` is the model's current value of the field; decorative
	/// elements display it when it is a non-empty string.
	pub fn resolve(
		&self,
		descriptor: &FieldDescriptor,
		current: Option<&Value>,
	) -> FormBuildResult<Box<dyn Widget>> {
		let label = self.label_for(descriptor);
		let mut widget = match &descriptor.widget {
			Some(name) => self.instantiate(descriptor, name)?,
			None => self.infer(descriptor, &label, current)?,
		};
		widget.set_label(&label);
		self.apply_attributes(descriptor, widget.as_mut());
		tracing::debug!(
			field = %descriptor.name,
			widget = widget.kind(),
			explicit = descriptor.widget.is_some(),
			"resolved widget"
		);
		Ok(widget)
	}

	fn instantiate(
		&self,
		descriptor: &FieldDescriptor,
		name: &str,
	) -> FormBuildResult<Box<dyn Widget>> {
		let created = self
			.registry
			.create(name)
			.ok_or_else(|| FormBuildError::UnknownWidget {
				field: descriptor.name.clone(),
				widget: name.to_string(),
			})?;
		created.map_err(|source| FormBuildError::WidgetConstruction {
			field: descriptor.name.clone(),
			widget: name.to_string(),
			source,
		})
	}

	fn infer(
		&self,
		descriptor: &FieldDescriptor,
		label: &str,
		current: Option<&Value>,
	) -> FormBuildResult<Box<dyn Widget>> {
		let strategy =
			WidgetStrategy::for_kind(&descriptor.kind).ok_or_else(|| {
				FormBuildError::UnsupportedType {
					field: descriptor.name.clone(),
					type_name: descriptor.kind.type_name(),
				}
			})?;
		let widget: Box<dyn Widget> = match strategy {
			WidgetStrategy::Input(kind) => Box::new(InputWidget::new(kind)),
			WidgetStrategy::Choice(choices) => Box::new(InputWidget::combo_box(choices)),
			WidgetStrategy::Content(kind) => {
				let text = match current {
					Some(Value::String(text)) if !text.is_empty() => text.as_str(),
					_ => label,
				};
				Box::new(ContentElement::new(kind, text))
			}
		};
		Ok(widget)
	}

	fn apply_attributes(&self, descriptor: &FieldDescriptor, widget: &mut dyn Widget) {
		if let Some(size) = widget.size_mut() {
			if let Some(width) = descriptor
				.width
				.as_ref()
				.or(self.settings.default_width.as_ref())
			{
				size.width = Some(width.clone());
			}
			if let Some(height) = &descriptor.height {
				size.height = Some(height.clone());
			}
		}
		if let Some(read_only) = descriptor.read_only {
			widget.set_read_only(read_only);
		}
	}
}
