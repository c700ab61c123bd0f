//! Form generation from a model instance
//!
//! [`FormCreator::bind_and_create_fields`] walks the model's ordered field
//! descriptors, resolves a widget and a converter for each, registers
//! interactive widgets with the binder and appends every widget to the
//! layout. The first construction failure aborts the pass.

use crate::binder::Binder;
use crate::converter::ConverterRegistry;
use crate::error::FormBuildResult;
use crate::layout::FormLayout;
use crate::metadata::{FormModel, read_descriptors};
use crate::registry::WidgetRegistry;
use crate::resolver::WidgetResolver;
use crate::settings::FormSettings;
use crate::widget::WidgetHandle;

/// Builds and binds forms using a widget registry, converters and settings.
#[derive(Debug, Clone, Default)]
pub struct FormCreator {
	widgets: WidgetRegistry,
	converters: ConverterRegistry,
	settings: FormSettings,
}

impl FormCreator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_widgets(mut self, widgets: WidgetRegistry) -> Self {
		self.widgets = widgets;
		self
	}

	pub fn with_converters(mut self, converters: ConverterRegistry) -> Self {
		self.converters = converters;
		self
	}

	pub fn with_settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn widgets(&self) -> &WidgetRegistry {
		&self.widgets
	}

	pub fn widgets_mut(&mut self) -> &mut WidgetRegistry {
		&mut self.widgets
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	/// Create a widget for every ordered field of `model`, bind the
	/// interactive ones to `binder` and append all of them to `layout`.
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::{
	///     FieldAccessError, FieldKind, FieldMeta, FormBinder, FormContainer, FormCreator,
	///     FormModel,
	/// };
	/// use serde_json::{Value, json};
	///
	/// struct Login {
	///     user: String,
	///     remember: bool,
	/// }
	///
	/// impl FormModel for Login {
	///     fn declared_fields() -> Vec<FieldMeta> {
	///         vec![
	///             FieldMeta::new("remember", FieldKind::Boolean).with_order(2),
	///             FieldMeta::new("user", FieldKind::Text).with_order(1).with_label("User"),
	///         ]
	///     }
	///
	///     fn field_value(&self, name: &str) -> Option<Value> {
	///         match name {
	///             "user" => Some(json!(self.user)),
	///             "remember" => Some(json!(self.remember)),
	///             _ => None,
	///         }
	///     }
	///
	///     fn set_field_value(&mut self, name: &str, _value: Value) -> Result<(), FieldAccessError> {
	///         Err(FieldAccessError::UnknownField(name.to_string()))
	///     }
	/// }
	///
	/// let mut layout = FormContainer::new();
	/// let mut binder = FormBinder::new();
	/// let login = Login { user: "ada".into(), remember: true };
	///
	/// FormCreator::new()
	///     .bind_and_create_fields(&mut layout, &mut binder, &login)
	///     .unwrap();
	///
	/// assert_eq!(layout.labels(), vec![Some("User".to_string()), Some("remember".to_string())]);
	/// assert_eq!(binder.properties(), vec!["user", "remember"]);
	/// ```
	pub fn bind_and_create_fields<L, B, M>(
		&self,
		layout: &mut L,
		binder: &mut B,
		model: &M,
	) -> FormBuildResult<()>
	where
		L: FormLayout + ?Sized,
		B: Binder + ?Sized,
		M: FormModel,
	{
		let resolver = WidgetResolver::new(&self.widgets, &self.settings);
		for descriptor in read_descriptors(model) {
			let current = model.field_value(&descriptor.name);
			let widget = resolver.resolve(&descriptor, current.as_ref())?;
			let converter = self.converters.converter_for(&descriptor.kind);
			let handle = WidgetHandle::new(widget);

			if handle.borrow().is_bindable() {
				tracing::debug!(
					field = %descriptor.name,
					order = descriptor.order,
					converter = converter.as_ref().map(|c| c.name()).unwrap_or("identity"),
					"binding field"
				);
				binder.bind(&descriptor.name, handle.clone(), converter);
			} else {
				tracing::trace!(field = %descriptor.name, "decorative element left unbound");
			}
			layout.add(handle);
		}
		Ok(())
	}
}

/// [`FormCreator::bind_and_create_fields`] with the built-in widgets and
/// default settings.
pub fn bind_and_create_fields<L, B, M>(
	layout: &mut L,
	binder: &mut B,
	model: &M,
) -> FormBuildResult<()>
where
	L: FormLayout + ?Sized,
	B: Binder + ?Sized,
	M: FormModel,
{
	FormCreator::new().bind_and_create_fields(layout, binder, model)
}
