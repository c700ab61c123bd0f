//! Named widget factories for explicit widget overrides
//!
//! A field that names a widget (`#[form(widget = "text_area")]`) skips type
//! inference; the widget is built by calling the registered zero-argument
//! factory.

use crate::widget::{ContentElement, ContentKind, InputKind, InputWidget, Widget};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Zero-argument widget constructor
pub type WidgetFactory = Arc<dyn Fn() -> anyhow::Result<Box<dyn Widget>> + Send + Sync>;

const BUILTIN_INPUTS: [InputKind; 10] = [
	InputKind::TextField,
	InputKind::TextArea,
	InputKind::PasswordField,
	InputKind::EmailField,
	InputKind::NumberField,
	InputKind::Checkbox,
	InputKind::DatePicker,
	InputKind::DateTimePicker,
	InputKind::TimePicker,
	InputKind::ComboBox,
];

/// Registry of widget factories keyed by name.
#[derive(Clone)]
pub struct WidgetRegistry {
	factories: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
	/// Registry without any factories
	pub fn empty() -> Self {
		Self {
			factories: HashMap::new(),
		}
	}

	/// Registry holding every built-in widget under its kind name
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::WidgetRegistry;
	///
	/// let registry = WidgetRegistry::new();
	/// assert!(registry.contains("text_area"));
	/// assert!(registry.contains("paragraph"));
	///
	/// let widget = registry.create("password_field").unwrap().unwrap();
	/// assert_eq!(widget.kind(), "password_field");
	/// ```
	pub fn new() -> Self {
		let mut registry = Self::empty();
		for kind in BUILTIN_INPUTS {
			registry.register(kind.name(), move || Ok(Box::new(InputWidget::new(kind))));
		}
		for kind in [ContentKind::Paragraph, ContentKind::Html] {
			registry.register(kind.name(), move || {
				Ok(Box::new(ContentElement::new(kind, String::new())))
			});
		}
		registry
	}

	/// Register `factory` under `name`, returning the factory it replaces
	pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Option<WidgetFactory>
	where
		F: Fn() -> anyhow::Result<Box<dyn Widget>> + Send + Sync + 'static,
	{
		self.factories.insert(name.into(), Arc::new(factory))
	}

	/// Register a widget type built through its `Default` implementation
	pub fn register_default<W>(&mut self, name: impl Into<String>) -> Option<WidgetFactory>
	where
		W: Widget + Default + 'static,
	{
		self.register(name, || Ok(Box::new(W::default())))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.factories.contains_key(name)
	}

	/// Registered names, sorted
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Build the widget registered as `name`; `None` when nothing is registered
	pub fn create(&self, name: &str) -> Option<anyhow::Result<Box<dyn Widget>>> {
		self.factories.get(name).map(|factory| factory())
	}
}

impl Default for WidgetRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for WidgetRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WidgetRegistry")
			.field("names", &self.names())
			.finish()
	}
}
