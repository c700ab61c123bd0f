//! Widgets produced for form fields
//!
//! A [`Widget`] is either an input component with a native value type or a
//! decorative content element (value type [`ValueType::None`]). Widgets are
//! shared between the layout that owns them and the binder that reads and
//! writes their values, through a [`WidgetHandle`].

use crate::error::{ConversionError, ConversionResult};
use crate::field::Choice;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Native value representation of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	Text,
	/// Double-precision number
	Number,
	Boolean,
	Date,
	DateTime,
	Time,
	/// One of the widget's items
	Choice,
	/// Decorative element without a value
	None,
}

impl ValueType {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Number => "number",
			Self::Boolean => "boolean",
			Self::Date => "date",
			Self::DateTime => "date-time",
			Self::Time => "time",
			Self::Choice => "choice",
			Self::None => "none",
		}
	}

	/// Value held by a freshly constructed widget
	pub fn empty_value(&self) -> Value {
		match self {
			Self::Text => Value::String(String::new()),
			Self::Boolean => Value::Bool(false),
			_ => Value::Null,
		}
	}

	/// Check that `value` is a valid native value; `null` always is.
	pub fn check(&self, value: &Value) -> ConversionResult<()> {
		if value.is_null() {
			return Ok(());
		}
		let valid = match self {
			Self::Text => value.is_string(),
			Self::Number => value.is_number(),
			Self::Boolean => value.is_boolean(),
			Self::Date => serde_json::from_value::<NaiveDate>(value.clone()).is_ok(),
			Self::DateTime => serde_json::from_value::<NaiveDateTime>(value.clone()).is_ok(),
			Self::Time => serde_json::from_value::<NaiveTime>(value.clone()).is_ok(),
			Self::Choice => true,
			Self::None => false,
		};
		if valid {
			Ok(())
		} else {
			Err(ConversionError::TypeMismatch {
				expected: self.name(),
			})
		}
	}
}

/// Width and height of a sizable widget, as CSS lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Size {
	pub width: Option<String>,
	pub height: Option<String>,
}

/// A form component.
pub trait Widget: fmt::Debug {
	/// Widget type name, e.g. `"text_field"`
	fn kind(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn set_label(&mut self, label: &str);

	fn value_type(&self) -> ValueType;

	fn value(&self) -> Value {
		Value::Null
	}

	/// Replace the current value; fails when the value is not of the native type
	fn set_value(&mut self, value: Value) -> ConversionResult<()> {
		self.value_type().check(&value)
	}

	/// Sizing capability; `None` for widgets that cannot be sized
	fn size_mut(&mut self) -> Option<&mut Size> {
		None
	}

	fn size(&self) -> Option<&Size> {
		None
	}

	fn set_read_only(&mut self, _read_only: bool) {}

	fn is_read_only(&self) -> bool {
		false
	}

	/// Selectable items of choice widgets
	fn items(&self) -> &[Choice] {
		&[]
	}

	/// Whether the widget carries a value a binder can bind to
	fn is_bindable(&self) -> bool {
		self.value_type() != ValueType::None
	}
}

/// Shared handle to a widget owned by a layout and referenced by a binder.
#[derive(Debug, Clone)]
pub struct WidgetHandle(Rc<RefCell<Box<dyn Widget>>>);

impl WidgetHandle {
	pub fn new(widget: Box<dyn Widget>) -> Self {
		Self(Rc::new(RefCell::new(widget)))
	}

	pub fn of<W: Widget + 'static>(widget: W) -> Self {
		Self::new(Box::new(widget))
	}

	pub fn borrow(&self) -> Ref<'_, Box<dyn Widget>> {
		self.0.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, Box<dyn Widget>> {
		self.0.borrow_mut()
	}

	/// Whether both handles refer to the same widget
	pub fn ptr_eq(&self, other: &WidgetHandle) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

/// Built-in input component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
	TextField,
	TextArea,
	PasswordField,
	EmailField,
	NumberField,
	Checkbox,
	DatePicker,
	DateTimePicker,
	TimePicker,
	ComboBox,
}

impl InputKind {
	pub fn name(&self) -> &'static str {
		match self {
			Self::TextField => "text_field",
			Self::TextArea => "text_area",
			Self::PasswordField => "password_field",
			Self::EmailField => "email_field",
			Self::NumberField => "number_field",
			Self::Checkbox => "checkbox",
			Self::DatePicker => "date_picker",
			Self::DateTimePicker => "date_time_picker",
			Self::TimePicker => "time_picker",
			Self::ComboBox => "combo_box",
		}
	}

	pub fn value_type(&self) -> ValueType {
		match self {
			Self::TextField | Self::TextArea | Self::PasswordField | Self::EmailField => {
				ValueType::Text
			}
			Self::NumberField => ValueType::Number,
			Self::Checkbox => ValueType::Boolean,
			Self::DatePicker => ValueType::Date,
			Self::DateTimePicker => ValueType::DateTime,
			Self::TimePicker => ValueType::Time,
			Self::ComboBox => ValueType::Choice,
		}
	}
}

/// Built-in input component.
#[derive(Debug, Clone)]
pub struct InputWidget {
	kind: InputKind,
	label: Option<String>,
	value: Value,
	size: Size,
	read_only: bool,
	items: Vec<Choice>,
}

impl InputWidget {
	/// Create an unlabelled input holding its empty value
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::{InputKind, InputWidget, Widget, ValueType};
	///
	/// let field = InputWidget::new(InputKind::NumberField).with_label("Age");
	/// assert_eq!(field.kind(), "number_field");
	/// assert_eq!(field.label(), Some("Age"));
	/// assert_eq!(field.value_type(), ValueType::Number);
	/// assert!(field.value().is_null());
	/// ```
	pub fn new(kind: InputKind) -> Self {
		Self {
			kind,
			label: None,
			value: kind.value_type().empty_value(),
			size: Size::default(),
			read_only: false,
			items: Vec::new(),
		}
	}

	/// Combo box offering `items`
	pub fn combo_box(items: Vec<Choice>) -> Self {
		Self {
			items,
			..Self::new(InputKind::ComboBox)
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn input_kind(&self) -> InputKind {
		self.kind
	}
}

impl Widget for InputWidget {
	fn kind(&self) -> &str {
		self.kind.name()
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn set_label(&mut self, label: &str) {
		self.label = Some(label.to_string());
	}

	fn value_type(&self) -> ValueType {
		self.kind.value_type()
	}

	fn value(&self) -> Value {
		self.value.clone()
	}

	fn set_value(&mut self, value: Value) -> ConversionResult<()> {
		self.value_type().check(&value)?;
		if self.kind == InputKind::ComboBox
			&& !value.is_null()
			&& !self.items.iter().any(|item| item.value == value)
		{
			return Err(ConversionError::invalid_format("Select a valid choice"));
		}
		self.value = value;
		Ok(())
	}

	fn size_mut(&mut self) -> Option<&mut Size> {
		Some(&mut self.size)
	}

	fn size(&self) -> Option<&Size> {
		Some(&self.size)
	}

	fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	fn is_read_only(&self) -> bool {
		self.read_only
	}

	fn items(&self) -> &[Choice] {
		&self.items
	}
}

/// Decorative element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
	Paragraph,
	Html,
}

impl ContentKind {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Paragraph => "paragraph",
			Self::Html => "html",
		}
	}
}

/// Non-interactive element displaying text.
#[derive(Debug, Clone)]
pub struct ContentElement {
	kind: ContentKind,
	label: Option<String>,
	text: String,
	size: Size,
}

impl ContentElement {
	pub fn new(kind: ContentKind, text: impl Into<String>) -> Self {
		Self {
			kind,
			label: None,
			text: text.into(),
			size: Size::default(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = text.into();
	}
}

impl Widget for ContentElement {
	fn kind(&self) -> &str {
		self.kind.name()
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn set_label(&mut self, label: &str) {
		self.label = Some(label.to_string());
	}

	fn value_type(&self) -> ValueType {
		ValueType::None
	}

	fn value(&self) -> Value {
		Value::String(self.text.clone())
	}

	fn size_mut(&mut self) -> Option<&mut Size> {
		Some(&mut self.size)
	}

	fn size(&self) -> Option<&Size> {
		Some(&self.size)
	}
}
