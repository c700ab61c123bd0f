//! Per-field metadata and the model trait that exposes it
//!
//! A model declares [`FieldMeta`] for each of its form-relevant fields. Only
//! metadata carrying an order position becomes a [`FieldDescriptor`]; the
//! rest is filtered out by [`read_descriptors`].

use crate::error::FieldAccessError;
use crate::field::FieldKind;
use serde_json::Value;

/// Declarative metadata attached to one model field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
	pub name: String,
	pub kind: FieldKind,
	/// Display order; fields without it are left out of the form
	pub order: Option<i32>,
	pub label: Option<String>,
	/// Name of an explicit widget in the widget registry
	pub widget: Option<String>,
	pub width: Option<String>,
	pub height: Option<String>,
	pub read_only: Option<bool>,
}

impl FieldMeta {
	/// Create metadata for a field with no order marker
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::{FieldKind, FieldMeta};
	///
	/// let meta = FieldMeta::new("name", FieldKind::Text)
	///     .with_order(1)
	///     .with_label("Full name");
	/// assert_eq!(meta.order, Some(1));
	/// assert_eq!(meta.label.as_deref(), Some("Full name"));
	/// ```
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			kind,
			order: None,
			label: None,
			widget: None,
			width: None,
			height: None,
			read_only: None,
		}
	}

	pub fn with_order(mut self, order: i32) -> Self {
		self.order = Some(order);
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_widget(mut self, widget: impl Into<String>) -> Self {
		self.widget = Some(widget.into());
		self
	}

	pub fn with_width(mut self, width: impl Into<String>) -> Self {
		self.width = Some(width.into());
		self
	}

	pub fn with_height(mut self, height: impl Into<String>) -> Self {
		self.height = Some(height.into());
		self
	}

	pub fn with_read_only(mut self, read_only: bool) -> Self {
		self.read_only = Some(read_only);
		self
	}
}

/// Metadata of a field selected for the form.
///
/// Unlike [`FieldMeta`], the order position is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	pub name: String,
	pub kind: FieldKind,
	pub order: i32,
	pub label: Option<String>,
	pub widget: Option<String>,
	pub width: Option<String>,
	pub height: Option<String>,
	pub read_only: Option<bool>,
}

impl FieldDescriptor {
	/// Returns `None` when the metadata has no order marker
	pub fn from_meta(meta: FieldMeta) -> Option<Self> {
		let order = meta.order?;
		Some(Self {
			name: meta.name,
			kind: meta.kind,
			order,
			label: meta.label,
			widget: meta.widget,
			width: meta.width,
			height: meta.height,
			read_only: meta.read_only,
		})
	}

	/// Element kind when the field is a list
	pub fn element_kind(&self) -> Option<&FieldKind> {
		self.kind.element_kind()
	}
}

/// A data model whose fields can be turned into a form.
///
/// Implemented by `#[derive(FormModel)]`; hand-written implementations are
/// fine as long as `field_value`/`set_field_value` accept every name listed
/// by `declared_fields`.
pub trait FormModel {
	/// Metadata for every annotated field, in declaration order
	fn declared_fields() -> Vec<FieldMeta>
	where
		Self: Sized;

	/// Current value of the named field
	fn field_value(&self, name: &str) -> Option<Value>;

	/// Assign the named field from its serialized form
	fn set_field_value(&mut self, name: &str, value: Value) -> Result<(), FieldAccessError>;
}

/// Descriptors of the fields carrying an order marker, ascending by order.
///
/// Fields sharing an order value keep their declaration order.
///
/// # Examples
///
/// ```
/// use formbind_core::{FieldAccessError, FieldKind, FieldMeta, FormModel, read_descriptors};
/// use serde_json::Value;
///
/// struct Person;
///
/// impl FormModel for Person {
///     fn declared_fields() -> Vec<FieldMeta> {
///         vec![
///             FieldMeta::new("age", FieldKind::Integer).with_order(2),
///             FieldMeta::new("notes", FieldKind::Text),
///             FieldMeta::new("name", FieldKind::Text).with_order(1),
///         ]
///     }
///
///     fn field_value(&self, _name: &str) -> Option<Value> {
///         None
///     }
///
///     fn set_field_value(&mut self, name: &str, _value: Value) -> Result<(), FieldAccessError> {
///         Err(FieldAccessError::UnknownField(name.to_string()))
///     }
/// }
///
/// let names: Vec<_> = read_descriptors(&Person).into_iter().map(|d| d.name).collect();
/// assert_eq!(names, vec!["name", "age"]);
/// ```
pub fn read_descriptors<M: FormModel>(_model: &M) -> Vec<FieldDescriptor> {
	let mut descriptors: Vec<FieldDescriptor> = M::declared_fields()
		.into_iter()
		.filter_map(FieldDescriptor::from_meta)
		.collect();
	descriptors.sort_by_key(|descriptor| descriptor.order);
	descriptors
}
