//! Conversions between widget values and model values
//!
//! A widget works with its native value (a double for number fields, text for
//! text fields); a model field may store something narrower or structured.
//! A [`Converter`] bridges the two. Converting toward the model may fail with
//! a [`ConversionError`], which the binder reports against the field; the
//! opposite direction is total.
//!
//! `null` passes through every converter unchanged in both directions.

use crate::error::{ConversionError, ConversionResult};
use crate::field::FieldKind;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Separator used when joining list elements for display
pub const LIST_SEPARATOR: &str = ", ";

/// Split list text on `,`, dropping trailing empty segments.
///
/// Empty input yields one empty segment; input made only of separators
/// yields none.
fn split_list(text: &str) -> Vec<&str> {
	if text.is_empty() {
		return vec![text];
	}
	let mut segments: Vec<&str> = text.split(',').collect();
	while segments.last().is_some_and(|segment| segment.is_empty()) {
		segments.pop();
	}
	segments
}

/// Bidirectional value transform between presentation and model.
pub trait Converter: fmt::Debug + Send + Sync {
	/// Short identifier, used in logs
	fn name(&self) -> &'static str;

	fn to_model(&self, presentation: &Value) -> ConversionResult<Value>;

	fn to_presentation(&self, model: &Value) -> Value;
}

/// Model types narrower than the `f64` a number field produces.
pub trait NarrowNumber: Copy + Into<f64> + Send + Sync + 'static {
	/// Type name used in range error messages
	const NAME: &'static str;
	const MIN: f64;
	const MAX: f64;

	/// Narrow a value already known to lie in `[MIN, MAX]`
	fn narrow(value: f64) -> Self;

	fn to_json(self) -> Value;
}

impl NarrowNumber for i32 {
	const NAME: &'static str = "Integer";
	const MIN: f64 = i32::MIN as f64;
	const MAX: f64 = i32::MAX as f64;

	fn narrow(value: f64) -> Self {
		value as i32
	}

	fn to_json(self) -> Value {
		Value::from(self)
	}
}

impl NarrowNumber for i16 {
	const NAME: &'static str = "Short";
	const MIN: f64 = i16::MIN as f64;
	const MAX: f64 = i16::MAX as f64;

	fn narrow(value: f64) -> Self {
		value as i16
	}

	fn to_json(self) -> Value {
		Value::from(self)
	}
}

impl NarrowNumber for f32 {
	const NAME: &'static str = "Float";
	const MIN: f64 = f32::MIN as f64;
	const MAX: f64 = f32::MAX as f64;

	fn narrow(value: f64) -> Self {
		value as f32
	}

	fn to_json(self) -> Value {
		Value::from(self)
	}
}

/// Narrows a double into `T`, rejecting values outside `T`'s range.
///
/// Integer targets truncate any fractional part toward zero.
pub struct NarrowingConverter<T> {
	_target: PhantomData<fn() -> T>,
}

impl<T: NarrowNumber> NarrowingConverter<T> {
	pub fn new() -> Self {
		Self {
			_target: PhantomData,
		}
	}

	/// Typed presentation-to-model conversion
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::converter::NarrowingConverter;
	///
	/// let converter = NarrowingConverter::<i16>::new();
	/// assert_eq!(converter.narrow(12.0), Ok(12));
	/// assert!(converter.narrow(40_000.0).is_err());
	/// ```
	pub fn narrow(&self, value: f64) -> ConversionResult<T> {
		if value.is_nan() || value < T::MIN || value > T::MAX {
			return Err(ConversionError::OutOfRange {
				target: T::NAME,
				value,
			});
		}
		Ok(T::narrow(value))
	}

	/// Typed model-to-presentation conversion
	pub fn widen(&self, value: T) -> f64 {
		value.into()
	}
}

impl<T: NarrowNumber> Default for NarrowingConverter<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: NarrowNumber> fmt::Debug for NarrowingConverter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NarrowingConverter")
			.field("target", &T::NAME)
			.finish()
	}
}

impl<T: NarrowNumber> Converter for NarrowingConverter<T> {
	fn name(&self) -> &'static str {
		T::NAME
	}

	fn to_model(&self, presentation: &Value) -> ConversionResult<Value> {
		if presentation.is_null() {
			return Ok(Value::Null);
		}
		let value = presentation
			.as_f64()
			.ok_or(ConversionError::TypeMismatch { expected: "number" })?;
		Ok(self.narrow(value)?.to_json())
	}

	fn to_presentation(&self, model: &Value) -> Value {
		// Re-widening through the model JSON number is exact for every narrow type
		match model.as_f64() {
			Some(value) => Value::from(value),
			None => Value::Null,
		}
	}
}

/// Comma-separated text to a list of `i32`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerListConverter;

impl IntegerListConverter {
	/// # Examples
	///
	/// ```
	/// use formbind_core::converter::IntegerListConverter;
	///
	/// assert_eq!(IntegerListConverter.parse("3, 4,5"), Ok(vec![3, 4, 5]));
	/// assert!(IntegerListConverter.parse("3,x,5").is_err());
	/// ```
	pub fn parse(&self, text: &str) -> ConversionResult<Vec<i32>> {
		split_list(text)
			.into_iter()
			.map(|token| token.trim().parse::<i32>())
			.collect::<Result<Vec<_>, _>>()
			.map_err(|_| ConversionError::invalid_format("Invalid format for integer list"))
	}

	pub fn format(&self, values: &[i32]) -> String {
		values
			.iter()
			.map(i32::to_string)
			.collect::<Vec<_>>()
			.join(LIST_SEPARATOR)
	}
}

impl Converter for IntegerListConverter {
	fn name(&self) -> &'static str {
		"integer_list"
	}

	fn to_model(&self, presentation: &Value) -> ConversionResult<Value> {
		match presentation {
			Value::Null => Ok(Value::Null),
			Value::String(text) => Ok(Value::from(self.parse(text)?)),
			_ => Err(ConversionError::TypeMismatch { expected: "text" }),
		}
	}

	fn to_presentation(&self, model: &Value) -> Value {
		match model.as_array() {
			Some(items) => {
				let values: Vec<i32> = items
					.iter()
					.filter_map(Value::as_i64)
					.filter_map(|v| i32::try_from(v).ok())
					.collect();
				Value::String(self.format(&values))
			}
			None => Value::Null,
		}
	}
}

/// Comma-separated text to a list of strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringListConverter;

impl StringListConverter {
	/// Never fails; text without commas yields one element
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::converter::StringListConverter;
	///
	/// assert_eq!(StringListConverter.parse(" a ,b"), vec!["a", "b"]);
	/// assert_eq!(StringListConverter.parse("solo"), vec!["solo"]);
	/// ```
	pub fn parse(&self, text: &str) -> Vec<String> {
		split_list(text)
			.into_iter()
			.map(|token| token.trim().to_string())
			.collect()
	}

	pub fn format<S: AsRef<str>>(&self, values: &[S]) -> String {
		values
			.iter()
			.map(AsRef::as_ref)
			.collect::<Vec<_>>()
			.join(LIST_SEPARATOR)
	}
}

impl Converter for StringListConverter {
	fn name(&self) -> &'static str {
		"string_list"
	}

	fn to_model(&self, presentation: &Value) -> ConversionResult<Value> {
		match presentation {
			Value::Null => Ok(Value::Null),
			Value::String(text) => Ok(Value::from(self.parse(text))),
			_ => Err(ConversionError::TypeMismatch { expected: "text" }),
		}
	}

	fn to_presentation(&self, model: &Value) -> Value {
		match model.as_array() {
			Some(items) => {
				let values: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
				Value::String(self.format(&values))
			}
			None => Value::Null,
		}
	}
}

/// Picks the converter for a declared field kind.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
	integer: Arc<dyn Converter>,
	short: Arc<dyn Converter>,
	float: Arc<dyn Converter>,
	integer_list: Arc<dyn Converter>,
	string_list: Arc<dyn Converter>,
}

impl ConverterRegistry {
	pub fn new() -> Self {
		Self {
			integer: Arc::new(NarrowingConverter::<i32>::new()),
			short: Arc::new(NarrowingConverter::<i16>::new()),
			float: Arc::new(NarrowingConverter::<f32>::new()),
			integer_list: Arc::new(IntegerListConverter),
			string_list: Arc::new(StringListConverter),
		}
	}

	/// Converter for `kind`, or `None` when the widget value is stored as is
	///
	/// # Examples
	///
	/// ```
	/// use formbind_core::{ConverterRegistry, FieldKind};
	///
	/// let registry = ConverterRegistry::new();
	/// assert_eq!(registry.converter_for(&FieldKind::Short).unwrap().name(), "Short");
	/// assert!(registry.converter_for(&FieldKind::Double).is_none());
	/// ```
	pub fn converter_for(&self, kind: &FieldKind) -> Option<Arc<dyn Converter>> {
		match kind {
			FieldKind::Integer => Some(Arc::clone(&self.integer)),
			FieldKind::Short => Some(Arc::clone(&self.short)),
			FieldKind::Float => Some(Arc::clone(&self.float)),
			FieldKind::List(element) => match element.as_ref() {
				FieldKind::Integer => Some(Arc::clone(&self.integer_list)),
				FieldKind::Text => Some(Arc::clone(&self.string_list)),
				_ => None,
			},
			FieldKind::Text
			| FieldKind::Double
			| FieldKind::Boolean
			| FieldKind::Date
			| FieldKind::DateTime
			| FieldKind::Time
			| FieldKind::Enumeration(_)
			| FieldKind::TextBlock
			| FieldKind::RichText
			| FieldKind::Other(_) => None,
		}
	}
}

impl Default for ConverterRegistry {
	fn default() -> Self {
		Self::new()
	}
}
