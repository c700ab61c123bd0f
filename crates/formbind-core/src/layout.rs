//! Layout containers receiving generated widgets

use crate::widget::WidgetHandle;

/// Container that widgets are appended to, in call order.
pub trait FormLayout {
	fn add(&mut self, widget: WidgetHandle);
}

/// Vertical list of widgets.
#[derive(Debug, Clone, Default)]
pub struct FormContainer {
	children: Vec<WidgetHandle>,
}

impl FormContainer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn children(&self) -> &[WidgetHandle] {
		&self.children
	}

	pub fn len(&self) -> usize {
		self.children.len()
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Labels of the children, in layout order
	pub fn labels(&self) -> Vec<Option<String>> {
		self.children
			.iter()
			.map(|child| child.borrow().label().map(str::to_string))
			.collect()
	}
}

impl FormLayout for FormContainer {
	fn add(&mut self, widget: WidgetHandle) {
		self.children.push(widget);
	}
}

impl FormLayout for Vec<WidgetHandle> {
	fn add(&mut self, widget: WidgetHandle) {
		self.push(widget);
	}
}
