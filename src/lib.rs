//! # formbind
//!
//! Declarative form generation for data models.
//!
//! Annotate a model with `#[derive(FormModel)]`, then let
//! [`bind_and_create_fields`] build one widget per ordered field, bind the
//! interactive widgets to a [`Binder`] and append everything to a
//! [`FormLayout`].
//!
//! ## Feature Flags
//!
//! - `macros` (default) - `FormModel` and `FormChoices` derive macros
//!
//! ## Example
//!
//! ```
//! use formbind::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(FormChoices, Serialize, Deserialize, Clone, Copy)]
//! enum Plan {
//!     #[choice(label = "Free tier")]
//!     Free,
//!     #[choice(label = "Paid tier")]
//!     Paid,
//! }
//!
//! #[derive(FormModel, Serialize, Deserialize)]
//! struct Signup {
//!     #[form(order = 1, label = "E-mail", widget = "email_field")]
//!     email: String,
//!     #[form(order = 2)]
//!     plan: Plan,
//!     #[form(order = 3, label = "Seats")]
//!     seats: i16,
//!     internal_id: u64,
//! }
//!
//! let signup = Signup {
//!     email: "ada@example.com".into(),
//!     plan: Plan::Free,
//!     seats: 3,
//!     internal_id: 7,
//! };
//!
//! let mut layout = FormContainer::new();
//! let mut binder = FormBinder::new();
//! bind_and_create_fields(&mut layout, &mut binder, &signup).unwrap();
//! binder.read_model(&signup).unwrap();
//!
//! assert_eq!(binder.properties(), vec!["email", "plan", "seats"]);
//! assert_eq!(layout.children()[0].borrow().kind(), "email_field");
//! ```

pub use formbind_core::*;

#[cfg(feature = "macros")]
pub use formbind_macros::{FormChoices, FormModel};

/// Commonly used types and traits
pub mod prelude {
	pub use formbind_core::{
		Binder, FieldKind, FieldMeta, FieldTyped, FormBinder, FormChoices, FormContainer,
		FormCreator, FormLayout, FormModel, FormSettings, RichText, TextBlock, Widget,
		WidgetHandle, WidgetRegistry, bind_and_create_fields,
	};

	#[cfg(feature = "macros")]
	pub use formbind_macros::{FormChoices, FormModel};
}
