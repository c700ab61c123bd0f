//! Display-only field types
//!
//! Model fields of these types become non-interactive content elements in the
//! generated form and are never registered with a binder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain text paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextBlock(pub String);

/// HTML fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub String);

macro_rules! impl_content_type {
	($($ty:ident),*) => {
		$(
			impl $ty {
				pub fn new(text: impl Into<String>) -> Self {
					Self(text.into())
				}

				pub fn as_str(&self) -> &str {
					&self.0
				}
			}

			impl From<&str> for $ty {
				fn from(text: &str) -> Self {
					Self(text.to_string())
				}
			}

			impl From<String> for $ty {
				fn from(text: String) -> Self {
					Self(text)
				}
			}

			impl fmt::Display for $ty {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					f.write_str(&self.0)
				}
			}
		)*
	};
}

impl_content_type!(TextBlock, RichText);
