//! Metadata and field access generated by the derive macros

use formbind::prelude::*;
use formbind::{Choice, FieldAccessError, kind_of, read_descriptors};
use formbind_integration_tests::models::{Announcement, Employee, Priority, Shift};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[rstest]
fn test_declared_fields_cover_annotated_fields_only() {
	// Act
	let names: Vec<String> = Employee::declared_fields()
		.into_iter()
		.map(|meta| meta.name)
		.collect();

	// Assert
	assert_eq!(names.len(), 14);
	assert_eq!(names[0], "badge");
	assert!(names.contains(&"notes".to_string()));
	assert!(!names.contains(&"secret".to_string()));
}

#[rstest]
fn test_declared_attributes() {
	// Act
	let fields = Employee::declared_fields();
	let find = |name: &str| fields.iter().find(|meta| meta.name == name).unwrap();

	// Assert
	assert_eq!(
		find("name"),
		&FieldMeta::new("name", FieldKind::Text)
			.with_order(1)
			.with_label("Full name")
			.with_width("20em")
	);
	assert_eq!(
		find("badge"),
		&FieldMeta::new("badge", FieldKind::Text)
			.with_order(13)
			.with_read_only(true)
	);
	assert_eq!(
		find("lucky_numbers").kind,
		FieldKind::List(Box::new(FieldKind::Integer))
	);
	assert_eq!(find("lucky_numbers").widget.as_deref(), Some("text_field"));
	assert_eq!(find("last_login").kind, FieldKind::DateTime);
	assert_eq!(find("notes").order, None);
}

#[rstest]
fn test_descriptors_sorted_by_order() {
	// Act
	let descriptors = read_descriptors(&Announcement::default());

	// Assert
	let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
	assert_eq!(names, vec!["intro", "title", "body", "shift"]);
	assert_eq!(descriptors[0].kind, FieldKind::TextBlock);
	assert_eq!(descriptors[2].kind, FieldKind::RichText);
}

#[derive(Debug, Clone, Default, FormModel, Serialize, Deserialize)]
struct Ballot {
	#[form(order = 2)]
	second: String,
	#[form(order = 1)]
	first_a: String,
	#[form(order = 1)]
	first_b: String,
	#[form(order = -5)]
	leading: bool,
}

#[rstest]
fn test_equal_orders_keep_declaration_order() {
	// Act
	let descriptors = read_descriptors(&Ballot::default());

	// Assert
	let names: Vec<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
	assert_eq!(names, vec!["leading", "first_a", "first_b", "second"]);
}

#[rstest]
fn test_enum_kind_lists_serialized_choices() {
	// Assert
	assert_eq!(
		kind_of::<Priority>(),
		FieldKind::Enumeration(vec![
			Choice::new(json!("Low"), "Low").with_label("Low priority"),
			Choice::new(json!("High"), "High").with_label("High priority"),
		])
	);
	assert_eq!(
		kind_of::<Shift>(),
		FieldKind::Enumeration(vec![
			Choice::new(json!("Morning"), "Morning"),
			Choice::new(json!("Night"), "Night"),
		])
	);
	assert_eq!(kind_of::<Option<Priority>>(), kind_of::<Priority>());
}

#[derive(Debug, Clone, Copy, PartialEq, FormChoices, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Channel {
	#[choice(label = "E-mail")]
	Email,
	Sms,
}

#[rstest]
fn test_choice_values_follow_serde_renames() {
	// Act
	let choices = Channel::choices();

	// Assert
	assert_eq!(choices[0].value, json!("email"));
	assert_eq!(choices[0].identifier, "Email");
	assert_eq!(choices[0].text(), "E-mail");
	assert_eq!(choices[1].text(), "Sms");
	assert_eq!(Channel::Sms.display_label(), None);
}

#[rstest]
fn test_field_access_by_name() {
	// Arrange
	let mut employee = Employee::sample();

	// Act
	employee
		.set_field_value("priority", json!("Low"))
		.unwrap();
	employee.set_field_value("notes", json!("edited")).unwrap();

	// Assert
	assert_eq!(employee.priority, Priority::Low);
	assert_eq!(employee.field_value("notes"), Some(json!("edited")));
	assert_eq!(employee.field_value("age"), Some(json!(36)));
	assert_eq!(employee.field_value("secret"), None);
}

#[rstest]
#[case("secret", json!("x"), "Unknown field: secret")]
#[case("missing", json!("x"), "Unknown field: missing")]
fn test_unknown_field_rejected(
	#[case] field: &str,
	#[case] value: serde_json::Value,
	#[case] message: &str,
) {
	// Arrange
	let mut employee = Employee::sample();

	// Act
	let error = employee.set_field_value(field, value).unwrap_err();

	// Assert
	assert!(matches!(error, FieldAccessError::UnknownField(_)));
	assert_eq!(error.to_string(), message);
}

#[rstest]
fn test_mismatched_value_rejected() {
	// Arrange
	let mut employee = Employee::sample();

	// Act
	let error = employee.set_field_value("age", json!("old")).unwrap_err();

	// Assert
	assert!(matches!(
		&error,
		FieldAccessError::Deserialize { field, .. } if field == "age"
	));
	assert_eq!(employee.age, 36);
}
