//! Moving values between models and generated widgets

use chrono::NaiveDate;
use formbind::prelude::*;
use formbind::{ConversionError, FieldAccessError, WriteError};
use formbind_integration_tests::log_capture;
use formbind_integration_tests::models::{Employee, Priority};
use rstest::{fixture, rstest};
use serde_json::json;

struct BoundForm {
	layout: FormContainer,
	binder: FormBinder,
}

impl BoundForm {
	fn set(&self, property: &str, value: serde_json::Value) {
		let binding = self.binder.binding(property).unwrap();
		binding.widget().borrow_mut().set_value(value).unwrap();
	}
}

/// Form generated for and loaded from [`Employee::sample`]
#[fixture]
fn bound_form() -> BoundForm {
	let employee = Employee::sample();
	let mut layout = FormContainer::new();
	let mut binder = FormBinder::new();
	bind_and_create_fields(&mut layout, &mut binder, &employee).unwrap();
	binder.read_model(&employee).unwrap();
	BoundForm { layout, binder }
}

fn blank_employee() -> Employee {
	Employee {
		badge: "B-0".to_string(),
		name: String::new(),
		age: 0,
		number: 0,
		rating: 0.0,
		salary: 0.0,
		active: false,
		started: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
		last_login: None,
		shift_start: Default::default(),
		priority: Priority::Low,
		lucky_numbers: Vec::new(),
		skills: Vec::new(),
		notes: "untouched".to_string(),
		secret: "untouched".to_string(),
	}
}

#[rstest]
fn test_read_model_shows_presentation_values(bound_form: BoundForm) {
	// Arrange
	let value_of = |property: &str| {
		bound_form
			.binder
			.binding(property)
			.unwrap()
			.widget()
			.borrow()
			.value()
	};

	// Assert
	assert_eq!(value_of("name"), json!("Ada Lovelace"));
	assert_eq!(value_of("age"), json!(36.0));
	assert_eq!(value_of("salary"), json!(52_000.5));
	assert_eq!(value_of("started"), json!("2024-03-01"));
	assert_eq!(value_of("last_login"), json!("2024-05-02T09:30:00"));
	assert_eq!(value_of("priority"), json!("High"));
	assert_eq!(value_of("lucky_numbers"), json!("7, 13"));
	assert_eq!(value_of("skills"), json!("analysis, engines"));
	assert_eq!(bound_form.layout.len(), bound_form.binder.bindings().len());
}

#[rstest]
fn test_write_model_round_trips_every_bound_field(bound_form: BoundForm) {
	// Arrange
	let mut target = blank_employee();

	// Act
	bound_form.binder.write_model(&mut target).unwrap();

	// Assert
	let expected = Employee {
		badge: "B-0".to_string(),
		notes: "untouched".to_string(),
		secret: "untouched".to_string(),
		..Employee::sample()
	};
	assert_eq!(target, expected);
}

#[rstest]
fn test_read_only_widget_is_not_written(bound_form: BoundForm) {
	// Arrange
	bound_form.set("badge", json!("B-99"));
	let mut target = blank_employee();

	// Act
	bound_form.binder.write_model(&mut target).unwrap();

	// Assert
	assert_eq!(target.badge, "B-0");
}

#[rstest]
fn test_edited_values_are_converted(bound_form: BoundForm) {
	// Arrange
	bound_form.set("number", json!(12.9));
	bound_form.set("age", json!(-7.5));
	bound_form.set("lucky_numbers", json!("1,2, 3,"));
	bound_form.set("skills", json!(""));
	bound_form.set("priority", json!("Low"));
	bound_form.set("last_login", json!(null));
	let mut employee = Employee::sample();

	// Act
	bound_form.binder.write_model(&mut employee).unwrap();

	// Assert
	assert_eq!(employee.number, 12);
	assert_eq!(employee.age, -7);
	assert_eq!(employee.lucky_numbers, vec![1, 2, 3]);
	assert_eq!(employee.skills, vec![String::new()]);
	assert_eq!(employee.priority, Priority::Low);
	assert_eq!(employee.last_login, None);
}

#[rstest]
fn test_conversion_failures_leave_model_untouched(bound_form: BoundForm) {
	// Arrange
	bound_form.set("name", json!("Changed"));
	bound_form.set("age", json!(40_000));
	bound_form.set("lucky_numbers", json!("3,x,5"));
	let mut employee = Employee::sample();
	let (logs, _guard) = log_capture::capture();

	// Act
	let result = bound_form.binder.write_model(&mut employee);

	// Assert
	let Err(WriteError::Validation(errors)) = result else {
		panic!("expected validation errors, got {:?}", result);
	};
	assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["age", "lucky_numbers"]);
	assert_eq!(
		errors.get("age"),
		Some(&ConversionError::OutOfRange {
			target: "Short",
			value: 40_000.0,
		})
	);
	assert_eq!(
		errors.to_string(),
		"age: Short value out of range; lucky_numbers: Invalid format for integer list"
	);
	assert_eq!(employee, Employee::sample());
	assert!(logs.contains("WARN", "conversion failed"));
}

#[rstest]
fn test_cleared_choice_aborts_whole_write(bound_form: BoundForm) {
	// Arrange
	bound_form.set("name", json!("Grace"));
	bound_form.set("priority", json!(null));
	let mut employee = Employee::sample();

	// Act
	let result = bound_form.binder.write_model(&mut employee);

	// Assert
	assert!(matches!(
		&result,
		Err(WriteError::Access(FieldAccessError::Deserialize { field, .. })) if field == "priority"
	));
	assert_eq!(employee.name, "Ada Lovelace");
	assert_eq!(employee, Employee::sample());
}

#[rstest]
fn test_validate_returns_model_values(bound_form: BoundForm) {
	// Act
	let values = bound_form.binder.validate().unwrap();

	// Assert
	assert_eq!(values.len(), 13);
	assert_eq!(values["age"], json!(36));
	assert_eq!(values["lucky_numbers"], json!([7, 13]));
	assert_eq!(values["skills"], json!(["analysis", "engines"]));
}

#[rstest]
fn test_combo_box_rejects_unknown_choice(bound_form: BoundForm) {
	// Arrange
	let binding = bound_form.binder.binding("priority").unwrap();

	// Act
	let error = binding
		.widget()
		.borrow_mut()
		.set_value(json!("Urgent"))
		.unwrap_err();

	// Assert
	assert_eq!(error.to_string(), "Select a valid choice");
	assert_eq!(binding.widget().borrow().value(), json!("High"));
}

#[rstest]
fn test_widget_handles_are_shared_with_layout(bound_form: BoundForm) {
	// Arrange
	let first = &bound_form.layout.children()[0];

	// Act
	bound_form.set("name", json!("Grace Hopper"));

	// Assert
	assert!(first.ptr_eq(bound_form.binder.binding("name").unwrap().widget()));
	assert_eq!(first.borrow().value(), json!("Grace Hopper"));
}
