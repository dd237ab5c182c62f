use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
	Email,
	Other,
}

impl InputKind {
	/// Classify an input by its `type` attribute.
	pub fn from_type_attribute(type_attribute: &str) -> InputKind {
		if type_attribute.eq_ignore_ascii_case("email") {
			InputKind::Email
		} else {
			InputKind::Other
		}
	}
}

/// A snapshot of one `<input>` in a form, in document order.
#[derive(Clone, Debug)]
pub struct FieldInput {
	pub value: String,
	pub required: bool,
	pub kind: InputKind,
}

/// An annotation change to apply to the input at `index`. Actions must be applied in order.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldAction {
	ShowError { index: usize, message: &'static str },
	ClearError { index: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormReport {
	pub valid: bool,
	pub actions: Vec<FieldAction>,
}

impl FormReport {
	/// The message left on the input at `index` once every action has been applied.
	pub fn error_for(&self, index: usize) -> Option<&'static str> {
		self.actions
			.iter()
			.fold(None, |error, action| match action {
				FieldAction::ShowError {
					index: action_index,
					message,
				} if *action_index == index => Some(*message),
				FieldAction::ClearError {
					index: action_index,
				} if *action_index == index => None,
				_ => error,
			})
	}
}

/// Check the fields of a form the way the submit handler does.
///
/// Every required field is checked for a blank value, and each one either gets an error or has its error cleared. Then the first email field, if it is non-empty, is matched against the email pattern. A failed email check replaces whatever error the field already shows.
pub fn validate_form(fields: &[FieldInput]) -> FormReport {
	let mut valid = true;
	let mut actions = Vec::new();
	for (index, field) in fields.iter().enumerate() {
		if !field.required {
			continue;
		}
		if field.value.trim().is_empty() {
			valid = false;
			actions.push(FieldAction::ShowError {
				index,
				message: REQUIRED_FIELD_MESSAGE,
			});
		} else {
			actions.push(FieldAction::ClearError { index });
		}
	}
	let email_field = fields
		.iter()
		.enumerate()
		.find(|(_, field)| field.kind == InputKind::Email);
	if let Some((index, field)) = email_field {
		if !field.value.is_empty() && !is_valid_email(&field.value) {
			valid = false;
			actions.push(FieldAction::ShowError {
				index,
				message: INVALID_EMAIL_MESSAGE,
			});
		}
	}
	FormReport { valid, actions }
}

/// The characters matched by `\s` in a JavaScript regular expression.
const JS_WHITESPACE: &str =
	r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with JavaScript's meaning of `\s`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
	let part = format!("[^{}@]+", JS_WHITESPACE);
	Regex::new(&format!(r"^{0}@{0}\.{0}$", part)).unwrap()
});

/// A single `@` with no whitespace anywhere, and a `.` in the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
	EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
fn field(value: &str, required: bool, kind: InputKind) -> FieldInput {
	FieldInput {
		value: value.to_owned(),
		required,
		kind,
	}
}

#[test]
fn test_is_valid_email() {
	assert!(is_valid_email("user@example.com"));
	assert!(is_valid_email("a@b.c"));
	assert!(is_valid_email("first.last@sub.example.org"));
	assert!(is_valid_email("a@b.c."));
	assert!(!is_valid_email("bad-email"));
	assert!(!is_valid_email("user@example"));
	assert!(!is_valid_email("@example.com"));
	assert!(!is_valid_email("user@.com"));
	assert!(!is_valid_email("user@example."));
	assert!(!is_valid_email("user@@example.com"));
	assert!(!is_valid_email("us er@example.com"));
	assert!(!is_valid_email("user@exa mple.com"));
	assert!(!is_valid_email(" user@example.com"));
	assert!(!is_valid_email("user@example.com\n"));
	// JavaScript counts U+FEFF as whitespace but not U+0085.
	assert!(!is_valid_email("user@exa\u{FEFF}mple.com"));
	assert!(!is_valid_email("user@exa\u{3000}mple.com"));
	assert!(is_valid_email("user@exa\u{0085}mple.com"));
	assert!(is_valid_email("user@exa\u{180E}mple.com"));
}

#[test]
fn test_blank_required_field() {
	let fields = vec![
		field("   ", true, InputKind::Other),
		field("secret", true, InputKind::Other),
		field("", false, InputKind::Other),
	];
	let report = validate_form(&fields);
	insta::assert_debug_snapshot!(report, @r###"
 FormReport {
     valid: false,
     actions: [
         ShowError {
             index: 0,
             message: "This field is required",
         },
         ClearError {
             index: 1,
         },
     ],
 }
 "###);
	assert_eq!(report.error_for(0), Some(REQUIRED_FIELD_MESSAGE));
	assert_eq!(report.error_for(1), None);
	assert_eq!(report.error_for(2), None);
}

#[test]
fn test_optional_fields_are_ignored() {
	let fields = vec![
		field("", false, InputKind::Other),
		field("", false, InputKind::Email),
	];
	let report = validate_form(&fields);
	assert!(report.valid);
	assert!(report.actions.is_empty());
}

#[test]
fn test_email_validation() {
	let report = validate_form(&[field("bad-email", false, InputKind::Email)]);
	assert!(!report.valid);
	assert_eq!(report.error_for(0), Some(INVALID_EMAIL_MESSAGE));
	let report = validate_form(&[field("user@example.com", true, InputKind::Email)]);
	assert!(report.valid);
	assert_eq!(
		report.actions,
		vec![FieldAction::ClearError { index: 0 }]
	);
}

#[test]
fn test_empty_email_skips_pattern() {
	let report = validate_form(&[field("", true, InputKind::Email)]);
	assert!(!report.valid);
	assert_eq!(report.actions.len(), 1);
	assert_eq!(report.error_for(0), Some(REQUIRED_FIELD_MESSAGE));
}

#[test]
fn test_email_error_replaces_required_error() {
	// A whitespace-only value is blank for the required check and still fails the pattern.
	let report = validate_form(&[field("  ", true, InputKind::Email)]);
	assert!(!report.valid);
	assert_eq!(report.error_for(0), Some(INVALID_EMAIL_MESSAGE));
}

#[test]
fn test_only_first_email_field_is_checked() {
	let fields = vec![
		field("user@example.com", false, InputKind::Email),
		field("bad-email", false, InputKind::Email),
	];
	let report = validate_form(&fields);
	assert!(report.valid);
	assert!(report.actions.is_empty());
}

#[test]
fn test_input_kind() {
	assert_eq!(InputKind::from_type_attribute("email"), InputKind::Email);
	assert_eq!(InputKind::from_type_attribute("EMAIL"), InputKind::Email);
	assert_eq!(InputKind::from_type_attribute("text"), InputKind::Other);
	assert_eq!(InputKind::from_type_attribute(""), InputKind::Other);
}
