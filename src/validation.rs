use crate::models::{FieldError, QuoteRequest};
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Raw quote form exactly as submitted, before any normalization.
///
/// Every field is optional at the wire level so that a missing value surfaces
/// as a field violation instead of a deserialization rejection. Wire names are
/// the site's camelCase form names.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuoteForm {
    /// Submitter's name.
    #[serde(rename = "fullName")]
    #[validate(
        required(message = "Full name is required"),
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters")
    )]
    pub full_name: Option<String>,

    /// Optional reply address.
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,

    /// Contact phone.
    #[validate(
        required(message = "Phone number is required"),
        custom = "phone_charset"
    )]
    pub phone: Option<String>,

    /// Optional installation address.
    #[validate(length(max = 200, message = "Address must be less than 200 characters"))]
    pub address: Option<String>,

    /// Optional project size description.
    #[serde(rename = "projectSize")]
    #[validate(length(max = 50, message = "Project size must be less than 50 characters"))]
    pub project_size: Option<String>,

    /// Optional free-form message.
    #[validate(length(max = 1000, message = "Message must be less than 1000 characters"))]
    pub message: Option<String>,
}

/// Wire field names in declaration order, paired with the struct field names
/// the validator keys its error map by. Violation ordering follows this table.
const FIELD_ORDER: [(&str, &str); 6] = [
    ("full_name", "fullName"),
    ("email", "email"),
    ("phone", "phone"),
    ("address", "address"),
    ("project_size", "projectSize"),
    ("message", "message"),
];

impl QuoteForm {
    /// Trims every field; values that are empty after trimming count as absent.
    ///
    /// This runs before the constraint checks so that length bounds apply to
    /// the trimmed value and whitespace-only required fields read as missing.
    pub fn normalized(&self) -> QuoteForm {
        fn clean(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }

        QuoteForm {
            full_name: clean(&self.full_name),
            email: clean(&self.email),
            phone: clean(&self.phone),
            address: clean(&self.address),
            project_size: clean(&self.project_size),
            message: clean(&self.message),
        }
    }
}

/// Validates a raw submission into an immutable `QuoteRequest`.
///
/// Checks every field (no short-circuit on the first bad one) and reports
/// violations in field declaration order, one entry per violating field.
/// The email address is lowercased on the way through.
///
/// # Returns
///
/// * `Ok(QuoteRequest)` - Normalized, validated request.
/// * `Err(Vec<FieldError>)` - Ordered field violations for the caller to display.
pub fn validate_quote(form: &QuoteForm) -> Result<QuoteRequest, Vec<FieldError>> {
    let form = form.normalized();

    if let Err(errors) = form.validate() {
        return Err(ordered_violations(&errors));
    }

    // `required` has already passed; these guards only fire if the rules drift.
    let full_name = form
        .full_name
        .ok_or_else(|| vec![FieldError::new("fullName", "Full name is required")])?;
    let phone = form
        .phone
        .ok_or_else(|| vec![FieldError::new("phone", "Phone number is required")])?;

    Ok(QuoteRequest {
        full_name,
        email: form.email.map(|e| e.to_lowercase()),
        phone,
        address: form.address,
        project_size: form.project_size,
        message: form.message,
    })
}

/// Flattens the validator error map into the ordered violation list.
///
/// One entry per violating field (the first failing rule wins), ordered by
/// field declaration so the caller can display every problem at once.
fn ordered_violations(errors: &ValidationErrors) -> Vec<FieldError> {
    let map = errors.field_errors();
    let mut violations = Vec::new();

    for (struct_name, wire_name) in FIELD_ORDER {
        // The error map is keyed by struct field name; tolerate either naming.
        let field_errors = map.get(struct_name).or_else(|| map.get(wire_name));
        if let Some(field_errors) = field_errors {
            if let Some(error) = field_errors.first() {
                violations.push(FieldError::new(wire_name, violation_message(wire_name, error)));
            }
        }
    }

    violations
}

/// User-facing message for a single violation, with a generic fallback for
/// rules that carry no message of their own.
fn violation_message(wire_name: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value for {}", wire_name))
}

/// Permissive phone-character check: digits, whitespace, hyphens, parentheses.
/// No length bound and no E.164 canonicalization; "(512) 317-5400" and
/// "5123175400" are equally fine.
fn phone_charset(phone: &str) -> Result<(), ValidationError> {
    let re = Regex::new(r"^[\d\s\-()]+$").unwrap();
    if re.is_match(phone) {
        Ok(())
    } else {
        let mut error = ValidationError::new("phone_charset");
        error.message = Some("Please provide a valid phone number".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(full_name: Option<&str>, phone: Option<&str>) -> QuoteForm {
        QuoteForm {
            full_name: full_name.map(String::from),
            phone: phone.map(String::from),
            ..QuoteForm::default()
        }
    }

    #[test]
    fn minimal_valid_form_passes() {
        let result = validate_quote(&form(Some("Jane Doe"), Some("(512) 555-0100")));
        let quote = result.unwrap();
        assert_eq!(quote.full_name, "Jane Doe");
        assert_eq!(quote.phone, "(512) 555-0100");
        assert_eq!(quote.email, None);
    }

    #[test]
    fn whitespace_only_name_reads_as_missing() {
        let errors = validate_quote(&form(Some("   "), Some("123"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fullName");
        assert_eq!(errors[0].message, "Full name is required");
    }

    #[test]
    fn violations_follow_declaration_order() {
        let bad = QuoteForm {
            full_name: Some("J".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("abc-1234".to_string()),
            message: Some("x".repeat(1001)),
            ..QuoteForm::default()
        };
        let errors = validate_quote(&bad).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["fullName", "email", "phone", "message"]);
    }

    #[test]
    fn email_is_lowercased() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.email = Some("Jane.Doe@Example.COM".to_string());
        let quote = validate_quote(&f).unwrap();
        assert_eq!(quote.email.as_deref(), Some("jane.doe@example.com"));
    }
}
