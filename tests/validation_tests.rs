/// Unit tests for quote form validation
/// Covers required fields, length bounds, email/phone rules, and violation ordering
use hello_turf::validation::{validate_quote, QuoteForm};

fn form(full_name: Option<&str>, phone: Option<&str>) -> QuoteForm {
    QuoteForm {
        full_name: full_name.map(String::from),
        phone: phone.map(String::from),
        ..QuoteForm::default()
    }
}

#[cfg(test)]
mod required_field_tests {
    use super::*;

    #[test]
    fn test_missing_full_name_rejected() {
        let errors = validate_quote(&form(None, Some("5123175400"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fullName");
        assert_eq!(errors[0].message, "Full name is required");
    }

    #[test]
    fn test_missing_phone_rejected() {
        let errors = validate_quote(&form(Some("Jane Doe"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
        assert_eq!(errors[0].message, "Phone number is required");
    }

    #[test]
    fn test_both_required_fields_missing_reports_both() {
        let errors = validate_quote(&QuoteForm::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["fullName", "phone"]);
    }

    #[test]
    fn test_whitespace_only_values_count_as_missing() {
        let errors = validate_quote(&form(Some("   "), Some("  \t "))).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["fullName", "phone"]);
        assert_eq!(errors[0].message, "Full name is required");
    }
}

#[cfg(test)]
mod length_bound_tests {
    use super::*;

    #[test]
    fn test_name_boundaries() {
        // One character is too short
        let errors = validate_quote(&form(Some("J"), Some("123"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fullName");
        assert_eq!(errors[0].message, "Name must be between 2 and 100 characters");

        // Boundary values 2 and 100 are accepted
        assert!(validate_quote(&form(Some("Jo"), Some("123"))).is_ok());
        let long = "x".repeat(100);
        assert!(validate_quote(&form(Some(&long), Some("123"))).is_ok());

        // 101 is rejected
        let too_long = "x".repeat(101);
        let errors = validate_quote(&form(Some(&too_long), Some("123"))).unwrap_err();
        assert_eq!(errors[0].field, "fullName");
    }

    #[test]
    fn test_address_bound() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.address = Some("a".repeat(200));
        assert!(validate_quote(&f).is_ok());

        f.address = Some("a".repeat(201));
        let errors = validate_quote(&f).unwrap_err();
        assert_eq!(errors[0].field, "address");
        assert_eq!(errors[0].message, "Address must be less than 200 characters");
    }

    #[test]
    fn test_project_size_bound() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.project_size = Some("s".repeat(50));
        assert!(validate_quote(&f).is_ok());

        f.project_size = Some("s".repeat(51));
        let errors = validate_quote(&f).unwrap_err();
        assert_eq!(errors[0].field, "projectSize");
        assert_eq!(
            errors[0].message,
            "Project size must be less than 50 characters"
        );
    }

    #[test]
    fn test_message_bound() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.message = Some("m".repeat(1000));
        assert!(validate_quote(&f).is_ok());

        f.message = Some("m".repeat(1001));
        let errors = validate_quote(&f).unwrap_err();
        assert_eq!(errors[0].field, "message");
        assert_eq!(errors[0].message, "Message must be less than 1000 characters");
    }
}

#[cfg(test)]
mod email_tests {
    use super::*;

    #[test]
    fn test_invalid_email_rejected() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.email = Some("not-an-email".to_string());
        let errors = validate_quote(&f).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please provide a valid email address");
    }

    #[test]
    fn test_absent_email_is_not_a_violation() {
        let quote = validate_quote(&form(Some("Jane Doe"), Some("5123175400"))).unwrap();
        assert_eq!(quote.email, None);
    }

    #[test]
    fn test_valid_email_accepted_and_lowercased() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.email = Some("Jane.Doe@Example.COM".to_string());
        let quote = validate_quote(&f).unwrap();
        assert_eq!(quote.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_email_is_trimmed_before_checking() {
        let mut f = form(Some("Jane Doe"), Some("5123175400"));
        f.email = Some("  jane@example.com  ".to_string());
        let quote = validate_quote(&f).unwrap();
        assert_eq!(quote.email.as_deref(), Some("jane@example.com"));
    }
}

#[cfg(test)]
mod phone_tests {
    use super::*;

    #[test]
    fn test_letters_in_phone_rejected() {
        let errors = validate_quote(&form(Some("Jane Doe"), Some("abc-1234"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
        assert_eq!(errors[0].message, "Please provide a valid phone number");
    }

    #[test]
    fn test_formatted_phone_accepted() {
        let quote = validate_quote(&form(Some("Jane Doe"), Some("(512) 317-5400"))).unwrap();
        assert_eq!(quote.phone, "(512) 317-5400");
    }

    #[test]
    fn test_digits_only_phone_accepted() {
        let quote = validate_quote(&form(Some("Jane Doe"), Some("5123175400"))).unwrap();
        assert_eq!(quote.phone, "5123175400");
    }

    #[test]
    fn test_plus_prefix_rejected() {
        // The permissive charset is digits, whitespace, hyphens, parentheses only
        let errors = validate_quote(&form(Some("Jane Doe"), Some("+1 512 317 5400"))).unwrap_err();
        assert_eq!(errors[0].field, "phone");
    }

    #[test]
    fn test_no_length_bound_on_phone() {
        let quote = validate_quote(&form(Some("Jane Doe"), Some("123"))).unwrap();
        assert_eq!(quote.phone, "123");
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_short_name_with_digits_only_phone() {
        // Phone "123" satisfies the character-set rule, so only fullName is flagged
        let errors = validate_quote(&form(Some("J"), Some("123"))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fullName");
    }

    #[test]
    fn test_all_violations_reported_in_declaration_order() {
        let bad = QuoteForm {
            full_name: Some("J".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("call me".to_string()),
            address: Some("a".repeat(201)),
            project_size: Some("s".repeat(51)),
            message: Some("m".repeat(1001)),
        };
        let errors = validate_quote(&bad).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["fullName", "email", "phone", "address", "projectSize", "message"]
        );
    }

    #[test]
    fn test_one_entry_per_violating_field() {
        // An empty-after-trim name can only trip one rule, not two
        let errors = validate_quote(&form(Some("  "), Some("5123175400"))).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}

#[cfg(test)]
mod idempotence_tests {
    use super::*;

    #[test]
    fn test_revalidating_a_validated_quote_is_stable() {
        let first = validate_quote(&QuoteForm {
            full_name: Some("  Jane Doe  ".to_string()),
            email: Some("Jane@Example.com".to_string()),
            phone: Some("(512) 555-0100".to_string()),
            address: Some("123 Main St".to_string()),
            project_size: Some("500 sq ft".to_string()),
            message: Some("Backyard project".to_string()),
        })
        .unwrap();

        let again = validate_quote(&QuoteForm {
            full_name: Some(first.full_name.clone()),
            email: first.email.clone(),
            phone: Some(first.phone.clone()),
            address: first.address.clone(),
            project_size: first.project_size.clone(),
            message: first.message.clone(),
        })
        .unwrap();

        assert_eq!(first, again);
    }

    #[test]
    fn test_validation_is_pure() {
        let f = form(Some("Jane Doe"), Some("5123175400"));
        let a = validate_quote(&f).unwrap();
        let b = validate_quote(&f).unwrap();
        assert_eq!(a, b);
    }
}
