//! Pure form validation shared by the login and registration pages. Every
//! applicable check runs on each pass; errors are collected per field rather
//! than short-circuiting, so the user sees all problems at once.

use crate::features::auth::types::FormInput;
use regex::Regex;

/// Minimum password length enforced at registration for early UX feedback.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Which ruleset applies to the submitted form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Registration,
}

/// Form field a validation message is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    Terms,
}

/// Outcome of one validation pass, discarded after rendering.
#[derive(Clone, Debug)]
pub struct ValidationResult {
    errors: Vec<(Field, &'static str)>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[(Field, &'static str)] {
        &self.errors
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Runs the ruleset for `kind` over `input`. Name and email are trimmed
/// before checking; the password is taken as typed.
pub fn validate(kind: FormKind, input: &FormInput) -> ValidationResult {
    let mut errors = Vec::new();

    if kind == FormKind::Registration {
        let name = input.name.as_deref().unwrap_or_default().trim();
        if name.is_empty() {
            errors.push((Field::Name, "Name is required"));
        }
    }

    let email = input.email.trim();
    if email.is_empty() {
        errors.push((Field::Email, "Email is required"));
    } else if !valid_email(email) {
        errors.push((Field::Email, "Please enter a valid email address"));
    }

    if input.password.is_empty() {
        errors.push((Field::Password, "Password is required"));
    } else if kind == FormKind::Registration && input.password.len() < MIN_PASSWORD_LENGTH {
        errors.push((
            Field::Password,
            "Password must be at least 8 characters long",
        ));
    }

    if kind == FormKind::Registration && !input.terms_accepted.unwrap_or(false) {
        errors.push((Field::Terms, "You must agree to the terms and policy"));
    }

    ValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration_input() -> FormInput {
        FormInput {
            name: Some("Ada Lovelace".to_string()),
            email: "ada@adoptease.dev".to_string(),
            password: "longenough".to_string(),
            terms_accepted: Some(true),
            remember_me: false,
        }
    }

    fn login_input() -> FormInput {
        FormInput {
            name: None,
            email: "ada@adoptease.dev".to_string(),
            password: "hunter2".to_string(),
            terms_accepted: None,
            remember_me: false,
        }
    }

    #[test]
    fn valid_inputs_pass_both_rulesets() {
        assert!(validate(FormKind::Registration, &registration_input()).is_valid());
        assert!(validate(FormKind::Login, &login_input()).is_valid());
    }

    #[test]
    fn empty_and_whitespace_values_count_as_missing() {
        let mut input = registration_input();
        input.name = Some("   ".to_string());
        input.email = " \t ".to_string();

        let result = validate(FormKind::Registration, &input);
        assert_eq!(
            result.errors(),
            &[
                (Field::Name, "Name is required"),
                (Field::Email, "Email is required"),
            ]
        );
    }

    #[test]
    fn malformed_emails_are_rejected_whatever_else_is_set() {
        for email in [
            "plainaddress",
            "user@",
            "@adoptease.dev",
            "user@domain",
            "user@domain.",
            "us er@domain.com",
            "user@do main.com",
            "user@@domain.com",
        ] {
            let mut input = login_input();
            input.email = email.to_string();
            let result = validate(FormKind::Login, &input);
            assert_eq!(
                result.errors(),
                &[(Field::Email, "Please enter a valid email address")],
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn terse_but_shaped_emails_are_accepted() {
        for email in ["a@b.c", "first.last@sub.domain.dev"] {
            assert!(valid_email(email), "expected {email:?} to be accepted");
        }
    }

    #[test]
    fn registration_password_length_boundary_is_eight() {
        let mut input = registration_input();
        input.password = "seven77".to_string();
        let result = validate(FormKind::Registration, &input);
        assert_eq!(
            result.errors(),
            &[(
                Field::Password,
                "Password must be at least 8 characters long"
            )]
        );

        input.password = "eight888".to_string();
        assert!(validate(FormKind::Registration, &input).is_valid());
    }

    #[test]
    fn login_does_not_enforce_password_length() {
        let mut input = login_input();
        input.password = "short".to_string();
        assert!(validate(FormKind::Login, &input).is_valid());
    }

    #[test]
    fn password_is_not_trimmed() {
        let mut input = registration_input();
        input.password = "        ".to_string();
        assert!(
            validate(FormKind::Registration, &input).is_valid(),
            "an eight-space password satisfies the length rule"
        );
    }

    #[test]
    fn missing_terms_flag_fails_registration() {
        let mut input = registration_input();
        input.terms_accepted = Some(false);
        let result = validate(FormKind::Registration, &input);
        assert_eq!(
            result.errors(),
            &[(Field::Terms, "You must agree to the terms and policy")]
        );

        input.terms_accepted = None;
        assert!(!validate(FormKind::Registration, &input).is_valid());
    }

    #[test]
    fn all_failures_are_collected_in_field_order() {
        let input = FormInput::default();
        let result = validate(FormKind::Registration, &input);
        let fields: Vec<Field> = result.errors().iter().map(|(field, _)| *field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Password, Field::Terms]
        );

        let result = validate(FormKind::Login, &FormInput::default());
        let fields: Vec<Field> = result.errors().iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Password]);
    }
}
