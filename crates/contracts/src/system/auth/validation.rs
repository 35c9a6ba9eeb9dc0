//! Field validation rules for the login and signup forms.
//!
//! Every field is checked on each submit, so the report carries an outcome
//! for all of them, not only the first failure.

use super::{FormField, LoginForm, SignupForm};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Syntactic `local@domain.tld` check, not a full address grammar
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    Empty,
    InvalidEmail,
    TooShort,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, kind: FieldErrorKind, message: &str) -> Self {
        Self {
            field,
            kind,
            message: message.to_string(),
        }
    }
}

/// Outcome of one submit attempt, one entry per field in form order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    outcomes: Vec<(FormField, Option<FieldError>)>,
}

impl ValidationReport {
    fn check(&mut self, field: FormField, result: Result<(), FieldError>) {
        self.outcomes.push((field, result.err()));
    }

    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, e)| e.is_none())
    }

    pub fn outcomes(&self) -> &[(FormField, Option<FieldError>)] {
        &self.outcomes
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.outcomes.iter().filter_map(|(_, e)| e.as_ref())
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, e)| e.as_ref())
    }
}

fn check_email(field: FormField, email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::new(
            field,
            FieldErrorKind::Empty,
            "Please enter your email address.",
        ));
    }
    if !is_valid_email(email) {
        return Err(FieldError::new(
            field,
            FieldErrorKind::InvalidEmail,
            "Please enter a valid email address.",
        ));
    }
    Ok(())
}

fn check_password(field: FormField, password: &str, empty_message: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::new(field, FieldErrorKind::Empty, empty_message));
    }
    if !is_valid_password(password) {
        return Err(FieldError::new(
            field,
            FieldErrorKind::TooShort,
            "Password must be at least 6 characters.",
        ));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), FieldError> {
    let field = FormField::SignupName;
    if name.is_empty() {
        return Err(FieldError::new(
            field,
            FieldErrorKind::Empty,
            "Please enter your full name.",
        ));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(FieldError::new(
            field,
            FieldErrorKind::TooShort,
            "Name must be at least 2 characters.",
        ));
    }
    Ok(())
}

fn check_confirmation(password: &str, confirm: &str) -> Result<(), FieldError> {
    let field = FormField::SignupConfirmPassword;
    if confirm.is_empty() {
        return Err(FieldError::new(
            field,
            FieldErrorKind::Empty,
            "Please confirm your password.",
        ));
    }
    if password != confirm {
        return Err(FieldError::new(
            field,
            FieldErrorKind::Mismatch,
            "Passwords do not match.",
        ));
    }
    Ok(())
}

pub fn validate_login(form: &LoginForm) -> ValidationReport {
    let mut report = ValidationReport { outcomes: Vec::with_capacity(2) };
    report.check(
        FormField::LoginEmail,
        check_email(FormField::LoginEmail, form.email.trim()),
    );
    report.check(
        FormField::LoginPassword,
        check_password(
            FormField::LoginPassword,
            &form.password,
            "Please enter your password.",
        ),
    );
    report
}

pub fn validate_signup(form: &SignupForm) -> ValidationReport {
    let mut report = ValidationReport { outcomes: Vec::with_capacity(4) };
    report.check(FormField::SignupName, check_name(form.name.trim()));
    report.check(
        FormField::SignupEmail,
        check_email(FormField::SignupEmail, form.email.trim()),
    );
    report.check(
        FormField::SignupPassword,
        check_password(
            FormField::SignupPassword,
            &form.password,
            "Please create a password.",
        ),
    );
    report.check(
        FormField::SignupConfirmPassword,
        check_confirmation(&form.password, &form.confirm_password),
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn signup(name: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.pk"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_login_checks_every_field() {
        let report = validate_login(&LoginForm {
            email: "not-an-email".into(),
            password: "123".into(),
        });
        assert!(!report.is_valid());
        assert_eq!(
            report.error_for(FormField::LoginEmail).unwrap().message,
            "Please enter a valid email address."
        );
        assert_eq!(
            report.error_for(FormField::LoginPassword).unwrap().kind,
            FieldErrorKind::TooShort
        );
    }

    #[test]
    fn test_login_empty_fields() {
        let report = validate_login(&LoginForm {
            email: "   ".into(),
            password: String::new(),
        });
        assert_eq!(
            report.error_for(FormField::LoginEmail).unwrap().message,
            "Please enter your email address."
        );
        assert_eq!(
            report.error_for(FormField::LoginPassword).unwrap().message,
            "Please enter your password."
        );
    }

    #[test]
    fn test_login_email_is_trimmed() {
        let report = validate_login(&LoginForm {
            email: "  tailor@prescott.pk ".into(),
            password: "secret1".into(),
        });
        assert!(report.is_valid());
    }

    #[test]
    fn test_password_is_not_trimmed() {
        // six characters only because of the surrounding spaces
        let report = validate_login(&LoginForm {
            email: "a@b.co".into(),
            password: "  abcd".into(),
        });
        assert!(report.is_valid());
    }

    #[test]
    fn test_signup_name_length() {
        let short = validate_signup(&signup(" A ", "a@b.co", "secret1", "secret1"));
        assert_eq!(
            short.error_for(FormField::SignupName).unwrap().message,
            "Name must be at least 2 characters."
        );
        let exact = validate_signup(&signup(" Al ", "a@b.co", "secret1", "secret1"));
        assert!(exact.is_valid());
    }

    #[test]
    fn test_signup_confirmation_must_match_exactly() {
        for confirm in ["Secret1", "secret1 ", "secret2"] {
            let report = validate_signup(&signup("Ali", "a@b.co", "secret1", confirm));
            let err = report.error_for(FormField::SignupConfirmPassword).unwrap();
            assert_eq!(err.kind, FieldErrorKind::Mismatch);
            assert_eq!(err.message, "Passwords do not match.");
            assert!(report.error_for(FormField::SignupPassword).is_none());
        }
    }

    #[test]
    fn test_signup_empty_messages() {
        let report = validate_signup(&SignupForm::default());
        let messages: Vec<_> = report.errors().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Please enter your full name.",
                "Please enter your email address.",
                "Please create a password.",
                "Please confirm your password.",
            ]
        );
    }

    proptest! {
        #[test]
        fn well_formed_login_passes(
            local in "[a-z0-9._-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
            password in "[!-~]{6,24}",
        ) {
            let report = validate_login(&LoginForm {
                email: format!("{local}@{domain}.{tld}"),
                password,
            });
            prop_assert!(report.is_valid());
            prop_assert_eq!(report.errors().count(), 0);
        }

        #[test]
        fn malformed_email_fails_independently(
            email in "[a-z]{0,10}",
            password in "[a-z]{0,10}",
        ) {
            let report = validate_login(&LoginForm { email, password: password.clone() });
            prop_assert!(!report.is_valid());
            prop_assert!(report.error_for(FormField::LoginEmail).is_some());
            prop_assert_eq!(
                report.error_for(FormField::LoginPassword).is_none(),
                password.len() >= MIN_PASSWORD_LEN
            );
        }
    }
}
