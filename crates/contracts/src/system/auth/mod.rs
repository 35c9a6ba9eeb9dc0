pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{
    is_valid_email, is_valid_password, validate_login, validate_signup, FieldError, FieldErrorKind,
    ValidationReport,
};

/// Which form a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    pub fn form_id(&self) -> &'static str {
        match self {
            FormKind::Login => "loginForm",
            FormKind::Signup => "signupForm",
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        match self {
            FormKind::Login => &[FormField::LoginEmail, FormField::LoginPassword],
            FormKind::Signup => &[
                FormField::SignupName,
                FormField::SignupEmail,
                FormField::SignupPassword,
                FormField::SignupConfirmPassword,
            ],
        }
    }
}

/// Text fields of the login and signup forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    LoginEmail,
    LoginPassword,
    SignupName,
    SignupEmail,
    SignupPassword,
    SignupConfirmPassword,
}

impl FormField {
    /// Element id of the input
    pub fn dom_id(&self) -> &'static str {
        match self {
            FormField::LoginEmail => "loginEmail",
            FormField::LoginPassword => "loginPassword",
            FormField::SignupName => "signupName",
            FormField::SignupEmail => "signupEmail",
            FormField::SignupPassword => "signupPassword",
            FormField::SignupConfirmPassword => "signupConfirmPassword",
        }
    }

    pub fn form(&self) -> FormKind {
        match self {
            FormField::LoginEmail | FormField::LoginPassword => FormKind::Login,
            _ => FormKind::Signup,
        }
    }

    /// Name and email values are trimmed before validation, passwords are not
    pub fn is_trimmed(&self) -> bool {
        matches!(
            self,
            FormField::LoginEmail | FormField::SignupName | FormField::SignupEmail
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_belong_to_their_form() {
        for kind in [FormKind::Login, FormKind::Signup] {
            for field in kind.fields() {
                assert_eq!(field.form(), kind);
            }
        }
    }

    #[test]
    fn test_passwords_are_not_trimmed() {
        assert!(FormField::SignupName.is_trimmed());
        assert!(!FormField::LoginPassword.is_trimmed());
        assert!(!FormField::SignupConfirmPassword.is_trimmed());
    }
}
