//! Login & registration form validation.
//!
//! Errors are field-local: a form with any error is not submitted and the session is
//! never asked to authenticate.

use std::collections::BTreeMap;

use crate::{
    error::ValidationError,
    session::directory::{SEED_USER_EMAIL, SEED_USER_PASSWORD},
};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Validation errors keyed by field, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, ValidationError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Message shown under `field`, if any
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    fn check(&mut self, field: Field, valid: bool, err: ValidationError) {
        if !valid {
            self.0.insert(field, err);
        }
    }
}

/// Any non-blank text around an `@`, with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    email
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + c.len_utf8() < email.len())
}

fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Form pre-filled with the seed account, used by the "Use test account" action
    pub fn test_credentials() -> Self {
        Self {
            email: SEED_USER_EMAIL.to_string(),
            password: SEED_USER_PASSWORD.to_string(),
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        errors.check(
            Field::Email,
            is_valid_email(&self.email),
            ValidationError::InvalidEmail,
        );
        errors.check(
            Field::Password,
            is_valid_password(&self.password),
            ValidationError::PasswordTooShort,
        );

        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        errors.check(
            Field::Name,
            !self.name.trim().is_empty(),
            ValidationError::NameRequired,
        );
        errors.check(
            Field::Email,
            is_valid_email(&self.email),
            ValidationError::InvalidEmail,
        );
        errors.check(
            Field::Password,
            is_valid_password(&self.password),
            ValidationError::PasswordTooShort,
        );
        errors.check(
            Field::ConfirmPassword,
            self.confirm_password == self.password,
            ValidationError::PasswordMismatch,
        );

        errors
    }
}
