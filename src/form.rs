//! Signup form validation
//!
//! The field rules are pure functions over the typed text; [`FormValidator`]
//! reads the live inputs, applies a rule and mirrors the outcome into the
//! field's error slot. A field's error slot is shown exactly when its last
//! validation failed.
//!
//! ```text
//! input event ──► validate(field) ──► check_* ──► show_error | clear_error
//! submit      ──► validate(all four, no short-circuit) ──► success + reset | keep errors
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::ClassNames;
use crate::dom::Dom;
use crate::registry::{FieldHandles, SignupFormElements};

/// Minimum password length, counted in UTF-16 code units like the browser.
pub const MIN_PASSWORD_LEN: usize = 6;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Submission order.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed field rule. The display text is what the user sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Name can only contain letters and spaces.")]
    NameInvalid,

    #[error("Email is required.")]
    EmailRequired,

    #[error("Please enter a valid email address.")]
    EmailInvalid,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("Please confirm your password.")]
    ConfirmRequired,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Strip surrounding whitespace the way the browser's `trim` does, which
/// also drops the U+FEFF byte order mark.
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn check_name(name: &str) -> Result<(), FieldError> {
    let name = trim_input(name);
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldError::NameInvalid);
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), FieldError> {
    let email = trim_input(email);
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn check_confirm_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::ConfirmRequired);
    }
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// Per-field results of one submission, in [`Field::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub outcomes: Vec<(Field, Result<(), FieldError>)>,
}

impl SubmitReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(field, outcome)| outcome.as_ref().err().map(|e| (*field, *e)))
    }
}

/// Applies the field rules against live form elements.
pub struct FormValidator<'a, H> {
    elements: &'a SignupFormElements<H>,
    classes: &'a ClassNames,
    success_message: &'a str,
}

impl<'a, H: Clone + fmt::Debug> FormValidator<'a, H> {
    pub fn new(
        elements: &'a SignupFormElements<H>,
        classes: &'a ClassNames,
        success_message: &'a str,
    ) -> Self {
        Self {
            elements,
            classes,
            success_message,
        }
    }

    /// Run the rule for `field` and show or clear its error slot.
    pub fn validate<D: Dom<Handle = H>>(
        &self,
        dom: &mut D,
        field: Field,
    ) -> Result<(), FieldError> {
        let value = dom.value(&self.elements.field(field).input);
        let outcome = match field {
            Field::Name => check_name(&value),
            Field::Email => check_email(&value),
            Field::Password => check_password(&value),
            Field::ConfirmPassword => {
                let password = dom.value(&self.elements.password.input);
                check_confirm_password(&password, &value)
            }
        };

        let handles = self.elements.field(field);
        match &outcome {
            Ok(()) => clear_error(dom, handles, self.classes),
            Err(e) => show_error(dom, handles, self.classes, &e.to_string()),
        }
        tracing::debug!(field = %field, valid = outcome.is_ok(), "validated field");
        outcome
    }

    /// Validate every field, then either report success and reset the form
    /// or leave the inputs and their error slots as they are.
    pub fn submit<D: Dom<Handle = H>>(&self, dom: &mut D) -> SubmitReport {
        dom.set_text(&self.elements.success, "");

        // Every validator runs so each slot reflects its own field.
        let outcomes: Vec<_> = Field::ALL
            .iter()
            .map(|&field| (field, self.validate(dom, field)))
            .collect();
        let report = SubmitReport { outcomes };

        if report.is_valid() {
            dom.set_text(&self.elements.success, self.success_message);
            dom.reset_form(&self.elements.form);
            // Reset restores values only; the error slots need their own pass.
            for field in Field::ALL {
                clear_error(dom, self.elements.field(field), self.classes);
            }
            tracing::info!("signup form accepted");
        } else {
            tracing::debug!(invalid = report.errors().count(), "signup form rejected");
        }
        report
    }
}

/// Put `message` in the field's slot, reveal it and flag the input.
pub fn show_error<D: Dom>(
    dom: &mut D,
    handles: &FieldHandles<D::Handle>,
    classes: &ClassNames,
    message: &str,
) {
    dom.set_text(&handles.error, message);
    dom.remove_class(&handles.error, &classes.hidden);
    dom.add_class(&handles.input, &classes.error);
}

/// Empty and hide the field's slot and unflag the input.
pub fn clear_error<D: Dom>(
    dom: &mut D,
    handles: &FieldHandles<D::Handle>,
    classes: &ClassNames,
) {
    dom.set_text(&handles.error, "");
    dom.add_class(&handles.error, &classes.hidden);
    dom.remove_class(&handles.input, &classes.error);
}
