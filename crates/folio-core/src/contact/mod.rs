//! Contact form payload and the submission it validates into.
//!
//! A [`ContactForm`] is whatever the browser posted; every field is optional
//! so that a missing key and an empty string are rejected the same way.
//! [`ContactForm::validate`] turns it into a trimmed [`Submission`] or the
//! first [`ValidationError`] found. [`parse_submission`] does the same
//! straight from a request body.

mod validate;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use validate::{is_valid_email, sanitize, ValidationError, MESSAGE_LEN, NAME_LEN, SUBJECT_LEN};

/// Raw contact form body as posted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Honeypot. Hidden from humans, so any truthy value means a bot filled
    /// it in. Kept untyped: bots post numbers and booleans here too.
    #[serde(default)]
    pub website: Option<Value>,
}

/// A contact submission that passed every check. All fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a request body did not become a [`Submission`].
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Not JSON, or a field had the wrong type.
    #[error("malformed contact body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// JavaScript truthiness: `null`, `false`, `0`, and `""` are falsy;
/// everything else, empty arrays and objects included, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses and validates a JSON request body.
///
/// The honeypot is checked on the raw JSON before any typed conversion, so
/// a filled honeypot is reported as [`ValidationError::Honeypot`] whatever
/// shape the other fields have.
///
/// # Errors
///
/// - [`FormError::Malformed`] if the body is not JSON or a field is not a string.
/// - [`FormError::Invalid`] for the first validation rule the form breaks.
pub fn parse_submission(body: &[u8]) -> Result<Submission, FormError> {
    let value: Value = serde_json::from_slice(body)?;

    if value.get("website").is_some_and(is_truthy) {
        return Err(ValidationError::Honeypot.into());
    }

    let form: ContactForm = serde_json::from_value(value)?;
    Ok(form.validate_fields()?)
}

impl ContactForm {
    /// Returns `true` when the honeypot field carries a truthy value.
    #[must_use]
    pub fn is_honeypot_tripped(&self) -> bool {
        self.website.as_ref().is_some_and(is_truthy)
    }

    /// Validates the form and produces a sanitised [`Submission`].
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// honeypot, required fields, email format, then the name, subject and
    /// message length bounds (measured after trimming).
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first rule the form breaks.
    pub fn validate(self) -> Result<Submission, ValidationError> {
        if self.is_honeypot_tripped() {
            return Err(ValidationError::Honeypot);
        }
        self.validate_fields()
    }

    fn validate_fields(self) -> Result<Submission, ValidationError> {
        let (name, email, subject, message) =
            match (self.name, self.email, self.subject, self.message) {
                (Some(n), Some(e), Some(s), Some(m))
                    if !n.is_empty() && !e.is_empty() && !s.is_empty() && !m.is_empty() =>
                {
                    (n, e, s, m)
                }
                _ => return Err(ValidationError::MissingFields),
            };

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let submission = Submission {
            name: sanitize(&name),
            email: sanitize(&email),
            subject: sanitize(&subject),
            message: sanitize(&message),
        };

        validate::check_lengths(&submission)?;
        Ok(submission)
    }
}
