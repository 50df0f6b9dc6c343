//! Field rules for contact submissions.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Submission;

/// Allowed name length in characters, after trimming.
pub const NAME_LEN: RangeInclusive<usize> = 2..=100;
/// Allowed subject length in characters, after trimming.
pub const SUBJECT_LEN: RangeInclusive<usize> = 5..=200;
/// Allowed message length in characters, after trimming.
pub const MESSAGE_LEN: RangeInclusive<usize> = 10..=2000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Reasons a contact form is refused. `Display` is the message shown to the
/// visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid submission")]
    Honeypot,

    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Name must be between 2 and 100 characters")]
    NameLength,

    #[error("Subject must be between 5 and 200 characters")]
    SubjectLength,

    #[error("Message must be between 10 and 2000 characters")]
    MessageLength,
}

/// Loose `local@domain.tld` check: no whitespace, exactly one `@`, and a dot
/// somewhere after it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trims surrounding whitespace from a form field.
#[must_use]
pub fn sanitize(input: &str) -> String {
    input.trim().to_string()
}

pub(super) fn check_lengths(submission: &Submission) -> Result<(), ValidationError> {
    let checks = [
        (&submission.name, NAME_LEN, ValidationError::NameLength),
        (&submission.subject, SUBJECT_LEN, ValidationError::SubjectLength),
        (&submission.message, MESSAGE_LEN, ValidationError::MessageLength),
    ];

    for (value, bounds, err) in checks {
        if !bounds.contains(&value.chars().count()) {
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn rejects_address_without_at() {
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn rejects_address_without_dot_in_domain() {
        assert!(!is_valid_email("someone@localhost"));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("some one@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn sanitize_trims_both_ends() {
        assert_eq!(sanitize("  hello world \n"), "hello world");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let submission = Submission {
            name: "김철".to_string(),
            email: "a@b.co".to_string(),
            subject: "héllo".to_string(),
            message: "ümlaut-ish".to_string(),
        };
        assert!(check_lengths(&submission).is_ok());
    }

    #[test]
    fn error_messages_match_form_copy() {
        assert_eq!(ValidationError::Honeypot.to_string(), "Invalid submission");
        assert_eq!(
            ValidationError::MessageLength.to_string(),
            "Message must be between 10 and 2000 characters"
        );
    }
}
