//! Field-level validation rules
//!
//! Every rule is a pure function returning the message to show, or `None`
//! when the value passes. Forms combine them into a [`FieldErrors`] map.

use super::field::FieldName;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Deliberately permissive shape check, not an RFC 5322 validator.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email shape regex"));

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const TECH_STACK_REQUIRED: &str = "Please specify your tech stack";
pub const GITHUB_URL_INVALID: &str = "Please enter a valid GitHub URL";
pub const LINKEDIN_URL_INVALID: &str = "Please enter a valid LinkedIn URL";

/// Field-keyed validation messages. A field that passed is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a rule; `None` leaves the field absent
    pub fn record(&mut self, field: FieldName, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.0.insert(field, message);
        }
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error for a single field (the user is editing it)
    pub fn clear_field(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// True when the value has the `x@y.z` shape
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Required + shape check for an email field
pub fn check_email(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(EMAIL_REQUIRED.to_string())
    } else if !is_email_shaped(value) {
        Some(EMAIL_INVALID.to_string())
    } else {
        None
    }
}

/// Required + minimum length check for the primary password field
pub fn check_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(PASSWORD_REQUIRED.to_string())
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(PASSWORD_TOO_SHORT.to_string())
    } else {
        None
    }
}

/// Confirmation must be present and equal to the password, byte for byte
pub fn check_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        Some(CONFIRM_REQUIRED.to_string())
    } else if password != confirm {
        Some(PASSWORDS_MISMATCH.to_string())
    } else {
        None
    }
}

/// Required check for free-text fields; whitespace-only counts as empty
pub fn check_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

/// Optional URL plausibility: empty passes, otherwise the host must appear
/// somewhere in the value. No URL parsing happens.
pub fn check_url_contains(value: &str, host: &str, message: &str) -> Option<String> {
    if !value.is_empty() && !value.contains(host) {
        Some(message.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_passes() {
            assert_eq!(check_email("a@b.c"), None);
        }

        #[test]
        fn test_missing_at_fails_shape() {
            assert_eq!(check_email("abc").as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(check_email("").as_deref(), Some(EMAIL_REQUIRED));
        }

        #[test]
        fn test_whitespace_only_fails_shape_not_required() {
            assert_eq!(check_email("   ").as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_missing_dot_after_at_fails() {
            assert_eq!(check_email("dev@test").as_deref(), Some(EMAIL_INVALID));
        }

        #[test]
        fn test_match_is_unanchored() {
            assert!(is_email_shaped("contact: dev@test.com please"));
        }
    }

    mod password {
        use super::*;

        #[test]
        fn test_six_chars_passes() {
            assert_eq!(check_password("secret"), None);
        }

        #[test]
        fn test_five_chars_too_short() {
            assert_eq!(check_password("abcde").as_deref(), Some(PASSWORD_TOO_SHORT));
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(check_password("").as_deref(), Some(PASSWORD_REQUIRED));
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            assert_eq!(check_password("ééééé").as_deref(), Some(PASSWORD_TOO_SHORT));
            assert_eq!(check_password("éééééé"), None);
        }
    }

    mod confirm_password {
        use super::*;

        #[test]
        fn test_equal_values_pass() {
            assert_eq!(check_confirm_password("secret1", "secret1"), None);
        }

        #[test]
        fn test_mismatch() {
            assert_eq!(
                check_confirm_password("secret1", "secret2").as_deref(),
                Some(PASSWORDS_MISMATCH)
            );
        }

        #[test]
        fn test_empty_confirm_is_required_not_mismatch() {
            assert_eq!(
                check_confirm_password("secret1", "").as_deref(),
                Some(CONFIRM_REQUIRED)
            );
        }

        #[test]
        fn test_comparison_is_exact() {
            assert_eq!(
                check_confirm_password("secret1", "secret1 ").as_deref(),
                Some(PASSWORDS_MISMATCH)
            );
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn test_github_url_passes() {
            assert_eq!(
                check_url_contains("https://github.com/x", "github.com", GITHUB_URL_INVALID),
                None
            );
        }

        #[test]
        fn test_other_host_fails() {
            assert_eq!(
                check_url_contains("https://example.com", "github.com", GITHUB_URL_INVALID)
                    .as_deref(),
                Some(GITHUB_URL_INVALID)
            );
        }

        #[test]
        fn test_empty_is_vacuously_valid() {
            assert_eq!(check_url_contains("", "github.com", GITHUB_URL_INVALID), None);
        }

        #[test]
        fn test_substring_anywhere_is_accepted() {
            assert_eq!(
                check_url_contains("notgithub.com.evil", "github.com", GITHUB_URL_INVALID),
                None
            );
        }
    }

    mod required {
        use super::*;

        #[test]
        fn test_whitespace_only_is_empty() {
            assert_eq!(
                check_required("  \t", FULL_NAME_REQUIRED).as_deref(),
                Some(FULL_NAME_REQUIRED)
            );
        }

        #[test]
        fn test_non_empty_passes() {
            assert_eq!(check_required(" Ada ", FULL_NAME_REQUIRED), None);
        }
    }

    mod field_errors {
        use super::*;

        #[test]
        fn test_record_none_leaves_field_absent() {
            let mut errors = FieldErrors::new();
            errors.record(FieldName::Email, None);
            assert!(errors.is_empty());
            assert!(!errors.contains(FieldName::Email));
        }

        #[test]
        fn test_clear_field_only_touches_that_field() {
            let mut errors = FieldErrors::new();
            errors.insert(FieldName::Email, EMAIL_REQUIRED);
            errors.insert(FieldName::Password, PASSWORD_REQUIRED);
            errors.clear_field(FieldName::Email);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::Password), Some(PASSWORD_REQUIRED));
        }

        #[test]
        fn test_fields_are_ordered() {
            let mut errors = FieldErrors::new();
            errors.insert(FieldName::Password, PASSWORD_REQUIRED);
            errors.insert(FieldName::FullName, FULL_NAME_REQUIRED);
            let fields: Vec<_> = errors.fields().collect();
            assert_eq!(fields, vec![FieldName::FullName, FieldName::Password]);
        }
    }
}
