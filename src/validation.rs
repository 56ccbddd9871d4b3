//! Input validation shared by the auth, contacts, and sales-lead endpoints.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum trimmed name length for users and contacts.
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // No whitespace or '@' in the local part and domain, and the domain
    // must contain a dot. Deliberately permissive.
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Check an email address against the permissive format rule.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check a user or contact name (trimmed length).
pub fn is_valid_name(name: &str) -> bool {
    name.trim().len() >= MIN_NAME_LEN
}

/// Trim and lowercase an email for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
