//! Input validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CliError, Result};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Reject strings that are not plausible email addresses
pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CliError::format(
            format!("invalid email address \"{}\"", email),
            "Provide an email address such as \"user@example.com\".",
        ))
    }
}
