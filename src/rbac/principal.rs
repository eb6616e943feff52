//! Principal string validation

use crate::error::{CliError, Result};

pub const PRINCIPAL_FORMAT_MESSAGE: &str = "incorrect principal format specified";
pub const PRINCIPAL_FORMAT_SUGGESTION: &str =
    "Principal must be specified in this format: \"<Principal Type>:<Principal Name>\".";

/// Require `Type:identifier`; the type itself is checked by the backend
pub fn validate_principal(principal: &str) -> Result<()> {
    if principal.contains(':') {
        Ok(())
    } else {
        Err(CliError::format(
            PRINCIPAL_FORMAT_MESSAGE,
            PRINCIPAL_FORMAT_SUGGESTION,
        ))
    }
}
