use std::fmt;
use std::time::Duration;

use crate::output::quoted_list;

/// Custom error type for CLI operations
#[derive(Debug)]
pub enum CliError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// One or more IDs do not carry the prefix their resource type requires
    InvalidIds {
        resource: String,
        ids: Vec<String>,
        prefix: String,
    },
    /// Malformed user input (principal, resource pattern, confirmation text)
    Format {
        message: String,
        suggestion: Option<String>,
    },
    /// Resources that failed the existence check
    NotFound {
        resource: String,
        ids: Vec<String>,
        list_command: String,
    },
    /// Missing or conflicting flags
    Usage {
        message: String,
        suggestion: Option<String>,
    },
    /// A polled operation did not settle in time
    Timeout { operation: String, after: Duration },
    /// Interactive input could not be read
    Input(String),
    /// JSON/YAML error
    Json(String),
    /// Configuration error
    Config(String),
    /// Aggregated per-resource failures from a batch operation
    Batch {
        attempted: usize,
        errors: Vec<CliError>,
    },
}

impl CliError {
    pub fn format(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        CliError::Format {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn usage_with_suggestion(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        CliError::Usage {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Corrective hint shown below the error message
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::InvalidIds {
                resource,
                ids,
                prefix,
            } => {
                let noun = if ids.len() == 1 { "ID" } else { "IDs" };
                Some(format!(
                    "{} {} must start with \"{}-\".",
                    capitalize(resource),
                    noun,
                    prefix
                ))
            }
            CliError::Format { suggestion, .. } | CliError::Usage { suggestion, .. } => {
                suggestion.clone()
            }
            CliError::NotFound {
                resource,
                list_command,
                ..
            } => Some(format!(
                "List available {} with `{}`.",
                resource, list_command
            )),
            CliError::Timeout { .. } => {
                Some("The operation may still complete; check its status later.".to_string())
            }
            _ => None,
        }
    }

    /// Number of failures this error stands for
    pub fn count(&self) -> usize {
        match self {
            CliError::Batch { errors, .. } => errors.len(),
            _ => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CliError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CliError::InvalidIds { resource, ids, .. } => {
                let noun = if ids.len() == 1 { "ID" } else { "IDs" };
                write!(f, "invalid {} {} {}", resource, noun, quoted_list(ids))
            }
            CliError::Format { message, .. } => write!(f, "{}", message),
            CliError::NotFound { resource, ids, .. } => {
                write!(f, "{} {} not found", capitalize(resource), quoted_list(ids))
            }
            CliError::Usage { message, .. } => write!(f, "{}", message),
            CliError::Timeout { operation, after } => {
                write!(f, "timed out after {}s waiting for {}", after.as_secs(), operation)
            }
            CliError::Input(msg) => write!(f, "{}", msg),
            CliError::Json(msg) => write!(f, "JSON error: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Batch { attempted, errors } => {
                write!(f, "{} of {} operations failed:", errors.len(), attempted)?;
                for e in errors {
                    write!(f, "\n  * {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(err: reqwest::Error) -> Self {
        CliError::Http(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for CliError {
    fn from(err: serde_yml::Error) -> Self {
        CliError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Uppercase the first character ("service account" -> "Service account")
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CliError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CliError>();
    }

    #[test]
    fn test_invalid_ids_singular() {
        let err = CliError::InvalidIds {
            resource: "service account".to_string(),
            ids: vec!["u-1".to_string()],
            prefix: "sa".to_string(),
        };
        assert_eq!(err.to_string(), "invalid service account ID \"u-1\"");
        assert_eq!(
            err.suggestion().unwrap(),
            "Service account ID must start with \"sa-\"."
        );
    }

    #[test]
    fn test_invalid_ids_plural() {
        let err = CliError::InvalidIds {
            resource: "service account".to_string(),
            ids: vec!["u-1".to_string(), "u-2".to_string()],
            prefix: "sa".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid service account IDs \"u-1\" and \"u-2\""
        );
        assert!(err.suggestion().unwrap().starts_with("Service account IDs"));
    }

    #[test]
    fn test_not_found_suggests_list_command() {
        let err = CliError::NotFound {
            resource: "environments".to_string(),
            ids: vec!["env-1".to_string()],
            list_command: "confluent environment list".to_string(),
        };
        assert_eq!(err.to_string(), "Environments \"env-1\" not found");
        assert!(err
            .suggestion()
            .unwrap()
            .contains("`confluent environment list`"));
    }

    #[test]
    fn test_batch_display_and_count() {
        let err = CliError::Batch {
            attempted: 3,
            errors: vec![
                CliError::Api {
                    status: 500,
                    message: "boom".to_string(),
                },
                CliError::Api {
                    status: 403,
                    message: "denied".to_string(),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.starts_with("2 of 3 operations failed:"));
        assert!(text.contains("boom"));
        assert!(text.contains("denied"));
        assert_eq!(err.count(), 2);
    }

    #[test]
    fn test_timeout_display() {
        let err = CliError::Timeout {
            operation: "offset update".to_string(),
            after: Duration::from_secs(30),
        };
        assert_eq!(
            err.to_string(),
            "timed out after 30s waiting for offset update"
        );
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_usage_without_suggestion() {
        let err = CliError::usage("must specify `--environment`");
        assert!(err.suggestion().is_none());
        assert_eq!(err.to_string(), "must specify `--environment`");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CliError = json_err.into();
        match err {
            CliError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected CliError::Json"),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("service account"), "Service account");
        assert_eq!(capitalize(""), "");
    }
}
