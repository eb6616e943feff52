//! Common utilities for output formatters

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Join quoted values the way English lists read:
/// `"a"`, `"a" and "b"`, `"a", "b", and "c"`
pub fn quoted_list<S: AsRef<str>>(values: &[S]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.as_ref()))
        .collect();
    match quoted.len() {
        0 => String::new(),
        1 => quoted[0].clone(),
        2 => format!("{} and {}", quoted[0], quoted[1]),
        n => format!("{}, and {}", quoted[..n - 1].join(", "), quoted[n - 1]),
    }
}

/// Print any serializable value as JSON or YAML
pub fn output_serialized<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(value)?),
        OutputFormat::Human => unreachable!("output_serialized is only called for JSON/YAML"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_list_empty() {
        let empty: Vec<String> = vec![];
        assert_eq!(quoted_list(&empty), "");
    }

    #[test]
    fn test_quoted_list_one() {
        assert_eq!(quoted_list(&["sa-1"]), "\"sa-1\"");
    }

    #[test]
    fn test_quoted_list_two() {
        assert_eq!(quoted_list(&["sa-1", "sa-2"]), "\"sa-1\" and \"sa-2\"");
    }

    #[test]
    fn test_quoted_list_three() {
        assert_eq!(
            quoted_list(&["a", "b", "c"]),
            "\"a\", \"b\", and \"c\""
        );
    }
}
