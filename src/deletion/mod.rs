//! Shared validate → confirm → delete pipeline used by every delete command
//!
//! Format and existence checks are fatal and run before any delete call.
//! Delete calls run one ID at a time, are never retried, and a failure for
//! one ID does not stop the rest of the batch.

use std::future::Future;

use log::debug;

use crate::error::{CliError, Result};
use crate::output::quoted_list;
use crate::resource::ResourceKind;
use crate::ui::Prompt;

const FAILED_TO_READ_INPUT: &str = "failed to read input";
const FORCE_SUGGESTION: &str = "Use the `--force` flag to delete without a confirmation prompt.";

/// One delete invocation: which kind, which IDs, and whether to skip prompts
#[derive(Debug, Clone)]
pub struct DeletionRequest {
    pub kind: ResourceKind,
    pub ids: Vec<String>,
    pub force: bool,
}

impl DeletionRequest {
    pub fn new(kind: ResourceKind, ids: &[String], force: bool) -> Self {
        Self {
            kind,
            ids: ids.to_vec(),
            force,
        }
    }

    pub fn validate_prefixes(&self) -> Result<()> {
        validate_prefixes(self.kind, &self.ids)
    }

    /// Existence check plus confirmation; `Ok(false)` means the user declined
    pub async fn validate_and_confirm<F, Fut>(
        &self,
        prompt: &dyn Prompt,
        exists: F,
        display_name: Option<&str>,
    ) -> Result<bool>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = bool>,
    {
        validate_and_confirm(prompt, self, exists, display_name).await
    }

    pub async fn execute<F, Fut>(&self, delete_fn: F) -> DeletionReport
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        delete(self.kind, &self.ids, delete_fn).await
    }
}

/// Outcome of a batch delete
#[derive(Debug)]
pub struct DeletionReport {
    pub kind: ResourceKind,
    /// IDs whose delete call succeeded, in request order
    pub deleted: Vec<String>,
    /// One error per failed ID
    pub errors: Vec<CliError>,
    pub attempted: usize,
}

impl DeletionReport {
    /// Success line, or `None` when nothing was deleted
    pub fn message(&self) -> Option<String> {
        if self.deleted.is_empty() {
            return None;
        }
        Some(format!(
            "Deleted {} {}.",
            self.kind.display(self.deleted.len()),
            quoted_list(&self.deleted)
        ))
    }

    /// Aggregated error, present only if at least one ID failed
    pub fn error(self) -> Option<CliError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(CliError::Batch {
                attempted: self.attempted,
                errors: self.errors,
            })
        }
    }

    /// Print the success line and turn failures into the command's error
    pub fn finish(self) -> Result<Vec<String>> {
        if let Some(msg) = self.message() {
            println!("{}", msg);
        }
        let deleted = self.deleted.clone();
        match self.error() {
            Some(err) => Err(err),
            None => Ok(deleted),
        }
    }
}

/// Reject IDs that do not start with `<prefix>-` for the given kind.
///
/// Kinds without an enforced prefix (group mappings, ACLs) always pass.
pub fn validate_prefixes(kind: ResourceKind, ids: &[String]) -> Result<()> {
    if !kind.enforces_prefix() {
        return Ok(());
    }
    let Some(prefix) = kind.prefix() else {
        return Ok(());
    };

    let expected = format!("{}-", prefix);
    let invalid: Vec<String> = ids
        .iter()
        .filter(|id| !id.starts_with(&expected))
        .cloned()
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }
    Err(CliError::InvalidIds {
        resource: kind.singular().to_string(),
        ids: invalid,
        prefix: prefix.to_string(),
    })
}

/// Run the existence predicate once per ID, sequentially, and report every
/// ID it rejects in a single error
pub async fn validate_args<F, Fut>(kind: ResourceKind, ids: &[String], mut exists: F) -> Result<()>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut missing = Vec::new();
    for id in ids {
        if !exists(id.clone()).await {
            debug!("{} '{}' failed existence check", kind, id);
            missing.push(id.clone());
        }
    }

    if missing.is_empty() {
        return Ok(());
    }
    Err(CliError::NotFound {
        resource: kind.display(missing.len()).to_string(),
        ids: missing,
        list_command: kind.list_command().to_string(),
    })
}

/// Yes/no confirmation; `force` answers yes without prompting
pub fn confirm_deletion_yes_no(prompt: &dyn Prompt, force: bool, message: &str) -> Result<bool> {
    if force {
        return Ok(true);
    }
    prompt.confirm(message).map_err(|e| {
        debug!("Prompt failed: {}", e);
        CliError::Input(FAILED_TO_READ_INPUT.to_string())
    })
}

/// Confirmation by typing `required` verbatim (or wrapped in double quotes)
pub fn confirm_deletion_with_string(
    prompt: &dyn Prompt,
    force: bool,
    message: &str,
    required: &str,
) -> Result<()> {
    if force {
        return Ok(());
    }
    let input = prompt.read_line(message).map_err(|e| {
        debug!("Prompt failed: {}", e);
        CliError::Input(FAILED_TO_READ_INPUT.to_string())
    })?;

    let input = input.trim();
    if input == required || input == format!("\"{}\"", required) {
        return Ok(());
    }
    Err(CliError::format(
        format!("input does not match \"{}\"", required),
        FORCE_SUGGESTION,
    ))
}

/// Prompt asking the user to type the name of a single resource
pub fn default_prompt_string(kind: ResourceKind, id: &str, name: &str) -> String {
    format!(
        "Are you sure you want to delete {} \"{}\"?\nTo confirm, type \"{}\". To cancel, press Ctrl-C",
        kind.singular(),
        id,
        name
    )
}

/// Yes/no prompt for one or more resources
pub fn default_yes_no_prompt_string(kind: ResourceKind, ids: &[String]) -> String {
    format!(
        "Are you sure you want to delete {} {}?",
        kind.display(ids.len()),
        quoted_list(ids)
    )
}

/// Existence check followed by the confirmation that fits the batch size:
/// type-the-name for a single ID, yes/no for several.
///
/// Returns `Ok(false)` if the user answered no.
pub async fn validate_and_confirm<F, Fut>(
    prompt: &dyn Prompt,
    request: &DeletionRequest,
    exists: F,
    display_name: Option<&str>,
) -> Result<bool>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    validate_args(request.kind, &request.ids, exists).await?;

    if let [id] = request.ids.as_slice() {
        let name = display_name.unwrap_or(id.as_str());
        confirm_deletion_with_string(
            prompt,
            request.force,
            &default_prompt_string(request.kind, id, name),
            name,
        )?;
        return Ok(true);
    }

    confirm_deletion_yes_no(
        prompt,
        request.force,
        &default_yes_no_prompt_string(request.kind, &request.ids),
    )
}

/// Call `delete_fn` once per ID, in order, collecting successes and failures
pub async fn delete<F, Fut>(kind: ResourceKind, ids: &[String], mut delete_fn: F) -> DeletionReport
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut deleted = Vec::new();
    let mut errors = Vec::new();

    for id in ids {
        match delete_fn(id.clone()).await {
            Ok(()) => {
                debug!("Deleted {} '{}'", kind, id);
                deleted.push(id.clone());
            }
            Err(e) => {
                debug!("Failed to delete {} '{}': {}", kind, id, e);
                errors.push(e);
            }
        }
    }

    DeletionReport {
        kind,
        deleted,
        errors,
        attempted: ids.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    /// Prompt with canned answers that records what it was asked
    struct ScriptedPrompt {
        answer: Option<String>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn answering(answer: &str) -> Self {
            Self {
                answer: Some(answer.to_string()),
                asked: RefCell::new(Vec::new()),
            }
        }

        fn broken() -> Self {
            Self {
                answer: None,
                asked: RefCell::new(Vec::new()),
            }
        }

        fn times_asked(&self) -> usize {
            self.asked.borrow().len()
        }

        fn next(&self, message: &str) -> io::Result<String> {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> io::Result<bool> {
            self.next(message).map(|a| a == "y")
        }

        fn read_line(&self, message: &str) -> io::Result<String> {
            self.next(message)
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_prefixes_all_valid() {
        assert!(validate_prefixes(ResourceKind::ServiceAccount, &ids(&["sa-1", "sa-2"])).is_ok());
    }

    #[test]
    fn test_validate_prefixes_names_offenders_only() {
        let err = validate_prefixes(
            ResourceKind::ServiceAccount,
            &ids(&["sa-1", "u-2", "sa-3", "pool-4"]),
        )
        .unwrap_err();
        match &err {
            CliError::InvalidIds { ids, prefix, .. } => {
                assert_eq!(ids, &vec!["u-2".to_string(), "pool-4".to_string()]);
                assert_eq!(prefix, "sa");
            }
            other => panic!("Expected InvalidIds, got {:?}", other),
        }
        assert!(err.to_string().contains("IDs \"u-2\" and \"pool-4\""));
        assert!(!err.to_string().contains("sa-1"));
    }

    #[test]
    fn test_validate_prefixes_single_offender_uses_singular() {
        let err = validate_prefixes(ResourceKind::ServiceAccount, &ids(&["sa-1", "u-2"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid service account ID \"u-2\"");
        assert_eq!(
            err.suggestion().as_deref(),
            Some("Service account ID must start with \"sa-\".")
        );
    }

    #[test]
    fn test_validate_prefixes_requires_hyphen() {
        assert!(validate_prefixes(ResourceKind::Environment, &ids(&["envabc"])).is_err());
    }

    #[test]
    fn test_validate_prefixes_skips_group_mappings() {
        assert!(
            validate_prefixes(ResourceKind::GroupMapping, &ids(&["pool-legacy", "group-new"]))
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_validate_args_collects_missing() {
        let known = ids(&["sa-1", "sa-3"]);
        let known = &known;
        let err = validate_args(
            ResourceKind::ServiceAccount,
            &ids(&["sa-1", "sa-2", "sa-3", "sa-4"]),
            |id| async move { known.contains(&id) },
        )
        .await
        .unwrap_err();

        match &err {
            CliError::NotFound {
                resource,
                ids,
                list_command,
            } => {
                assert_eq!(resource, "service accounts");
                assert_eq!(ids, &vec!["sa-2".to_string(), "sa-4".to_string()]);
                assert_eq!(list_command, "confluent iam service-account list");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validate_args_all_present() {
        let result = validate_args(ResourceKind::Environment, &ids(&["env-1"]), |_| async {
            true
        })
        .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_confirm_yes_no_force_skips_prompt() {
        let prompt = ScriptedPrompt::broken();
        assert!(confirm_deletion_yes_no(&prompt, true, "Delete?").unwrap());
        assert_eq!(prompt.times_asked(), 0);
    }

    #[test]
    fn test_confirm_yes_no_answers() {
        let yes = ScriptedPrompt::answering("y");
        assert!(confirm_deletion_yes_no(&yes, false, "Delete?").unwrap());
        let no = ScriptedPrompt::answering("n");
        assert!(!confirm_deletion_yes_no(&no, false, "Delete?").unwrap());
        assert_eq!(no.times_asked(), 1);
    }

    #[test]
    fn test_confirm_yes_no_unreadable_input() {
        let prompt = ScriptedPrompt::broken();
        let err = confirm_deletion_yes_no(&prompt, false, "Delete?").unwrap_err();
        assert_eq!(err.to_string(), "failed to read input");
    }

    #[test]
    fn test_confirm_with_string_accepts_exact_and_quoted() {
        let exact = ScriptedPrompt::answering("prod-env");
        assert!(confirm_deletion_with_string(&exact, false, "msg", "prod-env").is_ok());
        let quoted = ScriptedPrompt::answering("\"prod-env\"");
        assert!(confirm_deletion_with_string(&quoted, false, "msg", "prod-env").is_ok());
    }

    #[test]
    fn test_confirm_with_string_rejects_mismatch() {
        let prompt = ScriptedPrompt::answering("prod");
        let err = confirm_deletion_with_string(&prompt, false, "msg", "prod-env").unwrap_err();
        assert_eq!(err.to_string(), "input does not match \"prod-env\"");
        assert!(err.suggestion().unwrap().contains("--force"));
    }

    #[test]
    fn test_confirm_with_string_force() {
        let prompt = ScriptedPrompt::broken();
        assert!(confirm_deletion_with_string(&prompt, true, "msg", "x").is_ok());
        assert_eq!(prompt.times_asked(), 0);
    }

    #[tokio::test]
    async fn test_delete_partial_failure() {
        let report = delete(
            ResourceKind::ServiceAccount,
            &ids(&["sa-1", "sa-2", "sa-3", "sa-4"]),
            |id| async move {
                if id == "sa-2" || id == "sa-4" {
                    Err(CliError::Api {
                        status: 500,
                        message: format!("cannot delete {}", id),
                    })
                } else {
                    Ok(())
                }
            },
        )
        .await;

        assert_eq!(report.deleted, ids(&["sa-1", "sa-3"]));
        assert_eq!(
            report.message().unwrap(),
            "Deleted service accounts \"sa-1\" and \"sa-3\"."
        );
        let err = report.error().unwrap();
        assert_eq!(err.count(), 2);
        assert!(err.to_string().starts_with("2 of 4 operations failed"));
    }

    #[tokio::test]
    async fn test_delete_attempts_each_id_once() {
        let calls = RefCell::new(Vec::new());
        let calls_ref = &calls;
        let report = delete(ResourceKind::Environment, &ids(&["env-1", "env-2"]), |id| async move {
            calls_ref.borrow_mut().push(id);
            Err(CliError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        })
        .await;

        assert_eq!(calls.into_inner(), ids(&["env-1", "env-2"]));
        assert!(report.deleted.is_empty());
        assert!(report.message().is_none());
        assert_eq!(report.error().unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_delete_single_success_message() {
        let report = delete(ResourceKind::Environment, &ids(&["env-1"]), |_| async { Ok(()) }).await;
        assert_eq!(report.message().unwrap(), "Deleted environment \"env-1\".");
        assert!(report.finish().is_ok());
    }

    #[tokio::test]
    async fn test_validate_and_confirm_single_requires_name() {
        let request = DeletionRequest::new(ResourceKind::Environment, &ids(&["env-1"]), false);
        let prompt = ScriptedPrompt::answering("production");
        let ok = request
            .validate_and_confirm(&prompt, |_| async { true }, Some("production"))
            .await
            .unwrap();
        assert!(ok);
        assert!(prompt.asked.borrow()[0].contains("type \"production\""));
    }

    #[tokio::test]
    async fn test_validate_and_confirm_multiple_declined() {
        let request =
            DeletionRequest::new(ResourceKind::Environment, &ids(&["env-1", "env-2"]), false);
        let prompt = ScriptedPrompt::answering("n");
        let ok = request
            .validate_and_confirm(&prompt, |_| async { true }, None)
            .await
            .unwrap();
        assert!(!ok);
        assert!(prompt.asked.borrow()[0].contains("environments \"env-1\" and \"env-2\""));
    }

    #[tokio::test]
    async fn test_validate_and_confirm_missing_never_prompts() {
        let request = DeletionRequest::new(ResourceKind::Environment, &ids(&["env-1"]), false);
        let prompt = ScriptedPrompt::answering("y");
        let result = request
            .validate_and_confirm(&prompt, |_| async { false }, None)
            .await;
        assert!(matches!(result, Err(CliError::NotFound { .. })));
        assert_eq!(prompt.times_asked(), 0);
    }
}
