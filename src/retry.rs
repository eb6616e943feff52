//! Polling for operations that complete asynchronously on the backend

use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::time::{sleep, Instant};

use crate::error::{CliError, Result};

/// Poll `check` every `tick` until it yields a value or `timeout` elapses.
///
/// `check` returns `Ok(None)` while the operation is still pending. Errors
/// from `check` end the polling immediately.
pub async fn poll<T, F, Fut>(
    operation: &str,
    tick: Duration,
    timeout: Duration,
    mut check: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let deadline = Instant::now() + timeout;
    let mut attempt = 1u32;

    loop {
        if let Some(value) = check().await? {
            debug!("{} settled after {} check(s)", operation, attempt);
            return Ok(value);
        }
        if Instant::now() + tick > deadline {
            return Err(CliError::Timeout {
                operation: operation.to_string(),
                after: timeout,
            });
        }
        debug!("{} still pending (check {}), retrying in {:?}", operation, attempt, tick);
        attempt += 1;
        sleep(tick).await;
    }
}
