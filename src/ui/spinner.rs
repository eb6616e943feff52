//! Activity indicator shown while waiting on the API

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const FRAMES: &[&str] = &["◐", "◓", "◑", "◒", "●"];
const TICK: Duration = Duration::from_millis(120);

/// Start a spinner on stderr, or nothing when `batch` is set.
pub fn create_spinner(message: &str, batch: bool) -> Option<ProgressBar> {
    if batch {
        return None;
    }
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
        .map(|s| s.tick_strings(FRAMES))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let bar = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_owned());
    bar.enable_steady_tick(TICK);
    Some(bar)
}

pub fn finish_spinner(spinner: Option<ProgressBar>) {
    spinner.into_iter().for_each(|bar| bar.finish_and_clear());
}
