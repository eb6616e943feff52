//! Terminal interaction: spinners and yes/no or typed-name confirmations

mod confirm;
mod spinner;

pub use confirm::{Prompt, TerminalPrompt};
pub use spinner::{create_spinner, finish_spinner};
