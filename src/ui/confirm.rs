//! Interactive prompts for destructive operations

use std::io;

use dialoguer::{Confirm, Input};

/// Source of interactive answers
///
/// The deletion workflow only talks to this trait, so tests can script the
/// answers and the binary can plug in a terminal.
pub trait Prompt {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> io::Result<bool>;

    /// Ask for a line of free text
    fn read_line(&self, message: &str) -> io::Result<String>;
}

/// Prompt backed by the terminal via dialoguer
pub struct TerminalPrompt {
    batch: bool,
}

impl TerminalPrompt {
    /// In batch mode every question fails instead of blocking on stdin
    pub fn new(batch: bool) -> Self {
        Self { batch }
    }

    fn ensure_interactive(&self) -> io::Result<()> {
        if self.batch {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "interactive prompts are disabled in batch mode",
            ));
        }
        Ok(())
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        self.ensure_interactive()?;
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn read_line(&self, message: &str) -> io::Result<String> {
        self.ensure_interactive()?;
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}
