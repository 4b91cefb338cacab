// UI layer: terminal implementations of the host capabilities. The
// workspace is whatever file the user pointed the command at, and the
// status display is a spinner line that prints reported lines above it.

use anyhow::{Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use crate::status::StatusSink;
use crate::sync::{Document, Workspace};

/// Decide which script file to treat as the active document. An explicit
/// argument wins; otherwise, on an interactive terminal, ask for one.
/// `Ok(None)` means there is no active document.
pub fn resolve_script_path(arg: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if arg.is_some() {
        return Ok(arg);
    }
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let path: String = Input::new()
        .with_prompt("Script file path")
        .interact_text()?;
    Ok(Some(PathBuf::from(path)))
}

/// Workspace backed by a single file on disk.
pub struct FileWorkspace {
    path: Option<PathBuf>,
}

impl FileWorkspace {
    pub fn new(path: Option<PathBuf>) -> Self {
        FileWorkspace { path }
    }
}

impl Workspace for FileWorkspace {
    fn active_document(&self) -> Result<Option<Document>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(Document {
            name: path.display().to_string(),
            text,
        }))
    }
}

/// Terminal status display: a live spinner while the sync runs, with
/// reported lines printed above it. Like the host status bar it mimics,
/// the display goes static after each write until it is unfrozen again.
pub struct TermStatus {
    bar: ProgressBar,
    frozen: bool,
}

impl TermStatus {
    pub fn new() -> Self {
        // The spinner draws to stderr and hides itself when stderr is
        // not a terminal; reported lines are printed either way.
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        bar.enable_steady_tick(Duration::from_millis(120));
        TermStatus { bar, frozen: false }
    }

    /// Transient busy text on the spinner line.
    pub fn busy(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Remove the spinner, leaving only the reported lines behind.
    pub fn close(self) {
        self.bar.finish_and_clear();
    }
}

impl Default for TermStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for TermStatus {
    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn unfreeze(&mut self) {
        self.frozen = false;
    }

    fn set_text(&mut self, text: &str) {
        if self.frozen {
            return;
        }
        self.bar.suspend(|| println!("{text}"));
        self.frozen = true;
    }
}
