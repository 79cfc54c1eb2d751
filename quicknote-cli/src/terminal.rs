//! Terminal implementations of the notification and workspace collaborators.

use std::process::Command;
use std::sync::Arc;

use colored::Colorize;

use quicknote_core::host::{Notifier, Workspace};
use quicknote_core::{FolderEntry, HostError};
use quicknote_vault::FsVault;

/// Notices go to stderr so stdout only carries note paths.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{} {message}", "quicknote:".cyan().bold());
    }
}

/// How a "new tab" is realised in a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Print the note's absolute path on stdout.
    Print,
    /// Launch `$VISUAL` / `$EDITOR` on the note and wait for it.
    Editor,
}

pub struct TerminalWorkspace {
    vault: Arc<FsVault>,
    mode: OpenMode,
}

impl TerminalWorkspace {
    pub fn new(vault: Arc<FsVault>, mode: OpenMode) -> Self {
        Self { vault, mode }
    }
}

impl Workspace for TerminalWorkspace {
    fn open_in_new_tab(&self, file: &FolderEntry) -> Result<(), HostError> {
        let path = self.vault.resolve(&file.path)?;
        match self.mode {
            OpenMode::Print => {
                println!("{}", path.display());
                Ok(())
            }
            OpenMode::Editor => {
                let editor = std::env::var("VISUAL")
                    .or_else(|_| std::env::var("EDITOR"))
                    .map_err(|_| HostError::Other("set $VISUAL or $EDITOR to use --open".into()))?;
                let mut parts = editor.split_whitespace();
                let program = parts
                    .next()
                    .ok_or_else(|| HostError::Other("editor command is empty".into()))?;
                tracing::debug!(editor = %editor, path = %path.display(), "launching editor");
                let status = Command::new(program)
                    .args(parts)
                    .arg(&path)
                    .status()
                    .map_err(|e| HostError::io(program, e))?;
                if !status.success() {
                    return Err(HostError::Other(format!("editor exited with {status}")));
                }
                Ok(())
            }
        }
    }
}
