//! `quicknote run <command-id | icon>`: activate a registered entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Args;

use crate::session::Session;
use crate::terminal::OpenMode;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Command id (e.g. "create-quick-note") or ribbon icon (e.g. "file-plus").
    pub id: String,

    /// Open the note in $VISUAL / $EDITOR instead of printing its path.
    #[arg(long)]
    pub open: bool,
}

impl RunArgs {
    pub fn run(self, vault: Option<&Path>) -> Result<ExitCode> {
        let mode = if self.open { OpenMode::Editor } else { OpenMode::Print };
        let session = Session::start(vault, mode)?;

        // Ribbon icons are activated through the command they were registered with.
        let command_id = session
            .ui
            .ribbon_icons
            .iter()
            .find(|icon| icon.icon == self.id)
            .map(|icon| icon.command_id)
            .unwrap_or(self.id.as_str());

        let outcome = session.extension.run_command(command_id).ok_or_else(|| {
            anyhow!(
                "unknown command '{}'; run `quicknote commands` to list them",
                self.id
            )
        })?;
        Ok(super::exit_code(&outcome))
    }
}
