//! `quicknote new [--open]`

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::session::Session;
use crate::terminal::OpenMode;

/// Create the next numbered note in the target folder.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Open the note in $VISUAL / $EDITOR instead of printing its path.
    #[arg(long)]
    pub open: bool,
}

impl NewArgs {
    pub fn run(self, vault: Option<&Path>) -> Result<ExitCode> {
        let mode = if self.open { OpenMode::Editor } else { OpenMode::Print };
        let session = Session::start(vault, mode)?;
        let outcome = session.extension.create_quick_note();
        Ok(super::exit_code(&outcome))
    }
}
