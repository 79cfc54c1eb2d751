//! Wires the filesystem vault and terminal collaborators into a started
//! extension.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use quicknote_core::host::UiRegistry;
use quicknote_core::{Extension, Host};
use quicknote_vault::{vault_root, FsVault, JsonSettingsStore};

use crate::terminal::{OpenMode, TerminalNotifier, TerminalWorkspace};

pub struct Session {
    pub root: PathBuf,
    pub vault: Arc<FsVault>,
    pub extension: Extension,
    pub ui: UiRegistry,
}

impl Session {
    pub fn start(vault: Option<&Path>, mode: OpenMode) -> Result<Self> {
        let root = vault_root(vault).context("cannot resolve vault root")?;
        let fs_vault = Arc::new(
            FsVault::open(&root).with_context(|| format!("cannot open vault '{}'", root.display()))?,
        );

        let host = Host {
            storage: fs_vault.clone(),
            workspace: Arc::new(TerminalWorkspace::new(fs_vault.clone(), mode)),
            notifier: Arc::new(TerminalNotifier),
            persistence: Arc::new(JsonSettingsStore::new(&root)),
        };

        let mut extension = Extension::new(host);
        let mut ui = UiRegistry::default();
        extension.start(&mut ui);
        tracing::debug!(vault = %root.display(), "session started");

        Ok(Self {
            root,
            vault: fs_vault,
            extension,
            ui,
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.extension.stop();
    }
}
