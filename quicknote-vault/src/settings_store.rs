//! JSON settings blob stored inside the vault.
//!
//! # Storage layout
//!
//! ```text
//! <vault>/
//!   .quicknote/            (mode 0700, created on first save)
//!     data.json            (mode 0600)
//! ```
//!
//! Saves overwrite the whole blob: serialize → `data.json.tmp` → `chmod 0600`
//! → `rename`. The `.tmp` sibling lives in the same directory as the target.

use std::path::{Path, PathBuf};

use serde_json::Value;

use quicknote_core::host::SettingsPersistence;
use quicknote_core::HostError;

use crate::paths::settings_path;

#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Store for the vault rooted at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            path: settings_path(root),
        }
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsPersistence for JsonSettingsStore {
    fn load_data(&self) -> Result<Option<Value>, HostError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| HostError::io(&self.path, e))?;
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save_data(&self, data: &Value) -> Result<(), HostError> {
        let Some(dir) = self.path.parent() else {
            return Err(HostError::Other(format!(
                "invalid settings path: {}",
                self.path.display()
            )));
        };
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| HostError::io(dir, e))?;
            set_dir_permissions(dir)?;
        }

        let tmp = self.tmp_path();
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&tmp, json).map_err(|e| HostError::io(&tmp, e))?;
        set_file_permissions(&tmp)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(HostError::io(&self.path, e));
        }
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), HostError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| HostError::io(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), HostError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), HostError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| HostError::io(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), HostError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
