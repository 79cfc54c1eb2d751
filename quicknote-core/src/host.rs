//! Host collaborator interfaces.
//!
//! The extension never touches a filesystem or UI directly; everything goes
//! through these traits so the core can run against a real vault, a terminal
//! front end, or test fakes.

use std::fmt;

use serde_json::Value;

use crate::error::HostError;
use crate::types::{EntryKind, FolderEntry, FolderPath};

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// The host's vault.
pub trait Storage {
    /// Every file in the vault, at any depth.
    fn files(&self) -> Result<Vec<FolderEntry>, HostError>;

    /// Every folder in the vault, excluding the root.
    fn folders(&self) -> Result<Vec<FolderPath>, HostError>;

    /// Look up an exact vault path.
    fn entry(&self, path: &str) -> Result<Option<EntryKind>, HostError>;

    /// Create a folder; fails with [`HostError::AlreadyExists`] if present.
    fn create_folder(&self, path: &str) -> Result<(), HostError>;

    /// Create a file with `content`; fails if anything already exists there.
    fn create_file(&self, path: &str, content: &str) -> Result<FolderEntry, HostError>;
}

/// The host's editor area.
pub trait Workspace {
    /// Open `file` in a fresh tab.
    fn open_in_new_tab(&self, file: &FolderEntry) -> Result<(), HostError>;
}

/// Transient user-visible messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Key-value persistence for the extension's settings blob.
pub trait SettingsPersistence {
    /// `None` when nothing has been saved yet.
    fn load_data(&self) -> Result<Option<Value>, HostError>;

    /// Overwrite the whole blob.
    fn save_data(&self, data: &Value) -> Result<(), HostError>;
}

// ---------------------------------------------------------------------------
// UI registration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Cmd on macOS, Ctrl elsewhere.
    Mod,
    Ctrl,
    Alt,
    Shift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Mod => write!(f, "Mod"),
            Modifier::Ctrl => write!(f, "Ctrl"),
            Modifier::Alt => write!(f, "Alt"),
            Modifier::Shift => write!(f, "Shift"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{m}+")?;
        }
        write!(f, "{}", self.key.to_uppercase())
    }
}

/// A named, invokable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub hotkeys: Vec<Hotkey>,
}

/// A clickable icon that triggers a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RibbonIcon {
    pub icon: &'static str,
    pub title: &'static str,
    pub command_id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingTab {
    pub title: &'static str,
}

/// Registration points offered by the host UI.
///
/// Activations come back through `Extension::run_command` with the
/// registered command id.
pub trait UiSurface {
    fn add_ribbon_icon(&mut self, icon: RibbonIcon);
    fn add_command(&mut self, command: CommandSpec);
    fn add_setting_tab(&mut self, tab: SettingTab);
}

/// In-memory [`UiSurface`] that simply records registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiRegistry {
    pub ribbon_icons: Vec<RibbonIcon>,
    pub commands: Vec<CommandSpec>,
    pub setting_tabs: Vec<SettingTab>,
}

impl UiRegistry {
    pub fn command(&self, id: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ribbon_icons.is_empty() && self.commands.is_empty() && self.setting_tabs.is_empty()
    }

    pub fn clear(&mut self) {
        self.ribbon_icons.clear();
        self.commands.clear();
        self.setting_tabs.clear();
    }
}

impl UiSurface for UiRegistry {
    fn add_ribbon_icon(&mut self, icon: RibbonIcon) {
        self.ribbon_icons.push(icon);
    }

    fn add_command(&mut self, command: CommandSpec) {
        self.commands.push(command);
    }

    fn add_setting_tab(&mut self, tab: SettingTab) {
        self.setting_tabs.push(tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkey_display() {
        let hk = Hotkey {
            modifiers: vec![Modifier::Mod, Modifier::Shift],
            key: "n".into(),
        };
        assert_eq!(hk.to_string(), "Mod+Shift+N");
    }

    #[test]
    fn registry_records_and_finds_commands() {
        let mut ui = UiRegistry::default();
        assert!(ui.is_empty());
        ui.add_command(CommandSpec {
            id: "a",
            name: "A",
            hotkeys: vec![],
        });
        assert_eq!(ui.command("a").map(|c| c.name), Some("A"));
        assert!(ui.command("b").is_none());
        ui.clear();
        assert!(ui.is_empty());
    }
}
