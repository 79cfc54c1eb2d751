//! Extension lifecycle: load settings, register UI entry points, dispatch.

use std::sync::Arc;

use crate::error::HostError;
use crate::host::{
    CommandSpec, Hotkey, Modifier, Notifier, RibbonIcon, SettingTab, SettingsPersistence, Storage,
    UiSurface, Workspace,
};
use crate::orchestrator::{self, CreateOutcome};
use crate::settings::{merge_with_defaults, Settings, SettingsEffect};
use crate::settings_tab::{SettingsPanel, SETTINGS_HEADING};

pub const CREATE_COMMAND_ID: &str = "create-quick-note";
pub const CREATE_HOTKEY_COMMAND_ID: &str = "create-quick-note-hotkey";
pub const RIBBON_ICON: &str = "file-plus";

/// Every collaborator the extension talks to.
#[derive(Clone)]
pub struct Host {
    pub storage: Arc<dyn Storage>,
    pub workspace: Arc<dyn Workspace>,
    pub notifier: Arc<dyn Notifier>,
    pub persistence: Arc<dyn SettingsPersistence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Stopped,
    Running,
}

pub struct Extension {
    host: Host,
    settings: Settings,
    lifecycle: Lifecycle,
}

impl Extension {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            settings: Settings::default(),
            lifecycle: Lifecycle::Stopped,
        }
    }

    /// Load settings and register the icon, commands and settings tab.
    ///
    /// Unreadable persisted settings are logged and replaced by defaults.
    pub fn start(&mut self, ui: &mut dyn UiSurface) {
        let persisted = match self.host.persistence.load_data() {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load settings; using defaults");
                None
            }
        };
        self.settings = merge_with_defaults(persisted);

        ui.add_ribbon_icon(RibbonIcon {
            icon: RIBBON_ICON,
            title: "Create Quick Note",
            command_id: CREATE_COMMAND_ID,
        });
        ui.add_command(CommandSpec {
            id: CREATE_COMMAND_ID,
            name: "Create Quick Note",
            hotkeys: vec![],
        });
        ui.add_command(CommandSpec {
            id: CREATE_HOTKEY_COMMAND_ID,
            name: "Create Quick Note (Hotkey)",
            hotkeys: vec![Hotkey {
                modifiers: vec![Modifier::Mod, Modifier::Shift],
                key: "n".into(),
            }],
        });
        ui.add_setting_tab(SettingTab {
            title: SETTINGS_HEADING,
        });

        self.lifecycle = Lifecycle::Running;
        tracing::debug!(target_folder = %self.settings.target_folder, "extension started");
    }

    /// Stop dispatching commands. Registrations are owned by the host.
    pub fn stop(&mut self) {
        self.lifecycle = Lifecycle::Stopped;
        tracing::debug!("extension stopped");
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch a registered command. `None` if the id is unknown or the
    /// extension is stopped.
    pub fn run_command(&self, id: &str) -> Option<CreateOutcome> {
        if self.lifecycle != Lifecycle::Running {
            tracing::debug!(command = id, "ignoring command while stopped");
            return None;
        }
        match id {
            CREATE_COMMAND_ID | CREATE_HOTKEY_COMMAND_ID => Some(self.create_quick_note()),
            _ => None,
        }
    }

    pub fn create_quick_note(&self) -> CreateOutcome {
        orchestrator::create_quick_note(
            &self.settings,
            self.host.storage.as_ref(),
            self.host.workspace.as_ref(),
            self.host.notifier.as_ref(),
        )
    }

    /// Current panel contents, with a fresh folder listing.
    pub fn settings_panel(&self) -> Result<SettingsPanel, HostError> {
        let folders = self.host.storage.folders()?;
        Ok(SettingsPanel::build(&self.settings, &folders))
    }

    /// Dropdown change handler: update settings and persist immediately.
    pub fn set_target_folder(&mut self, value: &str) -> Result<(), HostError> {
        let (next, effect) = self.settings.on_change(value);
        self.settings = next;
        if let SettingsEffect::Persist(settings) = effect {
            let blob = serde_json::to_value(&settings)?;
            self.host.persistence.save_data(&blob)?;
            tracing::info!(target_folder = %settings.target_folder, "saved settings");
        }
        Ok(())
    }
}
