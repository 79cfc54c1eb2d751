//! Extension settings: defaults, merge on load, and change handling.
//!
//! The persisted blob is a JSON object with a single meaningful key,
//! `targetFolder`. Unknown keys are carried through untouched so a full
//! overwrite on save never drops them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::FolderPath;

/// Persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Folder where numbered notes are created; empty means unset.
    pub target_folder: FolderPath,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Side effect requested by a settings change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEffect {
    /// Overwrite the persisted blob with these settings.
    Persist(Settings),
    /// Nothing changed.
    None,
}

impl Settings {
    /// Settings with the given target folder and no extra keys.
    pub fn with_target_folder(folder: impl Into<FolderPath>) -> Self {
        Self {
            target_folder: folder.into(),
            extra: Map::new(),
        }
    }

    /// Handle a new target-folder value from the settings UI.
    pub fn on_change(&self, target_folder: &str) -> (Settings, SettingsEffect) {
        let folder = FolderPath::new(target_folder);
        if folder == self.target_folder {
            return (self.clone(), SettingsEffect::None);
        }
        let next = Settings {
            target_folder: folder,
            extra: self.extra.clone(),
        };
        (next.clone(), SettingsEffect::Persist(next))
    }
}

/// Overlay a persisted blob on the defaults.
///
/// Keys present in `persisted` win. A missing blob, a non-object blob, or a
/// blob whose `targetFolder` has the wrong type yields the defaults.
pub fn merge_with_defaults(persisted: Option<Value>) -> Settings {
    let defaults = Settings::default();
    let Some(Value::Object(persisted)) = persisted else {
        return defaults;
    };

    let mut merged = match serde_json::to_value(&defaults) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    merged.extend(persisted);

    match serde_json::from_value(Value::Object(merged)) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed settings; using defaults");
            defaults
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
