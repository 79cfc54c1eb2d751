//! Model of the settings panel the host renders.

use crate::settings::Settings;
use crate::types::FolderPath;

pub const SETTINGS_HEADING: &str = "Quick Note Creator Settings";
pub const TARGET_FOLDER_NAME: &str = "Target Folder";
pub const TARGET_FOLDER_DESC: &str = "Folder where numbered notes will be created";

/// The two static lines shown under the dropdown.
pub const PANEL_NOTES: [&str; 2] = [
    "Note: Files will be created as numbered files (1.md, 2.md, 3.md, etc.) and opened in new tabs with cursor positioned in the header.",
    "You can assign a custom hotkey to \"Create Quick Note (Hotkey)\" in your editor's hotkey settings. Default is Cmd/Ctrl + Shift + N.",
];

/// One dropdown entry. The blank entry (`value == ""`) means "unset".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    pub heading: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<DropdownOption>,
    /// Currently persisted value; may name a folder that no longer exists.
    pub selected: String,
    pub notes: [&'static str; 2],
}

impl SettingsPanel {
    /// Build the panel from current settings and the host's folder listing.
    ///
    /// Folders are sorted whatever order the host lists them in.
    pub fn build(settings: &Settings, folders: &[FolderPath]) -> Self {
        let mut sorted: Vec<&FolderPath> = folders.iter().filter(|f| !f.is_unset()).collect();
        sorted.sort();
        sorted.dedup();

        let blank = DropdownOption {
            value: String::new(),
            label: String::new(),
        };
        let options = std::iter::once(blank)
            .chain(sorted.into_iter().map(|folder| DropdownOption {
                value: folder.to_string(),
                label: folder.to_string(),
            }))
            .collect();

        Self {
            heading: SETTINGS_HEADING,
            name: TARGET_FOLDER_NAME,
            description: TARGET_FOLDER_DESC,
            options,
            selected: settings.target_folder.to_string(),
            notes: PANEL_NOTES,
        }
    }

    /// `true` if the dropdown offers `value` (after normalization).
    pub fn offers(&self, value: &str) -> bool {
        let value = FolderPath::new(value);
        self.options.iter().any(|o| o.value == value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folders(names: &[&str]) -> Vec<FolderPath> {
        names.iter().map(|n| FolderPath::from(*n)).collect()
    }

    #[test]
    fn blank_option_comes_first_then_sorted_folders() {
        let panel = SettingsPanel::build(
            &Settings::default(),
            &folders(&["Inbox", "Archive", "Notes/Daily", "Notes"]),
        );
        assert_eq!(panel.options[0].value, "");
        let values: Vec<&str> = panel.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "Archive", "Inbox", "Notes", "Notes/Daily"]);
    }

    #[test]
    fn duplicate_and_root_folders_are_skipped() {
        let panel = SettingsPanel::build(&Settings::default(), &folders(&["/", "Inbox", "Inbox/"]));
        assert_eq!(panel.options.len(), 2);
    }

    #[test]
    fn selected_reflects_settings() {
        let panel = SettingsPanel::build(&Settings::with_target_folder("Gone"), &folders(&["Inbox"]));
        assert_eq!(panel.selected, "Gone");
        assert!(!panel.offers("Gone"));
        assert!(panel.offers("Inbox/"));
        assert!(panel.offers(""));
    }

    #[test]
    fn static_text_is_present() {
        let panel = SettingsPanel::build(&Settings::default(), &[]);
        assert_eq!(panel.heading, "Quick Note Creator Settings");
        assert!(panel.notes[0].contains("1.md, 2.md, 3.md"));
        assert!(panel.notes[1].contains("Shift + N"));
    }
}
