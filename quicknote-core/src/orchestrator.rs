//! Quick-note creation sequence.
//!
//! 1. Validate that a target folder is configured.
//! 2. Ensure the folder exists.
//! 3. Enumerate the vault (always fresh).
//! 4. Resolve the next number among direct children.
//! 5. Create `<folder>/<n>.md` with empty content.
//! 6. Open it in a new tab.
//! 7. Confirm to the user.
//!
//! Steps 2–6 share one error boundary: any host failure is logged and
//! reported with a generic message. Nothing is rolled back.

use crate::error::{CreateError, HostError};
use crate::host::{Notifier, Storage, Workspace};
use crate::sequence::resolve_next;
use crate::settings::Settings;
use crate::types::{FolderPath, SequenceNumber};

pub const MSG_FOLDER_UNSET: &str = "Please set a target folder in settings";
pub const MSG_CREATE_FAILED: &str = "Error creating note. Check console for details.";

/// A note that was created and opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedNote {
    /// Vault path, e.g. `"Inbox/8.md"`.
    pub path: String,
    pub number: SequenceNumber,
}

/// Result of one creation request, after messages have been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(CreatedNote),
    NotConfigured,
    Failed,
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

/// Create folder `folder` unless something already exists at that path.
///
/// Losing a creation race to another actor is not an error.
pub fn ensure_folder(storage: &dyn Storage, folder: &FolderPath) -> Result<(), HostError> {
    if storage.entry(folder.as_str())?.is_some() {
        return Ok(());
    }
    match storage.create_folder(folder.as_str()) {
        Ok(()) => {
            tracing::info!(folder = %folder, "created target folder");
            Ok(())
        }
        Err(HostError::AlreadyExists { .. }) => {
            tracing::debug!(folder = %folder, "target folder appeared concurrently");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Run the creation sequence without any user messaging.
pub fn try_create(
    settings: &Settings,
    storage: &dyn Storage,
    workspace: &dyn Workspace,
) -> Result<CreatedNote, CreateError> {
    let folder = &settings.target_folder;
    if folder.is_unset() {
        return Err(CreateError::FolderUnset);
    }

    ensure_folder(storage, folder)?;

    let files = storage.files()?;
    tracing::debug!(folder = %folder, files = files.len(), "enumerated vault");

    let number = resolve_next(&files, folder, folder.depth());
    let path = folder.child(&number.file_name());
    tracing::debug!(path = %path, number = number.0, "resolved next note");

    let file = storage.create_file(&path, "")?;
    workspace.open_in_new_tab(&file)?;

    tracing::info!(path = %path, "created quick note");
    Ok(CreatedNote { path, number })
}

/// Create the next numbered note and report the result to the user.
///
/// Never fails: errors end up in the log and as a notification.
pub fn create_quick_note(
    settings: &Settings,
    storage: &dyn Storage,
    workspace: &dyn Workspace,
    notifier: &dyn Notifier,
) -> CreateOutcome {
    match try_create(settings, storage, workspace) {
        Ok(note) => {
            notifier.notify(&format!("Created: {}", note.number.file_name()));
            CreateOutcome::Created(note)
        }
        Err(CreateError::FolderUnset) => {
            notifier.notify(MSG_FOLDER_UNSET);
            CreateOutcome::NotConfigured
        }
        Err(CreateError::Host(err)) => {
            tracing::error!(
                error = %err,
                folder = %settings.target_folder,
                "error creating note"
            );
            notifier.notify(MSG_CREATE_FAILED);
            CreateOutcome::Failed
        }
    }
}
