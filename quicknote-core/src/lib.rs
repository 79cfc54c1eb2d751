//! Quick-note core library. Numbering, settings, host interfaces, extension.
//!
//! - [`types`]: vault paths, entries, sequence numbers
//! - [`sequence`]: next-number resolution
//! - [`settings`] / [`settings_tab`]: configuration and its panel model
//! - [`host`]: collaborator traits the extension depends on
//! - [`orchestrator`]: the creation sequence and its error boundary
//! - [`extension`]: lifecycle, registration, command dispatch

pub mod error;
pub mod extension;
pub mod host;
pub mod orchestrator;
pub mod sequence;
pub mod settings;
pub mod settings_tab;
pub mod types;

pub use error::{CreateError, HostError};
pub use extension::{Extension, Host, Lifecycle};
pub use orchestrator::{create_quick_note, CreateOutcome, CreatedNote};
pub use sequence::resolve_next;
pub use settings::{merge_with_defaults, Settings, SettingsEffect};
pub use settings_tab::SettingsPanel;
pub use types::{EntryKind, FolderEntry, FolderPath, SequenceNumber};
