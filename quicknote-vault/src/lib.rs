//! # quicknote-vault
//!
//! Filesystem host for the quick-note extension: a directory-backed
//! [`FsVault`] implementing the storage collaborator and a
//! [`JsonSettingsStore`] that persists the settings blob inside the vault.

pub mod paths;
pub mod settings_store;
pub mod vault;

pub use paths::vault_root;
pub use settings_store::JsonSettingsStore;
pub use vault::FsVault;
