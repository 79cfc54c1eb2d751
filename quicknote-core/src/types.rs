//! Domain types for quick-note creation.
//!
//! Vault paths are `/`-separated strings relative to the vault root, with no
//! leading or trailing separator. Host collaborators translate them to real
//! filesystem paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used in vault paths regardless of platform.
pub const SEPARATOR: char = '/';

/// Extension given to every created note.
pub const NOTE_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A folder path inside the vault.
///
/// Always normalized: leading and trailing separators are stripped and
/// repeated separators collapse. Whitespace is part of folder names and is
/// kept. The empty path means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FolderPath(String);

impl FolderPath {
    /// Normalize a raw folder string.
    pub fn new(raw: &str) -> Self {
        let segments: Vec<&str> = raw
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        Self(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when no folder is configured.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of path segments (`"A/B"` → 2).
    pub fn depth(&self) -> usize {
        self.0.split(SEPARATOR).count()
    }

    /// Vault path of a direct child named `name`.
    pub fn child(&self, name: &str) -> String {
        format!("{}{SEPARATOR}{name}", self.0)
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FolderPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for FolderPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<FolderPath> for String {
    fn from(p: FolderPath) -> Self {
        p.0
    }
}

/// A positive note number; the created file is `<n>.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceNumber(pub u64);

impl SequenceNumber {
    /// `"<n>.md"`, no leading zeros.
    pub fn file_name(&self) -> String {
        format!("{}.{NOTE_EXTENSION}", self.0)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// What a vault path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// A file as reported by the host's enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// Full vault path, e.g. `"Inbox/3 ideas.md"`.
    pub path: String,
    /// File name without its last extension, e.g. `"3 ideas"`.
    pub basename: String,
}

impl FolderEntry {
    /// Build an entry from a vault path, deriving the basename.
    ///
    /// Only the last extension is stripped: `"10.5.md"` → `"10.5"`.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit(SEPARATOR).next().unwrap_or(&path);
        let basename = match name.rfind('.') {
            Some(dot) if dot > 0 => &name[..dot],
            _ => name,
        }
        .to_owned();
        Self { path, basename }
    }

    /// Final path segment including extension.
    pub fn name(&self) -> &str {
        self.path.rsplit(SEPARATOR).next().unwrap_or(&self.path)
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        self.path.split(SEPARATOR).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
