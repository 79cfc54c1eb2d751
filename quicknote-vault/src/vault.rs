//! Directory-backed [`Storage`].
//!
//! Vault paths map onto the root directory one segment at a time. Hidden
//! entries (leading `.`) are invisible, which keeps the settings directory
//! out of note listings. Symlinks are not followed. Paths through a hidden
//! or symlinked segment are rejected, so every folder `entry` reports is one
//! whose files the walk lists.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use quicknote_core::host::Storage;
use quicknote_core::types::SEPARATOR;
use quicknote_core::{EntryKind, FolderEntry, FolderPath, HostError};

#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Open a vault rooted at an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, HostError> {
        let root = root.into();
        let meta = fs::metadata(&root).map_err(|e| HostError::io(&root, e))?;
        if !meta.is_dir() {
            return Err(HostError::Other(format!(
                "vault root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path for a vault path, rejecting anything that could
    /// escape the root or that the walk would not list.
    pub fn resolve(&self, vault_path: &str) -> Result<PathBuf, HostError> {
        let invalid = |reason| HostError::InvalidPath {
            path: vault_path.to_owned(),
            reason,
        };
        if vault_path.is_empty() {
            return Err(invalid("empty path"));
        }
        if vault_path.starts_with(SEPARATOR) || Path::new(vault_path).is_absolute() {
            return Err(invalid("absolute paths are not allowed"));
        }
        let mut path = self.root.clone();
        for segment in vault_path.split(SEPARATOR) {
            match segment {
                "" => return Err(invalid("empty path segment")),
                "." | ".." => return Err(invalid("relative segments are not allowed")),
                s if s.contains('\\') => return Err(invalid("backslash in path segment")),
                s if s.starts_with('.') => return Err(invalid("hidden path segment")),
                s => path.push(s),
            }
            match fs::symlink_metadata(&path) {
                Ok(meta) if meta.file_type().is_symlink() => {
                    return Err(invalid("symlinks are not followed"))
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(HostError::io(&path, e)),
            }
        }
        Ok(path)
    }

    fn walk(
        &self,
        dir: &Path,
        prefix: &str,
        files: &mut Vec<FolderEntry>,
        folders: &mut Vec<FolderPath>,
    ) -> Result<(), HostError> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .map_err(|e| HostError::io(dir, e))?
            .filter_map(|e| e.ok())
            .collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            let vault_path = if prefix.is_empty() {
                name.to_owned()
            } else {
                format!("{prefix}{SEPARATOR}{name}")
            };
            let file_type = entry.file_type().map_err(|e| HostError::io(entry.path(), e))?;
            if file_type.is_dir() {
                folders.push(FolderPath::from(vault_path.as_str()));
                self.walk(&entry.path(), &vault_path, files, folders)?;
            } else if file_type.is_file() {
                files.push(FolderEntry::new(vault_path));
            }
        }
        Ok(())
    }

    fn scan(&self) -> Result<(Vec<FolderEntry>, Vec<FolderPath>), HostError> {
        let mut files = Vec::new();
        let mut folders = Vec::new();
        self.walk(&self.root, "", &mut files, &mut folders)?;
        Ok((files, folders))
    }
}

impl Storage for FsVault {
    fn files(&self) -> Result<Vec<FolderEntry>, HostError> {
        Ok(self.scan()?.0)
    }

    fn folders(&self) -> Result<Vec<FolderPath>, HostError> {
        let mut folders = self.scan()?.1;
        folders.sort();
        Ok(folders)
    }

    fn entry(&self, path: &str) -> Result<Option<EntryKind>, HostError> {
        let abs = self.resolve(path)?;
        match fs::metadata(&abs) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Folder)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HostError::io(abs, e)),
        }
    }

    fn create_folder(&self, path: &str) -> Result<(), HostError> {
        let abs = self.resolve(path)?;
        if abs.exists() {
            return Err(HostError::AlreadyExists { path: path.into() });
        }
        fs::create_dir_all(&abs).map_err(|e| HostError::io(&abs, e))?;
        tracing::debug!(path, "created folder");
        Ok(())
    }

    fn create_file(&self, path: &str, content: &str) -> Result<FolderEntry, HostError> {
        let abs = self.resolve(path)?;
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&abs) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(HostError::AlreadyExists { path: path.into() })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let parent = path.rsplit_once(SEPARATOR).map_or("", |(p, _)| p);
                return Err(HostError::NotFound {
                    path: parent.into(),
                });
            }
            Err(e) => return Err(HostError::io(abs, e)),
        };
        file.write_all(content.as_bytes())
            .map_err(|e| HostError::io(&abs, e))?;
        tracing::debug!(path, "created file");
        Ok(FolderEntry::new(path))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
