use std::path::{Path, PathBuf};

use quicknote_core::HostError;

pub const SETTINGS_DIR: &str = ".quicknote";
pub const SETTINGS_FILE: &str = "data.json";

/// `<vault>/.quicknote`
pub fn settings_dir(root: &Path) -> PathBuf {
    root.join(SETTINGS_DIR)
}

/// `<vault>/.quicknote/data.json`
pub fn settings_path(root: &Path) -> PathBuf {
    settings_dir(root).join(SETTINGS_FILE)
}

/// Resolve the vault root: the explicit directory if given, else the
/// current directory. The result is canonical.
pub fn vault_root(explicit: Option<&Path>) -> Result<PathBuf, HostError> {
    let raw = match explicit {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().map_err(|e| HostError::io(".", e))?,
    };
    let root = raw.canonicalize().map_err(|e| HostError::io(&raw, e))?;
    if !root.is_dir() {
        return Err(HostError::Other(format!(
            "vault root is not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_path_is_inside_hidden_dir() {
        let path = settings_path(Path::new("/vault"));
        assert!(path.ends_with(".quicknote/data.json"));
    }

    #[test]
    fn explicit_root_is_canonicalized() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("notes");
        std::fs::create_dir(&nested).unwrap();
        let root = vault_root(Some(&nested.join("..").join("notes"))).expect("root");
        assert_eq!(root, nested.canonicalize().unwrap());
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = vault_root(Some(&dir.path().join("absent"))).unwrap_err();
        assert!(matches!(err, HostError::Io { .. }));
    }

    #[test]
    fn file_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(vault_root(Some(&file)), Err(HostError::Other(_))));
    }
}
