//! Recording fakes for the host collaborators.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

use quicknote_core::host::{Notifier, SettingsPersistence, Storage, Workspace};
use quicknote_core::{EntryKind, Extension, FolderEntry, FolderPath, Host, HostError};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct VaultState {
    files: BTreeSet<String>,
    unlisted: BTreeSet<String>,
    folders: BTreeSet<String>,
    created_folders: Vec<String>,
    created_files: Vec<(String, String)>,
}

/// Which storage call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    None,
    Files,
    CreateFolder,
    CreateFile,
    /// `entry` misses the folder but `create_folder` reports it already exists.
    FolderRace,
}

pub struct FakeStorage {
    state: Mutex<VaultState>,
    fault: Mutex<Fault>,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(VaultState::default()),
            fault: Mutex::new(Fault::None),
        }
    }

    /// Add files (and their parent folders) to the vault.
    pub fn with_files(self, paths: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for path in paths {
                let segments: Vec<&str> = path.split('/').collect();
                for i in 1..segments.len() {
                    state.folders.insert(segments[..i].join("/"));
                }
                state.files.insert((*path).to_string());
            }
        }
        self
    }

    /// A file that exists for `create_file` but is missing from `files()`.
    pub fn with_unlisted_file(self, path: &str) -> Self {
        self.state.lock().unwrap().unlisted.insert(path.to_string());
        self
    }

    pub fn with_folder(self, path: &str) -> Self {
        self.state.lock().unwrap().folders.insert(path.to_string());
        self
    }

    pub fn fail(&self, fault: Fault) {
        *self.fault.lock().unwrap() = fault;
    }

    pub fn created_files(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().created_files.clone()
    }

    pub fn created_folders(&self) -> Vec<String> {
        self.state.lock().unwrap().created_folders.clone()
    }

    pub fn has_folder(&self, path: &str) -> bool {
        self.state.lock().unwrap().folders.contains(path)
    }

    fn fault(&self) -> Fault {
        *self.fault.lock().unwrap()
    }
}

impl Storage for FakeStorage {
    fn files(&self) -> Result<Vec<FolderEntry>, HostError> {
        if self.fault() == Fault::Files {
            return Err(HostError::Other("listing unavailable".into()));
        }
        let state = self.state.lock().unwrap();
        Ok(state.files.iter().map(FolderEntry::new).collect())
    }

    fn folders(&self) -> Result<Vec<FolderPath>, HostError> {
        let state = self.state.lock().unwrap();
        Ok(state.folders.iter().map(|f| FolderPath::from(f.as_str())).collect())
    }

    fn entry(&self, path: &str) -> Result<Option<EntryKind>, HostError> {
        let state = self.state.lock().unwrap();
        if state.files.contains(path) {
            Ok(Some(EntryKind::File))
        } else if state.folders.contains(path) {
            Ok(Some(EntryKind::Folder))
        } else {
            Ok(None)
        }
    }

    fn create_folder(&self, path: &str) -> Result<(), HostError> {
        match self.fault() {
            Fault::CreateFolder => {
                return Err(HostError::io(
                    path,
                    io::Error::from(io::ErrorKind::PermissionDenied),
                ))
            }
            Fault::FolderRace => {
                self.state.lock().unwrap().folders.insert(path.to_string());
                return Err(HostError::AlreadyExists { path: path.into() });
            }
            _ => {}
        }
        let mut state = self.state.lock().unwrap();
        if !state.folders.insert(path.to_string()) {
            return Err(HostError::AlreadyExists { path: path.into() });
        }
        state.created_folders.push(path.to_string());
        Ok(())
    }

    fn create_file(&self, path: &str, content: &str) -> Result<FolderEntry, HostError> {
        if self.fault() == Fault::CreateFile {
            return Err(HostError::io(
                path,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        let mut state = self.state.lock().unwrap();
        if state.files.contains(path) || state.unlisted.contains(path) {
            return Err(HostError::AlreadyExists { path: path.into() });
        }
        state.files.insert(path.to_string());
        state
            .created_files
            .push((path.to_string(), content.to_string()));
        Ok(FolderEntry::new(path))
    }
}

// ---------------------------------------------------------------------------
// Workspace / notifier / persistence
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeWorkspace {
    opened: Mutex<Vec<String>>,
    pub fail: Mutex<bool>,
}

impl FakeWorkspace {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Workspace for FakeWorkspace {
    fn open_in_new_tab(&self, file: &FolderEntry) -> Result<(), HostError> {
        if *self.fail.lock().unwrap() {
            return Err(HostError::Other("no tab available".into()));
        }
        self.opened.lock().unwrap().push(file.path.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    messages: Mutex<Vec<String>>,
}

impl FakeNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct FakePersistence {
    pub stored: Mutex<Option<Value>>,
    pub saves: Mutex<usize>,
    pub fail_load: Mutex<bool>,
}

impl FakePersistence {
    pub fn with_data(data: Value) -> Self {
        Self {
            stored: Mutex::new(Some(data)),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<Value> {
        self.stored.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl SettingsPersistence for FakePersistence {
    fn load_data(&self) -> Result<Option<Value>, HostError> {
        if *self.fail_load.lock().unwrap() {
            return Err(HostError::Other("corrupt data.json".into()));
        }
        Ok(self.stored())
    }

    fn save_data(&self, data: &Value) -> Result<(), HostError> {
        *self.stored.lock().unwrap() = Some(data.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

pub struct Fixture {
    pub storage: Arc<FakeStorage>,
    pub workspace: Arc<FakeWorkspace>,
    pub notifier: Arc<FakeNotifier>,
    pub persistence: Arc<FakePersistence>,
}

impl Fixture {
    pub fn new(storage: FakeStorage, persistence: FakePersistence) -> Self {
        Self {
            storage: Arc::new(storage),
            workspace: Arc::new(FakeWorkspace::default()),
            notifier: Arc::new(FakeNotifier::default()),
            persistence: Arc::new(persistence),
        }
    }

    pub fn host(&self) -> Host {
        Host {
            storage: self.storage.clone(),
            workspace: self.workspace.clone(),
            notifier: self.notifier.clone(),
            persistence: self.persistence.clone(),
        }
    }

    pub fn extension(&self) -> Extension {
        Extension::new(self.host())
    }
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that writes every event into the returned buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}
