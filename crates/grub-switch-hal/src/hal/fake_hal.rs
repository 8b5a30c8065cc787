//! Fake HAL implementation for testing.
//!
//! This implementation keeps an in-memory file table and records all operations
//! without executing them, allowing for CI-safe testing without root privileges
//! or a real GRUB install.

use super::{FsOps, ProcessOps};
use crate::{HalError, HalResult};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Operation records for testing and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Command { program: String, args: Vec<String> },
    Read { path: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
}

/// Shared state for FakeHal operations.
#[derive(Debug, Clone, Default)]
struct FakeHalState {
    /// All operations that were recorded
    operations: Vec<Operation>,
    /// In-memory files, keyed by absolute path
    files: BTreeMap<PathBuf, String>,
    /// Paths reported as not writable
    read_only: HashSet<PathBuf>,
    root: bool,
    deny_commands: bool,
    fail_renames: bool,
}

/// Fake HAL implementation that records operations without executing them.
///
/// Clones share state, so a test can hand one clone to the workflow and
/// inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct FakeHal {
    state: Arc<Mutex<FakeHalState>>,
}

impl FakeHal {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeHalState::default())),
        }
    }

    /// Add (or replace) an in-memory file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.into(), content.to_string());
        self
    }

    /// Pretend the process already runs as root.
    pub fn as_root(self) -> Self {
        self.state.lock().unwrap().root = true;
        self
    }

    /// Every external command exits with status 1 (e.g. `sudo -v` refused).
    pub fn deny_commands(self) -> Self {
        self.state.lock().unwrap().deny_commands = true;
        self
    }

    /// Every rename fails with `PermissionDenied` and leaves the files untouched.
    pub fn fail_renames(self) -> Self {
        self.state.lock().unwrap().fail_renames = true;
        self
    }

    pub fn read_only(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().read_only.insert(path.into());
        self
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<Operation> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Check if a specific operation was recorded.
    pub fn has_operation(&self, check: impl Fn(&Operation) -> bool) -> bool {
        self.state.lock().unwrap().operations.iter().any(check)
    }

    /// Paths of all in-memory files, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().files.keys().cloned().collect()
    }

    fn record_operation(&self, op: Operation) {
        self.state.lock().unwrap().operations.push(op);
    }
}

impl ProcessOps for FakeHal {
    fn is_root(&self) -> bool {
        self.state.lock().unwrap().root
    }

    fn interactive_status(&self, program: &str, args: &[&str]) -> HalResult<()> {
        log::info!("FAKE HAL: exec {} {}", program, args.join(" "));
        self.record_operation(Operation::Command {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        });
        if self.state.lock().unwrap().deny_commands {
            return Err(HalError::CommandFailed {
                program: program.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

impl FsOps for FakeHal {
    fn read_to_string(&self, path: &Path) -> HalResult<String> {
        self.record_operation(Operation::Read {
            path: path.to_path_buf(),
        });
        self.state
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| HalError::Io(io::Error::from(io::ErrorKind::NotFound)))
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        !self.state.lock().unwrap().read_only.contains(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> HalResult<()> {
        log::info!("FAKE HAL: rename {} -> {}", from.display(), to.display());
        self.record_operation(Operation::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });

        let mut state = self.state.lock().unwrap();
        if state.fail_renames {
            return Err(HalError::PermissionDenied);
        }
        let content = state
            .files
            .remove(from)
            .ok_or_else(|| HalError::Io(io::Error::from(io::ErrorKind::NotFound)))?;
        state.files.insert(to.to_path_buf(), content);
        Ok(())
    }
}
