//! Durable key/value backends for the session record.
//!
//! The session store only ever touches one fixed key, but the backend is a
//! general string map so tests can swap in [`MemoryKeyValueStore`].

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

/// A string-to-string store that survives process restarts.
pub trait KeyValueStore {
    /// Read a value. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Remove a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backend cannot be modified.
    fn remove(&mut self, key: &str) -> Result<(), AuthError>;
}

// ---------------------------------------------------------------------------
// MemoryKeyValueStore
// ---------------------------------------------------------------------------

/// Process-local backend. Nothing survives a restart unless the same value
/// is handed to the next store.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileKeyValueStore
// ---------------------------------------------------------------------------

/// One file per key: `<dir>/<key>.json`.
///
/// On unix the directory is created `0700` and files are written `0600`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AuthError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AuthError::Storage(format!("invalid key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::Storage(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Storage(format!("read {}: {e}", path.display()))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AuthError> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;
        fs::write(&path, value)
            .map_err(|e| AuthError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::Storage(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AuthError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Storage(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}
