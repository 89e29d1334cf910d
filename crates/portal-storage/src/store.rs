//! Device-local key/value store
//!
//! The browser's storage can refuse reads and writes (quota, privacy mode),
//! so every operation returns a `Result`. Callers in this workspace swallow
//! the error, log it, and let the feature degrade silently.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("STORE/READ: {0}")]
    Read(String),

    #[error("STORE/WRITE: {0}")]
    Write(String),
}

/// Key/value persistence outside the page's memory
pub trait DeviceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store; the page-session stand-in for local storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DeviceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A store that refuses everything, like a browser in strict privacy mode
#[derive(Debug, Clone, Default)]
pub struct DeniedStore;

impl DeviceStore for DeniedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read(format!("access denied for {key}")))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write(format!("access denied for {key}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Write(format!("access denied for {key}")))
    }
}
