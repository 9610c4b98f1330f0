// src/common/storage.rs

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::RwLock,
};

use crate::common::error::AppError;

/// Key under which the admin bearer token is persisted.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

/// Where the admin bearer token lives between runs.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

// --- File-backed key/value store ---
// A flat JSON object on disk, read and written whole on every call.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // A file that is not a JSON object reads as empty and is replaced on the next write.
    fn read_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable {}: {}", self.path.display(), e);
                    Ok(BTreeMap::new())
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        match self.get_item(ADMIN_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        self.set_item(ADMIN_TOKEN_KEY, token)
    }

    fn clear(&self) -> Result<(), AppError> {
        self.remove_item(ADMIN_TOKEN_KEY)
    }
}

/// Token store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
        Ok(())
    }
}
