//! In-memory storage adapter.
//!
//! Implements both [`ConfigPort`] and [`StoragePort`] on top of a shared
//! `HashMap`.  This stands in for the host's saved-state bundle: it
//! survives the app's core being torn down and rebuilt inside one OS
//! process, and nothing more.  It never touches disk.
//!
//! [`StorageSnapshotStore`] turns one namespace/key slot of any
//! [`StoragePort`] into the [`SnapshotPort`] the service asks for.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info};

use crate::app::ports::{ConfigError, ConfigPort, SnapshotPort, StorageError, StoragePort};
use crate::config::AppConfig;

const CONFIG_NAMESPACE: &str = "adoptme";
const CONFIG_KEY: &str = "appcfg";

/// NVS-style limit on namespace and key length.
const MAX_KEY_LEN: usize = 15;

/// Shared in-memory key-value map.
///
/// Clones share the same backing map, so a clone handed to a new
/// `AppService` sees what the previous one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    store: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        debug!("MemoryStorage: new backing map");
        Self::default()
    }

    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{}::{}", namespace, key)
    }

    /// Number of stored keys across all namespaces.
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }
}

fn validate_slot_name(name: &str, field: &'static str) -> Result<(), ConfigError> {
    if name.is_empty() || name.len() > MAX_KEY_LEN {
        return Err(ConfigError::ValidationFailed(field));
    }
    Ok(())
}

fn validate_config(cfg: &AppConfig) -> Result<(), ConfigError> {
    validate_slot_name(&cfg.snapshot_namespace, "snapshot_namespace must be 1-15 bytes")?;
    validate_slot_name(&cfg.snapshot_key, "snapshot_key must be 1-15 bytes")?;
    if cfg.default_filter.is_empty() {
        return Err(ConfigError::ValidationFailed(
            "default_filter must select at least one species",
        ));
    }
    Ok(())
}

impl ConfigPort for MemoryStorage {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        if let Some(bytes) = self.store.borrow().get(&key) {
            let cfg: AppConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
            info!("MemoryStorage: loaded config from store");
            Ok(cfg)
        } else {
            info!("MemoryStorage: no stored config, using defaults");
            Ok(AppConfig::default())
        }
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        validate_config(config)?;
        let key = Self::composite_key(CONFIG_NAMESPACE, CONFIG_KEY);
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;
        self.store.borrow_mut().insert(key, bytes);
        info!("MemoryStorage: config saved");
        Ok(())
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, namespace: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        let composite = Self::composite_key(namespace, key);
        self.store
            .borrow()
            .get(&composite)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let composite = Self::composite_key(namespace, key);
        self.store.borrow_mut().insert(composite, data.to_vec());
        Ok(())
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        let composite = Self::composite_key(namespace, key);
        self.store.borrow_mut().remove(&composite);
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> bool {
        let composite = Self::composite_key(namespace, key);
        self.store.borrow().contains_key(&composite)
    }
}

// ── Snapshot slot ───────────────────────────────────────────────

/// One namespace/key slot of a [`StoragePort`], exposed as a
/// [`SnapshotPort`].
#[derive(Debug, Clone)]
pub struct StorageSnapshotStore<S> {
    storage: S,
    namespace: String,
    key: String,
}

impl<S: StoragePort> StorageSnapshotStore<S> {
    pub fn new(storage: S, namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Slot named by `config.snapshot_namespace` / `config.snapshot_key`.
    pub fn for_config(storage: S, config: &AppConfig) -> Self {
        Self::new(storage, &config.snapshot_namespace, &config.snapshot_key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: StoragePort> SnapshotPort for StorageSnapshotStore<S> {
    fn save(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.storage.write(&self.namespace, &self.key, bytes)?;
        debug!(
            "snapshot saved to {}::{} ({} bytes)",
            self.namespace,
            self.key,
            bytes.len()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match self.storage.read(&self.namespace, &self.key) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(StorageError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.delete(&self.namespace, &self.key)
    }
}
