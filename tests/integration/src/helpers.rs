//! Test fixtures

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::TempDir;

use warden_service::WarningEngine;
use warden_store::ConfigStore;

/// Path of the config document inside a test directory
pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.json")
}

/// A freshly loaded store in its own temp directory
pub fn fresh_store() -> (TempDir, ConfigStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = ConfigStore::load(config_path(&dir)).expect("load default store");
    (dir, store)
}

/// An engine over a freshly loaded store in its own temp directory
pub fn fresh_engine() -> (TempDir, WarningEngine) {
    let (dir, store) = fresh_store();
    (dir, WarningEngine::new(Arc::new(Mutex::new(store))))
}

/// An engine over the document at `path` (for restart scenarios)
pub fn engine_at(path: impl AsRef<Path>) -> WarningEngine {
    let store = ConfigStore::load(path.as_ref().to_path_buf()).expect("load store");
    WarningEngine::new(Arc::new(Mutex::new(store)))
}
