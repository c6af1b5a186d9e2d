//! File-backed configuration store
//!
//! The store holds the whole document in memory and rewrites the backing file
//! in full on `save()`. Mutators never persist by themselves: callers batch
//! mutations and invoke `save()` at the call site, so the at-rest document is
//! always a complete, consistent snapshot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use warden_core::{
    ChannelId, ConfigDocument, GuildId, ThresholdTable, UserId, WarningRecord,
};

use crate::error::StoreError;

/// Owner of the persisted configuration document
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    document: ConfigDocument,
}

impl ConfigStore {
    /// Load the document at `path`, or create and immediately persist the
    /// default document if none exists
    ///
    /// # Errors
    /// - [`StoreError::Corrupt`] if a document exists but cannot be parsed
    ///   into the expected shape
    /// - [`StoreError::Read`] / [`StoreError::Write`] on I/O failure
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        match fs::read_to_string(&path) {
            Ok(raw) => {
                let document = serde_json::from_str(&raw)
                    .map_err(|source| StoreError::Corrupt { path: path.clone(), source })?;
                debug!(path = %path.display(), "config document loaded");
                Ok(Self { path, document })
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let store = Self { path, document: ConfigDocument::default() };
                // First run: make the default document durable right away so
                // a restart before any mutation sees the same state.
                store.save()?;
                info!(path = %store.path.display(), "created default config document");
                Ok(store)
            }
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    /// Persist the full in-memory document
    ///
    /// The file is replaced atomically (temp file + rename): a concurrent
    /// `load()` observes either the previous document or the new one, never a
    /// partial write.
    pub fn save(&self) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(&self.document).map_err(StoreError::Encode)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;
        fs::rename(&tmp_path, &self.path)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), "config document saved");
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full in-memory document
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    // ========================================================================
    // Log channel mapping
    // ========================================================================

    /// Audit-log channel for a community, if one was set up
    pub fn log_channel(&self, guild: GuildId) -> Option<ChannelId> {
        self.document.log_channels.get(&guild).copied()
    }

    /// Set the audit-log channel for a community. Does not persist.
    pub fn set_log_channel(&mut self, guild: GuildId, channel: ChannelId) {
        self.document.log_channels.insert(guild, channel);
    }

    // ========================================================================
    // Thresholds
    // ========================================================================

    /// The escalation schedule (load-only; no mutator is exposed)
    pub fn thresholds(&self) -> &ThresholdTable {
        &self.document.warn_thresholds
    }

    // ========================================================================
    // Warning ledger
    // ========================================================================

    /// Append a warning for (guild, subject) and return the new count.
    /// Does not persist.
    pub fn append_warning(
        &mut self,
        guild: GuildId,
        subject: UserId,
        record: WarningRecord,
    ) -> usize {
        self.document.warnings.append(guild, subject, record)
    }

    /// The warning history for (guild, subject), oldest first
    pub fn warnings(&self, guild: GuildId, subject: UserId) -> &[WarningRecord] {
        self.document.warnings.list(guild, subject)
    }

    /// Clear the warning history for (guild, subject), returning how many
    /// records were removed. Does not persist.
    pub fn clear_warnings(&mut self, guild: GuildId, subject: UserId) -> usize {
        self.document.warnings.clear(guild, subject)
    }
}
