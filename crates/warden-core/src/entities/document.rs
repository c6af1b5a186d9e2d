//! The persisted configuration document
//!
//! One document per process: log-channel mapping, threshold table, and the
//! full warning ledger. The document is rewritten in full on every persisting
//! mutation (last writer wins, single-process assumption).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{ThresholdTable, WarningRecord};
use crate::value_objects::{ChannelId, GuildId, UserId};

/// Per-community, per-subject warning history
///
/// Insertion order is chronological order. A subject's sequence is
/// append-only except for the explicit clear operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarningLedger(BTreeMap<GuildId, BTreeMap<UserId, Vec<WarningRecord>>>);

impl WarningLedger {
    /// Append a record for (guild, subject) and return the new count
    pub fn append(&mut self, guild: GuildId, subject: UserId, record: WarningRecord) -> usize {
        let sequence = self.0.entry(guild).or_default().entry(subject).or_default();
        sequence.push(record);
        sequence.len()
    }

    /// The records for (guild, subject), oldest first
    pub fn list(&self, guild: GuildId, subject: UserId) -> &[WarningRecord] {
        self.0
            .get(&guild)
            .and_then(|subjects| subjects.get(&subject))
            .map_or(&[], Vec::as_slice)
    }

    /// Current warning count for (guild, subject)
    pub fn count(&self, guild: GuildId, subject: UserId) -> usize {
        self.list(guild, subject).len()
    }

    /// Reset the sequence for (guild, subject) to empty, returning how many
    /// records were removed
    pub fn clear(&mut self, guild: GuildId, subject: UserId) -> usize {
        match self.0.get_mut(&guild).and_then(|subjects| subjects.get_mut(&subject)) {
            Some(sequence) => std::mem::take(sequence).len(),
            None => 0,
        }
    }
}

/// The aggregate persisted state
///
/// All three keys are required when a document exists on disk; a default
/// document is only ever fabricated when there is no document at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Community -> audit-log channel. Absent entry = logging disabled.
    pub log_channels: BTreeMap<GuildId, ChannelId>,
    /// Warning count -> automated action.
    pub warn_thresholds: ThresholdTable,
    /// Community -> subject -> warning history.
    pub warnings: WarningLedger,
}
