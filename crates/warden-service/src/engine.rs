//! Warning escalation engine
//!
//! Per (community, subject) the state is nothing but the warning count; the
//! transitions are +1 (record) and reset-to-zero (clear). Threshold
//! evaluation is a side read of the +1 transition. The engine returns any
//! triggered action as data and never calls the platform itself, which keeps
//! it testable without a gateway connection.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, instrument};

use warden_core::{EscalationAction, GuildId, UserId, WarningRecord};
use warden_store::ConfigStore;

use crate::error::ServiceResult;

/// The configuration document is a shared mutable resource: one coarse lock
/// serializes every read-modify-write against it. The document is small and
/// mutation is human-moderator-driven, so finer-grained locking buys nothing.
pub type SharedConfigStore = Arc<Mutex<ConfigStore>>;

/// Outcome of recording one warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningOutcome {
    /// Ledger length after the append
    pub new_count: usize,
    /// Escalation configured for exactly `new_count`, if any
    pub triggered: Option<EscalationAction>,
}

/// Progressive-discipline engine over the shared configuration store
#[derive(Clone)]
pub struct WarningEngine {
    store: SharedConfigStore,
}

impl WarningEngine {
    /// Create an engine over an explicitly constructed store
    pub fn new(store: SharedConfigStore) -> Self {
        Self { store }
    }

    /// The underlying shared store
    pub fn store(&self) -> &SharedConfigStore {
        &self.store
    }

    /// Record a warning: normalize the reason, append, persist, and evaluate
    /// the threshold table for an exact count match
    ///
    /// Append and persist are one logical step under a single lock
    /// acquisition, so concurrent callers cannot lose updates. If the persist
    /// fails the in-memory append is not rolled back; the error is surfaced
    /// and the count may be ahead of what is durable.
    #[instrument(skip(self, reason))]
    pub fn record_warning(
        &self,
        guild: GuildId,
        subject: UserId,
        moderator: UserId,
        reason: Option<&str>,
    ) -> ServiceResult<WarningOutcome> {
        let record = WarningRecord::new(moderator, reason);

        let mut store = self.store.lock();
        let new_count = store.append_warning(guild, subject, record);
        store.save()?;
        let triggered = store.thresholds().action_for(new_count);
        drop(store);

        info!(
            guild = %guild,
            subject = %subject,
            moderator = %moderator,
            new_count,
            triggered = triggered.map(|a| a.as_str()),
            "warning recorded"
        );

        Ok(WarningOutcome { new_count, triggered })
    }

    /// The warning history for (guild, subject), oldest first
    pub fn warnings(&self, guild: GuildId, subject: UserId) -> Vec<WarningRecord> {
        self.store.lock().warnings(guild, subject).to_vec()
    }

    /// Clear the warning history for (guild, subject), returning the previous
    /// count. Does not persist; callers batch with other mutations and then
    /// call [`persist`](Self::persist).
    #[instrument(skip(self))]
    pub fn clear_warnings(&self, guild: GuildId, subject: UserId) -> usize {
        let removed = self.store.lock().clear_warnings(guild, subject);
        if removed > 0 {
            info!(guild = %guild, subject = %subject, removed, "warnings cleared");
        }
        removed
    }

    /// Persist the current document
    pub fn persist(&self) -> ServiceResult<()> {
        self.store.lock().save()?;
        Ok(())
    }
}
