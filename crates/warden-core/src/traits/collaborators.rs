//! Collaborator traits (ports) - define the interface to the platform
//!
//! The warning engine is a pure decision function over persisted state: it
//! returns a triggered action as data and never touches the platform itself.
//! These traits are what the command layer uses to carry the decision out,
//! and the gateway crate provides the implementations.

use async_trait::async_trait;

use crate::entities::EscalationAction;
use crate::error::DomainError;
use crate::value_objects::{ChannelId, GuildId, TimeoutDuration, UserId};

/// Result type for collaborator operations
pub type CollaboratorResult<T> = Result<T, DomainError>;

/// What a moderation action was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditTarget {
    User(UserId),
    Channel(ChannelId),
}

impl AuditTarget {
    /// Platform mention markup for the target
    pub fn mention(&self) -> String {
        match self {
            Self::User(id) => format!("<@{id}>"),
            Self::Channel(id) => format!("<#{id}>"),
        }
    }
}

/// A structured audit record delivered to a community's log channel
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub action: String,
    pub target: AuditTarget,
    pub moderator: UserId,
    pub reason: String,
    pub duration: Option<TimeoutDuration>,
}

impl AuditEntry {
    pub fn new(
        action: impl Into<String>,
        target: AuditTarget,
        moderator: UserId,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            target,
            moderator,
            reason: reason.into(),
            duration: None,
        }
    }

    /// Attach a duration (timeouts only)
    pub fn with_duration(mut self, duration: TimeoutDuration) -> Self {
        self.duration = Some(duration);
        self
    }
}

// ============================================================================
// Moderation-action executor
// ============================================================================

/// Performs platform-side moderation actions
#[async_trait]
pub trait ModerationExecutor: Send + Sync {
    /// Time the subject out for `duration`
    async fn timeout(
        &self,
        guild: GuildId,
        subject: UserId,
        duration: TimeoutDuration,
        reason: &str,
    ) -> CollaboratorResult<()>;

    /// Remove the subject from the community
    async fn kick(&self, guild: GuildId, subject: UserId, reason: &str) -> CollaboratorResult<()>;

    /// Ban the subject, deleting up to `delete_message_days` days of messages
    async fn ban(
        &self,
        guild: GuildId,
        subject: UserId,
        delete_message_days: u8,
        reason: &str,
    ) -> CollaboratorResult<()>;

    /// Lift a ban
    async fn unban(&self, guild: GuildId, subject: UserId) -> CollaboratorResult<()>;

    /// Whether the subject is currently banned
    async fn is_banned(&self, guild: GuildId, subject: UserId) -> CollaboratorResult<bool>;

    /// Carry out an escalation decision returned by the warning engine
    ///
    /// The timeout escalation uses the fixed one-hour duration; bans delete
    /// no message history.
    async fn execute(
        &self,
        action: EscalationAction,
        guild: GuildId,
        subject: UserId,
        reason: &str,
    ) -> CollaboratorResult<()> {
        match action {
            EscalationAction::Timeout => {
                self.timeout(guild, subject, TimeoutDuration::HOUR, reason).await
            }
            EscalationAction::Kick => self.kick(guild, subject, reason).await,
            EscalationAction::Ban => self.ban(guild, subject, 0, reason).await,
        }
    }
}

// ============================================================================
// Audit logger
// ============================================================================

/// Delivers audit entries to a community's configured log channel
///
/// Implementations do nothing when the community has no log channel (or the
/// channel is gone); a missing audit trail never fails the action itself.
#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn log(&self, guild: GuildId, entry: AuditEntry) -> CollaboratorResult<()>;
}
