//! Platform implementation of the moderation-action executor
//!
//! Thin translation layer: domain identifiers in, SDK calls out. Platform
//! 403s become `DomainError::MissingPermission` so the command layer can
//! phrase them; everything else is an opaque platform fault.

use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::instrument;

use warden_core::{
    CollaboratorResult, DomainError, GuildId, ModerationExecutor, TimeoutDuration, UserId,
};

use crate::convert::{gateway_guild, gateway_user};

/// Executor backed by the gateway HTTP client
pub struct GatewayModerationExecutor {
    http: Arc<serenity::Http>,
}

impl GatewayModerationExecutor {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ModerationExecutor for GatewayModerationExecutor {
    #[instrument(skip(self, reason))]
    async fn timeout(
        &self,
        guild: GuildId,
        subject: UserId,
        duration: TimeoutDuration,
        reason: &str,
    ) -> CollaboratorResult<()> {
        let until = duration.expires_at(chrono::Utc::now());
        let until = serenity::Timestamp::from_unix_timestamp(until.timestamp())
            .map_err(|e| DomainError::Platform(e.to_string()))?;

        gateway_guild(guild)
            .edit_member(
                &self.http,
                gateway_user(subject),
                serenity::EditMember::new()
                    .disable_communication_until_datetime(until)
                    .audit_log_reason(reason),
            )
            .await
            .map_err(map_platform_error)?;
        Ok(())
    }

    #[instrument(skip(self, reason))]
    async fn kick(&self, guild: GuildId, subject: UserId, reason: &str) -> CollaboratorResult<()> {
        gateway_guild(guild)
            .kick_with_reason(&self.http, gateway_user(subject), reason)
            .await
            .map_err(map_platform_error)
    }

    #[instrument(skip(self, reason))]
    async fn ban(
        &self,
        guild: GuildId,
        subject: UserId,
        delete_message_days: u8,
        reason: &str,
    ) -> CollaboratorResult<()> {
        // The platform rejects deletion windows beyond 7 days.
        let delete_message_days = delete_message_days.min(7);
        gateway_guild(guild)
            .ban_with_reason(&self.http, gateway_user(subject), delete_message_days, reason)
            .await
            .map_err(map_platform_error)
    }

    #[instrument(skip(self))]
    async fn unban(&self, guild: GuildId, subject: UserId) -> CollaboratorResult<()> {
        gateway_guild(guild)
            .unban(&self.http, gateway_user(subject))
            .await
            .map_err(map_platform_error)
    }

    #[instrument(skip(self))]
    async fn is_banned(&self, guild: GuildId, subject: UserId) -> CollaboratorResult<bool> {
        let bans = gateway_guild(guild)
            .bans(&self.http, None, None)
            .await
            .map_err(map_platform_error)?;
        let subject = gateway_user(subject);
        Ok(bans.iter().any(|ban| ban.user.id == subject))
    }
}

fn map_platform_error(err: serenity::Error) -> DomainError {
    if let serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(resp)) = &err {
        if resp.status_code.as_u16() == 403 {
            return DomainError::MissingPermission(
                "the bot lacks the permission for this action".to_string(),
            );
        }
    }
    DomainError::Platform(err.to_string())
}
