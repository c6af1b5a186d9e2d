//! Platform implementation of the audit logger
//!
//! Delivers one red embed per moderation action to the community's
//! configured log channel. A community without a log channel, or whose
//! channel has since been deleted, gets no audit trail and no error.

use std::sync::Arc;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::{debug, warn};

use warden_core::{AuditEntry, AuditLogger, AuditTarget, CollaboratorResult, DomainError, GuildId};
use warden_service::SharedConfigStore;

use crate::convert::gateway_channel;

/// Audit logger backed by the gateway HTTP client and the shared store
pub struct ChannelAuditLogger {
    http: Arc<serenity::Http>,
    store: SharedConfigStore,
}

impl ChannelAuditLogger {
    pub fn new(http: Arc<serenity::Http>, store: SharedConfigStore) -> Self {
        Self { http, store }
    }
}

#[async_trait]
impl AuditLogger for ChannelAuditLogger {
    async fn log(&self, guild: GuildId, entry: AuditEntry) -> CollaboratorResult<()> {
        let Some(channel) = self.store.lock().log_channel(guild) else {
            debug!(guild = %guild, "no log channel configured, skipping audit entry");
            return Ok(());
        };

        let target_label = match entry.target {
            AuditTarget::User(_) => "User",
            AuditTarget::Channel(_) => "Target",
        };

        let mut embed = serenity::CreateEmbed::new()
            .title(format!("Moderation Action: {}", entry.action))
            .colour(serenity::Colour::RED)
            .timestamp(serenity::Timestamp::now())
            .field(target_label, entry.target.mention(), false)
            .field("Moderator", format!("<@{}>", entry.moderator), false)
            .field("Reason", entry.reason.clone(), false);

        if let Some(duration) = entry.duration {
            embed = embed.field("Duration", duration.to_string(), false);
        }

        if let AuditTarget::User(subject) = entry.target {
            embed = embed.footer(serenity::CreateEmbedFooter::new(format!("User ID: {subject}")));
        }

        let message = serenity::CreateMessage::new().embed(embed);
        match gateway_channel(channel).send_message(&self.http, message).await {
            Ok(_) => Ok(()),
            // The channel was deleted or the bot lost access: audit logging
            // degrades to a no-op, it never fails the action.
            Err(serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(resp)))
                if matches!(resp.status_code.as_u16(), 403 | 404) =>
            {
                warn!(guild = %guild, channel = %channel, "log channel unavailable, audit entry dropped");
                Ok(())
            }
            Err(err) => Err(DomainError::Platform(err.to_string())),
        }
    }
}
