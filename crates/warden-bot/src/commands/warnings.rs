//! Progressive-discipline commands: warn, warnings, clearwarnings
//!
//! `/warn` is the only command that reaches the escalation engine. The engine
//! decides; this layer carries the decision out through the executor and
//! reports it. An escalation that the platform refuses (missing permission,
//! subject already gone) is reported to the channel but the warning itself
//! stays recorded.

use poise::serenity_prelude as serenity;
use serenity::Mentionable;

use warden_core::{AuditEntry, AuditTarget, EscalationAction, TimeoutDuration};

use crate::commands::{action_embed, display_reason, ensure_hierarchy, invocation_guild};
use crate::convert::core_user;
use crate::{Context, Error};

/// Warn a user
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS"
)]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The member to warn"] user: serenity::Member,
    #[description = "Reason for the warning"] reason: Option<String>,
) -> Result<(), Error> {
    ensure_hierarchy(&ctx, &user).await?;

    let guild = invocation_guild(&ctx)?;
    let subject = core_user(user.user.id);
    let moderator = core_user(ctx.author().id);
    let reason_text = display_reason(reason.as_deref());

    let outcome = ctx
        .data()
        .engine
        .record_warning(guild, subject, moderator, reason.as_deref())?;

    ctx.send(
        poise::CreateReply::default().embed(
            action_embed(
                "User Warned",
                format!("{} has been warned.", user.user.id.mention()),
            )
            .field("Reason", reason_text, true)
            .field("Warning Count", outcome.new_count.to_string(), true),
        ),
    )
    .await?;

    ctx.data()
        .audit
        .log(
            guild,
            AuditEntry::new("Warning", AuditTarget::User(subject), moderator, reason_text),
        )
        .await?;

    let Some(action) = outcome.triggered else {
        return Ok(());
    };

    let auto_reason = format!(
        "Automatic {} after {} warnings",
        action.as_str(),
        outcome.new_count
    );

    match ctx.data().executor.execute(action, guild, subject, &auto_reason).await {
        Ok(()) => {
            let description = match action {
                EscalationAction::Timeout => format!(
                    "{} has been automatically timed out for 1 hour after receiving {} warnings.",
                    user.user.id.mention(),
                    outcome.new_count
                ),
                EscalationAction::Kick => format!(
                    "{} has been automatically kicked after receiving {} warnings.",
                    user.user.id.mention(),
                    outcome.new_count
                ),
                EscalationAction::Ban => format!(
                    "{} has been automatically banned after receiving {} warnings.",
                    user.user.id.mention(),
                    outcome.new_count
                ),
            };

            ctx.channel_id()
                .send_message(
                    ctx.http(),
                    serenity::CreateMessage::new()
                        .embed(action_embed("Automatic Action", description)),
                )
                .await?;

            let bot_user = core_user(ctx.framework().bot_id);
            let mut entry = AuditEntry::new(
                format!("Auto-{}", action.label()),
                AuditTarget::User(subject),
                bot_user,
                auto_reason.as_str(),
            );
            if action == EscalationAction::Timeout {
                entry = entry.with_duration(TimeoutDuration::HOUR);
            }
            ctx.data().audit.log(guild, entry).await?;
        }
        Err(err) => {
            tracing::warn!(
                guild = %guild,
                subject = %subject,
                action = action.as_str(),
                error = %err,
                "automatic escalation failed"
            );
            ctx.channel_id()
                .say(
                    ctx.http(),
                    format!("Failed to {} {}: {}", action.as_str(), user.user.id.mention(), err),
                )
                .await?;
        }
    }

    Ok(())
}

/// View warnings for a user
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS"
)]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The member whose warnings to view"] user: serenity::Member,
) -> Result<(), Error> {
    let guild = invocation_guild(&ctx)?;
    let subject = core_user(user.user.id);

    let history = ctx.data().engine.warnings(guild, subject);

    if history.is_empty() {
        ctx.send(
            poise::CreateReply::default()
                .embed(action_embed(
                    "No Warnings",
                    format!("{} has no warnings.", user.user.id.mention()),
                ))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let mut embed = action_embed(
        &format!("Warnings for {}", user.user.name),
        format!("{} has {} warning(s).", user.user.id.mention(), history.len()),
    );

    // Embeds cap out at 25 fields.
    for (index, warning) in history.iter().take(25).enumerate() {
        embed = embed.field(
            format!("Warning {}", index + 1),
            format!(
                "**Reason:** {}\n**Moderator:** <@{}>\n**Date:** {}",
                warning.reason,
                warning.moderator,
                warning.timestamp.format("%Y-%m-%d %H:%M:%S")
            ),
            false,
        );
    }

    ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Clear warnings for a user
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn clearwarnings(
    ctx: Context<'_>,
    #[description = "The member whose warnings to clear"] user: serenity::Member,
) -> Result<(), Error> {
    let guild = invocation_guild(&ctx)?;
    let subject = core_user(user.user.id);

    let removed = ctx.data().engine.clear_warnings(guild, subject);

    if removed == 0 {
        ctx.send(
            poise::CreateReply::default()
                .embed(action_embed(
                    "No Warnings",
                    format!("{} has no warnings to clear.", user.user.id.mention()),
                ))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    ctx.data().engine.persist()?;

    ctx.send(poise::CreateReply::default().embed(action_embed(
        "Warnings Cleared",
        format!("Cleared {} warning(s) for {}.", removed, user.user.id.mention()),
    )))
    .await?;

    ctx.data()
        .audit
        .log(
            guild,
            AuditEntry::new(
                "Clear Warnings",
                AuditTarget::User(subject),
                core_user(ctx.author().id),
                format!("Cleared {removed} warnings"),
            ),
        )
        .await?;

    Ok(())
}
