//! Direct moderation commands: ban, unban, kick, timeout, clear

use poise::serenity_prelude as serenity;
use serenity::Mentionable;

use warden_core::{AuditEntry, AuditTarget, DomainError, TimeoutDuration, UserId};

use crate::commands::{action_embed, display_reason, ensure_hierarchy, invocation_guild};
use crate::convert::core_user;
use crate::{Context, Error};

/// Bulk deletion only reaches messages younger than this
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

/// Ban a user from the server
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "BAN_MEMBERS"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The member to ban"] user: serenity::Member,
    #[description = "Reason for the ban"] reason: Option<String>,
    #[description = "Days of messages to delete (0-7)"]
    #[min = 0]
    #[max = 7]
    delete_days: Option<u8>,
) -> Result<(), Error> {
    ensure_hierarchy(&ctx, &user).await?;

    let guild = invocation_guild(&ctx)?;
    let subject = core_user(user.user.id);
    let reason = display_reason(reason.as_deref());

    ctx.data()
        .executor
        .ban(guild, subject, delete_days.unwrap_or(0), reason)
        .await?;

    ctx.send(
        poise::CreateReply::default()
            .embed(
                action_embed(
                    "User Banned",
                    format!("{} has been banned from the server.", user.user.id.mention()),
                )
                .field("Reason", reason, false),
            ),
    )
    .await?;

    ctx.data()
        .audit
        .log(
            guild,
            AuditEntry::new("Ban", AuditTarget::User(subject), core_user(ctx.author().id), reason),
        )
        .await?;

    Ok(())
}

/// Unban a user from the server
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "BAN_MEMBERS"
)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "ID of the banned user"] user_id: String,
    #[description = "Reason for the unban"] reason: Option<String>,
) -> Result<(), Error> {
    let subject: UserId = user_id
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidUserId(user_id.clone()))?;

    let guild = invocation_guild(&ctx)?;
    let reason = display_reason(reason.as_deref());

    if !ctx.data().executor.is_banned(guild, subject).await? {
        return Err(DomainError::NotBanned(subject).into());
    }

    ctx.data().executor.unban(guild, subject).await?;

    ctx.send(
        poise::CreateReply::default()
            .embed(
                action_embed(
                    "User Unbanned",
                    format!("User with ID {subject} has been unbanned from the server."),
                )
                .field("Reason", reason, false),
            ),
    )
    .await?;

    ctx.data()
        .audit
        .log(
            guild,
            AuditEntry::new(
                "Unban",
                AuditTarget::User(subject),
                core_user(ctx.author().id),
                reason,
            ),
        )
        .await?;

    Ok(())
}

/// Kick a user from the server
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The member to kick"] user: serenity::Member,
    #[description = "Reason for the kick"] reason: Option<String>,
) -> Result<(), Error> {
    ensure_hierarchy(&ctx, &user).await?;

    let guild = invocation_guild(&ctx)?;
    let subject = core_user(user.user.id);
    let reason = display_reason(reason.as_deref());

    ctx.data().executor.kick(guild, subject, reason).await?;

    ctx.send(
        poise::CreateReply::default()
            .embed(
                action_embed(
                    "User Kicked",
                    format!("{} has been kicked from the server.", user.user.id.mention()),
                )
                .field("Reason", reason, false),
            ),
    )
    .await?;

    ctx.data()
        .audit
        .log(
            guild,
            AuditEntry::new("Kick", AuditTarget::User(subject), core_user(ctx.author().id), reason),
        )
        .await?;

    Ok(())
}

/// Timeout a user for a specified duration
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MODERATE_MEMBERS"
)]
pub async fn timeout(
    ctx: Context<'_>,
    #[description = "The member to timeout"] user: serenity::Member,
    #[description = "Duration such as 30s, 5m, 2h, 1d"] duration: String,
    #[description = "Reason for the timeout"] reason: Option<String>,
) -> Result<(), Error> {
    ensure_hierarchy(&ctx, &user).await?;

    let requested = TimeoutDuration::parse(&duration).map_err(DomainError::from)?;
    let (effective, clamped) = requested.clamp_to_max();

    let guild = invocation_guild(&ctx)?;
    let subject = core_user(user.user.id);
    let reason = display_reason(reason.as_deref());

    ctx.data()
        .executor
        .timeout(guild, subject, effective, reason)
        .await?;

    if clamped {
        ctx.send(
            poise::CreateReply::default()
                .content("Duration exceeded maximum of 28 days. Setting timeout to 28 days.")
                .ephemeral(true),
        )
        .await?;
    }

    ctx.send(
        poise::CreateReply::default().embed(
            action_embed(
                "User Timed Out",
                format!("{} has been timed out.", user.user.id.mention()),
            )
            .field("Duration", effective.to_string(), true)
            .field("Reason", reason, true),
        ),
    )
    .await?;

    ctx.data()
        .audit
        .log(
            guild,
            AuditEntry::new(
                "Timeout",
                AuditTarget::User(subject),
                core_user(ctx.author().id),
                reason,
            )
            .with_duration(effective),
        )
        .await?;

    Ok(())
}

/// Clear a specified number of messages
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Number of messages to check for deletion (1-100)"]
    #[min = 1]
    #[max = 100]
    amount: u8,
    #[description = "Only delete messages from this member"] user: Option<serenity::Member>,
) -> Result<(), Error> {
    if amount == 0 || amount > 100 {
        return Err(DomainError::InvalidMessageCount { max: 100 }.into());
    }

    // Deletion can take a moment; acknowledge before the interaction expires.
    ctx.defer_ephemeral().await?;

    let guild = invocation_guild(&ctx)?;
    let channel_id = ctx.channel_id();
    let cutoff =
        (chrono::Utc::now() - chrono::Duration::days(BULK_DELETE_MAX_AGE_DAYS)).timestamp();

    let messages = channel_id
        .messages(ctx.http(), serenity::GetMessages::new().limit(amount))
        .await?;

    let target_id = user.as_ref().map(|member| member.user.id);
    let ids: Vec<serenity::MessageId> = messages
        .iter()
        .filter(|message| message.timestamp.unix_timestamp() > cutoff)
        .filter(|message| target_id.is_none_or(|id| message.author.id == id))
        .map(|message| message.id)
        .collect();

    let deleted = ids.len();
    match deleted {
        0 => {}
        1 => channel_id.delete_message(ctx.http(), ids[0]).await?,
        _ => channel_id.delete_messages(ctx.http(), ids).await?,
    }

    let (description, entry) = if let Some(member) = &user {
        let subject = core_user(member.user.id);
        (
            format!("Deleted {} messages from {}.", deleted, member.user.id.mention()),
            AuditEntry::new(
                "Clear",
                AuditTarget::User(subject),
                core_user(ctx.author().id),
                format!("Cleared {} messages from {}", deleted, member.user.name),
            ),
        )
    } else {
        let channel_name = ctx
            .guild()
            .and_then(|g| g.channels.get(&channel_id).map(|c| c.name.clone()))
            .unwrap_or_else(|| channel_id.to_string());
        (
            format!("Deleted {deleted} messages."),
            AuditEntry::new(
                "Clear",
                AuditTarget::Channel(crate::convert::core_channel(channel_id)),
                core_user(ctx.author().id),
                format!("Cleared {deleted} messages from {channel_name}"),
            ),
        )
    };

    ctx.send(
        poise::CreateReply::default()
            .embed(action_embed("Messages Cleared", description))
            .ephemeral(true),
    )
    .await?;

    ctx.data().audit.log(guild, entry).await?;

    Ok(())
}
