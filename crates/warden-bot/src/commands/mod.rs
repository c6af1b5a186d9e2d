//! Slash commands
//!
//! Authorization happens in two layers: the platform enforces the
//! default-member-permission gates declared on each command, and the
//! handlers re-check role hierarchy before acting on a member. Only after
//! both pass does anything reach the engine or the executor.

mod moderation;
mod setup;
mod warnings;

pub use moderation::{ban, clear, kick, timeout, unban};
pub use setup::setup;
pub use warnings::{clearwarnings, warn, warnings};

use poise::serenity_prelude as serenity;

use warden_core::{DomainError, GuildId, DEFAULT_REASON};

use crate::convert::core_guild;
use crate::{Context, Error};

/// Community the command was invoked in
///
/// Every command here is `guild_only`, so this only fails if the platform
/// delivers an interaction it promised not to.
pub(crate) fn invocation_guild(ctx: &Context<'_>) -> Result<GuildId, Error> {
    ctx.guild_id()
        .map(core_guild)
        .ok_or_else(|| DomainError::Platform("guild-only command invoked outside a guild".into()).into())
}

/// Enforce the role hierarchy: the invoker must outrank the target, unless
/// the invoker owns the community
pub(crate) async fn ensure_hierarchy(
    ctx: &Context<'_>,
    target: &serenity::Member,
) -> Result<(), Error> {
    let actor = ctx
        .author_member()
        .await
        .ok_or_else(|| DomainError::Platform("could not resolve the invoking member".into()))?;

    let guild = ctx
        .guild()
        .ok_or_else(|| DomainError::Platform("community not in cache".into()))?;

    if guild.owner_id == actor.user.id {
        return Ok(());
    }

    let outranks = match (guild.member_highest_role(&actor), guild.member_highest_role(target)) {
        (Some(actor_role), Some(target_role)) => actor_role.position > target_role.position,
        (Some(_), None) => true,
        (None, _) => false,
    };

    if outranks {
        Ok(())
    } else {
        Err(DomainError::RoleHierarchy.into())
    }
}

/// Reason text for embeds and platform audit-log fields
pub(crate) fn display_reason(reason: Option<&str>) -> &str {
    match reason.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => DEFAULT_REASON,
    }
}

/// The red embed every moderation notice uses
pub(crate) fn action_embed(title: &str, description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description.into())
        .colour(serenity::Colour::RED)
}
