//! Conversions between platform SDK identifiers and domain identifiers
//!
//! The SDK uses unsigned snowflakes, the domain signed ones (the persisted
//! document stores them as JSON integers). Snowflakes fit either way.

use poise::serenity_prelude as serenity;

use warden_core::{ChannelId, GuildId, UserId};

pub(crate) fn core_guild(id: serenity::GuildId) -> GuildId {
    GuildId::new(id.get() as i64)
}

pub(crate) fn core_user(id: serenity::UserId) -> UserId {
    UserId::new(id.get() as i64)
}

pub(crate) fn core_channel(id: serenity::ChannelId) -> ChannelId {
    ChannelId::new(id.get() as i64)
}

pub(crate) fn gateway_guild(id: GuildId) -> serenity::GuildId {
    serenity::GuildId::new(id.into_inner() as u64)
}

pub(crate) fn gateway_user(id: UserId) -> serenity::UserId {
    serenity::UserId::new(id.into_inner() as u64)
}

pub(crate) fn gateway_channel(id: ChannelId) -> serenity::ChannelId {
    serenity::ChannelId::new(id.into_inner() as u64)
}
