//! Community setup

use poise::serenity_prelude as serenity;
use serenity::Mentionable;
use tracing::info;

use crate::commands::{action_embed, invocation_guild};
use crate::convert::core_channel;
use crate::{Context, Error};

/// Set up the moderation bot for this server
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn setup(
    ctx: Context<'_>,
    #[description = "Channel to receive moderation logs"] log_channel: serenity::GuildChannel,
) -> Result<(), Error> {
    let guild = invocation_guild(&ctx)?;
    let channel = core_channel(log_channel.id);

    {
        let mut store = ctx.data().store.lock();
        store.set_log_channel(guild, channel);
        store.save()?;
    }

    info!(guild = %guild, channel = %channel, "log channel configured");

    ctx.send(
        poise::CreateReply::default().embed(action_embed(
            "Setup Complete",
            format!("Moderation logs will be sent to {}", log_channel.id.mention()),
        )),
    )
    .await?;

    Ok(())
}
