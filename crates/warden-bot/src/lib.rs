//! # warden-bot
//!
//! Gateway surface: connects to the messaging platform, registers the slash
//! commands, and implements the collaborator traits (moderation executor,
//! audit logger) the core decides against. All permission and role-hierarchy
//! checks happen here, before anything reaches the engine.

use std::sync::Arc;

use parking_lot::Mutex;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};

use warden_common::AppConfig;
use warden_core::{AuditLogger, ModerationExecutor};
use warden_service::{SharedConfigStore, WarningEngine};
use warden_store::ConfigStore;

pub mod audit;
pub mod commands;
mod convert;
mod error;
pub mod executor;

pub use error::BotError;

/// Shared state available to every command invocation
pub struct Data {
    pub store: SharedConfigStore,
    pub engine: WarningEngine,
    pub executor: Arc<dyn ModerationExecutor>,
    pub audit: Arc<dyn AuditLogger>,
}

pub type Error = BotError;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Connect to the gateway and serve commands until the process is stopped
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let store = ConfigStore::load(&config.storage.config_path)?;
    let shared: SharedConfigStore = Arc::new(Mutex::new(store));

    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let options = poise::FrameworkOptions {
        commands: vec![
            commands::setup(),
            commands::ban(),
            commands::unban(),
            commands::kick(),
            commands::timeout(),
            commands::clear(),
            commands::warn(),
            commands::warnings(),
            commands::clearwarnings(),
        ],
        on_error: |err| Box::pin(on_error(err)),
        pre_command: |ctx| {
            Box::pin(async move {
                debug!(command = %ctx.command().qualified_name, "executing command");
            })
        },
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    user = %ready.user.name,
                    commands = framework.options().commands.len(),
                    "gateway session ready, commands synced"
                );

                let http = ctx.http.clone();
                Ok(Data {
                    engine: WarningEngine::new(shared.clone()),
                    executor: Arc::new(executor::GatewayModerationExecutor::new(http.clone())),
                    audit: Arc::new(audit::ChannelAuditLogger::new(http, shared.clone())),
                    store: shared,
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.gateway.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

/// Central error handler: expected domain errors become the red error embed,
/// everything else is logged
async fn on_error(err: poise::FrameworkError<'_, Data, Error>) {
    match err {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            warn!(
                command = %ctx.command().qualified_name,
                error = %error,
                "command failed"
            );
            let embed = serenity::CreateEmbed::new()
                .title("Error")
                .description(error.user_message())
                .colour(serenity::Colour::RED);
            if let Err(e) = ctx
                .send(poise::CreateReply::default().embed(embed).ephemeral(true))
                .await
            {
                error!(error = %e, "failed to deliver error message");
            }
        }
        err => {
            if let Err(e) = poise::builtins::on_error(err).await {
                error!(error = %e, "error while handling error");
            }
        }
    }
}
