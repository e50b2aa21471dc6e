//! Discord bot setup and framework error handling.

use log::{debug, error, info, warn};
use poise::{
    CreateReply, Framework, FrameworkError, FrameworkOptions, builtins,
    serenity_prelude::{ClientBuilder, GatewayIntents},
};

use crate::analysis::analysis_commands;
use crate::config::Config;
use crate::dice::dice_commands;
use crate::error::{BotError, Result};

/// Shared, read-only state available to every command.
pub struct Data {
    history_limit: u8,
    max_dice: u32,
}

impl Data {
    /// Number of recent messages `/analyze` scans.
    pub fn history_limit(&self) -> u8 {
        self.history_limit
    }

    /// Largest dice count `/roll` accepts.
    pub fn max_dice(&self) -> u32 {
        self.max_dice
    }
}

/// All slash commands exposed by the bot.
fn all_commands() -> Vec<poise::Command<Data, BotError>> {
    let mut commands = dice_commands();
    commands.extend(analysis_commands());
    commands
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let Config {
        discord_token,
        history_limit,
        max_dice,
    } = config;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and connected to Discord");
                debug!("Registering commands globally");
                builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    "Registered {} commands successfully",
                    framework.options().commands.len()
                );
                Ok(Data {
                    history_limit,
                    max_dice,
                })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

/// Report command failures back to the invoking user.
async fn on_error(error: FrameworkError<'_, Data, BotError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            warn!(
                "Command '{}' from {} failed: {}",
                ctx.command().name,
                ctx.author().tag(),
                error
            );

            let reply = CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error reply: {e}");
            }
        }
        other => {
            if let Err(e) = builtins::on_error(other).await {
                error!("Error while handling framework error: {e}");
            }
        }
    }
}
