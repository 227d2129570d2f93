//! Bot layer - Discord interface for the loyalty desk.
//!
//! Slash commands translate Discord interactions into calls to [`crate::core`] and
//! render the results. Operation errors are turned into replies here; only framework
//! failures reach the framework error hook.

/// Discord command implementations (account, profile, dashboard, general)
pub mod commands;

use crate::{
    config::program::ProgramConfig,
    core::session::SessionStore,
    entities::customer,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use std::fmt::Display;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Database connection pool
    pub database: DatabaseConnection,
    /// Per-user sessions
    pub sessions: SessionStore,
    /// Shop-facing settings
    pub program: ProgramConfig,
}

impl BotData {
    /// Creates the shared context with empty sessions.
    #[must_use]
    pub fn new(database: DatabaseConnection, program: ProgramConfig) -> Self {
        Self {
            database,
            sessions: SessionStore::new(),
            program,
        }
    }
}

/// Sends a reply only the invoking user can see.
pub(crate) async fn reply_private(
    ctx: poise::Context<'_, BotData, Error>,
    content: impl Into<String>,
) -> Result<()> {
    ctx.send(
        poise::CreateReply::default()
            .content(content.into())
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Renders an operation failure with a warning or error marker.
pub(crate) fn format_failure(message: impl Display, is_warning: bool) -> String {
    if is_warning {
        format!("⚠️ {message}")
    } else {
        format!("❌ {message}")
    }
}

/// Returns the caller's session subject, or tells them to log in first.
pub(crate) async fn require_subject(
    ctx: poise::Context<'_, BotData, Error>,
) -> Result<Option<customer::Model>> {
    let subject = ctx.data().sessions.subject(ctx.author().id.get()).await;
    if subject.is_none() {
        reply_private(ctx, "⚠️ Accede primero con /acceder para ver tu perfil.").await?;
    }
    Ok(subject)
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx
                .say("❌ Ocurrió un error inesperado. Intenta de nuevo.")
                .await
            {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the poise framework and runs the client until it stops.
#[instrument(skip_all)]
pub async fn run_bot(
    token: String,
    program: ProgramConfig,
    database: DatabaseConnection,
) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = program.dev_guild_id {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                        .await?;
                    info!("Registered commands in guild {}", guild_id);
                } else {
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Registered commands globally");
                }
                Ok(BotData::new(database, program))
            })
        })
        .build();

    // Slash commands need no privileged intents.
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    info!("Starting bot client...");
    client.start().await.inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
