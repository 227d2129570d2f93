//! General Discord commands - ping and help.
//! These commands don't touch the database or require a session.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Explica cómo funciona el programa de lealtad.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ayuda(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let program = &ctx.data().program;
        let help_text = format!(
            "**☕ Bienvenido a {}: Tu Programa de Lealtad**\n\
            {}\n\n\
            **Comandos**\n\
            • `/acceder <id>` - Accede a tu cuenta con tu ID de cliente.\n\
            • `/actualizar [campos]` - Actualiza tus datos y gana 10 puntos.\n\
            • `/perfil` - Tu perfil, promociones e historial de visitas.\n\
            • `/simular [visitas]` - Proyecta tus puntos tras tus próximas visitas.\n\
            • `/sugerencia <texto>` - Propón algo para el menú.\n\
            • `/ping` - Comprueba que el bot responde.",
            program.program_name, program.welcome
        );

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
