//! Dashboard commands - `/perfil`, `/simular` and `/sugerencia`.
//!
//! All three require an authenticated session and read the subject from it.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, format_failure, reply_private, require_subject},
        core::{
            dashboard::{self, DEFAULT_SIMULATED_VISITS},
            feedback,
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    /// Rows of history shown in the embed; field values are capped by Discord.
    const HISTORY_ROWS: usize = 15;

    /// Muestra tu perfil, promociones y visitas.
    #[poise::command(slash_command)]
    pub async fn perfil(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let Some(subject) = require_subject(ctx).await? else {
            return Ok(());
        };
        let data = ctx.data();

        let summary = match dashboard::load_dashboard(&data.database, subject.id).await {
            Ok(summary) => summary,
            Err(e) => {
                reply_private(ctx, format_failure(&e, e.is_warning())).await?;
                return Ok(());
            }
        };

        let offers = summary
            .segment
            .offer()
            .map_or_else(|| "Sin promociones por ahora.".to_string(), |o| format!("• {o}"));

        let mut history = dashboard::format_sales_history(
            &summary.sales[..summary.sales.len().min(HISTORY_ROWS)],
        )?;
        if summary.sales.len() > HISTORY_ROWS {
            write!(
                &mut history,
                "… y {} visitas más",
                summary.sales.len() - HISTORY_ROWS
            )?;
        }

        let mut embed = serenity::CreateEmbed::default()
            .title("🎯 Tu Perfil y Recompensas")
            .description(format!("**Tu perfil:** {}", summary.segment.description()))
            .color(0x006F_4E37) // Coffee brown
            .field(
                "Visitas registradas",
                summary.stats.visits.to_string(),
                true,
            )
            .field(
                "Ticket promedio",
                dashboard::format_currency(summary.stats.average_ticket),
                true,
            )
            .field("Puntos actuales", subject.loyalty_points.to_string(), true)
            .field("🎁 Promociones para Ti", offers, false);

        if let Ok(projection) =
            dashboard::project_points(subject.loyalty_points, DEFAULT_SIMULATED_VISITS)
        {
            embed = embed.field(
                format!(
                    "🔮 Simulador ({} visitas, usa /simular para cambiarlo)",
                    projection.visits
                ),
                dashboard::format_projection(&projection),
                false,
            );
        }

        let embed = embed
            .field("📅 Historial de Visitas", format!("```\n{history}\n```"), false)
            .footer(serenity::CreateEmbedFooter::new(format!(
                "{} | Cliente {}",
                data.program.program_name, subject.id
            )));

        ctx.send(poise::CreateReply::default().embed(embed).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Simula cuántos puntos tendrás tras tus próximas visitas.
    #[poise::command(slash_command)]
    pub async fn simular(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "¿Cuántas veces planeas visitarnos este mes? (0 a 10)"]
        #[min = 0]
        #[max = 10]
        visitas: Option<u8>,
    ) -> Result<()> {
        let Some(subject) = require_subject(ctx).await? else {
            return Ok(());
        };

        let visits = visitas.unwrap_or(DEFAULT_SIMULATED_VISITS);
        let reply = match dashboard::project_points(subject.loyalty_points, visits) {
            Ok(projection) => format!(
                "🔮 **Simulador de Recompensas**\n{}",
                dashboard::format_projection(&projection)
            ),
            Err(e) => format_failure(&e, e.is_warning()),
        };

        reply_private(ctx, reply).await
    }

    /// Cuéntanos qué te gustaría ver en el menú.
    #[poise::command(slash_command)]
    pub async fn sugerencia(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Escribe tu sugerencia aquí"] texto: String,
    ) -> Result<()> {
        let Some(subject) = require_subject(ctx).await? else {
            return Ok(());
        };
        let today = chrono::Local::now().date_naive();

        let reply =
            match feedback::submit_suggestion(&ctx.data().database, subject.id, &texto, today)
                .await
            {
                Ok(()) => feedback::FEEDBACK_CONFIRMATION.to_string(),
                Err(e) => format_failure(&e, e.is_warning()),
            };

        reply_private(ctx, reply).await
    }
}

pub use inner::*;
