//! Account command - `/acceder`.
//!
//! Resolves the typed or scanned customer ID and makes it the caller's session subject.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, format_failure, reply_private},
        core::identity,
        errors::{Error, Result},
    };

    /// Accede a tu cuenta de lealtad con tu ID de cliente.
    ///
    /// A failed lookup leaves any existing session untouched.
    #[poise::command(slash_command)]
    pub async fn acceder(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Tu ID de cliente (o el número de tu QR)"] id: String,
    ) -> Result<()> {
        let data = ctx.data();

        match identity::resolve_customer(&data.database, &id).await {
            Ok(customer) => {
                let greeting = identity::format_greeting(&customer);
                data.sessions
                    .authenticate(ctx.author().id.get(), customer)
                    .await;
                reply_private(ctx, format!("✅ {greeting}")).await?;
            }
            Err(e) => {
                reply_private(ctx, format_failure(&e, e.is_warning())).await?;
            }
        }

        Ok(())
    }
}

pub use inner::*;
