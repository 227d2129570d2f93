//! Profile command - `/actualizar`.
//!
//! Every option is optional: omitted fields keep the value currently on file, the same
//! way the original form was pre-filled. Each successful submission awards points.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, format_failure, reply_private, require_subject},
        core::{
            choices::{Preference, Sex},
            profile::{self, ProfileEdit},
        },
        errors::{Error, Result},
    };

    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum SexChoice {
        #[name = "Femenino"]
        Female,
        #[name = "Masculino"]
        Male,
        #[name = "Otro"]
        Other,
    }

    impl From<SexChoice> for Sex {
        fn from(choice: SexChoice) -> Self {
            match choice {
                SexChoice::Female => Self::Female,
                SexChoice::Male => Self::Male,
                SexChoice::Other => Self::Other,
            }
        }
    }

    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum PreferenceChoice {
        #[name = "Dulce"]
        Sweet,
        #[name = "Amargo"]
        Bitter,
        #[name = "Equilibrado"]
        Balanced,
    }

    impl From<PreferenceChoice> for Preference {
        fn from(choice: PreferenceChoice) -> Self {
            match choice {
                PreferenceChoice::Sweet => Self::Sweet,
                PreferenceChoice::Bitter => Self::Bitter,
                PreferenceChoice::Balanced => Self::Balanced,
            }
        }
    }

    /// Actualiza tus datos y gana 10 puntos.
    #[allow(clippy::too_many_arguments)] // One parameter per form field
    #[poise::command(slash_command)]
    pub async fn actualizar(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Nombre"] nombre: Option<String>,
        #[description = "Email"] email: Option<String>,
        #[description = "Teléfono"] telefono: Option<String>,
        #[description = "Dirección"] direccion: Option<String>,
        #[description = "Edad (18 a 100)"]
        #[min = 18]
        #[max = 100]
        edad: Option<u8>,
        #[description = "Sexo"] sexo: Option<SexChoice>,
        #[description = "Preferencia de sabor"] preferencia: Option<PreferenceChoice>,
    ) -> Result<()> {
        let Some(subject) = require_subject(ctx).await? else {
            return Ok(());
        };

        let mut edit = ProfileEdit::from_subject(&subject);
        if let Some(name) = nombre {
            edit.name = name;
        }
        if let Some(email) = email {
            edit.email = email;
        }
        if let Some(phone) = telefono {
            edit.phone = phone;
        }
        if let Some(address) = direccion {
            edit.address = address;
        }
        if let Some(age) = edad {
            edit.age = i32::from(age);
        }
        if let Some(sex) = sexo {
            edit.sex = sex.into();
        }
        if let Some(preference) = preferencia {
            edit.preference = preference.into();
        }

        let data = ctx.data();
        let today = chrono::Local::now().date_naive();

        match profile::update_profile(&data.database, &subject, &edit, today).await {
            Ok(snapshot) => {
                // Other updates may have landed since `subject` was read; the session
                // snapshot is the one that counts them.
                let points = data
                    .sessions
                    .apply_update(ctx.author().id.get(), subject.id, &edit, today)
                    .await
                    .map_or(snapshot.loyalty_points, |current| current.loyalty_points);
                reply_private(
                    ctx,
                    format!(
                        "✅ {} Ahora tienes {points} puntos.\nSexo: {} · Preferencia: {}",
                        profile::format_update_confirmation(),
                        edit.sex.label(),
                        edit.preference.label(),
                    ),
                )
                .await?;
            }
            Err(e) => {
                reply_private(ctx, format_failure(&e, e.is_warning())).await?;
            }
        }

        Ok(())
    }
}

pub use inner::*;
