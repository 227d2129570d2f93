//! Discord command implementations organized by area.

#![allow(clippy::too_long_first_doc_paragraph)]

/// `/acceder`
pub mod account;

/// `/perfil`, `/simular`, `/sugerencia`
pub mod dashboard;

/// `/ping`, `/ayuda`
pub mod general;

/// `/actualizar`
pub mod profile;

pub use account::*;
pub use dashboard::*;
pub use general::*;
pub use profile::*;

use crate::{bot::BotData, errors::Error};

/// Every command registered with the framework.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        acceder(),
        actualizar(),
        perfil(),
        simular(),
        sugerencia(),
        ayuda(),
        ping(),
    ]
}
