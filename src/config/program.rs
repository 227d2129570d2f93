//! Program settings loaded from `config.toml`.
//!
//! The file is optional: a missing file yields [`ProgramConfig::default`], while a file
//! that exists but cannot be parsed is a configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Shop-facing settings for the bot
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProgramConfig {
    /// Name shown in embeds and the help text
    pub program_name: String,
    /// Intro line shown by `/ayuda`
    pub welcome: String,
    /// Guild for instant command registration during development; global when absent
    pub dev_guild_id: Option<u64>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            program_name: "Café Integral".to_string(),
            welcome: "Accede con tu ID o QR, actualiza tus datos y descubre promociones \
                      exclusivas. Gana puntos con cada visita."
                .to_string(),
            dev_guild_id: None,
        }
    }
}

/// Loads program settings from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProgramConfig> {
    let path = path.as_ref();
    debug!("Loading program configuration from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })
}

/// Loads settings from `path`, or the defaults when the file does not exist.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<ProgramConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        info!("{} not found, using default program settings", path.display());
        Ok(ProgramConfig::default())
    }
}
