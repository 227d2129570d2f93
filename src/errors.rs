//! Unified error types for the loyalty desk.
//!
//! [`Error`] covers infrastructure failures (configuration, database setup, Discord).
//! Each customer-facing operation has its own closed error enum whose `Display` output
//! is the message shown to the customer. Storage failures keep the underlying
//! [`DbErr`] as their source so it can be logged, but render a generic message.

use poise::serenity_prelude as serenity;
use sea_orm::DbErr;
use thiserror::Error;

/// Infrastructure-level errors propagated with `?` up to `main` or poise's error hook.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database connection or schema failure
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// I/O failure while reading local files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or invalid
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Failure while building a reply string
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework failure
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<serenity::Error>),
}

impl From<serenity::Error> for Error {
    fn from(value: serenity::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of identity resolution (`/acceder`).
#[derive(Debug, Error)]
pub enum LookupError {
    /// Nothing was typed
    #[error("Por favor ingresa tu ID antes de continuar.")]
    EmptyId,

    /// Input is not an integer
    #[error("Ingresa un ID válido (número entero). Recibido: '{raw}'")]
    InvalidId {
        /// Trimmed input as received
        raw: String,
    },

    /// Valid ID without a matching customer
    #[error("ID {id} no encontrado. Contacta al negocio para registrarte.")]
    NotRegistered {
        /// The parsed identifier
        id: i64,
    },

    /// Storage failure during the lookup
    #[error("Error al acceder a tu cuenta. Intenta de nuevo más tarde.")]
    Access(#[source] DbErr),
}

impl LookupError {
    /// Whether this is a soft warning rather than an error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyId)
    }
}

/// Failures of the profile update (`/actualizar`).
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Age outside 18..=100
    #[error("La edad debe estar entre 18 y 100 años (recibido: {age}).")]
    AgeOutOfRange {
        /// Rejected age
        age: i32,
    },

    /// The update matched no row
    #[error("Error al actualizar datos: el cliente {id} ya no existe.")]
    SubjectMissing {
        /// Identifier of the session subject
        id: i64,
    },

    /// Storage failure during the update
    #[error("Error al actualizar datos. Intenta de nuevo más tarde.")]
    Storage(#[source] DbErr),
}

impl UpdateError {
    /// Whether this is a soft warning rather than an error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::AgeOutOfRange { .. })
    }
}

/// Failures while building the dashboard (`/perfil`, `/simular`).
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Simulator input outside 0..=10
    #[error("Elige entre 0 y 10 visitas (recibido: {visits}).")]
    VisitsOutOfRange {
        /// Rejected visit count
        visits: u8,
    },

    /// Storage failure while reading sales or the segment
    #[error("Error al cargar tu perfil. Intenta de nuevo más tarde.")]
    Load(#[source] DbErr),
}

impl DashboardError {
    /// Whether this is a soft warning rather than an error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::VisitsOutOfRange { .. })
    }
}

/// Failures of feedback submission (`/sugerencia`).
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Nothing but whitespace was submitted
    #[error("Por favor escribe una sugerencia antes de enviar.")]
    Empty,

    /// Storage failure during the insert
    #[error("Error al guardar sugerencia. Intenta de nuevo más tarde.")]
    Save(#[source] DbErr),
}

impl FeedbackError {
    /// Whether this is a soft warning rather than an error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
