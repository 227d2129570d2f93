/// Database connection and table creation
pub mod database;

/// Program settings loaded from config.toml
pub mod program;
