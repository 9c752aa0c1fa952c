//! Error types for PetPals Core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    // Tenant site errors
    #[error("Site not found: {0}")]
    SiteNotFound(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Rendering errors
    #[error("Template render error: {0}")]
    Render(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
