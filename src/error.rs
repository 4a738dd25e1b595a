// error.rs
use thiserror::Error;

/// Errors raised while setting up the panel. Request failures never show up
/// here; they are rendered into the viewer instead.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("could not open config file: {0}")]
    ConfigFileNotFound(#[from] std::io::Error),

    #[error("could not read config file: {0}")]
    ConfigMisformat(#[from] serde_json::Error),

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("could not build http client: {0}")]
    Client(#[from] reqwest::Error),
}
