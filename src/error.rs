// src/error.rs
use thiserror::Error;

use crate::core::net::FetchError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidInput(String),
}
