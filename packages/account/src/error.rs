//! Error type shared by the account crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid front-end configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to encode registration form: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("registration request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("registration endpoint answered {status}")]
    Rejected { status: u16 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
