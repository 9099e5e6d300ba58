//! # Front-end configuration — `customer_website.toml`
//!
//! The web package embeds an optional `customer_website.toml` at build time and parses
//! it into a [`FrontendConfig`]. Every key has a default, so a missing or empty file is
//! equivalent to the default configuration.
//!
//! ```toml
//! [account]
//! register_endpoint = "https://localhost:50050/api/v1/account/register"
//! offline = false     # true keeps submitted records in memory instead of posting
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration stored in `customer_website.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(default)]
    pub account: AccountConfig,
}

/// Account section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// URL the sign-up form posts to.
    #[serde(default = "default_register_endpoint")]
    pub register_endpoint: String,
    /// Keep submitted records in memory, for previews without a backend.
    #[serde(default)]
    pub offline: bool,
}

fn default_register_endpoint() -> String {
    "https://localhost:50050/api/v1/account/register".to_string()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            register_endpoint: default_register_endpoint(),
            offline: false,
        }
    }
}

impl FrontendConfig {
    /// Builder method to point the form at another endpoint.
    pub fn with_register_endpoint(mut self, endpoint: &str) -> Self {
        self.account.register_endpoint = endpoint.to_string();
        self
    }

    pub fn register_endpoint(&self) -> &str {
        &self.account.register_endpoint
    }

    pub fn is_offline(&self) -> bool {
        self.account.offline
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "customer_website.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, falling back to the defaults when the text is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", Self::filename(), e);
            Self::default()
        })
    }
}
