//! Authenticator implementation
//!
//! Applies the configured credentials to outgoing request builders and
//! loads the optional SSL certificate used to verify the index endpoint.

use super::types::AuthConfig;
use crate::error::{Error, Result};
use reqwest::{Certificate, RequestBuilder};
use std::path::Path;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// The underlying auth configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::Basic { username, password } => {
                Ok(req.basic_auth(username, Some(password)))
            }

            AuthConfig::Negotiate(provider) => {
                let value = provider.authorization().await?;
                Ok(req.header(reqwest::header::AUTHORIZATION, value))
            }
        }
    }
}

/// Load a PEM certificate for endpoint verification
pub fn load_certificate(path: &Path) -> Result<Certificate> {
    let pem = std::fs::read(path).map_err(|e| Error::Certificate {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Certificate::from_pem(&pem).map_err(|e| Error::Certificate {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
