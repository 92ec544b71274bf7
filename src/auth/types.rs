//! Auth configuration types

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Provider of negotiate (Kerberos/SPNEGO) authorization header values
///
/// Ticket handling lives entirely in the host environment; implementations
/// return a ready-to-send `Authorization` header value such as
/// `"Negotiate <base64 token>"`.
#[async_trait]
pub trait NegotiateTokenProvider: Send + Sync {
    /// Produce the authorization header value for the next request
    async fn authorization(&self) -> Result<String>;
}

/// Authentication configuration attached to every query request
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },

    /// Kerberos-style negotiate authentication via an external token source
    Negotiate(Arc<dyn NegotiateTokenProvider>),
}

impl AuthConfig {
    /// Basic auth from a credential pair
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Negotiate auth backed by the given token provider
    pub fn negotiate(provider: Arc<dyn NegotiateTokenProvider>) -> Self {
        Self::Negotiate(provider)
    }

    /// Whether any authentication is configured
    pub fn is_none(&self) -> bool {
        matches!(self, AuthConfig::None)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthConfig::None => write!(f, "None"),
            AuthConfig::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            AuthConfig::Negotiate(_) => write!(f, "Negotiate(..)"),
        }
    }
}
