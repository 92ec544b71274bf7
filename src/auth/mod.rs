//! Authentication module
//!
//! Supports: no auth, HTTP Basic, and Kerberos-style negotiate tokens.
//!
//! Token acquisition for negotiate auth is an external service: the host
//! supplies a [`NegotiateTokenProvider`] and this module only attaches the
//! resulting header to outgoing requests.

mod authenticator;
mod types;

pub use authenticator::{load_certificate, Authenticator};
pub use types::{AuthConfig, NegotiateTokenProvider};

#[cfg(test)]
mod tests;
