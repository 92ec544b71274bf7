//! Tests for authentication

use super::*;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

struct FixedToken(&'static str);

#[async_trait]
impl NegotiateTokenProvider for FixedToken {
    async fn authorization(&self) -> Result<String> {
        Ok(format!("Negotiate {}", self.0))
    }
}

fn build_request() -> reqwest::RequestBuilder {
    let client = reqwest::Client::new();
    client.get("http://localhost/solr/test/select")
}

#[tokio::test]
async fn test_none_leaves_request_untouched() {
    let auth = Authenticator::new(AuthConfig::None);
    let req = auth.apply(build_request()).await.unwrap();
    let built = req.build().unwrap();
    assert!(built.headers().get("authorization").is_none());
}

#[tokio::test]
async fn test_basic_sets_authorization_header() {
    let auth = Authenticator::new(AuthConfig::basic("user", "secret"));
    let req = auth.apply(build_request()).await.unwrap();
    let built = req.build().unwrap();
    let header = built.headers().get("authorization").unwrap();
    // "user:secret" base64-encoded
    assert_eq!(header.to_str().unwrap(), "Basic dXNlcjpzZWNyZXQ=");
}

#[tokio::test]
async fn test_negotiate_delegates_to_provider() {
    let auth = Authenticator::new(AuthConfig::negotiate(Arc::new(FixedToken("abc123"))));
    let req = auth.apply(build_request()).await.unwrap();
    let built = req.build().unwrap();
    let header = built.headers().get("authorization").unwrap();
    assert_eq!(header.to_str().unwrap(), "Negotiate abc123");
}

#[test]
fn test_debug_redacts_password() {
    let config = AuthConfig::basic("user", "secret");
    let debug = format!("{config:?}");
    assert!(debug.contains("user"));
    assert!(!debug.contains("secret"));
}

#[test]
fn test_load_certificate_missing_file() {
    let err = load_certificate(std::path::Path::new("/nonexistent/ca.pem")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/ca.pem"));
}
