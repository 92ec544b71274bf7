//! Error types for the Solr connector
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Solr connector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("page_size must be a positive integer or unpaged, got {value}")]
    InvalidPageSize { value: i64 },

    #[error("Missing required argument: {field}")]
    MissingArgument { field: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    #[error("Failed to load certificate from '{path}': {message}")]
    Certificate { path: String, message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Solr error (code {code}): {message}")]
    Solr { code: i64, message: String },

    #[error("Malformed Solr response: {message}")]
    MalformedResponse { message: String },

    // ============================================================================
    // Cluster Discovery Errors
    // ============================================================================
    #[error("Cluster discovery failed for collection '{collection}': {message}")]
    Discovery { collection: String, message: String },

    // ============================================================================
    // Schema / Frame Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Schema inference failed: {message}")]
    SchemaInference { message: String },

    #[error("No columns could be inferred: the sample query returned no records")]
    EmptySample,

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing argument error
    pub fn missing_argument(field: impl Into<String>) -> Self {
        Self::MissingArgument {
            field: field.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a Solr index error
    pub fn solr(code: i64, message: impl Into<String>) -> Self {
        Self::Solr {
            code,
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a cluster discovery error
    pub fn discovery(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Discovery {
            collection: collection.into(),
            message: message.into(),
        }
    }

    /// Create a schema inference error
    pub fn schema_inference(message: impl Into<String>) -> Self {
        Self::SchemaInference {
            message: message.into(),
        }
    }
}

/// Result type alias for the Solr connector
pub type Result<T> = std::result::Result<T, Error>;
