//! Common types used throughout the Solr connector
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single Solr document, normalized to field name -> value
pub type Record = JsonObject;

/// Extra query parameters passed through to the select handler
/// (e.g., `fl`, highlighting options, an explicit `start`)
pub type QueryParams = HashMap<String, String>;

// ============================================================================
// Container Kind
// ============================================================================

/// The shape of data a source produces, as declared to the host framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    /// Plain records (a sequence of JSON objects)
    #[default]
    Records,
    /// Tabular data (Arrow RecordBatch)
    Dataframe,
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Records => write!(f, "records"),
            Container::Dataframe => write!(f, "dataframe"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_serde() {
        let kind: Container = serde_json::from_str("\"dataframe\"").unwrap();
        assert_eq!(kind, Container::Dataframe);

        let json = serde_json::to_string(&Container::Records).unwrap();
        assert_eq!(json, "\"records\"");
    }

    #[test]
    fn test_container_display() {
        assert_eq!(Container::Records.to_string(), "records");
        assert_eq!(Container::Dataframe.to_string(), "dataframe");
    }
}
