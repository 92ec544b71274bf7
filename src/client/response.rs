//! Solr select response parsing and record normalization

use crate::error::{Error, Result};
use crate::types::{JsonValue, Record};
use serde::Deserialize;

// ============================================================================
// Wire Format
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawBody {
    #[serde(default)]
    response: Option<RawResponse>,
    #[serde(default)]
    error: Option<RawError>,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(rename = "numFound")]
    num_found: u64,
    #[serde(default)]
    start: u64,
    #[serde(default)]
    docs: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    code: Option<i64>,
}

// ============================================================================
// Parsed Response
// ============================================================================

/// One page of a Solr select response
#[derive(Debug, Clone, PartialEq)]
pub struct SolrResponse {
    /// Total hit count for the query, independent of paging
    pub num_found: u64,
    /// Offset this page starts at
    pub start: u64,
    /// Documents on this page, singleton fields unwrapped
    pub docs: Vec<Record>,
}

impl SolrResponse {
    /// Parse a select response body
    ///
    /// Solr reports query errors inside a JSON `error` object even on some
    /// 200 responses, so both shapes are handled here.
    pub fn from_body(body: JsonValue) -> Result<Self> {
        let raw: RawBody = serde_json::from_value(body)?;

        if let Some(error) = raw.error {
            return Err(Error::solr(
                error.code.unwrap_or(-1),
                error.msg.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let response = raw
            .response
            .ok_or_else(|| Error::malformed("missing 'response' object"))?;

        let docs = response
            .docs
            .into_iter()
            .map(|doc| match doc {
                JsonValue::Object(obj) => Ok(unwrap_singletons(obj)),
                other => Err(Error::malformed(format!(
                    "document is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            num_found: response.num_found,
            start: response.start,
            docs,
        })
    }
}

// ============================================================================
// Record Normalization
// ============================================================================

/// Unwrap single-element array fields to their bare scalar
///
/// Solr returns multi-valued fields as arrays even when they hold one
/// value. A one-element array becomes the element itself; arrays with any
/// other length are preserved as-is.
pub fn unwrap_singletons(mut doc: Record) -> Record {
    for value in doc.values_mut() {
        let singleton = match value {
            JsonValue::Array(items) if items.len() == 1 => Some(items.remove(0)),
            _ => None,
        };
        if let Some(inner) = singleton {
            *value = inner;
        }
    }
    doc
}
