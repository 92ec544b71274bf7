//! Registration contract with a host cataloging framework
//!
//! Each source variant declares a descriptor (name, version, container
//! kind, partition access) and is opened through a factory that takes the
//! query, connection parameters and free-form JSON keyword arguments,
//! separating base keys (metadata) from source-specific ones.

use crate::auth::{AuthConfig, NegotiateTokenProvider};
use crate::config::{SolrConfig, SolrConfigBuilder};
use crate::error::{Error, Result};
use crate::source::{SolrSequenceSource, SolrTableSource};
use crate::types::{Container, JsonObject, JsonValue, QueryParams};
use std::sync::Arc;

/// Keyword arguments owned by the host framework rather than the source
const BASE_KEYS: &[&str] = &["metadata"];

// ============================================================================
// Source Descriptor
// ============================================================================

/// What a source variant declares to the host framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Registered source name
    pub name: &'static str,
    /// Connector version
    pub version: &'static str,
    /// Container kind of the produced data
    pub container: Container,
    /// Whether partitioned access is supported
    pub partition_access: bool,
}

/// Descriptor for the record-oriented variant
pub fn sequence_descriptor() -> SourceDescriptor {
    SourceDescriptor {
        name: "solr-sequence",
        version: crate::VERSION,
        container: Container::Records,
        partition_access: true,
    }
}

/// Descriptor for the table-oriented variant
pub fn table_descriptor() -> SourceDescriptor {
    SourceDescriptor {
        name: "solr-table",
        version: crate::VERSION,
        container: Container::Dataframe,
        partition_access: true,
    }
}

// ============================================================================
// Open Arguments
// ============================================================================

/// Arguments the host framework passes to an open factory
#[derive(Debug, Clone)]
pub struct OpenArgs {
    /// Query to execute, in Lucene syntax
    pub query: String,
    /// Connection address (comma-separated in cloud mode)
    pub base_url: String,
    /// Named segment of the Solr storage to query
    pub core: String,
    /// Free-form keyword arguments
    pub kwargs: JsonObject,
}

impl OpenArgs {
    /// Create open arguments with an empty kwargs map
    pub fn new(
        query: impl Into<String>,
        base_url: impl Into<String>,
        core: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            base_url: base_url.into(),
            core: core.into(),
            kwargs: JsonObject::new(),
        }
    }

    /// Attach keyword arguments
    #[must_use]
    pub fn kwargs(mut self, kwargs: JsonObject) -> Self {
        self.kwargs = kwargs;
        self
    }
}

/// Split kwargs into framework-owned base keys and source-specific ones
pub fn separate_base_kwargs(kwargs: &JsonObject) -> (JsonObject, JsonObject) {
    let mut base = JsonObject::new();
    let mut source = JsonObject::new();
    for (key, value) in kwargs {
        if BASE_KEYS.contains(&key.as_str()) {
            base.insert(key.clone(), value.clone());
        } else {
            source.insert(key.clone(), value.clone());
        }
    }
    (base, source)
}

// ============================================================================
// Registry
// ============================================================================

/// Factory for the two Solr source variants
///
/// A negotiate token provider may be wired in for deployments that pass
/// `"kerberos"` as the auth kwarg; without one, that spelling is rejected.
#[derive(Default)]
pub struct Registry {
    negotiate: Option<Arc<dyn NegotiateTokenProvider>>,
}

impl Registry {
    /// Create a registry with no negotiate auth back-end
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire in the external negotiate token provider
    #[must_use]
    pub fn with_negotiate_provider(mut self, provider: Arc<dyn NegotiateTokenProvider>) -> Self {
        self.negotiate = Some(provider);
        self
    }

    /// Descriptors for every registered source variant
    pub fn descriptors(&self) -> Vec<SourceDescriptor> {
        vec![sequence_descriptor(), table_descriptor()]
    }

    /// Open a record-oriented source
    pub async fn open_sequence(&self, args: OpenArgs) -> Result<SolrSequenceSource> {
        let (query, config) = self.resolve(args)?;
        SolrSequenceSource::new(query, config).await
    }

    /// Open a table-oriented source
    pub async fn open_table(&self, args: OpenArgs) -> Result<SolrTableSource> {
        let (query, config) = self.resolve(args)?;
        SolrTableSource::new(query, config).await
    }

    /// Turn open arguments into a validated source configuration
    fn resolve(&self, args: OpenArgs) -> Result<(String, SolrConfig)> {
        let (base, source) = separate_base_kwargs(&args.kwargs);

        let mut builder = SolrConfigBuilder::new(args.base_url, args.core);

        if let Some(metadata) = base.get("metadata") {
            match metadata {
                JsonValue::Object(map) => builder = builder.metadata(map.clone()),
                JsonValue::Null => {}
                other => {
                    return Err(Error::invalid_argument(
                        "metadata",
                        format!("expected an object, got {other}"),
                    ))
                }
            }
        }

        for (key, value) in &source {
            builder = match key.as_str() {
                "qargs" => builder.qargs(parse_qargs(value)?),
                "auth" => builder.auth(self.parse_auth(value)?),
                "cert" => match value {
                    JsonValue::String(path) => builder.cert(path),
                    JsonValue::Null => builder,
                    other => {
                        return Err(Error::invalid_argument(
                            "cert",
                            format!("expected a path string, got {other}"),
                        ))
                    }
                },
                "zoo_collection" => match value {
                    JsonValue::String(name) => builder.zoo_collection(name),
                    JsonValue::Bool(false) | JsonValue::Null => builder,
                    other => {
                        return Err(Error::invalid_argument(
                            "zoo_collection",
                            format!("expected a collection name, got {other}"),
                        ))
                    }
                },
                "page_size" => match value {
                    JsonValue::Null => builder.unpaged(),
                    JsonValue::Number(n) => match n.as_i64() {
                        Some(rows) => builder.page_size(rows)?,
                        None => {
                            return Err(Error::invalid_argument(
                                "page_size",
                                format!("expected an integer, got {n}"),
                            ))
                        }
                    },
                    other => {
                        return Err(Error::invalid_argument(
                            "page_size",
                            format!("expected an integer or null, got {other}"),
                        ))
                    }
                },
                unknown => {
                    return Err(Error::invalid_argument(
                        unknown,
                        "unknown source keyword argument",
                    ))
                }
            };
        }

        Ok((args.query, builder.build()))
    }

    /// Auth kwarg: none, `"kerberos"`, or a credential pair
    fn parse_auth(&self, value: &JsonValue) -> Result<AuthConfig> {
        match value {
            JsonValue::Null => Ok(AuthConfig::None),
            JsonValue::String(s) if s == "none" => Ok(AuthConfig::None),
            JsonValue::String(s) if s == "kerberos" => match &self.negotiate {
                Some(provider) => Ok(AuthConfig::negotiate(Arc::clone(provider))),
                None => Err(Error::auth(
                    "kerberos requested but no negotiate token provider is configured",
                )),
            },
            JsonValue::Array(pair) => match pair.as_slice() {
                [JsonValue::String(username), JsonValue::String(password)] => {
                    Ok(AuthConfig::basic(username, password))
                }
                _ => Err(Error::invalid_argument(
                    "auth",
                    "credential pair must be [username, password]",
                )),
            },
            other => Err(Error::invalid_argument(
                "auth",
                format!("expected null, \"kerberos\" or a credential pair, got {other}"),
            )),
        }
    }
}

/// Extra query parameters arrive as a JSON object; scalars are stringified
fn parse_qargs(value: &JsonValue) -> Result<QueryParams> {
    let JsonValue::Object(map) = value else {
        return Err(Error::invalid_argument(
            "qargs",
            format!("expected an object, got {value}"),
        ));
    };

    let mut qargs = QueryParams::new();
    for (key, value) in map {
        let rendered = match value {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Bool(b) => b.to_string(),
            other => {
                return Err(Error::invalid_argument(
                    key.clone(),
                    format!("query parameter must be a scalar, got {other}"),
                ))
            }
        };
        qargs.insert(key.clone(), rendered);
    }
    Ok(qargs)
}
