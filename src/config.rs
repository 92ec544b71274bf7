//! Source configuration
//!
//! Everything needed to reach a Solr index and shape partitioned retrieval:
//! connection address, core name, auth, certificate, optional cloud
//! collection, extra query parameters and the desired page size.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::paging::PageSize;
use crate::types::{JsonObject, QueryParams};
use std::path::PathBuf;

// ============================================================================
// Solr Config
// ============================================================================

/// Configuration for a Solr data source
///
/// `base_url` is a single address in direct mode, or the full comma-separated
/// ensemble address list when a cloud collection is set.
#[derive(Debug, Clone)]
pub struct SolrConfig {
    /// Connection address, including protocol, host, port and base path
    pub base_url: String,

    /// Named segment of the Solr storage to query
    pub core: String,

    /// Further parameters to pass with every query (e.g., `fl`, highlighting)
    pub qargs: QueryParams,

    /// Additional information the host framework associates with this source
    pub metadata: JsonObject,

    /// Authentication to attach to requests
    pub auth: AuthConfig,

    /// Path to an SSL certificate, if required
    pub cert: Option<PathBuf>,

    /// Cloud collection to resolve through the coordination service, if any
    pub zoo_collection: Option<String>,

    /// Desired partition size
    pub page_size: PageSize,
}

impl SolrConfig {
    /// Start building a config for the given address and core
    pub fn builder(base_url: impl Into<String>, core: impl Into<String>) -> SolrConfigBuilder {
        SolrConfigBuilder::new(base_url, core)
    }

    /// The caller's explicit base `start` offset from `qargs`, default 0
    pub fn base_start(&self) -> Result<u64> {
        match self.qargs.get("start") {
            None => Ok(0),
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::invalid_argument("start", format!("not an offset: {raw}"))),
        }
    }

    /// The explicit field list from `qargs`, split on commas, if present
    pub fn field_list(&self) -> Option<Vec<String>> {
        self.qargs.get("fl").map(|fl| {
            fl.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`SolrConfig`]
#[derive(Debug, Clone)]
pub struct SolrConfigBuilder {
    config: SolrConfig,
}

impl SolrConfigBuilder {
    /// Create a builder with required connection parameters
    pub fn new(base_url: impl Into<String>, core: impl Into<String>) -> Self {
        Self {
            config: SolrConfig {
                base_url: base_url.into(),
                core: core.into(),
                qargs: QueryParams::new(),
                metadata: JsonObject::new(),
                auth: AuthConfig::None,
                cert: None,
                zoo_collection: None,
                page_size: PageSize::default(),
            },
        }
    }

    /// Add an extra query parameter
    #[must_use]
    pub fn qarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.qargs.insert(key.into(), value.into());
        self
    }

    /// Replace the extra query parameter map
    #[must_use]
    pub fn qargs(mut self, qargs: QueryParams) -> Self {
        self.config.qargs = qargs;
        self
    }

    /// Attach host-framework metadata
    #[must_use]
    pub fn metadata(mut self, metadata: JsonObject) -> Self {
        self.config.metadata = metadata;
        self
    }

    /// Set the authentication mode
    #[must_use]
    pub fn auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set the SSL certificate path
    #[must_use]
    pub fn cert(mut self, cert: impl Into<PathBuf>) -> Self {
        self.config.cert = Some(cert.into());
        self
    }

    /// Resolve the connection through the coordination service for this
    /// cloud collection
    #[must_use]
    pub fn zoo_collection(mut self, collection: impl Into<String>) -> Self {
        self.config.zoo_collection = Some(collection.into());
        self
    }

    /// Set the desired partition size; fails on zero or negative values
    pub fn page_size(mut self, rows: i64) -> Result<Self> {
        self.config.page_size = PageSize::rows(rows)?;
        Ok(self)
    }

    /// Disable paging: the whole result set becomes one partition
    #[must_use]
    pub fn unpaged(mut self) -> Self {
        self.config.page_size = PageSize::Unpaged;
        self
    }

    /// Finish building
    pub fn build(self) -> SolrConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_defaults() {
        let config = SolrConfig::builder("http://localhost:8983/solr", "products").build();
        assert_eq!(config.base_url, "http://localhost:8983/solr");
        assert_eq!(config.core, "products");
        assert_eq!(config.page_size, PageSize::Rows(1024));
        assert!(config.qargs.is_empty());
        assert!(config.zoo_collection.is_none());
        assert_eq!(config.base_start().unwrap(), 0);
        assert!(config.field_list().is_none());
    }

    #[test]
    fn test_builder_rejects_bad_page_size() {
        for bad in [0, -5] {
            let err = SolrConfig::builder("http://localhost:8983/solr", "c")
                .page_size(bad)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidPageSize { value } if value == bad));
        }
    }

    #[test]
    fn test_base_start_from_qargs() {
        let config = SolrConfig::builder("http://localhost:8983/solr", "c")
            .qarg("start", "40")
            .build();
        assert_eq!(config.base_start().unwrap(), 40);

        let config = SolrConfig::builder("http://localhost:8983/solr", "c")
            .qarg("start", "forty")
            .build();
        assert!(config.base_start().is_err());
    }

    #[test]
    fn test_field_list_splits_on_commas() {
        let config = SolrConfig::builder("http://localhost:8983/solr", "c")
            .qarg("fl", "id, name,price")
            .build();
        assert_eq!(
            config.field_list().unwrap(),
            vec!["id".to_string(), "name".to_string(), "price".to_string()]
        );
    }

    #[test]
    fn test_unpaged_sentinel() {
        let config = SolrConfig::builder("http://localhost:8983/solr", "c")
            .unpaged()
            .build();
        assert!(config.page_size.is_unpaged());
    }
}
