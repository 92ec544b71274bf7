//! Solr client and connection establishment

use super::response::SolrResponse;
use crate::auth::{load_certificate, Authenticator};
use crate::config::SolrConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryParams};
use async_trait::async_trait;
use url::Url;

// ============================================================================
// Cluster Discovery
// ============================================================================

/// Resolver from a coordination-service ensemble to live Solr node addresses
///
/// SolrCloud deployments register their nodes in a coordination service
/// (ZooKeeper). Talking to that service is the host environment's concern;
/// this trait is the seam it plugs into.
#[async_trait]
pub trait ClusterDiscovery: Send + Sync {
    /// Resolve the live node base URLs serving `collection`
    async fn live_nodes(&self, ensemble: &[String], collection: &str) -> Result<Vec<String>>;
}

/// Fallback discovery that treats the ensemble addresses as the node list
///
/// Useful when the caller already knows the node addresses, and as the
/// default when no coordination-service client is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCluster;

#[async_trait]
impl ClusterDiscovery for StaticCluster {
    async fn live_nodes(&self, ensemble: &[String], collection: &str) -> Result<Vec<String>> {
        if ensemble.is_empty() {
            return Err(Error::discovery(collection, "empty ensemble address list"));
        }
        Ok(ensemble.to_vec())
    }
}

// ============================================================================
// Solr Client
// ============================================================================

/// Handle for issuing select queries against one core or collection
///
/// Constructing a client builds the network-capable HTTP client and
/// resolves the endpoint; no query is issued until [`SolrClient::select`].
#[derive(Debug, Clone)]
pub struct SolrClient {
    http: reqwest::Client,
    select_url: Url,
    authenticator: Authenticator,
}

impl SolrClient {
    /// Establish a connection per the source configuration
    ///
    /// Direct mode joins `base_url` and `core`; when a cloud collection is
    /// configured the comma-separated ensemble is resolved through
    /// [`StaticCluster`]. Use [`SolrClient::connect_with`] to supply a real
    /// coordination-service client.
    pub async fn connect(config: &SolrConfig) -> Result<Self> {
        Self::connect_with(config, &StaticCluster).await
    }

    /// Establish a connection, resolving cloud collections via `discovery`
    pub async fn connect_with(
        config: &SolrConfig,
        discovery: &dyn ClusterDiscovery,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(cert) = &config.cert {
            builder = builder.add_root_certificate(load_certificate(cert)?);
        }
        let http = builder.build()?;

        let (base, segment) = match &config.zoo_collection {
            Some(collection) => {
                let ensemble: Vec<String> = config
                    .base_url
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                let nodes = discovery.live_nodes(&ensemble, collection).await?;
                let node = nodes
                    .first()
                    .ok_or_else(|| Error::discovery(collection, "no live nodes"))?;
                (node.clone(), collection.clone())
            }
            None => (config.base_url.clone(), config.core.clone()),
        };

        let select_url = Url::parse(&format!(
            "{}/{}/select",
            base.trim_end_matches('/'),
            segment.trim_matches('/')
        ))?;

        tracing::debug!(endpoint = %select_url, "connected to Solr");

        Ok(Self {
            http,
            select_url,
            authenticator: Authenticator::new(config.auth.clone()),
        })
    }

    /// The resolved select endpoint
    pub fn endpoint(&self) -> &Url {
        &self.select_url
    }

    /// Issue one select query
    ///
    /// `params` is the caller's extra parameter map already merged with any
    /// computed `start`/`rows`. Transport and index errors propagate
    /// unmodified; there is no retry or local timeout handling.
    pub async fn select(&self, query: &str, params: &QueryParams) -> Result<SolrResponse> {
        let mut pairs: Vec<(&str, &str)> = vec![("q", query), ("wt", "json")];
        for (key, value) in params {
            pairs.push((key.as_str(), value.as_str()));
        }

        tracing::debug!(endpoint = %self.select_url, query, "issuing select query");

        let req = self.http.get(self.select_url.clone()).query(&pairs);
        let req = self.authenticator.apply(req).await?;
        let response = req.send().await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: std::result::Result<JsonValue, _> = serde_json::from_str(&body);
        match parsed {
            // Solr error bodies carry the real diagnostics even on non-2xx
            Ok(value) => {
                if !status.is_success() && value.get("error").is_none() {
                    return Err(Error::http_status(status.as_u16(), body));
                }
                SolrResponse::from_body(value)
            }
            Err(_) if !status.is_success() => Err(Error::http_status(status.as_u16(), body)),
            Err(e) => Err(Error::malformed(format!("invalid JSON body: {e}"))),
        }
    }
}
