//! Solr query transport
//!
//! A thin client over the Solr HTTP select API. Connection establishment
//! resolves either a direct `base_url/core` endpoint or a cloud collection
//! via a [`ClusterDiscovery`] service; queries are single blocking-style
//! awaited GETs with no retry logic, so transport errors propagate
//! unmodified to the caller.

mod response;
mod solr;

pub use response::{unwrap_singletons, SolrResponse};
pub use solr::{ClusterDiscovery, SolrClient, StaticCluster};

#[cfg(test)]
mod tests;
