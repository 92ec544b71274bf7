//! Data sources
//!
//! The [`DataSource`] trait is the capability contract a host framework
//! programs against: a source produces a schema, produces a partition given
//! an index, supports a full read, and can be closed. Two concrete variants
//! exist: [`SolrSequenceSource`] (record-oriented) and [`SolrTableSource`]
//! (table-oriented), both built on the same query/paging mechanism.
//!
//! Lifecycle: a fresh source knows nothing; the first `schema()` call issues
//! a zero-row probe and caches the result; reads may then happen in any
//! order; `close()` drops every cached artifact so a later read starts
//! clean against the live index.

mod sequence;
mod table;

use crate::client::SolrClient;
use crate::config::SolrConfig;
use crate::error::Result;
use crate::paging::{PagePlan, PageWindow};
use crate::types::{Container, QueryParams, Record};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::stream::Stream;
use std::collections::BTreeMap;
use std::pin::Pin;
use std::sync::Arc;

pub use sequence::{RecordStream, SolrSequenceSource};
pub use table::SolrTableSource;


// ============================================================================
// Source Schema
// ============================================================================

/// Discovered shape of a source's result set
///
/// Computed lazily by the first `schema()` call and cached until `close()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSchema {
    /// Total row count past the base offset
    pub rows: u64,
    /// Number of partitions the result set splits into
    pub npartitions: usize,
    /// Resolved column order (table sources only)
    pub columns: Option<Vec<String>>,
    /// Per-column dtype names (table sources only)
    pub dtypes: Option<BTreeMap<String, String>>,
}

// ============================================================================
// Data Source Trait
// ============================================================================

/// One deferred partition fetch, independent of the source that created it
///
/// Tasks borrow nothing: an external execution engine may run them out of
/// order or concurrently. Fetches are idempotent with respect to the index.
pub type PartitionTask<T> = BoxFuture<'static, Result<T>>;

/// Capability contract for partitioned query sources
#[async_trait]
pub trait DataSource: Send {
    /// Payload of a single partition
    type Partition: Send + 'static;
    /// Payload of a full read
    type Output: Send;

    /// The container kind this source declares to the host framework
    fn container(&self) -> Container;

    /// Discover (or return the cached) source schema
    ///
    /// The first call issues a zero-row probe query for the total hit
    /// count; table sources additionally fetch a small sample.
    async fn schema(&mut self) -> Result<SourceSchema>;

    /// Fetch one partition by ordinal index
    ///
    /// Index range is not validated locally; over-range offsets simply
    /// yield whatever the index returns for them.
    async fn read_partition(&mut self, index: usize) -> Result<Self::Partition>;

    /// Read the whole result set
    async fn read(&mut self) -> Result<Self::Output>;

    /// Export one independent deferred fetch per partition
    ///
    /// The returned tasks form the nodes of an external engine's execution
    /// graph; materializing them is the engine's business.
    async fn partition_tasks(&mut self) -> Result<Vec<PartitionTask<Self::Partition>>>;

    /// Drop cached schema and any cached materialization
    fn close(&mut self);
}

/// Boxed stream of query results
pub type BoxStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

// ============================================================================
// Shared Page Fetch
// ============================================================================

/// Issue one paged select query and return its normalized records
///
/// Owns all its inputs so it can back a `'static` partition task. The
/// window's `start`/`rows` are merged over the caller's parameter map; an
/// unpaged window leaves the map untouched and the transport's own
/// defaults govern.
pub(crate) async fn fetch_page(
    client: Arc<SolrClient>,
    query: String,
    mut qargs: QueryParams,
    window: PageWindow,
) -> Result<Vec<Record>> {
    if let Some(rows) = window.rows {
        qargs.insert("start".to_string(), window.start.to_string());
        qargs.insert("rows".to_string(), rows.to_string());
    }
    let response = client.select(&query, &qargs).await?;
    Ok(response.docs)
}

/// Issue the zero-row probe query and derive the page plan
///
/// Requesting zero rows makes the hit count cheap: no documents travel
/// over the wire.
pub(crate) async fn probe_plan(
    client: &SolrClient,
    query: &str,
    config: &SolrConfig,
) -> Result<PagePlan> {
    let mut qargs = config.qargs.clone();
    qargs.insert("rows".to_string(), "0".to_string());
    let base_start = config.base_start()?;
    let response = client.select(query, &qargs).await?;
    tracing::debug!(hits = response.num_found, "probe query complete");
    Ok(PagePlan::new(base_start, config.page_size, response.num_found))
}
