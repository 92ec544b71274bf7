//! Record-oriented Solr source

use super::{fetch_page, probe_plan, BoxStream, DataSource, PartitionTask, SourceSchema};
use crate::client::{ClusterDiscovery, SolrClient};
use crate::config::SolrConfig;
use crate::error::Result;
use crate::types::{Container, Record};
use async_trait::async_trait;
use futures::{FutureExt, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Lazy, finite stream of records; restartable by calling `read()` again
pub type RecordStream = BoxStream<Record>;

/// Execute a query on Solr, exposing results as a sequence of records
///
/// The query is given in Lucene syntax, e.g. `"*:*"`. Results are split
/// into fixed-size partitions per the configured page size; each record is
/// a field-to-value mapping with singleton multi-valued fields unwrapped.
#[derive(Debug)]
pub struct SolrSequenceSource {
    query: String,
    config: SolrConfig,
    client: Arc<SolrClient>,
    schema: Option<SourceSchema>,
}

impl SolrSequenceSource {
    /// Connect and create a sequence source
    ///
    /// Constructs the network client (direct or cloud-resolved); no query
    /// is issued until schema discovery or a read.
    pub async fn new(query: impl Into<String>, config: SolrConfig) -> Result<Self> {
        let client = SolrClient::connect(&config).await?;
        Ok(Self::with_client(query, config, client))
    }

    /// Connect through an explicit coordination-service client
    pub async fn with_discovery(
        query: impl Into<String>,
        config: SolrConfig,
        discovery: &dyn ClusterDiscovery,
    ) -> Result<Self> {
        let client = SolrClient::connect_with(&config, discovery).await?;
        Ok(Self::with_client(query, config, client))
    }

    fn with_client(query: impl Into<String>, config: SolrConfig, client: SolrClient) -> Self {
        Self {
            query: query.into(),
            config,
            client: Arc::new(client),
            schema: None,
        }
    }

    /// The query this source executes
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The source configuration
    pub fn config(&self) -> &SolrConfig {
        &self.config
    }

    fn partition_task(&self, index: usize) -> Result<PartitionTask<Vec<Record>>> {
        let window = self
            .config
            .page_size
            .window(self.config.base_start()?, index);
        let client = Arc::clone(&self.client);
        let query = self.query.clone();
        let qargs = self.config.qargs.clone();
        Ok(fetch_page(client, query, qargs, window).boxed())
    }
}

#[async_trait]
impl DataSource for SolrSequenceSource {
    type Partition = Vec<Record>;
    type Output = RecordStream;

    fn container(&self) -> Container {
        Container::Records
    }

    async fn schema(&mut self) -> Result<SourceSchema> {
        if self.schema.is_none() {
            let plan = probe_plan(&self.client, &self.query, &self.config).await?;
            self.schema = Some(SourceSchema {
                rows: plan.row_count(),
                npartitions: plan.npartitions(),
                columns: None,
                dtypes: None,
            });
        }
        Ok(self.schema.clone().expect("schema just cached"))
    }

    async fn read_partition(&mut self, index: usize) -> Result<Vec<Record>> {
        self.partition_task(index)?.await
    }

    async fn read(&mut self) -> Result<RecordStream> {
        let npartitions = self.schema().await?.npartitions;
        let client = Arc::clone(&self.client);
        let query = self.query.clone();
        let qargs = self.config.qargs.clone();
        let page_size = self.config.page_size;
        let base_start = self.config.base_start()?;

        // Partitions are fetched one at a time as the stream is polled,
        // then flattened into individual records.
        let stream = futures::stream::iter(0..npartitions)
            .then(move |index| {
                let client = Arc::clone(&client);
                let query = query.clone();
                let qargs = qargs.clone();
                let window = page_size.window(base_start, index);
                fetch_page(client, query, qargs, window)
            })
            .map_ok(|docs| futures::stream::iter(docs.into_iter().map(Ok)))
            .try_flatten()
            .boxed();

        Ok(stream)
    }

    async fn partition_tasks(&mut self) -> Result<Vec<PartitionTask<Vec<Record>>>> {
        let npartitions = self.schema().await?.npartitions;
        (0..npartitions).map(|i| self.partition_task(i)).collect()
    }

    fn close(&mut self) {
        self.schema = None;
    }
}
