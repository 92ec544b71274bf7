//! Table-oriented Solr source

use super::{fetch_page, probe_plan, DataSource, PartitionTask, SourceSchema};
use crate::client::{ClusterDiscovery, SolrClient};
use crate::config::SolrConfig;
use crate::error::{Error, Result};
use crate::frame::{concat_batches, dtype_map, infer_frame_schema, records_to_batch, resolve_columns};
use crate::paging::PageWindow;
use crate::types::Container;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use async_trait::async_trait;
use futures::FutureExt;
use std::sync::Arc;

/// Execute a query on Solr, exposing results as Arrow record batches
///
/// Schema discovery samples a handful of rows to resolve columns and
/// dtypes. Column order is the explicit `fl` parameter when supplied,
/// otherwise the sorted keys of the first sampled record; every partition
/// batch is built in that same order.
pub struct SolrTableSource {
    query: String,
    config: SolrConfig,
    client: Arc<SolrClient>,
    sample_rows: u32,
    schema: Option<SourceSchema>,
    arrow_schema: Option<SchemaRef>,
    frame: Option<RecordBatch>,
}

impl SolrTableSource {
    /// Rows fetched by the schema-inference sample query
    pub const DEFAULT_SAMPLE_ROWS: u32 = 10;

    /// Connect and create a table source
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
            sample_rows: Self::DEFAULT_SAMPLE_ROWS,
            schema: None,
            arrow_schema: None,
            frame: None,
        }
    }

    /// Override the sample size used for schema inference
    ///
    /// The sample row count is a dedicated parameter; the configured page
    /// size is never touched during inference.
    #[must_use]
    pub fn with_sample_rows(mut self, rows: u32) -> Self {
        self.sample_rows = rows.max(1);
        self
    }

    /// The query this source executes
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The source configuration
    pub fn config(&self) -> &SolrConfig {
        &self.config
    }

    fn partition_task(&self, index: usize) -> Result<PartitionTask<RecordBatch>> {
        let arrow_schema = self
            .arrow_schema
            .clone()
            .ok_or_else(|| Error::schema_inference("schema not discovered yet"))?;
        if arrow_schema.fields().is_empty() {
            return Err(Error::EmptySample);
        }

        let window = self
            .config
            .page_size
            .window(self.config.base_start()?, index);
        let client = Arc::clone(&self.client);
        let query = self.query.clone();
        let qargs = self.config.qargs.clone();

        Ok(async move {
            let docs = fetch_page(client, query, qargs, window).await?;
            records_to_batch(&docs, &arrow_schema)
        }
        .boxed())
    }
}

#[async_trait]
impl DataSource for SolrTableSource {
    type Partition = RecordBatch;
    type Output = RecordBatch;

    fn container(&self) -> Container {
        Container::Dataframe
    }

    async fn schema(&mut self) -> Result<SourceSchema> {
        if self.schema.is_none() {
            let plan = probe_plan(&self.client, &self.query, &self.config).await?;

            // Sample a few rows with an explicit window override; the
            // shared page-size configuration stays untouched.
            let sample_window = PageWindow {
                start: plan.base_start,
                rows: Some(self.sample_rows),
            };
            let sample = fetch_page(
                Arc::clone(&self.client),
                self.query.clone(),
                self.config.qargs.clone(),
                sample_window,
            )
            .await?;

            let columns = resolve_columns(&sample, self.config.field_list());
            let arrow_schema = Arc::new(infer_frame_schema(&sample, &columns));
            tracing::debug!(
                columns = columns.len(),
                sampled = sample.len(),
                "table schema inferred"
            );

            self.schema = Some(SourceSchema {
                rows: plan.row_count(),
                npartitions: plan.npartitions(),
                columns: Some(columns),
                dtypes: Some(dtype_map(&arrow_schema)),
            });
            self.arrow_schema = Some(arrow_schema);
        }
        Ok(self.schema.clone().expect("schema just cached"))
    }

    async fn read_partition(&mut self, index: usize) -> Result<RecordBatch> {
        self.schema().await?;
        self.partition_task(index)?.await
    }

    async fn read(&mut self) -> Result<RecordBatch> {
        if let Some(frame) = &self.frame {
            return Ok(frame.clone());
        }

        let npartitions = self.schema().await?.npartitions;
        let mut batches = Vec::with_capacity(npartitions);
        for index in 0..npartitions {
            batches.push(self.partition_task(index)?.await?);
        }

        let arrow_schema = self
            .arrow_schema
            .clone()
            .ok_or_else(|| Error::schema_inference("schema not discovered yet"))?;
        let frame = concat_batches(&arrow_schema, &batches)?;
        self.frame = Some(frame.clone());
        Ok(frame)
    }

    async fn partition_tasks(&mut self) -> Result<Vec<PartitionTask<RecordBatch>>> {
        let npartitions = self.schema().await?.npartitions;
        (0..npartitions).map(|i| self.partition_task(i)).collect()
    }

    fn close(&mut self) {
        // Schema and the cached materialization go together
        self.schema = None;
        self.arrow_schema = None;
        self.frame = None;
    }
}
