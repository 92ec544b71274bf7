//! # Solr Connector
//!
//! A data-source connector for Apache Solr: execute a query and expose the
//! results either as a lazy sequence of records or as Arrow tables, with
//! partitioned retrieval for scalability.
//!
//! ## Features
//!
//! - **Two source variants**: record streams (`solr-sequence`) and Arrow
//!   RecordBatch tables (`solr-table`) over one shared query/paging core
//! - **Partitioned fetch**: fixed-size `(start, rows)` windows derived from
//!   a cheap zero-row probe; partitions are independent and idempotent
//! - **Schema inference**: column order and dtypes resolved from a small
//!   sample for tabular output
//! - **Cloud or direct**: single-node connections, or collections resolved
//!   through a pluggable coordination-service discovery seam
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solr_connector::{Result, SolrConfig, SolrTableSource};
//! use solr_connector::source::DataSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SolrConfig::builder("http://localhost:8983/solr", "products")
//!         .page_size(512)?
//!         .build();
//!
//!     let mut source = SolrTableSource::new("*:*", config).await?;
//!     let schema = source.schema().await?;
//!     println!("{} rows in {} partitions", schema.rows, schema.npartitions);
//!
//!     let frame = source.read().await?;
//!     source.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      DataSource Interface                       │
//! │  schema() → SourceSchema     read_partition(i) → page           │
//! │  read() → stream / frame     partition_tasks() → deferred graph │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬──────────────────────────┐
//! │   Auth   │  Client   │    Paging     │          Frame           │
//! ├──────────┼───────────┼───────────────┼──────────────────────────┤
//! │ Basic    │ select()  │ PagePlan      │ column resolution        │
//! │ Negotiate│ discovery │ PageWindow    │ dtype inference          │
//! │ SSL cert │ normalize │ npartitions   │ RecordBatch construction │
//! └──────────┴───────────┴───────────────┴──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the connector
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication modes and certificate handling
pub mod auth;

/// Solr query transport and cluster discovery
pub mod client;

/// Source configuration
pub mod config;

/// Partition paging arithmetic
pub mod paging;

/// Arrow schema inference and batch construction
pub mod frame;

/// Data source trait and the two source variants
pub mod source;

/// Host-framework registration contract
pub mod registry;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{SolrConfig, SolrConfigBuilder};
pub use registry::{OpenArgs, Registry, SourceDescriptor};
pub use source::{DataSource, SolrSequenceSource, SolrTableSource, SourceSchema};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
