//! Tabular output
//!
//! Turns pages of normalized Solr records into Arrow RecordBatches.
//! Column order is always explicit: the source resolves it once from the
//! `fl` parameter or the sampled records, and every partition batch is
//! built in that same order.

mod schema;

pub use schema::{
    concat_batches, dtype_map, infer_frame_schema, records_to_batch, resolve_columns,
};
