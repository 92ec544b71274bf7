//! Partition paging arithmetic
//!
//! Maps a total hit count and a configured page size onto a deterministic
//! set of `(start, rows)` windows, one per partition. This is the only
//! arithmetic the connector owns; the index itself handles the offsets.

mod types;

pub use types::{PagePlan, PageSize, PageWindow};

#[cfg(test)]
mod tests;
