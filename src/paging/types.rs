//! Page size and partition window types

use crate::error::{Error, Result};

// ============================================================================
// Page Size
// ============================================================================

/// Desired partition size for paged retrieval
///
/// `Unpaged` is the "no paging" sentinel: the whole result set is fetched
/// as a single partition and no `rows` parameter is forced onto the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// Fetch this many rows per partition (always positive)
    Rows(u32),
    /// No paging: everything in one partition
    Unpaged,
}

impl PageSize {
    /// Default page size when none is configured
    pub const DEFAULT_ROWS: u32 = 1024;

    /// Validate a user-supplied page size
    ///
    /// Zero and negative values are rejected here, before any network
    /// activity takes place.
    pub fn rows(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(Error::InvalidPageSize { value });
        }
        u32::try_from(value)
            .map(PageSize::Rows)
            .map_err(|_| Error::InvalidPageSize { value })
    }

    /// The per-partition row count, or None when unpaged
    pub fn as_rows(&self) -> Option<u32> {
        match self {
            PageSize::Rows(n) => Some(*n),
            PageSize::Unpaged => None,
        }
    }

    /// Whether paging is disabled
    pub fn is_unpaged(&self) -> bool {
        matches!(self, PageSize::Unpaged)
    }

    /// The `(start, rows)` window for partition `index` past `base_start`
    ///
    /// Pure arithmetic over the configured size; no hit count is needed, so
    /// a partition can be fetched before (or without) schema discovery.
    pub fn window(&self, base_start: u64, index: usize) -> PageWindow {
        match self {
            PageSize::Unpaged => PageWindow {
                start: base_start,
                rows: None,
            },
            PageSize::Rows(rows) => PageWindow {
                start: base_start + index as u64 * u64::from(*rows),
                rows: Some(*rows),
            },
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(Self::DEFAULT_ROWS)
    }
}

// ============================================================================
// Page Window
// ============================================================================

/// The `(start, rows)` pair a single partition maps to
///
/// `rows` is None for an unpaged fetch, in which case no row limit is
/// written onto the wire and the caller's own `rows` parameter (if any)
/// governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Absolute offset into the result set
    pub start: u64,
    /// Row limit for this window
    pub rows: Option<u32>,
}

// ============================================================================
// Page Plan
// ============================================================================

/// Deterministic mapping from partition ordinals to page windows
///
/// Built once per schema discovery from the probe query's hit count, the
/// caller's base `start` offset and the configured page size. Windows are
/// pure arithmetic: computing the same window twice yields the same
/// `(start, rows)` pair, so partition fetches are idempotent and safe to
/// run out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Base offset from the caller's explicit `start` parameter
    pub base_start: u64,
    /// Configured page size
    pub page_size: PageSize,
    /// Total hit count reported by the probe query
    pub hits: u64,
}

impl PagePlan {
    /// Create a plan from a probe result
    pub fn new(base_start: u64, page_size: PageSize, hits: u64) -> Self {
        Self {
            base_start,
            page_size,
            hits,
        }
    }

    /// Number of rows the plan covers (hits past the base offset)
    pub fn row_count(&self) -> u64 {
        self.hits.saturating_sub(self.base_start)
    }

    /// Number of partitions: `ceil((hits - start) / rows)`, or 1 when unpaged
    pub fn npartitions(&self) -> usize {
        match self.page_size {
            PageSize::Unpaged => 1,
            PageSize::Rows(rows) => {
                let remaining = self.row_count();
                (remaining.div_ceil(u64::from(rows))) as usize
            }
        }
    }

    /// The `(start, rows)` window for partition `index`
    ///
    /// Out-of-range indices are not rejected here; the index's own handling
    /// of over-range offsets governs, matching the query transport contract.
    pub fn window(&self, index: usize) -> PageWindow {
        self.page_size.window(self.base_start, index)
    }
}
