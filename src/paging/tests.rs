//! Tests for partition paging arithmetic

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_page_size_rejects_zero_and_negative() {
    for value in [0, -5, -1, i64::MIN] {
        match PageSize::rows(value) {
            Err(Error::InvalidPageSize { value: v }) => assert_eq!(v, value),
            other => panic!("expected InvalidPageSize for {value}, got {other:?}"),
        }
    }
}

#[test]
fn test_page_size_accepts_positive() {
    assert_eq!(PageSize::rows(1).unwrap(), PageSize::Rows(1));
    assert_eq!(PageSize::rows(1024).unwrap(), PageSize::Rows(1024));
}

#[test]
fn test_page_size_default() {
    assert_eq!(PageSize::default(), PageSize::Rows(1024));
    assert_eq!(PageSize::default().as_rows(), Some(1024));
    assert!(PageSize::Unpaged.is_unpaged());
}

// npartitions == ceil((hits - start) / rows)
#[test_case(5, 0, 2, 3; "five hits page two")]
#[test_case(5, 0, 5, 1; "exact single page")]
#[test_case(6, 0, 2, 3; "even split")]
#[test_case(7, 0, 2, 4; "trailing short page")]
#[test_case(0, 0, 10, 0; "no hits")]
#[test_case(10, 4, 3, 2; "base offset subtracted")]
#[test_case(10, 10, 3, 0; "offset past hits")]
#[test_case(1, 0, 1024, 1; "single row default page")]
fn test_npartitions(hits: u64, start: u64, rows: u32, expected: usize) {
    let plan = PagePlan::new(start, PageSize::Rows(rows), hits);
    assert_eq!(plan.npartitions(), expected);
}

#[test]
fn test_npartitions_unpaged_is_one() {
    let plan = PagePlan::new(0, PageSize::Unpaged, 1_000_000);
    assert_eq!(plan.npartitions(), 1);

    // Even with zero hits the unpaged sentinel yields a single partition
    let plan = PagePlan::new(0, PageSize::Unpaged, 0);
    assert_eq!(plan.npartitions(), 1);
}

#[test]
fn test_window_offsets() {
    // Scenario from the original connector: "*:*", page size 2, 5 hits
    let plan = PagePlan::new(0, PageSize::Rows(2), 5);
    assert_eq!(plan.npartitions(), 3);
    assert_eq!(
        plan.window(0),
        PageWindow {
            start: 0,
            rows: Some(2)
        }
    );
    assert_eq!(
        plan.window(1),
        PageWindow {
            start: 2,
            rows: Some(2)
        }
    );
    assert_eq!(
        plan.window(2),
        PageWindow {
            start: 4,
            rows: Some(2)
        }
    );
}

#[test]
fn test_window_respects_base_start() {
    let plan = PagePlan::new(100, PageSize::Rows(10), 150);
    assert_eq!(plan.row_count(), 50);
    assert_eq!(plan.npartitions(), 5);
    assert_eq!(plan.window(0).start, 100);
    assert_eq!(plan.window(3).start, 130);
}

#[test]
fn test_window_unpaged() {
    let plan = PagePlan::new(7, PageSize::Unpaged, 42);
    assert_eq!(
        plan.window(0),
        PageWindow {
            start: 7,
            rows: None
        }
    );
}

#[test]
fn test_window_is_deterministic() {
    let plan = PagePlan::new(0, PageSize::Rows(3), 10);
    for i in 0..plan.npartitions() {
        assert_eq!(plan.window(i), plan.window(i));
    }
}
