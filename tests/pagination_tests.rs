//! Page stage: window bounds, page counts, clamping, invalid sizes.

use tabulon_stages::{PageStage, StageError};

#[test]
fn test_page_count_formula() {
    assert_eq!(PageStage::page_count(0, 5), 1);
    assert_eq!(PageStage::page_count(1, 5), 1);
    assert_eq!(PageStage::page_count(5, 5), 1);
    assert_eq!(PageStage::page_count(6, 5), 2);
    assert_eq!(PageStage::page_count(12, 5), 3);
    assert_eq!(PageStage::page_count(100, 1), 100);
}

#[test]
fn test_slice_bounds() {
    let order: Vec<usize> = (0..12).collect();
    let stage = PageStage::new(5, 1).expect("valid page");
    let (window, meta) = stage.slice(&order);
    assert_eq!(window, &[5, 6, 7, 8, 9]);
    assert_eq!(meta.page_index, 1);
    assert_eq!(meta.page_count, 3);
    assert_eq!(meta.total_count, 12);
}

#[test]
fn test_last_page_may_be_short() {
    let order: Vec<usize> = (0..12).collect();
    let stage = PageStage::new(5, 2).expect("valid page");
    let (window, meta) = stage.slice(&order);
    assert_eq!(window, &[10, 11]);
    assert_eq!(meta.page_count, 3);
}

#[test]
fn test_out_of_range_index_clamps_in_slice() {
    let order: Vec<usize> = (0..4).collect();
    let stage = PageStage::new(10, 7).expect("valid page");
    let (window, meta) = stage.slice(&order);
    assert_eq!(window, &[0, 1, 2, 3]);
    assert_eq!(meta.page_index, 0);
    assert_eq!(meta.page_count, 1);
}

#[test]
fn test_empty_order_has_one_empty_page() {
    let order: Vec<usize> = Vec::new();
    let stage = PageStage::new(5, 0).expect("valid page");
    let (window, meta) = stage.slice(&order);
    assert!(window.is_empty());
    assert_eq!(meta.page_count, 1);
    assert_eq!(meta.total_count, 0);
}

#[test]
fn test_clamp_index() {
    assert_eq!(PageStage::clamp_index(12, 5, 0), 0);
    assert_eq!(PageStage::clamp_index(12, 5, 2), 2);
    assert_eq!(PageStage::clamp_index(12, 5, 99), 2);
    assert_eq!(PageStage::clamp_index(0, 5, 3), 0);
}

#[test]
fn test_zero_page_size_is_rejected() {
    match PageStage::new(0, 0) {
        Err(StageError::Page(_)) => {}
        other => panic!("expected page error, got {:?}", other),
    }
}
