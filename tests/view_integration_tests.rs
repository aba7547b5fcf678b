//! End-to-end view engine tests: the state machine over the full pipeline.


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tabulon_core::config::ViewConfig;
use tabulon_view::{SortDirection, TableView, ViewError, ViewEvent};
use test_data_gen::{employee_columns, employee_records};

fn configured_view(page_size: usize) -> TableView {
    let cfg = ViewConfig {
        default_page_size: page_size,
        ..Default::default()
    };
    let mut view = TableView::new(cfg);
    view.configure(employee_columns(), employee_records())
        .expect("configure failed");
    view
}

#[test]
fn test_salary_toggle_descending_second_page() {
    let mut view = configured_view(5);

    view.set_sort("salary").expect("sort failed");
    view.set_sort("salary").expect("sort failed"); // toggle to descending
    view.set_page(1).expect("page failed");

    let page = view.visible_page();
    assert_eq!(page.page_count, 3);
    assert_eq!(page.total_count, 12);
    assert_eq!(page.page_index, 1);

    // Ranks 6-10 by descending salary.
    let names: Vec<String> = page.records.iter().map(|r| r.rendered("name")).collect();
    assert_eq!(names, vec!["Mallory", "Frank", "Ivan", "Dan", "Heidi"]);
}

#[test]
fn test_sort_toggle_law() {
    let mut view = configured_view(5);

    view.set_sort("name").expect("sort failed");
    assert_eq!(
        view.sort_state().as_ref().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );

    view.set_sort("name").expect("sort failed");
    assert_eq!(
        view.sort_state().as_ref().map(|s| s.direction),
        Some(SortDirection::Descending)
    );

    view.set_sort("name").expect("sort failed");
    assert_eq!(
        view.sort_state().as_ref().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );

    // Selecting a different column resets to ascending.
    view.set_sort("name").expect("sort failed");
    view.set_sort("salary").expect("sort failed");
    assert_eq!(
        view.sort_state().as_ref().map(|s| (s.key.clone(), s.direction)),
        Some(("salary".to_string(), SortDirection::Ascending))
    );
}

#[test]
fn test_engineering_query_filters_in_source_order() {
    let mut view = configured_view(25);
    view.set_query("Engineering").expect("query failed");

    let page = view.visible_page();
    assert_eq!(page.total_count, 5);
    let names: Vec<String> = page.records.iter().map(|r| r.rendered("name")).collect();
    assert_eq!(names, vec!["Alice", "Carol", "Erin", "Grace", "Judy"]);
}

#[test]
fn test_zero_page_size_rejected_and_state_unchanged() {
    let mut view = configured_view(5);
    view.set_page(2).expect("page failed");
    let before = view.page_state();

    match view.set_page_size(0) {
        Err(ViewError::Config(_)) => {}
        other => panic!("expected configuration error, got {:?}", other),
    }
    assert_eq!(view.page_state(), before);
}

#[test]
fn test_unknown_sort_column_rejected_and_state_unchanged() {
    let mut view = configured_view(5);
    view.set_sort("salary").expect("sort failed");

    match view.set_sort("bogus") {
        Err(ViewError::Config(_)) => {}
        other => panic!("expected configuration error, got {:?}", other),
    }
    assert_eq!(
        view.sort_state().as_ref().map(|s| s.key.as_str()),
        Some("salary")
    );
}

#[test]
fn test_unknown_filter_column_rejected() {
    let mut view = configured_view(5);
    assert!(matches!(
        view.set_column_filter("bogus", "x"),
        Err(ViewError::Config(_))
    ));
    assert!(view.filter_state().is_empty());
}

#[test]
fn test_page_index_reclamps_when_filter_shrinks_set() {
    let mut view = configured_view(5);
    view.set_page(2).expect("page failed");
    assert_eq!(view.page_state().page_index, 2);

    // 5 engineering records fit on a single page; index must clamp to 0
    // before the next read.
    view.set_query("Engineering").expect("query failed");
    assert_eq!(view.page_state().page_index, 0);
    let page = view.visible_page();
    assert_eq!(page.page_count, 1);
    assert_eq!(page.records.len(), 5);
}

#[test]
fn test_set_page_clamps_out_of_range() {
    let mut view = configured_view(5);
    view.set_page(99).expect("page failed");
    assert_eq!(view.page_state().page_index, 2);
}

#[test]
fn test_reconfigure_resets_filter_sort_page() {
    let mut view = configured_view(5);
    view.set_query("Engineering").expect("query failed");
    view.set_sort("salary").expect("sort failed");
    view.set_page(1).expect("page failed");

    view.configure(employee_columns(), employee_records())
        .expect("reconfigure failed");

    assert!(view.filter_state().is_empty());
    assert!(view.sort_state().is_none());
    assert_eq!(view.page_state().page_index, 0);
    assert_eq!(view.visible_page().total_count, 12);
}

#[test]
fn test_export_reflects_filter_and_sort_but_not_paging() {
    let mut view = configured_view(5);
    view.set_column_filter("department", "Engineering")
        .expect("filter failed");
    view.set_sort("salary").expect("sort failed");
    view.set_sort("salary").expect("sort failed"); // descending
    view.set_page(0).expect("page failed");

    let text = view.export_text(b',').expect("export failed");
    let lines: Vec<&str> = text.lines().collect();
    // Header plus all 5 filtered rows, not just the visible page.
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "ID,Name,Department,Salary");
    assert!(lines[1].contains("Judy"));
    assert!(lines[5].contains("Erin"));

    // Export must not have mutated any state.
    assert_eq!(view.page_state().page_index, 0);
    assert_eq!(view.visible_page().total_count, 5);
}

#[test]
fn test_subscribers_fire_once_per_successful_mutation() {
    let mut view = configured_view(5);
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    view.subscribe(move |_event, _meta| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    view.set_query("a").expect("query failed");
    view.set_sort("name").expect("sort failed");
    view.set_page(0).expect("page failed");
    assert_eq!(count.load(Ordering::SeqCst), 3);

    // Rejected mutations fire nothing.
    let _ = view.set_sort("bogus");
    let _ = view.set_page_size(0);
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_subscriber_events_and_unsubscribe() {
    let mut view = configured_view(5);
    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let id = view.subscribe(move |event, meta| {
        sink.lock().unwrap().push((event.clone(), meta.total_count));
    });

    view.set_query("Engineering").expect("query failed");
    view.configure(employee_columns(), employee_records())
        .expect("reconfigure failed");

    {
        let log = events.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                (ViewEvent::FilterChanged, 5),
                (ViewEvent::Configured, 12),
            ]
        );
    }

    assert!(view.unsubscribe(id));
    assert!(!view.unsubscribe(id));
    view.set_page(1).expect("page failed");
    assert_eq!(events.lock().unwrap().len(), 2);
}

#[test]
fn test_recompute_is_deterministic() {
    let mut a = configured_view(5);
    let mut b = configured_view(5);
    for view in [&mut a, &mut b] {
        view.set_query("e").expect("query failed");
        view.set_sort("department").expect("sort failed");
        view.set_sort("department").expect("sort failed");
    }

    let ids = |v: &TableView| -> Vec<String> {
        v.visible_page()
            .records
            .iter()
            .map(|r| r.rendered("id"))
            .collect()
    };
    assert_eq!(ids(&a), ids(&b));
    assert_eq!(a.export_text(b',').unwrap(), b.export_text(b',').unwrap());
}

#[test]
fn test_page_navigation_uses_cached_order() {
    // Page moves do not change the (filter, sort) snapshot, so the derived
    // order must be identical across them.
    let mut view = configured_view(5);
    view.set_sort("salary").expect("sort failed");

    let first: Vec<String> = view
        .visible_page()
        .records
        .iter()
        .map(|r| r.rendered("id"))
        .collect();

    view.set_page(1).expect("page failed");
    view.set_page(0).expect("page failed");

    let again: Vec<String> = view
        .visible_page()
        .records
        .iter()
        .map(|r| r.rendered("id"))
        .collect();
    assert_eq!(first, again);
}

#[test]
fn test_duplicate_column_keys_rejected_at_configure() {
    let mut view = TableView::new(ViewConfig::default());
    let columns = vec![
        tabulon_core::column::ColumnSpec::new("id", "ID"),
        tabulon_core::column::ColumnSpec::new("id", "Identifier"),
    ];
    assert!(matches!(
        view.configure(columns, employee_records()),
        Err(ViewError::Config(_))
    ));
}

#[test]
fn test_empty_source_is_not_an_error() {
    let mut view = TableView::new(ViewConfig::default());
    view.configure(employee_columns(), Vec::new())
        .expect("configure failed");
    view.set_query("anything").expect("query failed");

    let page = view.visible_page();
    assert_eq!(page.total_count, 0);
    assert_eq!(page.page_count, 1);
    assert!(page.records.is_empty());
}

#[test]
fn test_clearing_filters_restores_full_set() {
    let mut view = configured_view(5);
    view.set_query("Engineering").expect("query failed");
    view.set_column_filter("name", "a").expect("filter failed");
    assert!(view.filtered_count() < 12);

    view.clear_filters().expect("clear failed");
    assert_eq!(view.filtered_count(), 12);
}

#[test]
fn test_empty_filter_value_removes_entry() {
    let mut view = configured_view(5);
    view.set_column_filter("name", "a").expect("filter failed");
    assert_eq!(view.filter_state().column_filters.len(), 1);

    view.set_column_filter("name", "").expect("filter failed");
    assert!(view.filter_state().column_filters.is_empty());
}

#[test]
fn test_clear_sort_restores_filtered_order() {
    let mut view = configured_view(25);
    view.set_sort("salary").expect("sort failed");
    view.clear_sort().expect("clear failed");

    let ids: Vec<String> = view
        .visible_page()
        .records
        .iter()
        .map(|r| r.rendered("id"))
        .collect();
    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_max_page_size_enforced() {
    let cfg = ViewConfig {
        default_page_size: 10,
        max_page_size: Some(50),
        ..Default::default()
    };
    let mut view = TableView::new(cfg);
    view.configure(employee_columns(), employee_records())
        .expect("configure failed");

    assert!(view.set_page_size(50).is_ok());
    assert!(matches!(
        view.set_page_size(51),
        Err(ViewError::Config(_))
    ));
    assert_eq!(view.page_state().page_size, 50);
}
