use criterion::{criterion_group, criterion_main, Criterion};
use tabulon_core::config::ViewConfig;
use tabulon_core::prelude::{ColumnSpec, Record};
use tabulon_view::TableView;

fn make_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("department", "Department"),
        ColumnSpec::new("salary", "Salary"),
    ]
}

fn make_records(rows: usize) -> Vec<Record> {
    let departments = ["Engineering", "Marketing", "Sales", "Finance"];
    (0..rows)
        .map(|i| {
            Record::new()
                .with("id", i as i64)
                .with("name", format!("Person{}", i))
                .with("department", departments[i % departments.len()])
                .with("salary", 40_000 + ((i * 37) % 900) as i64 * 100)
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    c.bench_function("filter_sort_page_1k", |b| {
        let mut view = TableView::new(ViewConfig::default());
        view.configure(make_columns(), make_records(1024)).unwrap();
        b.iter(|| {
            view.set_query("Engineering").unwrap();
            view.set_sort("salary").unwrap();
            let page = view.visible_page();
            assert!(!page.records.is_empty());
            view.set_query("").unwrap();
        })
    });
}

fn bench_export(c: &mut Criterion) {
    c.bench_function("export_1k", |b| {
        let mut view = TableView::new(ViewConfig::default());
        view.configure(make_columns(), make_records(1024)).unwrap();
        view.set_sort("name").unwrap();
        b.iter(|| {
            let text = view.export_text(b',').unwrap();
            assert!(!text.is_empty());
        })
    });
}

criterion_group!(pipeline, bench_recompute, bench_export);
criterion_main!(pipeline);
