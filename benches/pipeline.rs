use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use table_pipeline::processing::{process, SortState, TableQuery};
use table_pipeline::sample::{people, people_columns, people_schema};
use table_pipeline::types::DataSet;

/// The reference dataset repeated `times` times.
fn repeated_people(times: usize) -> DataSet {
    let base = people();
    let rows = (0..times).flat_map(|_| base.rows.iter().cloned()).collect();
    DataSet::new(people_schema(), rows)
}

fn bench_pipeline(c: &mut Criterion) {
    let columns = people_columns();
    let mut group = c.benchmark_group("process");

    for times in [1usize, 10, 100] {
        let ds = repeated_people(times);

        let mut query = TableQuery {
            search: "a".to_string(),
            sort: SortState::descending("age"),
            page: 3,
            page_size: 25,
            ..TableQuery::default()
        };
        query.filters.insert("status".into(), "Active".into());

        group.bench_with_input(BenchmarkId::new("search_filter_sort", ds.row_count()), &ds, |b, ds| {
            b.iter(|| process(black_box(ds), &columns, black_box(&query)))
        });

        let plain = TableQuery::default();
        group.bench_with_input(BenchmarkId::new("first_page", ds.row_count()), &ds, |b, ds| {
            b.iter(|| process(black_box(ds), &columns, black_box(&plain)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
