use bytes::Bytes;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use npv_header::HeaderParser;
use npv_tests::{NpyFixture, records_fixture};
use npv_view::ArrayView;

/// `n` records of `(id: <u4, x: <f8, y: >f8, tag: |S8)`.
fn wide_records(n: usize) -> Bytes {
    let mut data = Vec::with_capacity(n * 28);
    for i in 0..n {
        let id = u32::try_from(i).unwrap();
        data.extend_from_slice(&id.to_le_bytes());
        data.extend_from_slice(&(f64::from(id) * 0.5).to_le_bytes());
        data.extend_from_slice(&(f64::from(id) * -0.25).to_be_bytes());
        data.extend_from_slice(format!("row{:05}", i % 100_000).as_bytes());
    }
    NpyFixture::new("[('id', '<u4'), ('x', '<f8'), ('y', '>f8'), ('tag', '|S8')]")
        .shape(&[n])
        .data(data)
        .build()
}

fn bench_header_parse(c: &mut Criterion) {
    let header = records_fixture().header_text();

    c.bench_function("header_parse", |b| {
        b.iter(|| HeaderParser::parse(&header).unwrap());
    });
}

fn bench_from_buffer(c: &mut Criterion) {
    let buffer = wide_records(10_000);

    c.bench_function("from_buffer", |b| {
        b.iter(|| ArrayView::from_buffer(buffer.clone(), None).unwrap());
    });
}

fn bench_row_access(c: &mut Criterion) {
    let view = ArrayView::from_buffer(wide_records(10_000), None).unwrap();
    let numeric = view.fields(&["id", "x", "y"]).unwrap();

    let mut group = c.benchmark_group("row_access");
    group.bench_function("record", |b| {
        b.iter(|| view.row(5_000).unwrap());
    });
    group.bench_function("numeric_projection", |b| {
        b.iter(|| numeric.row(5_000).unwrap());
    });
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for n in [1_000usize, 10_000, 100_000] {
        let view = ArrayView::from_buffer(wide_records(n), None).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &view, |b, view| {
            b.iter(|| view.iter().count());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_header_parse,
    bench_from_buffer,
    bench_row_access,
    bench_iteration
);
criterion_main!(benches);
