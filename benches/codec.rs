use std::time::Duration;

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion,
    Throughput,
};
use pipegrid::{Grid, ParseOptions};

fn make_plain_table(rows: usize, columns: usize) -> String {
    let mut grid = Grid::with_size(columns, rows);
    for row in 0..rows {
        for column in 0..columns {
            grid.set_cell_text(row, column, &format!("r{row}c{column}"))
                .unwrap();
        }
    }
    grid.toggle_header(0).unwrap();
    pipegrid::to_string(&grid)
}

fn make_rich_table(rows: usize) -> String {
    let mut grid = Grid::with_size(4, rows);
    for row in 0..rows {
        grid.set_cell_text(row, 0, &format!("item {row}")).unwrap();
        grid.set_cell_text(row, 1, &format!("(note | {row})")).unwrap();
        grid.set_cell_text(row, 2, &format!("[link|{row}](https://example.com/{row})"))
            .unwrap();
        grid.set_cell_text(row, 3, "first line\nsecond line with `tick`")
            .unwrap();
    }
    pipegrid::to_string(&grid)
}

fn criterion_config() -> Criterion {
    if std::env::var("PIPEGRID_BENCH_MINIMAL").is_ok() {
        Criterion::default()
            .warm_up_time(Duration::from_secs(0))
            .measurement_time(Duration::from_millis(10))
            .sample_size(1)
            .nresamples(1)
    } else {
        Criterion::default()
    }
}

fn bench_parse(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, text: &str) {
    let options = ParseOptions::default();
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function(BenchmarkId::new("parse", name), |b| {
        b.iter(|| {
            let grid = pipegrid::from_str_with_options(black_box(text), &options);
            black_box(grid);
        });
    });
}

fn bench_serialize(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, text: &str) {
    let grid = pipegrid::from_str(text);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function(BenchmarkId::new("serialize", name), |b| {
        b.iter(|| {
            let encoded = pipegrid::to_string(black_box(&grid));
            black_box(encoded);
        });
    });
}

fn bench_tokenize(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, text: &str) {
    let lines: Vec<&str> = text.lines().collect();
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function(BenchmarkId::new("tokenize", name), |b| {
        b.iter(|| {
            for line in &lines {
                black_box(pipegrid::tokenize_line(black_box(line)));
            }
        });
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let small = make_plain_table(10, 4);
    let large = make_plain_table(2_000, 12);
    let rich = make_rich_table(500);

    let mut codec = c.benchmark_group("codec");
    for (name, text) in [("small", &small), ("large", &large), ("rich", &rich)] {
        bench_parse(&mut codec, name, text);
        bench_serialize(&mut codec, name, text);
        bench_tokenize(&mut codec, name, text);
    }
    codec.finish();

    let mut compact = c.benchmark_group("compact");
    compact.bench_function("expand_64x64", |b| {
        b.iter(|| black_box(pipegrid::from_str(black_box("64x64"))));
    });
    compact.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = criterion_benchmark
}
criterion_main!(benches);
