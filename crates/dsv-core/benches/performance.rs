use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dsv_core::{DsvModel, DsvModelOptions, EditableDsvModel, Region, column_label};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn large_table(rows: usize, columns: usize) -> String {
    let header: Vec<String> = (1..=columns).map(column_label).collect();
    let mut out = String::with_capacity(rows * columns * 8);
    out.push_str(&header.join(","));
    out.push('\n');
    for row in 0..rows {
        for column in 0..columns {
            if column > 0 {
                out.push(',');
            }
            out.push_str(&format!("r{row:05}c{column:02}"));
        }
        out.push('\n');
    }
    out
}

fn bench_initial_parse(c: &mut Criterion) {
    let text = large_table(10_000, 12);
    c.bench_function("initial_parse/10k_rows", |b| {
        b.iter(|| {
            let model = DsvModel::new(DsvModelOptions::new(black_box(text.as_str()), ","));
            black_box(model.row_count(Region::Body));
        })
    });
}

fn bench_cell_edits(c: &mut Criterion) {
    let text = large_table(10_000, 12);
    c.bench_function("cell_edits/100_random_cells", |b| {
        b.iter_batched(
            || {
                (
                    EditableDsvModel::from_options(DsvModelOptions::new(text.as_str(), ",")),
                    StdRng::seed_from_u64(42),
                )
            },
            |(mut table, mut rng)| {
                for _ in 0..100 {
                    let row = rng.gen_range(0..10_000);
                    let column = rng.gen_range(0..12);
                    table.set_data(row, column, "edited").unwrap();
                    table.resolve_parse();
                }
                black_box(table.model().raw_length());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_row_churn(c: &mut Criterion) {
    let text = large_table(10_000, 12);
    c.bench_function("row_churn/50_insert_remove_pairs", |b| {
        b.iter_batched(
            || EditableDsvModel::from_options(DsvModelOptions::new(text.as_str(), ",")),
            |mut table| {
                for _ in 0..50 {
                    table.add_row(5_000).unwrap();
                    table.resolve_parse();
                    table.remove_row(5_000).unwrap();
                    table.resolve_parse();
                }
                black_box(table.model().row_count(Region::Body));
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_initial_parse, bench_cell_edits, bench_row_churn);
criterion_main!(benches);
