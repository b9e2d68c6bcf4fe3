//! Criterion benchmarks for the enrichment hot paths.
//!
//! Benchmarks:
//! 1. Full pipeline over daily series of increasing length
//! 2. Individual stages (SMA 120, stochastic KD, MACD) at 1000 bars

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use folio_core::domain::Bar;
use folio_core::enrich::enrich_series;
use folio_core::indicators::{Indicator, Macd, Sma, Stochastic};

fn make_bars(n: usize) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                symbol: "BENCH".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000 + (i as u64 % 500_000),
            }
        })
        .collect()
}

fn bench_enrich_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("enrich_series");
    for n in [250usize, 1_000, 5_000] {
        let bars = make_bars(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bars, |b, bars| {
            b.iter(|| enrich_series(black_box(bars)));
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let bars = make_bars(1_000);

    c.bench_function("sma_120_1000_bars", |b| {
        let sma = Sma::new(120);
        b.iter(|| sma.compute(black_box(&bars)));
    });

    c.bench_function("stochastic_9_1000_bars", |b| {
        let stochastic = Stochastic::new(9);
        b.iter(|| stochastic.compute(black_box(&bars)));
    });

    c.bench_function("macd_12_26_9_1000_bars", |b| {
        let macd = Macd::new(12, 26, 9);
        b.iter(|| macd.compute(black_box(&bars)));
    });
}

criterion_group!(benches, bench_enrich_series, bench_stages);
criterion_main!(benches);
