use std::hint::black_box;

use cat_risk::{BetaRisk, CatSimulation, EventSet};
use cat_time::Date;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn bench_beta_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("beta_paths");
    let (start, end) = (date(2020, 1, 1), date(2022, 12, 31));
    for years in [10.0, 1.0, 0.1] {
        let model = BetaRisk::new(1e9, years, 1e7, 1e6).unwrap();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(years), &model, |b, model| {
            let mut sim = model.seeded_simulation(start, end, 42).unwrap();
            let mut path = Vec::new();
            b.iter(|| {
                sim.next_path(&mut path).unwrap();
                black_box(path.len())
            });
        });
    }
    group.finish();
}

fn bench_event_set_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_set_replay");
    for per_year in [1usize, 50] {
        let mut events: Vec<_> = (1950..2020u16)
            .flat_map(|y| (0..per_year).map(move |k| (date(y, 1 + (k % 12) as u8, 1), k as f64)))
            .collect();
        events.sort_by_key(|e| e.0);
        let model = EventSet::new(events, date(1950, 1, 1), date(2019, 12, 31)).unwrap();
        group.throughput(Throughput::Elements(70 * per_year as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_year), &model, |b, model| {
            b.iter(|| {
                let mut sim = model.simulation(date(2030, 1, 1), date(2030, 12, 31)).unwrap();
                let mut path = Vec::new();
                let mut n = 0;
                while sim.next_path(&mut path).unwrap() {
                    n += path.len();
                }
                black_box(n)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_beta_paths, bench_event_set_replay);
criterion_main!(benches);
