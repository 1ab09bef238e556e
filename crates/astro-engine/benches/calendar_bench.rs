use astro_engine::{current_tithi, next_five_ekadashis, next_five_festivals};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_calendar(c: &mut Criterion) {
    let from = NaiveDate::from_ymd_opt(2024, 10, 20)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();

    c.bench_function("current_tithi", |b| b.iter(|| current_tithi(black_box(from))));
    c.bench_function("next_five_ekadashis", |b| {
        b.iter(|| next_five_ekadashis(black_box(from)))
    });
    c.bench_function("next_five_festivals", |b| {
        b.iter(|| next_five_festivals(black_box(from)))
    });
}

criterion_group!(benches, bench_calendar);
criterion_main!(benches);
