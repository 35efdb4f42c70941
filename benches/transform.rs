use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eci2ecef::time::gmst_rad;
use eci2ecef::{eci_to_ecef, CalendarTime, Cartesian3};

fn bench_transform(c: &mut Criterion) {
    let t = CalendarTime::new(2020.0, 1.0, 1.0, 0.0, 0.0, 0.0);
    let eci = Cartesian3::new(7000.0, 0.0, 0.0);

    c.bench_function("gmst_rad", |b| b.iter(|| gmst_rad(black_box(2_458_849.5))));
    c.bench_function("eci_to_ecef", |b| {
        b.iter(|| eci_to_ecef(black_box(&t), black_box(eci)))
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
