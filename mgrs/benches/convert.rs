use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mgrs::{convert_geodetic_to_mgrs, Ellipsoid, TransverseMercator};

fn bench_utm_path(c: &mut Criterion) {
    let wgs84 = Ellipsoid::WGS84;

    c.bench_function("geodetic_to_mgrs_utm", |b| {
        b.iter(|| {
            black_box(
                convert_geodetic_to_mgrs(
                    &wgs84,
                    black_box(48.8582_f64.to_radians()),
                    black_box(2.2945_f64.to_radians()),
                    5,
                )
                .unwrap(),
            )
        });
    });
}

fn bench_ups_path(c: &mut Criterion) {
    let wgs84 = Ellipsoid::WGS84;

    c.bench_function("geodetic_to_mgrs_ups", |b| {
        b.iter(|| {
            black_box(
                convert_geodetic_to_mgrs(
                    &wgs84,
                    black_box(87.3_f64.to_radians()),
                    black_box(45.0_f64.to_radians()),
                    5,
                )
                .unwrap(),
            )
        });
    });
}

fn bench_format(c: &mut Criterion) {
    let wgs84 = Ellipsoid::WGS84;
    let reference = convert_geodetic_to_mgrs(
        &wgs84,
        48.8582_f64.to_radians(),
        2.2945_f64.to_radians(),
        5,
    )
    .unwrap();

    c.bench_function("mgrs_to_string", |b| {
        b.iter(|| black_box(black_box(&reference).to_string()));
    });
}

fn bench_transverse_mercator(c: &mut Criterion) {
    let tm = TransverseMercator::new(
        &Ellipsoid::WGS84,
        0.0,
        3.0_f64.to_radians(),
        500_000.0,
        0.0,
        0.9996,
    )
    .unwrap();

    c.bench_function("transverse_mercator_project", |b| {
        b.iter(|| {
            black_box(
                tm.project(
                    black_box(48.8582_f64.to_radians()),
                    black_box(2.2945_f64.to_radians()),
                )
                .unwrap(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_utm_path,
    bench_ups_path,
    bench_format,
    bench_transverse_mercator,
);
criterion_main!(benches);
