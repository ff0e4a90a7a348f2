use criterion::{Criterion, black_box, criterion_group, criterion_main};

use meridian_core::extent::GeographicExtent;
use meridian_core::geopoint::GeoPoint;
use meridian_core::routing::request_validator::RequestValidator;
use meridian_core::routing::routing_request::RouteRequest;

fn valid_request(point_count: usize) -> RouteRequest {
    let points: Vec<GeoPoint> = (0..point_count)
        .map(|i| GeoPoint::new((i % 100) as f64 / 100.0, (i % 100) as f64 / 100.0))
        .collect();

    let headings: Vec<f64> = (0..point_count).map(|i| (i % 360) as f64).collect();
    let curbsides: Vec<&str> = (0..point_count)
        .map(|i| ["left", "right", "any", ""][i % 4])
        .collect();
    let hints: Vec<String> = (0..point_count).map(|i| format!("street {}", i)).collect();

    RouteRequest::new(points)
        .with_headings(headings)
        .with_curbsides(curbsides)
        .with_point_hints(hints)
}

fn out_of_bounds_request(point_count: usize) -> RouteRequest {
    RouteRequest::new(
        (0..point_count)
            .map(|i| GeoPoint::new(100.0 + i as f64, 100.0 + i as f64))
            .collect(),
    )
}

fn validation_benchmark(c: &mut Criterion) {
    let validator = RequestValidator::new();
    let extent = GeographicExtent::new(-10.0, -10.0, 10.0, 10.0);

    let small = valid_request(2);
    c.bench_function("validate 2 points", |b| {
        b.iter(|| black_box(validator.validate(&small, &extent)))
    });

    let large = valid_request(1_000);
    c.bench_function("validate 1000 points", |b| {
        b.iter(|| black_box(validator.validate(&large, &extent)))
    });

    let rejected = out_of_bounds_request(1_000);
    c.bench_function("validate 1000 out-of-bounds points", |b| {
        b.iter(|| black_box(validator.validate(&rejected, &extent)))
    });
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
