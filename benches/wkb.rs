use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spatialite_wkb::{
    from_wkb, FromWKB, Geometry, GeometryCollection, LinearRing, MultiPolygon, Point, Polygon,
    ToWKB,
};

/// A grid of small square polygons, each with one hole
fn multi_polygon(size: usize) -> MultiPolygon {
    let square = |x: f64, y: f64, side: f64| {
        LinearRing::from_coords([
            (x, y),
            (x + side, y),
            (x + side, y + side),
            (x, y + side),
            (x, y),
        ])
    };
    (0..size * size)
        .map(|i| {
            let x = (i % size) as f64;
            let y = (i / size) as f64;
            Polygon::new(vec![square(x, y, 0.9), square(x + 0.3, y + 0.3, 0.3)])
        })
        .collect()
}

fn collection(size: usize) -> GeometryCollection {
    (0..size)
        .map(|i| -> Geometry {
            match i % 3 {
                0 => Point::new(i as f64, -(i as f64)).into(),
                1 => multi_polygon(2).into(),
                _ => GeometryCollection::new(vec![Point::new(0., 0.).into()]).into(),
            }
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let geom = multi_polygon(100);
    let wkb = geom.to_wkb();

    c.bench_function("encode MultiPolygon", |b| {
        b.iter(|| black_box(&geom).to_wkb())
    });
    c.bench_function("decode MultiPolygon", |b| {
        b.iter(|| MultiPolygon::from_wkb(black_box(&wkb)).unwrap())
    });
    c.bench_function("decode MultiPolygon as Geometry", |b| {
        b.iter(|| from_wkb(black_box(&wkb)).unwrap())
    });

    let geom = collection(3_000);
    let wkb = geom.to_wkb();
    c.bench_function("decode GeometryCollection", |b| {
        b.iter(|| GeometryCollection::from_wkb(black_box(&wkb)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
