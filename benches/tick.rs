#[macro_use]
extern crate criterion;

use chaosgame::point::regular_polygon;
use chaosgame::{Canvas, FractalEngine, Point};
use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine(lateral: f64) -> FractalEngine<Canvas, StdRng> {
    let mut engine = FractalEngine::with_rng(Canvas::new(800, 600), StdRng::seed_from_u64(0));
    for anchor in regular_polygon(3, Point::new(400.0, 300.0), 270.0) {
        engine.add_anchor(anchor);
    }
    engine.set_interpolation_ratio(0.5);
    engine.set_lateral_step(lateral);
    engine.set_iterations_per_tick(1000);
    engine
}

fn tick_benchmark(c: &mut Criterion) {
    c.bench_function("tick 1000 sierpinski", |b| {
        let mut engine = engine(0.0);
        b.iter(|| engine.tick())
    });
    c.bench_function("tick 1000 diverging", |b| {
        let mut engine = engine(5.0);
        b.iter(|| engine.tick())
    });
}

criterion_group!(benches, tick_benchmark);
criterion_main!(benches);
