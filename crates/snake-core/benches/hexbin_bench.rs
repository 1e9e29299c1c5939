use snake_core::hexbin::bin_hexagonal;
use snake_core::{Domain, PixelRect, Point};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_scatter(n: usize) -> Vec<Point> {
    // deterministic pseudo-random cloud (LCG)
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    (0..n).map(|_| Point::new(next() * 100.0, next() * next() * 100.0)).collect()
}

fn bench_hexbin(c: &mut Criterion) {
    let mut group = c.benchmark_group("hexbin");
    let rect = PixelRect::default();
    let d = Domain::new(0.0, 100.0);
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_scatter(n);
        for &radius in &[6.0f64, 12.0, 24.0] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_r{radius}")), &radius, |b, &r| {
                b.iter_batched(
                    || data.clone(),
                    |pts| { let _ = black_box(bin_hexagonal(&pts, r, rect, d, d)); },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hexbin);
criterion_main!(benches);
