use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use suma::Matrix;

fn bench_add_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    let sizes = vec![
        (64, 64),     // Small: thread spawn overhead dominates
        (256, 256),   // Medium
        (1024, 1024), // Large: parallel split should pay off
    ];

    for (rows, cols) in sizes {
        let id = format!("{}x{}", rows, cols);

        let mut a = Matrix::new(rows, cols).unwrap();
        let mut b = Matrix::new(rows, cols).unwrap();
        a.fill_random(1);
        b.fill_random(2);

        group.bench_with_input(
            BenchmarkId::new("sequential", &id),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| {
                    let result = black_box(a).add(black_box(b)).unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

fn bench_add_parallel_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_parallel_1024x1024");

    let mut a = Matrix::new(1024, 1024).unwrap();
    let mut b = Matrix::new(1024, 1024).unwrap();
    a.fill_random(1);
    b.fill_random(2);

    for threads in [1usize, 2, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |bench, &threads| {
                bench.iter(|| {
                    let result = black_box(&a)
                        .add_parallel(black_box(&b), threads)
                        .unwrap();
                    black_box(result);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add_sizes, bench_add_parallel_threads);
criterion_main!(benches);
