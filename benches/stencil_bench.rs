//! Benchmarks for face reconstruction stencils.
//!
//! Run with: `cargo bench --bench stencil_bench`
//!
//! Compares single-face cost across schemes and dispatch paths, and line
//! sweeps at several resolutions.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use weno_rs::{
    DynStencil, EvaluationProperties, Stencil, StencilKind, Teno5, Weno5, Weno5Hm, Weno5Z,
    create_stencil, reconstruct_faces,
};

/// Line of cell averages with a smooth part and a step, padded with 3 ghosts per side.
fn setup_line(n: usize) -> Vec<f64> {
    (0..n + 6)
        .map(|j| {
            let x = j as f64 / n as f64;
            if x < 0.5 { (8.0 * x).sin() } else { 2.0 }
        })
        .collect()
}

/// Benchmark one face evaluation per fifth-order scheme (static dispatch).
fn bench_single_face(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_face");
    let window = [0.3, -1.2, 2.5, 0.7, 4.0, -2.0];
    let p = EvaluationProperties::UPWIND_LEFT;

    group.bench_function("weno5", |b| {
        b.iter(|| Weno5.evaluate(black_box(&window), black_box(p), black_box(0.1)))
    });
    group.bench_function("weno5-z", |b| {
        b.iter(|| Weno5Z.evaluate(black_box(&window), black_box(p), black_box(0.1)))
    });
    group.bench_function("weno5-hm", |b| {
        b.iter(|| Weno5Hm.evaluate(black_box(&window), black_box(p), black_box(0.1)))
    });
    group.bench_function("teno5", |b| {
        b.iter(|| Teno5.evaluate(black_box(&window), black_box(p), black_box(0.1)))
    });

    group.finish();
}

/// Compare static, enum and boxed dispatch for WENO5-HM.
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let window = [0.3, -1.2, 2.5, 0.7, 4.0, -2.0];
    let p = EvaluationProperties::UPWIND_RIGHT;
    let boxed = create_stencil(StencilKind::Weno5Hm);

    group.bench_function("static", |b| {
        b.iter(|| Weno5Hm.evaluate(black_box(&window), black_box(p), black_box(0.1)))
    });
    group.bench_function("enum", |b| {
        b.iter(|| StencilKind::Weno5Hm.evaluate(black_box(&window), black_box(p), black_box(0.1)))
    });
    group.bench_function("boxed", |b| {
        b.iter(|| boxed.evaluate_slice(black_box(&window), black_box(p), black_box(0.1)))
    });

    group.finish();
}

/// Benchmark full line sweeps.
fn bench_line_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_sweep");

    for n in [128, 1024, 8192] {
        let cells = setup_line(n);
        let h = 1.0 / n as f64;

        for kind in [StencilKind::Weno5, StencilKind::Weno5Hm, StencilKind::Teno5] {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), format!("{}_cells", n)),
                &n,
                |b, _| b.iter(|| reconstruct_faces(kind, black_box(&cells), black_box(h))),
            );
        }

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("weno5-hm-parallel", format!("{}_cells", n)),
            &n,
            |b, _| {
                b.iter(|| {
                    weno_rs::reconstruct_faces_parallel(
                        StencilKind::Weno5Hm,
                        black_box(&cells),
                        black_box(h),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_face, bench_dispatch, bench_line_sweep);
criterion_main!(benches);
