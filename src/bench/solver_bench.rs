//! Criterion benchmarks for factorization and solve.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use lusolve::factor::lu_factor;
use lusolve::kernels::{Kernel, ScalarKernel};
#[cfg(target_arch = "x86_64")]
use lusolve::kernels::SimdKernel;
use lusolve::matrix::{MatMut, MatRef};
use lusolve::solve::lu_solve;

fn test_matrix(n: usize) -> Vec<f64> {
    let mut a = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            a[i * n + j] = if i == j {
                (n as f64) + 1.0
            } else {
                (((i * 31 + j * 17) % 19) as f64) / 19.0 - 0.5
            };
        }
    }
    a
}

fn factored(n: usize) -> (Vec<f64>, Vec<usize>) {
    let mut lu = test_matrix(n);
    let mut ipvt = vec![0usize; n];
    lu_factor::<ScalarKernel>(&mut MatMut::from_slice(&mut lu, n), &mut ipvt)
        .expect("bench matrix should factor");
    (lu, ipvt)
}

fn bench_factor_kernel<K: Kernel>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group("factor");
    for n in [8usize, 32, 128] {
        let a = test_matrix(n);
        group.bench_with_input(BenchmarkId::new(label, n), &n, |bencher, &n| {
            bencher.iter_batched(
                || (a.clone(), vec![0usize; n]),
                |(mut lu, mut ipvt)| {
                    lu_factor::<K>(&mut MatMut::from_slice(&mut lu, n), &mut ipvt)
                        .expect("bench matrix should factor");
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_solve_kernel<K: Kernel>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group("solve");
    for n in [8usize, 32, 128] {
        let (lu, ipvt) = factored(n);
        let b: Vec<f64> = (0..n).map(|i| ((i % 7) as f64) - 3.0).collect();
        group.bench_with_input(BenchmarkId::new(label, n), &n, |bencher, &n| {
            bencher.iter_batched(
                || b.clone(),
                |mut x| lu_solve::<K>(&MatRef::from_slice(&lu, n), &ipvt, &mut x),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_factor(c: &mut Criterion) {
    bench_factor_kernel::<ScalarKernel>(c, "scalar");
    #[cfg(target_arch = "x86_64")]
    bench_factor_kernel::<SimdKernel>(c, "sse2");
}

fn bench_solve(c: &mut Criterion) {
    bench_solve_kernel::<ScalarKernel>(c, "scalar");
    #[cfg(target_arch = "x86_64")]
    bench_solve_kernel::<SimdKernel>(c, "sse2");
}

criterion_group!(benches, bench_factor, bench_solve);
criterion_main!(benches);
