//! Timing runner comparing the scalar and SIMD kernel paths.

use std::time::Instant;

use lusolve::factor::lu_factor;
use lusolve::kernels::{Kernel, ScalarKernel};
use lusolve::matrix::{MatMut, MatRef};
use lusolve::solve::lu_solve;

fn main() {
    env_logger::init();

    println!("=== Dense LU Solver Benchmark ===\n");
    println!(
        "Default kernel: {} (simd_enabled={})\n",
        lusolve::kernel_name(),
        lusolve::simd_enabled()
    );

    let sizes = [16, 64, 256];
    let iterations = 20;

    for &n in &sizes {
        println!("Matrix: {}×{}", n, n);
        println!("{}", "-".repeat(50));

        let a = test_matrix(n);
        let b: Vec<f64> = (0..n).map(|i| ((i % 7) as f64) - 3.0).collect();

        let mut results: Vec<(&str, f64)> = vec![(
            "scalar",
            bench_kernel::<ScalarKernel>(&a, &b, n, iterations),
        )];

        #[cfg(target_arch = "x86_64")]
        {
            use lusolve::kernels::SimdKernel;
            results.push(("sse2", bench_kernel::<SimdKernel>(&a, &b, n, iterations)));
        }

        let baseline = results[0].1;
        for (name, time_us) in &results {
            println!(
                "{:8} {:10.2} µs/iter  ({:.2}×)",
                name,
                time_us,
                baseline / time_us
            );
        }
        println!();
    }
}

/// Diagonally dominant test matrix - always factors without trouble
/// and keeps the residuals well-conditioned.
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

/// Times one factor plus one solve per iteration, averaged.
fn bench_kernel<K: Kernel>(a: &[f64], b: &[f64], n: usize, iterations: usize) -> f64 {
    // Warmup
    run_once::<K>(a, b, n);

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        run_once::<K>(a, b, n);
        total += start.elapsed().as_secs_f64();
    }
    total / iterations as f64 * 1e6
}

fn run_once<K: Kernel>(a: &[f64], b: &[f64], n: usize) {
    let mut lu = a.to_vec();
    let mut ipvt = vec![0usize; n];
    let mut x = b.to_vec();
    {
        let mut m = MatMut::from_slice(&mut lu, n);
        lu_factor::<K>(&mut m, &mut ipvt).expect("test matrix should factor");
    }
    lu_solve::<K>(&MatRef::from_slice(&lu, n), &ipvt, &mut x);
}
