//! Scalar kernel primitives.
//!
//! Plain sequential loops. These are the portable baseline the SIMD
//! kernels are checked against, and the default on targets without a
//! vector path.

use super::Kernel;

/// Scalar implementation of the kernel primitives.
pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    const NAME: &'static str = "scalar";
    const VECTORIZED: bool = false;

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    fn dot_strided(row: &[f64], col: &[f64], stride: usize) -> f64 {
        debug_assert!(stride > 0);
        debug_assert!(row.is_empty() || (row.len() - 1) * stride < col.len());
        row.iter()
            .zip(col.iter().step_by(stride))
            .map(|(x, y)| x * y)
            .sum()
    }

    fn swap_rows(r1: &mut [f64], r2: &mut [f64]) {
        debug_assert_eq!(r1.len(), r2.len());
        r1.swap_with_slice(r2);
    }
}
