//! Dense LU factorization and solve, built for circuit simulation.
//!
//! A circuit simulator re-solves `A x = b` at every time step against a
//! matrix that changes only slightly (and often not at all) between
//! steps. So the expensive part - Crout factorization with partial
//! pivoting - is split from the cheap part - forward/back substitution -
//! and the caller decides when to re-factor and when to just re-solve.
//!
//! The inner loops run through small kernel primitives with two
//! interchangeable implementations: plain scalar, and 2-wide SIMD
//! lanes (SSE2 on x86_64). The variant is picked at build time by the
//! `simd` cargo feature; there is no runtime dispatch.
//!
//! ## Usage
//!
//! ```
//! use lusolve::{factor, solve};
//!
//! // A = [[4, 3], [6, 3]], row-major.
//! let mut a = vec![4.0, 3.0, 6.0, 3.0];
//! let mut ipvt = vec![0usize; 2];
//! factor(&mut a, 2, &mut ipvt).unwrap();
//!
//! // Re-solve against the same factorization as often as needed.
//! let mut b = vec![1.0, 1.0];
//! solve(&a, 2, &ipvt, &mut b);
//! assert!(b[0].abs() < 1e-12);
//! assert!((b[1] - 1.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! ## What's inside
//!
//! - Crout LU with partial pivoting, in place over a caller-owned
//!   flat buffer
//! - A pivot record replayed against each right-hand side
//! - Scalar and SSE2 kernel primitives behind one trait
//! - No allocation anywhere in the engine
//!
//! All buffers are caller-owned and borrowed for the duration of a
//! call, so concurrent calls on disjoint buffers are safe.

pub mod error;
pub mod factor;
pub mod kernels;
pub mod matrix;
pub mod solve;

pub use error::FactorError;
pub use kernels::{DefaultKernel, Kernel, ScalarKernel};
#[cfg(target_arch = "x86_64")]
pub use kernels::SimdKernel;
pub use matrix::{MatMut, MatRef};

/// Factorizes the row-major `n`×`n` matrix `a` in place with the
/// build-selected default kernel, filling `ipvt` with the pivot record.
///
/// On success `a` holds the combined L/U factors and can be passed to
/// [`solve`] any number of times. On failure the error names the first
/// singular row or column found; `a` and `ipvt` are left partially
/// written and should not be reused.
///
/// # Panics
///
/// Panics if `a.len() != n * n` or `ipvt.len() != n`.
pub fn factor(a: &mut [f64], n: usize, ipvt: &mut [usize]) -> Result<(), FactorError> {
    let mut m = MatMut::from_slice(a, n);
    factor::lu_factor::<DefaultKernel>(&mut m, ipvt)
}

/// Transforms `b` in place into the solution of `A x = b`, given the
/// factorized matrix and pivot record produced by [`factor`].
///
/// # Panics
///
/// Panics if `a.len() != n * n`, `ipvt.len() != n`, or `b.len() != n`.
pub fn solve(a: &[f64], n: usize, ipvt: &[usize], b: &mut [f64]) {
    let m = MatRef::from_slice(a, n);
    solve::lu_solve::<DefaultKernel>(&m, ipvt, b)
}

/// Name of the kernel this build linked as the default.
///
/// For diagnostics and logging only; the engine never consults it.
pub fn kernel_name() -> &'static str {
    <DefaultKernel as Kernel>::NAME
}

/// Whether the default kernel uses vector lanes. Diagnostics only.
pub fn simd_enabled() -> bool {
    <DefaultKernel as Kernel>::VECTORIZED
}
