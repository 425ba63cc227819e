//! Inner-loop arithmetic primitives, in scalar and 2-lane SIMD form.
//!
//! The factorization and solve loops spend essentially all their time
//! in three small operations: a dot product, a whole-row exchange, and
//! a strided column scale. Both implementations expose them through
//! the [`Kernel`] trait so the engine is written once and the variant
//! is picked at build time - the `simd` cargo feature selects
//! [`SimdKernel`] as [`DefaultKernel`], otherwise the scalar kernels
//! are linked. There is no runtime dispatch anywhere.

pub mod scalar;
#[cfg(target_arch = "x86_64")]
pub mod simd;

pub use scalar::ScalarKernel;
#[cfg(target_arch = "x86_64")]
pub use simd::SimdKernel;

/// The arithmetic primitives the engine is built on.
///
/// All functions assume their length preconditions hold; they are
/// checked with `debug_assert!` only, since the engine is the caller
/// and guarantees bounds.
pub trait Kernel {
    /// Short name for diagnostics ("scalar", "sse2").
    const NAME: &'static str;

    /// Whether this kernel uses vector lanes. Diagnostics only; the
    /// engine never branches on it.
    const VECTORIZED: bool;

    /// Sum of `a[i] * b[i]` over two equal-length slices.
    fn dot(a: &[f64], b: &[f64]) -> f64;

    /// Sum of `row[k] * col[k * stride]` for `k` in `0..row.len()`.
    ///
    /// This is the row-times-column reduction inside factorization:
    /// `row` is a contiguous row segment, `col` a flat tail whose
    /// every `stride`-th element is the column being reduced.
    fn dot_strided(row: &[f64], col: &[f64], stride: usize) -> f64;

    /// Exchanges two equal-length rows element-wise.
    fn swap_rows(r1: &mut [f64], r2: &mut [f64]);

    /// Multiplies every `stride`-th element of `buf` (starting at
    /// `buf[0]`) by `factor`.
    ///
    /// Strided column access doesn't pay for 2-wide lanes, so this one
    /// stays scalar in every kernel.
    fn scale_strided(buf: &mut [f64], stride: usize, factor: f64) {
        debug_assert!(stride > 0);
        for v in buf.iter_mut().step_by(stride) {
            *v *= factor;
        }
    }
}

/// Kernel linked as the default for the top-level entry points.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub type DefaultKernel = SimdKernel;
/// Kernel linked as the default for the top-level entry points.
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub type DefaultKernel = ScalarKernel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_dot_matches_by_hand() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(ScalarKernel::dot(&a, &b), 32.0);
        assert_eq!(ScalarKernel::dot(&a[..0], &b[..0]), 0.0);
    }

    #[test]
    fn scalar_dot_strided_walks_a_column() {
        // 3x3 row-major; column 1 is [1, 4, 7].
        let m = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let row = [2.0, 3.0, 4.0];
        assert_eq!(
            ScalarKernel::dot_strided(&row, &m[1..], 3),
            2.0 + 12.0 + 28.0
        );
    }

    #[test]
    fn swap_rows_odd_length() {
        let mut r1 = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut r2 = [6.0, 7.0, 8.0, 9.0, 10.0];
        ScalarKernel::swap_rows(&mut r1, &mut r2);
        assert_eq!(r1, [6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_eq!(r2, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn scale_strided_touches_only_the_stride() {
        let mut buf = [1.0; 7];
        ScalarKernel::scale_strided(&mut buf, 3, 2.0);
        assert_eq!(buf, [2.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0]);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn simd_dot_agrees_with_scalar_even_and_odd() {
        for n in [0usize, 1, 2, 5, 8, 13] {
            let a: Vec<f64> = (0..n).map(|i| (i as f64) * 0.5 - 1.0).collect();
            let b: Vec<f64> = (0..n).map(|i| 2.0 - (i as f64) * 0.25).collect();
            let s = ScalarKernel::dot(&a, &b);
            let v = SimdKernel::dot(&a, &b);
            assert!((s - v).abs() < 1e-12, "dot n={}: {} vs {}", n, s, v);
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn simd_dot_strided_agrees_with_scalar() {
        let stride = 4;
        let col: Vec<f64> = (0..32).map(|i| (i as f64).sin()).collect();
        for n in [0usize, 1, 2, 3, 7, 8] {
            let row: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
            let s = ScalarKernel::dot_strided(&row, &col, stride);
            let v = SimdKernel::dot_strided(&row, &col, stride);
            assert!((s - v).abs() < 1e-12, "dot_strided n={}: {} vs {}", n, s, v);
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn simd_swap_rows_handles_trailing_element() {
        let mut r1 = [1.0, 2.0, 3.0];
        let mut r2 = [4.0, 5.0, 6.0];
        SimdKernel::swap_rows(&mut r1, &mut r2);
        assert_eq!(r1, [4.0, 5.0, 6.0]);
        assert_eq!(r2, [1.0, 2.0, 3.0]);
    }
}
