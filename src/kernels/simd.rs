//! 2-lane SIMD kernel primitives for x86_64.
//!
//! These process two `f64` elements per step through SSE2 `__m128d`
//! lanes, with a scalar tail when the length is odd. SSE2 is part of
//! the x86_64 baseline, so no feature detection is needed.
//!
//! The dot product accumulates a 2-lane partial sum and adds the lanes
//! at the end, so its summation order differs from the scalar kernel.
//! Results are numerically close but not bit-identical.

use std::arch::x86_64::*;

use super::Kernel;

/// Adds the two lanes of a `__m128d` accumulator.
#[inline]
fn hsum(v: __m128d) -> f64 {
    // SAFETY: pure register ops, no memory access.
    unsafe { _mm_cvtsd_f64(v) + _mm_cvtsd_f64(_mm_unpackhi_pd(v, v)) }
}

/// SSE2 implementation of the kernel primitives.
pub struct SimdKernel;

impl Kernel for SimdKernel {
    const NAME: &'static str = "sse2";
    const VECTORIZED: bool = true;

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let n = a.len();
        let mut i = 0;
        // SAFETY: loads stay within the first `n` elements of `a` and
        // `b`; the loop condition guarantees `i + 1 < n`.
        let mut acc = unsafe {
            let mut sum = _mm_setzero_pd();
            while i + 1 < n {
                let va = _mm_loadu_pd(a.as_ptr().add(i));
                let vb = _mm_loadu_pd(b.as_ptr().add(i));
                sum = _mm_add_pd(sum, _mm_mul_pd(va, vb));
                i += 2;
            }
            hsum(sum)
        };
        if i < n {
            acc += a[i] * b[i];
        }
        acc
    }

    fn dot_strided(row: &[f64], col: &[f64], stride: usize) -> f64 {
        debug_assert!(stride > 0);
        debug_assert!(row.is_empty() || (row.len() - 1) * stride < col.len());
        let n = row.len();
        let mut k = 0;
        // The column side is not contiguous, so pairs are gathered into
        // a lane with `_mm_set_pd`; only the row side gets a real
        // vector load.
        // SAFETY: `k + 1 < n` bounds the row load; the strided column
        // indexing goes through checked slice access.
        let mut acc = unsafe {
            let mut sum = _mm_setzero_pd();
            while k + 1 < n {
                let vr = _mm_loadu_pd(row.as_ptr().add(k));
                let vc = _mm_set_pd(col[(k + 1) * stride], col[k * stride]);
                sum = _mm_add_pd(sum, _mm_mul_pd(vr, vc));
                k += 2;
            }
            hsum(sum)
        };
        if k < n {
            acc += row[k] * col[k * stride];
        }
        acc
    }

    fn swap_rows(r1: &mut [f64], r2: &mut [f64]) {
        debug_assert_eq!(r1.len(), r2.len());
        let n = r1.len();
        let mut i = 0;
        // SAFETY: paired loads/stores stay within the first `n`
        // elements of both rows; the rows are disjoint slices.
        unsafe {
            while i + 1 < n {
                let v1 = _mm_loadu_pd(r1.as_ptr().add(i));
                let v2 = _mm_loadu_pd(r2.as_ptr().add(i));
                _mm_storeu_pd(r1.as_mut_ptr().add(i), v2);
                _mm_storeu_pd(r2.as_mut_ptr().add(i), v1);
                i += 2;
            }
        }
        if i < n {
            std::mem::swap(&mut r1[i], &mut r2[i]);
        }
    }
}
