//! Forward/back substitution against a factorized matrix.

use crate::kernels::Kernel;
use crate::matrix::MatRef;

/// Solves `A x = b` in place, given the factorization and pivot record
/// produced by [`lu_factor`](crate::factor::lu_factor). `b` holds the
/// solution on return.
///
/// There is no error path: this assumes a matrix successfully
/// factorized and a pivot vector still matching it, and never checks
/// for a zero divisor. Calling it with a stale or mismatched pivot
/// vector gives meaningless results.
///
/// # Panics
///
/// Panics if `ipvt.len()` or `b.len()` differ from `a.n()`.
pub fn lu_solve<K: Kernel>(a: &MatRef<'_>, ipvt: &[usize], b: &mut [f64]) {
    let n = a.n();
    assert_eq!(
        ipvt.len(),
        n,
        "ipvt: expected {} elements, got {}",
        n,
        ipvt.len()
    );
    assert_eq!(b.len(), n, "b: expected {} elements, got {}", n, b.len());

    // Replay the row exchanges, scanning for the first nonzero
    // right-hand-side entry. Leading zeros contribute nothing to the
    // forward pass and are skipped via `bi`; the exchanges themselves
    // are never skipped - the ones not done here happen one per step
    // at the top of the forward loop, so all n are always applied.
    let mut bi = 0;
    let mut i = 0;
    while i < n {
        let row = ipvt[i];
        let swapped = b[row];
        b[row] = b[i];
        b[i] = swapped;
        i += 1;
        if swapped != 0.0 {
            bi = i - 1;
            break;
        }
    }

    // Forward substitution with the lower factor (implicit unit
    // diagonal). The pivot row index is always >= i, so the exchange
    // never touches the b[bi..i] range the dot product reads.
    while i < n {
        let row = ipvt[i];
        let mut tot = b[row];
        b[row] = b[i];
        tot -= K::dot(&a.row(i)[bi..i], &b[bi..i]);
        b[i] = tot;
        i += 1;
    }

    // Back substitution with the upper factor.
    for i in (0..n).rev() {
        let row = a.row(i);
        let tot = b[i] - K::dot(&row[i + 1..], &b[i + 1..]);
        b[i] = tot / row[i];
    }
}
