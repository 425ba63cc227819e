//! In-place LU factorization with partial pivoting.

use crate::error::FactorError;
use crate::kernels::Kernel;
use crate::matrix::MatMut;

/// Factorizes `a` in place using Crout's method with partial pivoting.
///
/// On success the matrix holds both factors: the unit-lower-triangular
/// multipliers below the diagonal (the unit diagonal is implicit) and
/// the upper-triangular factor on and above it. `ipvt[j]` records the
/// row swapped into position `j` while processing column `j`, or `j`
/// itself when no swap happened; [`lu_solve`](crate::solve::lu_solve)
/// replays these exchanges against the right-hand side.
///
/// On failure the matrix is left partially reduced and `ipvt` is only
/// populated up to the failing column; neither should be reused.
///
/// # Panics
///
/// Panics if `ipvt.len() != a.n()`.
pub fn lu_factor<K: Kernel>(a: &mut MatMut<'_>, ipvt: &mut [usize]) -> Result<(), FactorError> {
    let n = a.n();
    assert_eq!(
        ipvt.len(),
        n,
        "ipvt: expected {} elements, got {}",
        n,
        ipvt.len()
    );

    // Fast-path singularity check before any arithmetic: a row of all
    // zeros can never be eliminated.
    for i in 0..n {
        if a.row(i).iter().all(|&v| v == 0.0) {
            log::debug!("factor: row {i} is entirely zero");
            return Err(FactorError::ZeroRow { row: i });
        }
    }

    // Crout's method, column by column.
    for j in 0..n {
        // Upper-triangular part: reduce a[i][j] for rows above the
        // diagonal. Earlier rows of column j are already reduced, so
        // the in-place column tail is the right operand.
        for i in 0..j {
            let q = a.at(i, j) - K::dot_strided(&a.row(i)[..i], a.col_from(0, j), n);
            a.set(i, j, q);
        }

        // Lower-triangular part: same reduction for rows j..n, while
        // tracking the largest-magnitude result as the pivot
        // candidate. `>=` keeps the later row on an exact tie.
        let mut largest = 0.0;
        let mut pivot_row = None;
        for i in j..n {
            let q = a.at(i, j) - K::dot_strided(&a.row(i)[..j], a.col_from(0, j), n);
            a.set(i, j, q);
            if q.abs() >= largest {
                largest = q.abs();
                pivot_row = Some(i);
            }
        }

        let pivot_row = pivot_row.ok_or(FactorError::SingularColumn { col: j })?;
        if pivot_row != j {
            log::trace!("factor: column {j} pivots on row {pivot_row}");
            let (rj, rp) = a.two_rows_mut(j, pivot_row);
            K::swap_rows(rj, rp);
        }
        // Recorded even when no swap happened; solve replays every entry.
        ipvt[j] = pivot_row;

        if a.at(j, j) == 0.0 {
            log::debug!("factor: zero pivot at column {j}");
            return Err(FactorError::SingularColumn { col: j });
        }

        // Turn the sub-diagonal column entries into elimination
        // multipliers. Nothing below the diagonal in the last column.
        if j != n - 1 {
            let mult = 1.0 / a.at(j, j);
            K::scale_strided(a.col_from_mut(j + 1, j), n, mult);
        }
    }

    Ok(())
}
