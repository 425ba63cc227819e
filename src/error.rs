//! Failure reporting for factorization.

use thiserror::Error;

/// Why `lu_factor` gave up on a matrix.
///
/// Both variants carry the zero-based index at which singularity was
/// first detected, matching the two failure kinds the factorization
/// distinguishes: a row of nothing but zeros (caught before any
/// arithmetic), and a column for which no usable pivot exists (either
/// no candidate registered or the diagonal came out exactly zero after
/// pivoting - the two sub-cases are not told apart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FactorError {
    /// Row `row` of the input matrix is entirely zero.
    #[error("row {row} is entirely zero")]
    ZeroRow { row: usize },

    /// No nonzero pivot could be found for column `col`.
    #[error("no nonzero pivot found for column {col}")]
    SingularColumn { col: usize },
}

impl FactorError {
    /// The raw row/column index, for callers that log or display a
    /// single number the way the flat call surface used to.
    pub fn index(&self) -> usize {
        match *self {
            FactorError::ZeroRow { row } => row,
            FactorError::SingularColumn { col } => col,
        }
    }
}
