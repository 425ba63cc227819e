//! Borrowed views over caller-owned row-major matrix buffers.
//!
//! The engine never allocates matrix storage. Callers hand in a flat
//! `n*n` slice and get it back mutated in place; these view types just
//! carry the dimension alongside the slice and centralize the
//! `i * n + j` addressing, with bounds checked in debug builds.

/// Read-only view of an `n`×`n` row-major matrix.
#[derive(Clone, Copy)]
pub struct MatRef<'a> {
    data: &'a [f64],
    n: usize,
}

impl<'a> MatRef<'a> {
    /// Wraps a flat slice as an `n`×`n` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n * n`.
    pub fn from_slice(data: &'a [f64], n: usize) -> Self {
        assert_eq!(
            data.len(),
            n * n,
            "matrix: expected {}x{}={} elements, got {}",
            n,
            n,
            n * n,
            data.len()
        );
        Self { data, n }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n && j < self.n);
        self.data[i * self.n + j]
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Mutable view of an `n`×`n` row-major matrix.
pub struct MatMut<'a> {
    data: &'a mut [f64],
    n: usize,
}

impl<'a> MatMut<'a> {
    /// Wraps a flat mutable slice as an `n`×`n` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n * n`.
    pub fn from_slice(data: &'a mut [f64], n: usize) -> Self {
        assert_eq!(
            data.len(),
            n * n,
            "matrix: expected {}x{}={} elements, got {}",
            n,
            n,
            n * n,
            data.len()
        );
        Self { data, n }
    }

    /// Read-only reborrow of this view.
    #[inline]
    pub fn as_ref(&self) -> MatRef<'_> {
        MatRef {
            data: self.data,
            n: self.n,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.n && j < self.n);
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        debug_assert!(i < self.n && j < self.n);
        self.data[i * self.n + j] = v;
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// The flat tail starting at element `(i, j)`. Stepping through it
    /// with stride `n` walks column `j` from row `i` downward.
    #[inline]
    pub fn col_from(&self, i: usize, j: usize) -> &[f64] {
        debug_assert!(i < self.n && j < self.n);
        &self.data[i * self.n + j..]
    }

    /// Mutable variant of [`col_from`](Self::col_from).
    #[inline]
    pub fn col_from_mut(&mut self, i: usize, j: usize) -> &mut [f64] {
        debug_assert!(i < self.n && j < self.n);
        &mut self.data[i * self.n + j..]
    }

    /// Rows `i` and `j` as disjoint mutable slices, for a row exchange.
    /// Requires `i < j`.
    pub fn two_rows_mut(&mut self, i: usize, j: usize) -> (&mut [f64], &mut [f64]) {
        debug_assert!(i < j && j < self.n);
        let n = self.n;
        let (head, tail) = self.data.split_at_mut(j * n);
        (&mut head[i * n..(i + 1) * n], &mut tail[..n])
    }
}
