//! LU factorization with partial pivoting.
//!
//! The Leontief system `(I - A) x = f` is dense and small, so a direct
//! factorization is both the fastest and the most transparent route: the
//! pivoted diagonal hands us the determinant for free, and repeated solves
//! against unit columns produce the full inverse.
//!
//! **Optimization:** L and U share one matrix (L's unit diagonal is
//! implicit), and the row permutation lives in a `SmallVec` so typical
//! tables never touch the heap for pivot bookkeeping.

use smallvec::SmallVec;

use crate::table::Matrix;

/// Packed LU factors of a square matrix, `P * M = L * U`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    lu: Matrix,
    pivots: SmallVec<[usize; 8]>,
    sign: f64,
}

impl LuFactors {
    /// Factors `m` in-place on a copy. Returns `None` when elimination
    /// meets a column with no usable pivot, which means `m` is exactly
    /// singular.
    pub fn decompose(m: &Matrix) -> Option<LuFactors> {
        debug_assert!(m.is_square());
        let n = m.rows();
        let mut lu = m.clone();
        let mut pivots: SmallVec<[usize; 8]> = (0..n).collect();
        let mut sign = 1.0;

        for k in 0..n {
            // 1. Pick the largest remaining entry in column k as the pivot.
            let mut pivot_row = k;
            let mut pivot_mag = lu.get(k, k).abs();
            for r in (k + 1)..n {
                let mag = lu.get(r, k).abs();
                if mag > pivot_mag {
                    pivot_mag = mag;
                    pivot_row = r;
                }
            }
            if pivot_mag == 0.0 {
                return None;
            }

            // 2. Swap the pivot row into place, tracking the permutation
            //    parity for the determinant.
            if pivot_row != k {
                for c in 0..n {
                    let tmp = lu.get(k, c);
                    lu.set(k, c, lu.get(pivot_row, c));
                    lu.set(pivot_row, c, tmp);
                }
                pivots.swap(k, pivot_row);
                sign = -sign;
            }

            // 3. Eliminate below the pivot, storing each multiplier in the
            //    slot it just zeroed.
            let pivot = lu.get(k, k);
            for r in (k + 1)..n {
                let factor = lu.get(r, k) / pivot;
                lu.set(r, k, factor);
                for c in (k + 1)..n {
                    let updated = lu.get(r, c) - factor * lu.get(k, c);
                    lu.set(r, c, updated);
                }
            }
        }

        Some(LuFactors { lu, pivots, sign })
    }

    pub fn order(&self) -> usize {
        self.lu.rows()
    }

    /// Determinant of the factored matrix: permutation parity times the
    /// product of U's diagonal.
    pub fn determinant(&self) -> f64 {
        (0..self.order()).fold(self.sign, |acc, i| acc * self.lu.get(i, i))
    }

    /// Solves `M x = rhs` by forward and back substitution.
    pub fn solve(&self, rhs: &[f64]) -> Vec<f64> {
        let n = self.order();
        debug_assert_eq!(rhs.len(), n);

        // Forward substitution against L on the permuted right-hand side.
        // L's diagonal is implicitly 1.
        let mut x = vec![0.0; n];
        for i in 0..n {
            let mut sum = rhs[self.pivots[i]];
            for j in 0..i {
                sum -= self.lu.get(i, j) * x[j];
            }
            x[i] = sum;
        }

        // Back substitution against U.
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= self.lu.get(i, j) * x[j];
            }
            x[i] = sum / self.lu.get(i, i);
        }
        x
    }

    /// Full inverse, assembled one unit column at a time.
    pub fn inverse(&self) -> Matrix {
        let n = self.order();
        let mut inv = Matrix::zeros(n, n);
        let mut unit = vec![0.0; n];
        for col in 0..n {
            unit[col] = 1.0;
            let x = self.solve(&unit);
            for (row, value) in x.into_iter().enumerate() {
                inv.set(row, col, value);
            }
            unit[col] = 0.0;
        }
        inv
    }
}
