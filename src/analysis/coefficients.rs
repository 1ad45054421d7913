//! Technical coefficient derivation.

use tracing::debug;

use crate::table::{IoTable, Matrix};

/// The coefficient matrix A together with the total output vector X it was
/// normalized by.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    /// `A[i][j] = Z[i][j] / X[j]`, with zero-output columns zeroed.
    pub matrix: Matrix,
    /// `X[i]`, the row sum of Z plus the row sum of F.
    pub total_output: Vec<f64>,
}

/// Derives A from a validated table.
///
/// A sector with zero total output gets an all-zero coefficient column
/// instead of a division; validation has already reported the sector as a
/// warning, so "no activity" stays distinguishable from "error".
pub fn derive_coefficients(table: &IoTable) -> Coefficients {
    let n = table.sectors.len();
    debug_assert_eq!(table.intermediate.shape(), (n, n));

    let total_output = table.total_output();
    let mut matrix = Matrix::zeros(n, n);
    for col in 0..n {
        let output = total_output[col];
        if output == 0.0 {
            continue;
        }
        for row in 0..n {
            matrix.set(row, col, table.intermediate.get(row, col) / output);
        }
    }

    debug!(sectors = n, "derived technical coefficients");
    Coefficients {
        matrix,
        total_output,
    }
}
