//! The input-output table a caller submits for analysis.

use serde::{Deserialize, Serialize};

use crate::table::{Matrix, SectorSet};

/// One complete analysis request: sector labels, the inter-sector
/// intermediate consumption matrix Z, and the final demand matrix F.
///
/// The table is supplied once per invocation and never mutated; every
/// derived product (total output, coefficients, the Leontief inverse) is
/// computed fresh from it. Serde derives let the host persist tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IoTable {
    pub sectors: SectorSet,
    /// Z, N x N: `intermediate[i][j]` is the value sector i supplies to
    /// sector j as intermediate input.
    pub intermediate: Matrix,
    /// F, N x K with K >= 1 demand categories.
    pub final_demand: Matrix,
}

impl IoTable {
    pub fn new(sectors: SectorSet, intermediate: Matrix, final_demand: Matrix) -> Self {
        IoTable {
            sectors,
            intermediate,
            final_demand,
        }
    }

    /// Total output X: `X[i]` is the row sum of Z plus the row sum of F.
    ///
    /// Expects a table whose shapes already passed validation.
    pub fn total_output(&self) -> Vec<f64> {
        debug_assert_eq!(self.intermediate.rows(), self.final_demand.rows());
        (0..self.intermediate.rows())
            .map(|i| self.intermediate.row_sum(i) + self.final_demand.row_sum(i))
            .collect()
    }
}
