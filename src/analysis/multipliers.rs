//! Economic multipliers derived from the Leontief inverse.

use std::str::FromStr;

use crate::error::AnalysisError;
use crate::table::Matrix;

/// Which multiplier family to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierKind {
    /// Column sums of L. Reported historically as the Type I multiplier.
    Output,
    /// Column sums of L weighted by income coefficients.
    SimpleIncome,
}

impl MultiplierKind {
    /// Canonical name used in payloads.
    pub fn name(&self) -> &'static str {
        match self {
            MultiplierKind::Output => "output",
            MultiplierKind::SimpleIncome => "simple_income",
        }
    }
}

impl FromStr for MultiplierKind {
    type Err = AnalysisError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "output" | "output_multiplier" | "type_i" => Ok(MultiplierKind::Output),
            "income" | "simple_income" | "simple_income_multiplier" => {
                Ok(MultiplierKind::SimpleIncome)
            }
            other => Err(AnalysisError::unsupported(format!(
                "unknown multiplier kind: {other}"
            ))),
        }
    }
}

/// Output multiplier per sector: `m[j] = sum_i L[i][j]`.
pub fn output_multipliers(leontief: &Matrix) -> Vec<f64> {
    (0..leontief.cols())
        .map(|col| leontief.column_sum(col))
        .collect()
}

/// Simple income multiplier per sector: `m[j] = sum_i w[i] * L[i][j]`,
/// where `w` holds income per unit of output for each supplying sector.
pub fn income_multipliers(
    leontief: &Matrix,
    coefficients: &[f64],
) -> Result<Vec<f64>, AnalysisError> {
    let n = leontief.rows();
    if coefficients.len() != n {
        return Err(AnalysisError::dimension(format!(
            "income coefficients have length {}, expected one per sector ({n})",
            coefficients.len()
        )));
    }
    Ok((0..n)
        .map(|col| {
            (0..n)
                .map(|row| coefficients[row] * leontief.get(row, col))
                .sum()
        })
        .collect())
}
