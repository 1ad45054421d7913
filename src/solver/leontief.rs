//! Leontief inverse with explicit singularity diagnostics.

use crate::error::AnalysisError;
use crate::solver::lu::LuFactors;
use crate::table::Matrix;

/// Determinant magnitudes below this are treated as singular.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// 1-norm condition numbers above this are treated as numerically
/// untrustworthy even when the determinant clears the epsilon floor.
pub const DEFAULT_CONDITION_CEILING: f64 = 1e12;

/// Numerical guardrails for the inversion. Callers that need looser or
/// tighter limits pass their own values; the engine itself never relaxes
/// them on a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub epsilon: f64,
    pub condition_ceiling: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            epsilon: DEFAULT_EPSILON,
            condition_ceiling: DEFAULT_CONDITION_CEILING,
        }
    }
}

/// The inverse together with the diagnostics that justified accepting it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeontiefInverse {
    /// `L = (I - A)^-1`.
    pub matrix: Matrix,
    /// `det(I - A)`.
    pub determinant: f64,
    /// Exact 1-norm condition number of `I - A`.
    pub condition: f64,
}

/// Computes `(I - A)^-1` from the technical coefficient matrix.
///
/// The exact condition number is affordable here because the inverse is
/// the requested product anyway: one extra pair of norms, no estimation.
pub fn leontief_inverse(
    coefficients: &Matrix,
    options: &SolverOptions,
) -> Result<LeontiefInverse, AnalysisError> {
    if !coefficients.is_square() {
        let (rows, cols) = coefficients.shape();
        return Err(AnalysisError::dimension(format!(
            "coefficient matrix must be square, got {rows}x{cols}"
        )));
    }

    // 1. Assemble the Leontief system I - A.
    let n = coefficients.rows();
    let mut system = Matrix::identity(n);
    for row in 0..n {
        for col in 0..n {
            let value = system.get(row, col) - coefficients.get(row, col);
            system.set(row, col, value);
        }
    }

    // 2. Factor. A dead pivot column means the determinant is exactly zero.
    let factors = match LuFactors::decompose(&system) {
        Some(factors) => factors,
        None => {
            return Err(AnalysisError::Singular {
                determinant: 0.0,
                condition: f64::INFINITY,
                detail: "elimination of I - A produced a zero pivot".to_string(),
            });
        }
    };

    // 3. Invert first so both threshold checks can report full diagnostics.
    let determinant = factors.determinant();
    let inverse = factors.inverse();
    let condition = system.norm_one() * inverse.norm_one();

    if determinant.abs() < options.epsilon {
        return Err(AnalysisError::Singular {
            determinant,
            condition,
            detail: format!(
                "|det(I - A)| = {:e} is below the singularity threshold {:e}",
                determinant.abs(),
                options.epsilon
            ),
        });
    }
    // Negated comparison so a NaN condition is rejected as well.
    if !(condition <= options.condition_ceiling) {
        return Err(AnalysisError::Singular {
            determinant,
            condition,
            detail: format!(
                "condition number {:e} exceeds the ceiling {:e}",
                condition, options.condition_ceiling
            ),
        });
    }

    Ok(LeontiefInverse {
        matrix: inverse,
        determinant,
        condition,
    })
}
