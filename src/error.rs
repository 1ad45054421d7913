//! Unified error type for every analysis entry point.

use thiserror::Error;

/// Failures surfaced by table validation, coefficient derivation, and the
/// Leontief solver.
///
/// Every variant carries enough context to rebuild the human-readable
/// message on the host side without string parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A table or vector has a shape that contradicts the sector count.
    #[error("dimension error: {detail}")]
    Dimension { detail: String },

    /// An entry is negative, NaN, or infinite where only finite
    /// non-negative values are meaningful.
    #[error("domain error: {matrix}[{row}][{col}] = {value} is negative or non-finite")]
    Domain {
        matrix: &'static str,
        row: usize,
        col: usize,
        value: f64,
    },

    /// The Leontief system is singular or too ill-conditioned to invert
    /// under the active solver options.
    #[error("singular system: {detail} (det = {determinant:e}, cond = {condition:e})")]
    Singular {
        determinant: f64,
        condition: f64,
        detail: String,
    },

    /// The request names an operation or option combination the engine
    /// does not provide.
    #[error("{detail}")]
    Unsupported { detail: String },
}

impl AnalysisError {
    /// Stable machine-readable tag, mirrored into the result payload.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Dimension { .. } => "dimension",
            AnalysisError::Domain { .. } => "domain",
            AnalysisError::Singular { .. } => "singular",
            AnalysisError::Unsupported { .. } => "unsupported",
        }
    }

    pub fn dimension(detail: impl Into<String>) -> Self {
        AnalysisError::Dimension {
            detail: detail.into(),
        }
    }

    pub fn unsupported(detail: impl Into<String>) -> Self {
        AnalysisError::Unsupported {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(AnalysisError::dimension("x").kind(), "dimension");
        assert_eq!(
            AnalysisError::Domain {
                matrix: "Z",
                row: 0,
                col: 0,
                value: -1.0,
            }
            .kind(),
            "domain"
        );
        assert_eq!(
            AnalysisError::Singular {
                determinant: 0.0,
                condition: f64::INFINITY,
                detail: String::new(),
            }
            .kind(),
            "singular"
        );
        assert_eq!(AnalysisError::unsupported("x").kind(), "unsupported");
    }

    #[test]
    fn test_domain_message_names_the_offending_cell() {
        let err = AnalysisError::Domain {
            matrix: "final_demand",
            row: 2,
            col: 1,
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("final_demand[2][1]"));
        assert!(msg.contains("negative or non-finite"));
    }

    #[test]
    fn test_singular_message_reports_diagnostics() {
        let err = AnalysisError::Singular {
            determinant: 1.0e-15,
            condition: 3.0e13,
            detail: "leontief system is singular".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1e-15"));
        assert!(msg.contains("3e13"));
    }
}
