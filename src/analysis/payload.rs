//! Result payload assembled for the host.
//!
//! The payload is the whole contract with the caller: a status
//! discriminator, at most one data block, the warning list, and a
//! structured error object when a stage failed. Partial results are never
//! emitted.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analysis::validation::ZeroOutputSector;
use crate::error::AnalysisError;

/// Top-level outcome discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Ok,
    ValidationFailed,
    Singular,
    Unsupported,
}

impl From<&AnalysisError> for AnalysisStatus {
    fn from(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::Dimension { .. } | AnalysisError::Domain { .. } => {
                AnalysisStatus::ValidationFailed
            }
            AnalysisError::Singular { .. } => AnalysisStatus::Singular,
            AnalysisError::Unsupported { .. } => AnalysisStatus::Unsupported,
        }
    }
}

/// The data block, tagged by the operation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AnalysisData {
    IoMatrix {
        sectors: Vec<String>,
        /// Z and F concatenated horizontally, one row per sector.
        matrix: Vec<Vec<f64>>,
        rows: usize,
        intermediate_columns: usize,
        demand_columns: usize,
    },
    IntermediateConsumption {
        sectors: Vec<String>,
        matrix: Vec<Vec<f64>>,
    },
    FinalDemand {
        sectors: Vec<String>,
        matrix: Vec<Vec<f64>>,
    },
    TechnicalCoefficients {
        sectors: Vec<String>,
        matrix: Vec<Vec<f64>>,
        total_output: Vec<f64>,
    },
    Multipliers {
        sectors: Vec<String>,
        kind: String,
        values: Vec<f64>,
        /// Diagnostics of the inversion that backed the multipliers.
        determinant: f64,
        condition: f64,
    },
}

/// Structured error object: a stable kind tag, the display message, and a
/// JSON detail the host can inspect without string parsing. Non-finite
/// numbers in the detail serialize as JSON null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: String,
    pub message: String,
    pub detail: serde_json::Value,
}

impl From<&AnalysisError> for ErrorReport {
    fn from(error: &AnalysisError) -> Self {
        let detail = match error {
            AnalysisError::Dimension { detail } => json!({ "description": detail }),
            AnalysisError::Domain {
                matrix,
                row,
                col,
                value,
            } => json!({
                "matrix": matrix,
                "row": row,
                "col": col,
                "value": value,
            }),
            AnalysisError::Singular {
                determinant,
                condition,
                detail,
            } => json!({
                "determinant": determinant,
                "condition": condition,
                "description": detail,
            }),
            AnalysisError::Unsupported { detail } => json!({ "description": detail }),
        };
        ErrorReport {
            kind: error.kind().to_string(),
            message: error.to_string(),
            detail,
        }
    }
}

/// What every analysis call returns, success or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPayload {
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<AnalysisData>,
    pub warnings: Vec<ZeroOutputSector>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ErrorReport>,
}

impl ResultPayload {
    pub fn success(data: AnalysisData, warnings: Vec<ZeroOutputSector>) -> Self {
        ResultPayload {
            status: AnalysisStatus::Ok,
            data: Some(data),
            warnings,
            error: None,
        }
    }

    pub fn failure(error: &AnalysisError, warnings: Vec<ZeroOutputSector>) -> Self {
        ResultPayload {
            status: AnalysisStatus::from(error),
            data: None,
            warnings,
            error: Some(ErrorReport::from(error)),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
