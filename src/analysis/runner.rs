//! Orchestration of a named analysis operation.
//!
//! This is the validation barrier for the whole engine: requests enter as
//! an operation name plus a table, every stage failure is converted into a
//! payload, and nothing numeric runs before validation passes.

use tracing::{debug, info, warn};

use crate::analysis::coefficients::derive_coefficients;
use crate::analysis::multipliers::{income_multipliers, output_multipliers, MultiplierKind};
use crate::analysis::operation::Operation;
use crate::analysis::payload::{AnalysisData, ResultPayload};
use crate::analysis::validation::{validate_table, ZeroOutputSector};
use crate::error::AnalysisError;
use crate::solver::{leontief_inverse, SolverOptions};
use crate::table::IoTable;

/// Per-call options. Everything has a documented default; there is no
/// process-global configuration anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyzeOptions {
    pub solver: SolverOptions,
    /// Multiplier family for the `multipliers` operation; `None` means
    /// output multipliers.
    pub multiplier_kind: Option<String>,
    /// Income per unit of output, one entry per sector. Required for the
    /// income multiplier family.
    pub income_coefficients: Option<Vec<f64>>,
}

/// Runs one operation against one table and always returns a payload;
/// failures travel inside it, never as a Rust error.
pub fn analyze(table: &IoTable, operation: &str, options: &AnalyzeOptions) -> ResultPayload {
    debug!(operation, sectors = table.sectors.len(), "analysis requested");
    let mut warnings = Vec::new();
    match execute(table, operation, options, &mut warnings) {
        Ok(data) => {
            info!(operation, warnings = warnings.len(), "analysis complete");
            ResultPayload::success(data, warnings)
        }
        Err(error) => {
            warn!(operation, kind = error.kind(), %error, "analysis failed");
            ResultPayload::failure(&error, warnings)
        }
    }
}

fn execute(
    table: &IoTable,
    operation: &str,
    options: &AnalyzeOptions,
    warnings: &mut Vec<ZeroOutputSector>,
) -> Result<AnalysisData, AnalysisError> {
    let operation: Operation = operation.parse()?;

    let report = validate_table(table)?;
    if !report.zero_output_sectors.is_empty() {
        warn!(
            count = report.zero_output_sectors.len(),
            "sectors with zero total output"
        );
    }
    *warnings = report.zero_output_sectors;

    let sectors = table.sectors.labels().to_vec();
    match operation {
        Operation::IntermediateConsumption => Ok(AnalysisData::IntermediateConsumption {
            sectors,
            matrix: table.intermediate.to_rows(),
        }),
        Operation::FinalDemand => Ok(AnalysisData::FinalDemand {
            sectors,
            matrix: table.final_demand.to_rows(),
        }),
        Operation::IoMatrix => {
            let combined = table.intermediate.concat_columns(&table.final_demand)?;
            Ok(AnalysisData::IoMatrix {
                sectors,
                rows: combined.rows(),
                intermediate_columns: table.intermediate.cols(),
                demand_columns: table.final_demand.cols(),
                matrix: combined.to_rows(),
            })
        }
        Operation::TechnicalCoefficients => {
            let coeffs = derive_coefficients(table);
            Ok(AnalysisData::TechnicalCoefficients {
                sectors,
                matrix: coeffs.matrix.to_rows(),
                total_output: coeffs.total_output,
            })
        }
        Operation::Multipliers => {
            let kind = match options.multiplier_kind.as_deref() {
                None => MultiplierKind::Output,
                Some(name) => name.parse()?,
            };
            let coeffs = derive_coefficients(table);
            let solved = leontief_inverse(&coeffs.matrix, &options.solver)?;
            let values = match kind {
                MultiplierKind::Output => output_multipliers(&solved.matrix),
                MultiplierKind::SimpleIncome => {
                    let coefficients =
                        options.income_coefficients.as_deref().ok_or_else(|| {
                            AnalysisError::unsupported(
                                "income multipliers require income_coefficients",
                            )
                        })?;
                    income_multipliers(&solved.matrix, coefficients)?
                }
            };
            Ok(AnalysisData::Multipliers {
                sectors,
                kind: kind.name().to_string(),
                values,
                determinant: solved.determinant,
                condition: solved.condition,
            })
        }
    }
}
