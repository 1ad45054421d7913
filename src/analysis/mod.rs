//! The analysis pipeline: validation, coefficients, multipliers, and the
//! orchestrator that sequences them per operation.

pub mod coefficients;
pub mod multipliers;
pub mod operation;
pub mod payload;
pub mod runner;
pub mod scenarios;
pub mod validation;

pub use coefficients::{derive_coefficients, Coefficients};
pub use multipliers::{income_multipliers, output_multipliers, MultiplierKind};
pub use operation::Operation;
pub use payload::{AnalysisData, AnalysisStatus, ErrorReport, ResultPayload};
pub use runner::{analyze, AnalyzeOptions};
pub use scenarios::{
    apply_demand_changes, run_scenarios, DemandChange, ScenarioBatch, ScenarioOutcome,
    ScenarioSpec,
};
pub use validation::{validate_table, ValidationReport, ZeroOutputSector};
