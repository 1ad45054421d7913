//! Translation layer between Python arguments and the Rust core.
//!
//! Only argument shapes that cannot even form a table (ragged rows,
//! unparseable scenario specs) raise Python exceptions here; every
//! in-engine failure travels inside the returned JSON payload.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::analysis::payload::ResultPayload;
use crate::analysis::runner::{self, AnalyzeOptions};
use crate::analysis::scenarios::{self, ScenarioSpec};
use crate::display::report::format_report;
use crate::error::AnalysisError;
use crate::solver::SolverOptions;
use crate::table::{IoTable, Matrix, SectorSet};

fn value_error(error: AnalysisError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

fn build_table(
    sectors: Vec<String>,
    z: Vec<Vec<f64>>,
    f: Vec<Vec<f64>>,
) -> PyResult<IoTable> {
    let intermediate = Matrix::from_rows(z).map_err(value_error)?;
    let final_demand = Matrix::from_rows(f).map_err(value_error)?;
    Ok(IoTable::new(
        SectorSet::new(sectors),
        intermediate,
        final_demand,
    ))
}

fn solver_options(epsilon: Option<f64>, condition_ceiling: Option<f64>) -> SolverOptions {
    let defaults = SolverOptions::default();
    SolverOptions {
        epsilon: epsilon.unwrap_or(defaults.epsilon),
        condition_ceiling: condition_ceiling.unwrap_or(defaults.condition_ceiling),
    }
}

/// Runs one analysis operation and returns the result payload as JSON.
#[pyfunction]
#[pyo3(signature = (
    sectors, z, f, operation,
    epsilon=None, condition_ceiling=None, multiplier_kind=None, income_coefficients=None
))]
#[allow(clippy::too_many_arguments)]
pub fn analyze(
    sectors: Vec<String>,
    z: Vec<Vec<f64>>,
    f: Vec<Vec<f64>>,
    operation: String,
    epsilon: Option<f64>,
    condition_ceiling: Option<f64>,
    multiplier_kind: Option<String>,
    income_coefficients: Option<Vec<f64>>,
) -> PyResult<String> {
    let table = build_table(sectors, z, f)?;
    let options = AnalyzeOptions {
        solver: solver_options(epsilon, condition_ceiling),
        multiplier_kind,
        income_coefficients,
    };
    let payload = runner::analyze(&table, &operation, &options);
    payload
        .to_json()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Evaluates a batch of final-demand scenarios; `scenarios` is a JSON list
/// of `{"demand": [[...]]}` or `{"changes": [{...}]}` entries.
#[pyfunction]
#[pyo3(signature = (sectors, z, f, scenarios, epsilon=None, condition_ceiling=None))]
pub fn evaluate_scenarios(
    sectors: Vec<String>,
    z: Vec<Vec<f64>>,
    f: Vec<Vec<f64>>,
    scenarios: String,
    epsilon: Option<f64>,
    condition_ceiling: Option<f64>,
) -> PyResult<String> {
    let table = build_table(sectors, z, f)?;
    let specs: Vec<ScenarioSpec> = serde_json::from_str(&scenarios)
        .map_err(|e| PyValueError::new_err(format!("invalid scenario spec: {e}")))?;
    let batch = scenarios::run_scenarios(&table, &specs, &solver_options(epsilon, condition_ceiling));
    serde_json::to_string(&batch).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Renders a payload (as returned by `analyze`) as fixed-width text.
#[pyfunction]
pub fn render_report(payload: String) -> PyResult<String> {
    let payload: ResultPayload = serde_json::from_str(&payload)
        .map_err(|e| PyValueError::new_err(format!("invalid payload: {e}")))?;
    Ok(format_report(&payload))
}

/// A simple function to confirm the Rust core is callable from Python.
#[pyfunction]
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
