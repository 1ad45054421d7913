//! Input-output matrix analysis core.
//!
//! Validates inter-sector consumption tables, derives technical
//! coefficients, inverts the Leontief system, and computes economic
//! multipliers and demand scenarios. Built as a native Rust library and,
//! behind the `extension-module` feature, as the `_core` Python extension
//! consumed by the service host.

pub mod analysis;
pub mod display;
pub mod error;
pub mod solver;
pub mod table;

#[cfg(feature = "extension-module")]
pub mod bindings;

pub use analysis::{
    analyze, run_scenarios, AnalysisData, AnalysisStatus, AnalyzeOptions, ResultPayload,
    ScenarioBatch, ScenarioOutcome, ScenarioSpec,
};
pub use error::AnalysisError;
pub use solver::{leontief_inverse, LeontiefInverse, SolverOptions};
pub use table::{IoTable, Matrix, SectorSet};

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

// --- Module Definition ---
/// This function defines the `_core` Python module. The name `_core` is
/// chosen to indicate it's an internal, compiled component.
#[cfg(feature = "extension-module")]
#[pymodule]
fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bindings::python::analyze, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::python::evaluate_scenarios, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::python::render_report, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::python::core_version, m)?)?;
    Ok(())
}
