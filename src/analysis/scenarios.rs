//! Scenario evaluation against one solved Leontief system.
//!
//! The system is factored once; each scenario is then a pair of
//! matrix-vector products, so the batch parallelizes trivially. The solved
//! inverse is shared read-only across workers and outcomes keep submission
//! order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::coefficients::derive_coefficients;
use crate::analysis::payload::{AnalysisStatus, ErrorReport};
use crate::analysis::validation::{check_entries, validate_table, ZeroOutputSector};
use crate::error::AnalysisError;
use crate::solver::{leontief_inverse, SolverOptions};
use crate::table::{IoTable, Matrix};

/// One targeted edit to the baseline final demand: cell
/// `[sector][category]` is set to `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandChange {
    pub sector: usize,
    pub category: usize,
    pub value: f64,
}

/// How a scenario's final demand is specified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioSpec {
    /// A full replacement final-demand matrix.
    Demand(Vec<Vec<f64>>),
    /// Edits applied to a copy of the baseline final demand.
    Changes(Vec<DemandChange>),
}

/// Projected outputs for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Position of the scenario in the submitted batch.
    pub index: usize,
    /// `L * f'`: the output each sector must produce to satisfy the
    /// scenario demand.
    pub total_output: Vec<f64>,
    /// `L * (f' - f)`: the output effect attributable to the demand
    /// change alone.
    pub output_change: Vec<f64>,
}

/// Batch envelope for the host, mirroring the analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBatch {
    pub status: AnalysisStatus,
    pub outcomes: Vec<ScenarioOutcome>,
    pub warnings: Vec<ZeroOutputSector>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ErrorReport>,
}

/// Evaluates every scenario against the baseline table. Failures travel
/// inside the batch envelope; a failing scenario aborts the whole batch
/// rather than returning partial outcomes.
pub fn run_scenarios(
    table: &IoTable,
    scenarios: &[ScenarioSpec],
    options: &SolverOptions,
) -> ScenarioBatch {
    let mut warnings = Vec::new();
    match evaluate(table, scenarios, options, &mut warnings) {
        Ok(outcomes) => {
            info!(scenarios = outcomes.len(), "scenario batch complete");
            ScenarioBatch {
                status: AnalysisStatus::Ok,
                outcomes,
                warnings,
                error: None,
            }
        }
        Err(error) => {
            warn!(kind = error.kind(), %error, "scenario batch failed");
            ScenarioBatch {
                status: AnalysisStatus::from(&error),
                outcomes: Vec::new(),
                warnings,
                error: Some(ErrorReport::from(&error)),
            }
        }
    }
}

fn evaluate(
    table: &IoTable,
    scenarios: &[ScenarioSpec],
    options: &SolverOptions,
    warnings: &mut Vec<ZeroOutputSector>,
) -> Result<Vec<ScenarioOutcome>, AnalysisError> {
    // 1. Validate the baseline and solve the system once.
    let report = validate_table(table)?;
    *warnings = report.zero_output_sectors;
    let coeffs = derive_coefficients(table);
    let solved = leontief_inverse(&coeffs.matrix, options)?;

    let baseline: Vec<f64> = (0..table.final_demand.rows())
        .map(|i| table.final_demand.row_sum(i))
        .collect();

    // 2. Resolve and validate every scenario before any math runs, so a
    //    bad scenario cannot abort the batch halfway through.
    let demands = scenarios
        .iter()
        .enumerate()
        .map(|(index, spec)| resolve_demand(table, index, spec))
        .collect::<Result<Vec<_>, _>>()?;

    // 3. Fan the batch out; the inverse is shared read-only.
    let leontief = &solved.matrix;
    let outcomes = demands
        .par_iter()
        .enumerate()
        .map(|(index, demand)| {
            let f: Vec<f64> = (0..demand.rows()).map(|i| demand.row_sum(i)).collect();
            let delta: Vec<f64> = f
                .iter()
                .zip(baseline.iter())
                .map(|(new, old)| new - old)
                .collect();
            ScenarioOutcome {
                index,
                total_output: leontief.mul_vec(&f),
                output_change: leontief.mul_vec(&delta),
            }
        })
        .collect();
    Ok(outcomes)
}

fn resolve_demand(
    table: &IoTable,
    index: usize,
    spec: &ScenarioSpec,
) -> Result<Matrix, AnalysisError> {
    let demand = match spec {
        ScenarioSpec::Demand(rows) => Matrix::from_rows(rows.clone())?,
        ScenarioSpec::Changes(changes) => apply_demand_changes(&table.final_demand, changes)?,
    };
    let n = table.sectors.len();
    let (rows, cols) = demand.shape();
    if rows != n || cols == 0 {
        return Err(AnalysisError::dimension(format!(
            "scenario {index} demand must have {n} rows and at least one column, got {rows}x{cols}"
        )));
    }
    check_entries(&demand, "scenario_final_demand")?;
    Ok(demand)
}

/// Applies targeted edits to a copy of the baseline final demand. The
/// baseline itself is never touched.
pub fn apply_demand_changes(
    baseline: &Matrix,
    changes: &[DemandChange],
) -> Result<Matrix, AnalysisError> {
    let mut demand = baseline.clone();
    for change in changes {
        if change.sector >= demand.rows() || change.category >= demand.cols() {
            return Err(AnalysisError::dimension(format!(
                "demand change targets cell [{}][{}] outside the {}x{} final demand",
                change.sector,
                change.category,
                demand.rows(),
                demand.cols()
            )));
        }
        demand.set(change.sector, change.category, change.value);
    }
    Ok(demand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SectorSet;

    fn three_sector_table() -> IoTable {
        IoTable::new(
            ["Agriculture", "Manufacturing", "Services"]
                .into_iter()
                .collect::<SectorSet>(),
            Matrix::from_rows(vec![
                vec![50.0, 200.0, 100.0],
                vec![100.0, 300.0, 150.0],
                vec![25.0, 150.0, 200.0],
            ])
            .unwrap(),
            Matrix::from_rows(vec![vec![400.0], vec![500.0], vec![300.0]]).unwrap(),
        )
    }

    #[test]
    fn test_baseline_scenario_reproduces_total_output() {
        // L * f equals X for the table's own demand, so echoing the
        // baseline must project the observed outputs with zero change.
        let t = three_sector_table();
        let specs = vec![ScenarioSpec::Demand(vec![
            vec![400.0],
            vec![500.0],
            vec![300.0],
        ])];
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        assert_eq!(batch.status, AnalysisStatus::Ok);

        let outcome = &batch.outcomes[0];
        let expected = [750.0, 1050.0, 675.0];
        for (value, want) in outcome.total_output.iter().zip(expected.iter()) {
            assert!((value - want).abs() < 1e-9, "got {value}, want {want}");
        }
        for change in &outcome.output_change {
            assert!(change.abs() < 1e-9);
        }
    }

    #[test]
    fn test_output_change_is_linear_in_demand() {
        let t = three_sector_table();
        let specs = vec![
            ScenarioSpec::Demand(vec![vec![500.0], vec![500.0], vec![300.0]]),
            ScenarioSpec::Demand(vec![vec![600.0], vec![500.0], vec![300.0]]),
        ];
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        assert_eq!(batch.status, AnalysisStatus::Ok);

        // The second scenario doubles the demand delta of the first, so
        // its output change must double as well.
        let first = &batch.outcomes[0].output_change;
        let second = &batch.outcomes[1].output_change;
        for (a, b) in first.iter().zip(second.iter()) {
            assert!((2.0 * a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outcomes_keep_submission_order() {
        let t = three_sector_table();
        let specs: Vec<ScenarioSpec> = (0..8)
            .map(|i| {
                ScenarioSpec::Demand(vec![
                    vec![400.0 + 10.0 * i as f64],
                    vec![500.0],
                    vec![300.0],
                ])
            })
            .collect();
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        for (i, outcome) in batch.outcomes.iter().enumerate() {
            assert_eq!(outcome.index, i);
        }
        // Growing demand means growing projected output for sector 0.
        for pair in batch.outcomes.windows(2) {
            assert!(pair[1].total_output[0] > pair[0].total_output[0]);
        }
    }

    #[test]
    fn test_demand_changes_edit_a_copy_of_the_baseline() {
        let t = three_sector_table();
        let specs = vec![ScenarioSpec::Changes(vec![DemandChange {
            sector: 0,
            category: 0,
            value: 450.0,
        }])];
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        assert_eq!(batch.status, AnalysisStatus::Ok);

        // All entries of L are positive here, so a demand increase in one
        // sector raises every projected output.
        let outcome = &batch.outcomes[0];
        for change in &outcome.output_change {
            assert!(*change > 0.0);
        }
        // Removing the change effect recovers the baseline outputs.
        let baseline = [750.0, 1050.0, 675.0];
        for ((total, change), base) in outcome
            .total_output
            .iter()
            .zip(outcome.output_change.iter())
            .zip(baseline.iter())
        {
            assert!((total - change - base).abs() < 1e-9);
        }
        // The baseline table itself is untouched.
        assert_eq!(t.final_demand.get(0, 0), 400.0);
    }

    #[test]
    fn test_out_of_range_change_fails_the_batch() {
        let t = three_sector_table();
        let specs = vec![ScenarioSpec::Changes(vec![DemandChange {
            sector: 5,
            category: 0,
            value: 100.0,
        }])];
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        assert_eq!(batch.status, AnalysisStatus::ValidationFailed);
        assert!(batch.outcomes.is_empty());
        assert_eq!(batch.error.unwrap().kind, "dimension");
    }

    #[test]
    fn test_negative_scenario_demand_is_a_domain_failure() {
        let t = three_sector_table();
        let specs = vec![ScenarioSpec::Demand(vec![
            vec![-400.0],
            vec![500.0],
            vec![300.0],
        ])];
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        assert_eq!(batch.status, AnalysisStatus::ValidationFailed);
        let error = batch.error.unwrap();
        assert_eq!(error.kind, "domain");
        assert_eq!(error.detail["matrix"], "scenario_final_demand");
    }

    #[test]
    fn test_singular_baseline_aborts_the_batch() {
        let t = IoTable::new(
            ["A", "B"].into_iter().collect::<SectorSet>(),
            Matrix::from_rows(vec![vec![100.0, 0.0], vec![0.0, 100.0]]).unwrap(),
            Matrix::from_rows(vec![vec![0.0], vec![0.0]]).unwrap(),
        );
        let specs = vec![ScenarioSpec::Demand(vec![vec![10.0], vec![10.0]])];
        let batch = run_scenarios(&t, &specs, &SolverOptions::default());
        assert_eq!(batch.status, AnalysisStatus::Singular);
        assert!(batch.outcomes.is_empty());
    }

    #[test]
    fn test_scenario_specs_parse_from_json() {
        let json = r#"[
            {"demand": [[450.0], [500.0], [300.0]]},
            {"changes": [{"sector": 0, "category": 0, "value": 450.0}]}
        ]"#;
        let specs: Vec<ScenarioSpec> = serde_json::from_str(json).unwrap();
        assert_eq!(specs.len(), 2);
        assert!(matches!(specs[0], ScenarioSpec::Demand(_)));
        assert!(matches!(specs[1], ScenarioSpec::Changes(_)));
    }
}
