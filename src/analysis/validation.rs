//! Structural and numerical validation of a submitted table.
//!
//! Every analysis runs this barrier first; the numeric stages behind it
//! assume shapes and domains are already clean.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::table::{IoTable, Matrix};

/// Non-fatal finding: sector `index` has zero total output. Downstream the
/// coefficient column for such a sector is zeroed rather than divided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroOutputSector {
    pub index: usize,
    pub label: String,
}

/// Outcome of a successful validation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub zero_output_sectors: Vec<ZeroOutputSector>,
}

/// Checks a table in request order, short-circuiting on the first
/// structural failure:
///
/// 1. the sector set is non-empty and free of duplicate labels,
/// 2. the intermediate matrix is square with the sector count as side,
/// 3. final demand has one row per sector and at least one category,
/// 4. every entry of both matrices is finite and non-negative.
///
/// Sectors whose computed total output is zero are reported as warnings,
/// not errors. The pass is read-only and safe to repeat.
pub fn validate_table(table: &IoTable) -> Result<ValidationReport, AnalysisError> {
    let n = table.sectors.len();
    if n == 0 {
        return Err(AnalysisError::dimension("sector set is empty"));
    }
    if let Some(label) = table.sectors.first_duplicate() {
        return Err(AnalysisError::dimension(format!(
            "duplicate sector label '{label}'"
        )));
    }

    let (z_rows, z_cols) = table.intermediate.shape();
    if (z_rows, z_cols) != (n, n) {
        return Err(AnalysisError::dimension(format!(
            "intermediate consumption must be {n}x{n} for {n} sectors, got {z_rows}x{z_cols}"
        )));
    }

    let (f_rows, f_cols) = table.final_demand.shape();
    if f_rows != n {
        return Err(AnalysisError::dimension(format!(
            "final demand must have {n} rows for {n} sectors, got {f_rows}"
        )));
    }
    if f_cols == 0 {
        return Err(AnalysisError::dimension(
            "final demand needs at least one category column",
        ));
    }

    check_entries(&table.intermediate, "intermediate_consumption")?;
    check_entries(&table.final_demand, "final_demand")?;

    // Entries are non-negative here, so a zero row sum means the whole row
    // is zero with no cancellation involved.
    let zero_output_sectors = table
        .total_output()
        .iter()
        .enumerate()
        .filter(|(_, x)| **x == 0.0)
        .map(|(index, _)| ZeroOutputSector {
            index,
            label: table.sectors.label(index).to_string(),
        })
        .collect();

    Ok(ValidationReport {
        zero_output_sectors,
    })
}

/// Rejects the first negative or non-finite entry, naming the cell.
pub(crate) fn check_entries(
    matrix: &Matrix,
    name: &'static str,
) -> Result<(), AnalysisError> {
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            let value = matrix.get(row, col);
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::Domain {
                    matrix: name,
                    row,
                    col,
                    value,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SectorSet;

    fn table(sectors: Vec<&str>, z: Vec<Vec<f64>>, f: Vec<Vec<f64>>) -> IoTable {
        IoTable::new(
            sectors.into_iter().collect::<SectorSet>(),
            Matrix::from_rows(z).unwrap(),
            Matrix::from_rows(f).unwrap(),
        )
    }

    #[test]
    fn test_clean_table_passes_without_warnings() {
        let t = table(
            vec!["A", "B"],
            vec![vec![10.0, 20.0], vec![5.0, 0.0]],
            vec![vec![70.0], vec![95.0]],
        );
        let report = validate_table(&t).unwrap();
        assert!(report.zero_output_sectors.is_empty());
    }

    #[test]
    fn test_empty_sector_set_is_rejected() {
        let t = IoTable::new(
            SectorSet::new(Vec::new()),
            Matrix::zeros(0, 0),
            Matrix::zeros(0, 1),
        );
        let err = validate_table(&t).unwrap_err();
        assert_eq!(err.kind(), "dimension");
    }

    #[test]
    fn test_duplicate_labels_are_rejected() {
        let t = table(
            vec!["A", "A"],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            vec![vec![1.0], vec![1.0]],
        );
        let err = validate_table(&t).unwrap_err();
        assert!(err.to_string().contains("duplicate sector label 'A'"));
    }

    #[test]
    fn test_dimension_mismatch_names_expected_and_actual_shape() {
        // Three sectors against a 2x2 intermediate matrix.
        let t = table(
            vec!["A", "B", "C"],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            vec![vec![1.0], vec![1.0], vec![1.0]],
        );
        let err = validate_table(&t).unwrap_err();
        assert_eq!(err.kind(), "dimension");
        let msg = err.to_string();
        assert!(msg.contains("3x3"));
        assert!(msg.contains("2x2"));
    }

    #[test]
    fn test_final_demand_row_count_must_match() {
        let t = table(
            vec!["A", "B"],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            vec![vec![1.0]],
        );
        let err = validate_table(&t).unwrap_err();
        assert_eq!(err.kind(), "dimension");
    }

    #[test]
    fn test_negative_entry_fails_before_any_algebra() {
        let t = table(
            vec!["A", "B"],
            vec![vec![-1.0, 0.0], vec![0.0, 0.0]],
            vec![vec![1.0], vec![1.0]],
        );
        match validate_table(&t).unwrap_err() {
            AnalysisError::Domain {
                matrix,
                row,
                col,
                value,
            } => {
                assert_eq!(matrix, "intermediate_consumption");
                assert_eq!((row, col), (0, 0));
                assert_eq!(value, -1.0);
            }
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_entry_is_rejected() {
        let t = table(
            vec!["A", "B"],
            vec![vec![0.0, 0.0], vec![0.0, 0.0]],
            vec![vec![f64::NAN], vec![1.0]],
        );
        match validate_table(&t).unwrap_err() {
            AnalysisError::Domain { matrix, .. } => {
                assert_eq!(matrix, "final_demand");
            }
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_output_sector_is_a_warning_not_an_error() {
        // Sector B neither supplies anything nor sees final demand.
        let t = table(
            vec!["A", "B"],
            vec![vec![10.0, 0.0], vec![0.0, 0.0]],
            vec![vec![40.0], vec![0.0]],
        );
        let report = validate_table(&t).unwrap();
        assert_eq!(
            report.zero_output_sectors,
            vec![ZeroOutputSector {
                index: 1,
                label: "B".to_string(),
            }]
        );
    }
}
