//! Fixed-width text rendering of a result payload, for debug and audit
//! display on the host side.

use std::fmt::Write;

use crate::analysis::payload::{AnalysisData, AnalysisStatus, ResultPayload};

pub fn format_report(payload: &ResultPayload) -> String {
    let mut out = String::new();

    let status = match payload.status {
        AnalysisStatus::Ok => "ok",
        AnalysisStatus::ValidationFailed => "validation_failed",
        AnalysisStatus::Singular => "singular",
        AnalysisStatus::Unsupported => "unsupported",
    };
    let _ = writeln!(out, "IO ANALYSIS REPORT [{}]", status);
    let _ = writeln!(out, "--------------------------------------------------");

    if !payload.warnings.is_empty() {
        let _ = writeln!(out, "Warnings:");
        for warning in &payload.warnings {
            let _ = writeln!(
                out,
                "  - sector {} '{}': zero total output",
                warning.index, warning.label
            );
        }
        let _ = writeln!(out);
    }

    if let Some(data) = &payload.data {
        render_data(&mut out, data);
    }

    if let Some(error) = &payload.error {
        let _ = writeln!(out, "Error [{}]: {}", error.kind, error.message);
    }

    out
}

fn render_data(out: &mut String, data: &AnalysisData) {
    match data {
        AnalysisData::IntermediateConsumption { sectors, matrix } => {
            let _ = writeln!(out, "Intermediate Consumption (Z):");
            matrix_block(out, sectors, matrix);
        }
        AnalysisData::FinalDemand { sectors, matrix } => {
            let _ = writeln!(out, "Final Demand (F):");
            matrix_block(out, sectors, matrix);
        }
        AnalysisData::IoMatrix {
            sectors,
            matrix,
            rows,
            intermediate_columns,
            demand_columns,
        } => {
            let _ = writeln!(
                out,
                "Combined IO Matrix [Z | F] ({} rows, {} intermediate + {} demand columns):",
                rows, intermediate_columns, demand_columns
            );
            matrix_block(out, sectors, matrix);
        }
        AnalysisData::TechnicalCoefficients {
            sectors,
            matrix,
            total_output,
        } => {
            let _ = writeln!(out, "Technical Coefficients (A):");
            matrix_block(out, sectors, matrix);
            let _ = writeln!(out, "Total Output (X):");
            vector_block(out, sectors, total_output);
        }
        AnalysisData::Multipliers {
            sectors,
            kind,
            values,
            determinant,
            condition,
        } => {
            let _ = writeln!(out, "Multipliers ({}):", kind);
            vector_block(out, sectors, values);
            let _ = writeln!(
                out,
                "det(I - A) = {:.6e}, cond = {:.3e}",
                determinant, condition
            );
        }
    }
}

fn label_width(sectors: &[String]) -> usize {
    sectors.iter().map(|s| s.len()).max().unwrap_or(0)
}

fn matrix_block(out: &mut String, sectors: &[String], rows: &[Vec<f64>]) {
    let width = label_width(sectors);
    for (i, row) in rows.iter().enumerate() {
        let label = sectors.get(i).map(String::as_str).unwrap_or("");
        let _ = write!(out, "  {:<width$} |", label, width = width);
        for value in row {
            let _ = write!(out, " {: >12.4}", value);
        }
        let _ = writeln!(out);
    }
}

fn vector_block(out: &mut String, sectors: &[String], values: &[f64]) {
    let width = label_width(sectors);
    for (i, value) in values.iter().enumerate() {
        let label = sectors.get(i).map(String::as_str).unwrap_or("");
        let _ = writeln!(
            out,
            "  {:<width$} | {: >12.4}",
            label,
            value,
            width = width
        );
    }
}
