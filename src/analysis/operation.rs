//! The closed set of analysis operations.

use std::str::FromStr;

use crate::error::AnalysisError;

/// Everything the orchestrator knows how to run. Each operation is a
/// prefix of the full pipeline; requests outside this set are rejected at
/// the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Echo Z and F combined horizontally, with shape metadata.
    IoMatrix,
    /// Validate and echo Z.
    IntermediateConsumption,
    /// Validate and echo F.
    FinalDemand,
    /// Derive A and X.
    TechnicalCoefficients,
    /// Full pipeline through the Leontief inverse to multipliers.
    Multipliers,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::IoMatrix => "io_matrix",
            Operation::IntermediateConsumption => "intermediate_consumption",
            Operation::FinalDemand => "final_demand",
            Operation::TechnicalCoefficients => "technical_coefficients",
            Operation::Multipliers => "multipliers",
        }
    }
}

impl FromStr for Operation {
    type Err = AnalysisError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "io_matrix" => Ok(Operation::IoMatrix),
            "intermediate_consumption" => Ok(Operation::IntermediateConsumption),
            "final_demand" => Ok(Operation::FinalDemand),
            "technical_coefficients" => Ok(Operation::TechnicalCoefficients),
            "multipliers" => Ok(Operation::Multipliers),
            other => Err(AnalysisError::unsupported(format!(
                "unknown operation: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("io_matrix", Operation::IoMatrix)]
    #[case("intermediate_consumption", Operation::IntermediateConsumption)]
    #[case("final_demand", Operation::FinalDemand)]
    #[case("technical_coefficients", Operation::TechnicalCoefficients)]
    #[case("multipliers", Operation::Multipliers)]
    fn test_operation_parsing_round_trips(#[case] name: &str, #[case] expected: Operation) {
        let parsed: Operation = name.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.name(), name);
    }

    #[rstest]
    #[case("leontief_inverse")]
    #[case("IO_MATRIX")]
    #[case("")]
    fn test_names_outside_the_set_are_unsupported(#[case] name: &str) {
        let err = name.parse::<Operation>().unwrap_err();
        assert_eq!(err.kind(), "unsupported");
        assert!(err.to_string().starts_with("unknown operation"));
    }
}
