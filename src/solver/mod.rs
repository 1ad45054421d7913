//! Dense linear solver behind the Leontief inverse.
pub mod leontief;
pub mod lu;

pub use leontief::{
    leontief_inverse, LeontiefInverse, SolverOptions, DEFAULT_CONDITION_CEILING, DEFAULT_EPSILON,
};
pub use lu::LuFactors;
