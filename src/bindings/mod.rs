//! Python-facing surface of the engine.
pub mod python;
