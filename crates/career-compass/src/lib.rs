//! Career guidance engine for KCSE results.
//!
//! The crate owns the grading scale, the mean-grade calculator, the static
//! recommendation tables, and the HTTP router; the `services/api` binary wires
//! them to a listener, metrics, and the CLI.

pub mod config;
pub mod error;
pub mod guidance;
pub mod telemetry;
