//! # aasv-core — Foundational Types for the AAS Validation Stack
//!
//! Defines the diagnostic vocabulary shared by every other crate in the
//! workspace: severity buckets, individual diagnostics, the aggregated
//! validation report, and the well-known rule identifiers attached to
//! engine findings. Every other crate depends on `aasv-core`; it depends
//! on nothing internal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aasv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod diagnostic;
pub mod report;
pub mod rules;

pub use diagnostic::{Diagnostic, Severity};
pub use report::ValidationReport;
