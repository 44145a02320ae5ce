//! # aasv-cli — CLI Tool for the AAS Validation Stack
//!
//! Provides the `aasv` command-line interface for validating AAS
//! environment documents (`.json`) and AASX packages (`.aasx`) from disk
//! against a compliance test-engine service.
//!
//! ```bash
//! aasv validate environment.json --engine-url http://localhost:8090
//! aasv validate twin.aasx --json
//! ```

pub mod validate;
