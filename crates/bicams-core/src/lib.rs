//! bicams-core
//!
//! Pure domain types for the BICAMS normative calculator.
//! No scoring tables and no rendering; this is the shared vocabulary
//! between the norms, export and CLI crates.

pub mod error;
pub mod models;
