//! # Finlens Core Types
//!
//! Layer 0 of the workspace: the financial snapshot of a reporting period and
//! the two-period request every analysis consumes. Depends on nothing but
//! `serde` and `rust_decimal`.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::PeriodRole;
pub use error::CoreError;
pub use structs::{AnalysisRequest, PeriodFinancials};
