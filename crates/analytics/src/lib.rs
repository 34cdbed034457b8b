//! # Finlens Analytics Engine
//!
//! This crate turns two periods of summarized financial statements into the
//! five standard analyses: DuPont decomposition, financial ratios, common-size
//! (vertical) structure, period-over-period (horizontal) variance, and an
//! indirect-method cash-flow statement.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of HTTP,
//!   files or configuration. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Each analysis is a free function of its inputs.
//!   `AnalyticsEngine` bundles them; it holds no state and never fails.
//! - **Guarded Arithmetic:** Degenerate denominators yield `0`, never a panic,
//!   an infinity or an error. See `guards` for the two guard policies.
//!
//! ## Public API
//!
//! - `AnalyticsEngine` / `AnalysisKind`: run all analyses or a chosen subset.
//! - `dupont`, `ratios`, `vertical`, `horizontal`, `cash_flow`: the analyses.
//! - `AnalysisReport`, `PartialReport` and the per-analysis result records.
//! - `AnalyticsError`: returned only when parsing an analysis name.

// Declare the modules that constitute this crate.
pub mod cash_flow;
pub mod dupont;
pub mod engine;
pub mod error;
pub mod guards;
pub mod ratios;
pub mod report;
pub mod structure;

// Re-export the key components to create a clean, public-facing API.
pub use cash_flow::cash_flow;
pub use dupont::dupont;
pub use engine::{AnalysisKind, AnalyticsEngine};
pub use error::AnalyticsError;
pub use ratios::ratios;
pub use report::{
    AnalysisReport, CashFlowStatement, DuPontBreakdown, HorizontalVariance, LineItem,
    LineVariance, PartialReport, RatioSet, VerticalStructure,
};
pub use structure::{horizontal, vertical};
