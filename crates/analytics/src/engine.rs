use crate::cash_flow::cash_flow;
use crate::dupont::dupont;
use crate::error::AnalyticsError;
use crate::ratios::ratios;
use crate::report::{AnalysisReport, PartialReport};
use crate::structure::{horizontal, vertical};
use core_types::AnalysisRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five analyses a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    #[serde(rename = "dupont")]
    DuPont,
    Ratios,
    Vertical,
    Horizontal,
    CashFlow,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 5] = [
        AnalysisKind::DuPont,
        AnalysisKind::Ratios,
        AnalysisKind::Vertical,
        AnalysisKind::Horizontal,
        AnalysisKind::CashFlow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::DuPont => "dupont",
            AnalysisKind::Ratios => "ratios",
            AnalysisKind::Vertical => "vertical",
            AnalysisKind::Horizontal => "horizontal",
            AnalysisKind::CashFlow => "cash-flow",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        AnalysisKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| AnalyticsError::UnknownAnalysis(s.to_string()))
    }
}

/// A stateless calculator turning two periods of financials into the five analyses.
///
/// The analyses share no data with each other, so any subset can be computed
/// in any order. The engine holds no state and is safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every analysis.
    ///
    /// Ratios are computed with the prior period, so activity ratios use
    /// two-point averages.
    pub fn calculate(&self, request: &AnalysisRequest) -> AnalysisReport {
        let _span = tracing::debug_span!("analysis").entered();

        let report = AnalysisReport {
            dupont: dupont(&request.current),
            ratios: ratios(&request.current, Some(&request.prior)),
            vertical: vertical(&request.current),
            horizontal: horizontal(&request.current, &request.prior),
            cash_flow: cash_flow(&request.current, &request.prior),
        };

        tracing::trace!(roe_pct = %report.dupont.roe_pct, "Computed full analysis report.");
        report
    }

    /// Runs only the selected analyses. Duplicates in `kinds` are harmless.
    pub fn calculate_selected(
        &self,
        request: &AnalysisRequest,
        kinds: &[AnalysisKind],
    ) -> PartialReport {
        let _span = tracing::debug_span!("analysis", selected = kinds.len()).entered();

        let mut report = PartialReport::default();
        for kind in kinds {
            match kind {
                AnalysisKind::DuPont => report.dupont = Some(dupont(&request.current)),
                AnalysisKind::Ratios => {
                    report.ratios = Some(ratios(&request.current, Some(&request.prior)))
                }
                AnalysisKind::Vertical => report.vertical = Some(vertical(&request.current)),
                AnalysisKind::Horizontal => {
                    report.horizontal = Some(horizontal(&request.current, &request.prior))
                }
                AnalysisKind::CashFlow => {
                    report.cash_flow = Some(cash_flow(&request.current, &request.prior))
                }
            }
            tracing::trace!(analysis = %kind, "Computed analysis.");
        }
        report
    }
}
