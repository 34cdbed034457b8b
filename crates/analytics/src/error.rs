use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown analysis '{0}'; expected one of: dupont, ratios, vertical, horizontal, cash-flow")]
    UnknownAnalysis(String),
}
