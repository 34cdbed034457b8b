use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which of the two periods in an `AnalysisRequest` a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodRole {
    Current,
    Prior,
}

impl PeriodRole {
    /// Returns the other period of the pair
    pub fn counterpart(&self) -> Self {
        match self {
            PeriodRole::Current => PeriodRole::Prior,
            PeriodRole::Prior => PeriodRole::Current,
        }
    }
}

impl fmt::Display for PeriodRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodRole::Current => f.write_str("current period"),
            PeriodRole::Prior => f.write_str("prior period"),
        }
    }
}
