use crate::enums::PeriodRole;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Missing financial data for the {0}")]
    MissingPeriod(PeriodRole),
}
