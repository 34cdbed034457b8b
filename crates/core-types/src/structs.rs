use crate::enums::PeriodRole;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A summarized balance sheet and income statement for one reporting period.
///
/// Every amount is a fixed-point `Decimal`. The last four fields are optional
/// refinements: a value of zero means "not provided" and the analyses fall
/// back to a documented substitute (e.g. `sales` in place of
/// `cost_of_goods_sold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodFinancials {
    // I. Income statement
    pub sales: Decimal,
    pub net_income: Decimal,
    pub depreciation: Decimal,

    // II. Balance sheet: assets
    pub cash: Decimal,
    pub accounts_receivable: Decimal,
    pub inventory: Decimal,
    pub current_assets: Decimal,
    pub total_assets: Decimal,

    // III. Balance sheet: liabilities and equity
    pub accounts_payable: Decimal,
    pub current_liabilities: Decimal,
    pub total_liabilities: Decimal,
    pub equity: Decimal,

    // IV. Optional refinements
    pub cost_of_goods_sold: Decimal,
    pub credit_sales: Decimal,
    pub operating_income: Decimal,
    pub interest_expense: Decimal,
}

impl PeriodFinancials {
    /// Non-current (fixed) assets, derived as total assets less current assets.
    ///
    /// A difference too large for a `Decimal` yields `0`.
    pub fn fixed_assets(&self) -> Decimal {
        self.total_assets
            .checked_sub(self.current_assets)
            .unwrap_or(Decimal::ZERO)
    }
}

/// The two periods every analysis request is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub current: PeriodFinancials,
    pub prior: PeriodFinancials,
}

impl AnalysisRequest {
    pub fn new(current: PeriodFinancials, prior: PeriodFinancials) -> Self {
        Self { current, prior }
    }

    /// Builds a request from periods that may be absent on the wire.
    ///
    /// A missing period is the only input the engine rejects; the current
    /// period is checked first.
    pub fn from_parts(
        current: Option<PeriodFinancials>,
        prior: Option<PeriodFinancials>,
    ) -> Result<Self, CoreError> {
        let current = current.ok_or(CoreError::MissingPeriod(PeriodRole::Current))?;
        let prior = prior.ok_or(CoreError::MissingPeriod(PeriodRole::Prior))?;
        Ok(Self::new(current, prior))
    }

    pub fn period(&self, role: PeriodRole) -> &PeriodFinancials {
        match role {
            PeriodRole::Current => &self.current,
            PeriodRole::Prior => &self.prior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fixed_assets_is_total_less_current() {
        let period = PeriodFinancials {
            total_assets: dec!(12000),
            current_assets: dec!(12),
            ..Default::default()
        };
        assert_eq!(period.fixed_assets(), dec!(11988));
    }

    #[test]
    fn fixed_assets_is_zero_when_difference_overflows() {
        let period = PeriodFinancials {
            total_assets: Decimal::MIN,
            current_assets: Decimal::MAX,
            ..Default::default()
        };
        assert_eq!(period.fixed_assets(), Decimal::ZERO);
    }

    #[test]
    fn from_parts_requires_both_periods() {
        let period = PeriodFinancials::default();

        assert_eq!(
            AnalysisRequest::from_parts(None, Some(period)),
            Err(CoreError::MissingPeriod(PeriodRole::Current))
        );
        assert_eq!(
            AnalysisRequest::from_parts(Some(period), None),
            Err(CoreError::MissingPeriod(PeriodRole::Prior))
        );
        assert_eq!(
            AnalysisRequest::from_parts(None, None),
            Err(CoreError::MissingPeriod(PeriodRole::Current))
        );

        let request = AnalysisRequest::from_parts(Some(period), Some(period)).unwrap();
        assert_eq!(request.period(PeriodRole::Prior), &period);
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let period: PeriodFinancials =
            serde_json::from_str(r#"{ "sales": "150.25", "netIncome": 10 }"#).unwrap();

        assert_eq!(period.sales, dec!(150.25));
        assert_eq!(period.net_income, dec!(10));
        assert_eq!(period.cost_of_goods_sold, Decimal::ZERO);
        assert_eq!(period.equity, Decimal::ZERO);
    }

    #[test]
    fn period_role_display_and_counterpart() {
        assert_eq!(PeriodRole::Current.to_string(), "current period");
        assert_eq!(PeriodRole::Current.counterpart(), PeriodRole::Prior);
        assert_eq!(
            CoreError::MissingPeriod(PeriodRole::Prior).to_string(),
            "Missing financial data for the prior period"
        );
    }
}
