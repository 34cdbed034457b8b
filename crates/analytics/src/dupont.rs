use crate::guards::{safe_divide, to_percent};
use crate::report::DuPontBreakdown;
use core_types::PeriodFinancials;
use rust_decimal::Decimal;

/// Decomposes the current period's return on equity.
///
/// The three factors are kept as raw ratios and their product is scaled to a
/// percentage exactly once, so `roe_pct` never carries a double ×100.
pub fn dupont(current: &PeriodFinancials) -> DuPontBreakdown {
    let margin = safe_divide(current.net_income, current.sales);
    let asset_turnover = safe_divide(current.sales, current.total_assets);
    let leverage = safe_divide(current.total_assets, current.equity);

    let roe = margin
        .checked_mul(asset_turnover)
        .and_then(|product| product.checked_mul(leverage))
        .unwrap_or(Decimal::ZERO);

    DuPontBreakdown {
        profit_margin_pct: to_percent(margin),
        asset_turnover,
        financial_leverage: leverage,
        roe_pct: to_percent(roe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> PeriodFinancials {
        PeriodFinancials {
            sales: dec!(100),
            net_income: dec!(400),
            total_assets: dec!(12000),
            equity: dec!(890000),
            ..Default::default()
        }
    }

    #[test]
    fn decomposes_roe_into_three_factors() {
        let result = dupont(&sample());

        assert_eq!(result.profit_margin_pct.round_dp(2), dec!(400.00));
        assert_eq!(result.asset_turnover.round_dp(6), dec!(0.008333));
        assert_eq!(result.financial_leverage.round_dp(6), dec!(0.013483));

        let margin = dec!(400) / dec!(100);
        let turnover = dec!(100) / dec!(12000);
        let leverage = dec!(12000) / dec!(890000);
        let expected = margin * turnover * leverage * dec!(100);
        assert_eq!(result.roe_pct.round_dp(6), expected.round_dp(6));
    }

    #[test]
    fn roe_matches_net_income_over_equity() {
        let period = PeriodFinancials {
            sales: dec!(1000),
            net_income: dec!(50),
            total_assets: dec!(2000),
            equity: dec!(500),
            ..Default::default()
        };
        let result = dupont(&period);

        // 5% margin × 0.5 turnover × 4 leverage = 10% = 50 / 500.
        assert_eq!(result.profit_margin_pct, dec!(5));
        assert_eq!(result.asset_turnover, dec!(0.5));
        assert_eq!(result.financial_leverage, dec!(4));
        assert_eq!(result.roe_pct, dec!(10));
    }

    #[test]
    fn negative_equity_suppresses_leverage_and_roe() {
        let period = PeriodFinancials {
            equity: dec!(-5000),
            ..sample()
        };
        let result = dupont(&period);

        assert_eq!(result.financial_leverage, Decimal::ZERO);
        assert_eq!(result.roe_pct, Decimal::ZERO);
        assert_eq!(result.profit_margin_pct.round_dp(2), dec!(400.00));
    }

    #[test]
    fn zero_period_yields_zero_breakdown() {
        assert_eq!(dupont(&PeriodFinancials::default()), DuPontBreakdown::default());
    }
}
