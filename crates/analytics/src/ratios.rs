use crate::guards::{
    difference, percent_of, safe_divide, two_point_average, value_or_fallback,
    COMMERCIAL_YEAR_DAYS,
};
use crate::report::RatioSet;
use core_types::PeriodFinancials;
use rust_decimal::Decimal;

/// Balance-sheet bases for the activity ratios.
///
/// With a prior period each base is the two-point average of both balances;
/// without one the current balance is used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivityBases {
    inventory: Decimal,
    receivables: Decimal,
    fixed_assets: Decimal,
    total_assets: Decimal,
}

impl ActivityBases {
    fn for_periods(current: &PeriodFinancials, prior: Option<&PeriodFinancials>) -> Self {
        match prior {
            Some(prior) => Self {
                inventory: two_point_average(current.inventory, prior.inventory),
                receivables: two_point_average(
                    current.accounts_receivable,
                    prior.accounts_receivable,
                ),
                fixed_assets: two_point_average(current.fixed_assets(), prior.fixed_assets()),
                total_assets: two_point_average(current.total_assets, prior.total_assets),
            },
            None => Self {
                inventory: current.inventory,
                receivables: current.accounts_receivable,
                fixed_assets: current.fixed_assets(),
                total_assets: current.total_assets,
            },
        }
    }
}

/// Computes the ratio set for `current`, averaging activity bases with `prior` when given.
///
/// Missing optional refinements degrade to their fallbacks: cost of goods
/// sold and credit sales fall back to sales, and interest coverage is only
/// reported when both operating income and interest expense are positive.
/// The fallback is taken as-is, so negative sales give negative turnovers.
pub fn ratios(current: &PeriodFinancials, prior: Option<&PeriodFinancials>) -> RatioSet {
    let bases = ActivityBases::for_periods(current, prior);

    let cost_basis = value_or_fallback(current.cost_of_goods_sold, current.sales);
    let credit_sales = value_or_fallback(current.credit_sales, current.sales);

    let receivables_turnover = safe_divide(credit_sales, bases.receivables);

    let interest_coverage =
        if current.operating_income > Decimal::ZERO && current.interest_expense > Decimal::ZERO {
            safe_divide(current.operating_income, current.interest_expense)
        } else {
            Decimal::ZERO
        };

    RatioSet {
        current_ratio: safe_divide(current.current_assets, current.current_liabilities),
        quick_ratio: safe_divide(
            difference(current.current_assets, current.inventory),
            current.current_liabilities,
        ),

        debt_ratio_pct: percent_of(current.total_liabilities, current.total_assets),
        debt_to_equity: safe_divide(current.total_liabilities, current.equity),
        interest_coverage,

        return_on_assets_pct: percent_of(current.net_income, current.total_assets),
        return_on_equity_pct: percent_of(current.net_income, current.equity),
        net_margin_pct: percent_of(current.net_income, current.sales),

        inventory_turnover: safe_divide(cost_basis, bases.inventory),
        receivables_turnover,
        average_collection_period: safe_divide(COMMERCIAL_YEAR_DAYS, receivables_turnover),
        fixed_asset_turnover: safe_divide(current.sales, bases.fixed_assets),
        total_asset_turnover: safe_divide(current.sales, bases.total_assets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn current() -> PeriodFinancials {
        PeriodFinancials {
            sales: dec!(1200),
            net_income: dec!(120),
            cash: dec!(100),
            accounts_receivable: dec!(200),
            inventory: dec!(150),
            current_assets: dec!(500),
            current_liabilities: dec!(250),
            total_assets: dec!(1500),
            total_liabilities: dec!(600),
            equity: dec!(900),
            ..Default::default()
        }
    }

    fn prior() -> PeriodFinancials {
        PeriodFinancials {
            accounts_receivable: dec!(100),
            inventory: dec!(50),
            current_assets: dec!(300),
            total_assets: dec!(900),
            ..Default::default()
        }
    }

    #[test]
    fn liquidity_and_leverage_ratios() {
        let result = ratios(&current(), None);

        assert_eq!(result.current_ratio, dec!(2));
        assert_eq!(result.quick_ratio, dec!(1.4));
        assert_eq!(result.debt_ratio_pct, dec!(40));
        assert_eq!(result.debt_to_equity.round_dp(6), dec!(0.666667));
    }

    #[test]
    fn profitability_ratios_are_percentages() {
        let result = ratios(&current(), None);

        assert_eq!(result.return_on_assets_pct, dec!(8));
        assert_eq!(result.return_on_equity_pct.round_dp(6), dec!(13.333333));
        assert_eq!(result.net_margin_pct, dec!(10));
    }

    #[test]
    fn activity_ratios_without_prior_use_current_balances() {
        let result = ratios(&current(), None);

        // No cost of goods sold provided: sales is the cost basis.
        assert_eq!(result.inventory_turnover, dec!(8));
        assert_eq!(result.receivables_turnover, dec!(6));
        assert_eq!(result.average_collection_period, dec!(60));
        assert_eq!(result.fixed_asset_turnover, dec!(1.2));
        assert_eq!(result.total_asset_turnover, dec!(0.8));
    }

    #[test]
    fn activity_ratios_with_prior_use_two_point_averages() {
        let result = ratios(&current(), Some(&prior()));

        // Inventory (150 + 50) / 2 = 100, receivables (200 + 100) / 2 = 150,
        // fixed assets (1000 + 600) / 2 = 800, total assets (1500 + 900) / 2 = 1200.
        assert_eq!(result.inventory_turnover, dec!(12));
        assert_eq!(result.receivables_turnover, dec!(8));
        assert_eq!(result.average_collection_period, dec!(45));
        assert_eq!(result.fixed_asset_turnover, dec!(1.5));
        assert_eq!(result.total_asset_turnover, dec!(1));
    }

    #[test]
    fn optional_refinements_replace_sales() {
        let period = PeriodFinancials {
            cost_of_goods_sold: dec!(750),
            credit_sales: dec!(900),
            ..current()
        };
        let result = ratios(&period, None);

        assert_eq!(result.inventory_turnover, dec!(5));
        assert_eq!(result.receivables_turnover, dec!(4.5));
        assert_eq!(result.average_collection_period, dec!(80));
    }

    #[test]
    fn negative_sales_fallback_gives_negative_turnovers() {
        let period = PeriodFinancials {
            sales: dec!(-300),
            ..current()
        };
        let result = ratios(&period, None);

        assert_eq!(result.inventory_turnover, dec!(-2));
        assert_eq!(result.receivables_turnover, dec!(-1.5));
        // A negative turnover is not a valid denominator for the collection period.
        assert_eq!(result.average_collection_period, Decimal::ZERO);
    }

    #[test]
    fn extreme_balances_resolve_to_zero_instead_of_overflowing() {
        let period = PeriodFinancials {
            current_assets: Decimal::MAX,
            inventory: Decimal::MIN,
            current_liabilities: dec!(1),
            total_assets: Decimal::MIN,
            sales: dec!(100),
            ..Default::default()
        };
        let prior = PeriodFinancials {
            current_assets: Decimal::MIN,
            total_assets: Decimal::MAX,
            ..Default::default()
        };

        let result = ratios(&period, None);
        assert_eq!(result.current_ratio, Decimal::MAX);
        assert_eq!(result.quick_ratio, Decimal::ZERO);
        assert_eq!(result.fixed_asset_turnover, Decimal::ZERO);

        let averaged = ratios(&period, Some(&prior));
        assert_eq!(averaged.fixed_asset_turnover, Decimal::ZERO);
        assert_eq!(averaged.total_asset_turnover, Decimal::ZERO);
    }

    #[test]
    fn interest_coverage_requires_both_inputs() {
        let covered = PeriodFinancials {
            operating_income: dec!(300),
            interest_expense: dec!(60),
            ..current()
        };
        assert_eq!(ratios(&covered, None).interest_coverage, dec!(5));

        let no_interest = PeriodFinancials {
            operating_income: dec!(300),
            ..current()
        };
        assert_eq!(ratios(&no_interest, None).interest_coverage, Decimal::ZERO);

        let operating_loss = PeriodFinancials {
            operating_income: dec!(-300),
            interest_expense: dec!(60),
            ..current()
        };
        assert_eq!(ratios(&operating_loss, None).interest_coverage, Decimal::ZERO);
    }

    #[test]
    fn negative_equity_suppresses_equity_ratios() {
        let period = PeriodFinancials {
            equity: dec!(-100),
            ..current()
        };
        let result = ratios(&period, None);

        assert_eq!(result.return_on_equity_pct, Decimal::ZERO);
        assert_eq!(result.debt_to_equity, Decimal::ZERO);
    }

    #[test]
    fn zero_receivables_yield_zero_collection_period() {
        let period = PeriodFinancials {
            accounts_receivable: Decimal::ZERO,
            ..current()
        };
        let result = ratios(&period, None);

        assert_eq!(result.receivables_turnover, Decimal::ZERO);
        assert_eq!(result.average_collection_period, Decimal::ZERO);
    }

    #[test]
    fn zero_periods_yield_zero_ratios() {
        let zero = PeriodFinancials::default();
        assert_eq!(ratios(&zero, Some(&zero)), RatioSet::default());
        assert_eq!(ratios(&zero, None), RatioSet::default());
    }
}
