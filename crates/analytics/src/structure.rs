//! Structural analyses: common-size (vertical) and period-over-period (horizontal).

use crate::guards::{difference, percent_of, HUNDRED};
use crate::report::{HorizontalVariance, LineItem, LineVariance, VerticalStructure};
use core_types::PeriodFinancials;
use rust_decimal::Decimal;

/// Expresses the current balance sheet as percentages of its totals.
pub fn vertical(current: &PeriodFinancials) -> VerticalStructure {
    let total_assets = current.total_assets;
    let funding = current
        .total_liabilities
        .checked_add(current.equity)
        .unwrap_or(Decimal::ZERO);

    VerticalStructure {
        current_assets_pct: percent_of(current.current_assets, total_assets),
        cash_pct: percent_of(current.cash, total_assets),
        receivables_pct: percent_of(current.accounts_receivable, total_assets),
        inventory_pct: percent_of(current.inventory, total_assets),
        liabilities_pct: percent_of(current.total_liabilities, funding),
        equity_pct: percent_of(current.equity, funding),
    }
}

/// Absolute and percentage change of every tracked line item, in `LineItem::ALL` order.
pub fn horizontal(current: &PeriodFinancials, prior: &PeriodFinancials) -> HorizontalVariance {
    let lines = LineItem::ALL
        .iter()
        .map(|item| {
            let current_value = item.value_in(current);
            let prior_value = item.value_in(prior);
            let absolute_variance = difference(current_value, prior_value);

            LineVariance {
                item: *item,
                label: item.label().to_string(),
                current_value,
                prior_value,
                absolute_variance,
                percent_variance: percent_change(absolute_variance, prior_value),
            }
        })
        .collect();

    HorizontalVariance { lines }
}

/// `change / base * 100` for any non-zero base.
///
/// Unlike `safe_divide`, a negative base is accepted: line items such as net
/// income are legitimately negative and their change is still meaningful.
pub fn percent_change(change: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    change
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
