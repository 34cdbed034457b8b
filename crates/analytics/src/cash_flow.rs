use crate::report::CashFlowStatement;
use core_types::PeriodFinancials;
use rust_decimal::Decimal;

/// Reconstructs an indirect-method cash-flow statement from two balance sheets.
///
/// Capital expenditure is estimated from the growth in fixed assets plus the
/// period's depreciation. Financing is the residual that reconciles the three
/// sections to the observed change in cash, so `reconciles()` always holds.
///
/// If any section overflows a `Decimal`, every derived figure (including the
/// net cash change) is reported as `0`; the statement still reconciles.
pub fn cash_flow(current: &PeriodFinancials, prior: &PeriodFinancials) -> CashFlowStatement {
    derive_sections(current, prior).unwrap_or_else(|| CashFlowStatement {
        net_income: current.net_income,
        depreciation: current.depreciation,
        opening_cash: prior.cash,
        closing_cash: current.cash,
        ..Default::default()
    })
}

fn derive_sections(
    current: &PeriodFinancials,
    prior: &PeriodFinancials,
) -> Option<CashFlowStatement> {
    // --- Operating ---
    let receivables_change = -current
        .accounts_receivable
        .checked_sub(prior.accounts_receivable)?;
    let inventory_change = -current.inventory.checked_sub(prior.inventory)?;
    let payables_change = current
        .accounts_payable
        .checked_sub(prior.accounts_payable)?;
    let operating_cash_flow = [
        current.depreciation,
        receivables_change,
        inventory_change,
        payables_change,
    ]
    .into_iter()
    .try_fold(current.net_income, Decimal::checked_add)?;

    // --- Investing ---
    let capital_expenditure = fixed_assets(current)?
        .checked_sub(fixed_assets(prior)?)?
        .checked_add(current.depreciation)?;
    let investing_cash_flow = -capital_expenditure;

    // --- Financing (plug) ---
    let net_cash_change = current.cash.checked_sub(prior.cash)?;
    let financing_cash_flow = net_cash_change
        .checked_sub(operating_cash_flow)?
        .checked_sub(investing_cash_flow)?;

    Some(CashFlowStatement {
        net_income: current.net_income,
        depreciation: current.depreciation,
        receivables_change,
        inventory_change,
        payables_change,
        operating_cash_flow,
        capital_expenditure,
        investing_cash_flow,
        financing_cash_flow,
        net_cash_change,
        opening_cash: prior.cash,
        closing_cash: current.cash,
    })
}

// `PeriodFinancials::fixed_assets` flattens overflow to zero, which would break the plug.
fn fixed_assets(period: &PeriodFinancials) -> Option<Decimal> {
    period.total_assets.checked_sub(period.current_assets)
}
