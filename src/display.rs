use analytics::PartialReport;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use rust_decimal::Decimal;

// Values are rounded before padding; precision formatting alone truncates.
fn amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn percent(value: Decimal) -> String {
    format!("{}%", amount(value))
}

fn multiple(value: Decimal) -> String {
    format!("{}x", amount(value))
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

fn metric_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = new_table(&["Metric", "Value"]);
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Renders every section present in the report as titled terminal tables.
pub fn render_report(report: &PartialReport) -> String {
    let mut sections: Vec<String> = Vec::new();

    if let Some(dupont) = &report.dupont {
        let table = metric_table(vec![
            ("Profit margin", percent(dupont.profit_margin_pct)),
            ("Asset turnover", multiple(dupont.asset_turnover)),
            ("Financial leverage", multiple(dupont.financial_leverage)),
            ("Return on equity", percent(dupont.roe_pct)),
        ]);
        sections.push(format!("DuPont Analysis\n{table}"));
    }

    if let Some(ratios) = &report.ratios {
        let table = metric_table(vec![
            ("Current ratio", multiple(ratios.current_ratio)),
            ("Quick ratio", multiple(ratios.quick_ratio)),
            ("Debt ratio", percent(ratios.debt_ratio_pct)),
            ("Debt to equity", multiple(ratios.debt_to_equity)),
            ("Interest coverage", multiple(ratios.interest_coverage)),
            ("Return on assets", percent(ratios.return_on_assets_pct)),
            ("Return on equity", percent(ratios.return_on_equity_pct)),
            ("Net margin", percent(ratios.net_margin_pct)),
            ("Inventory turnover", multiple(ratios.inventory_turnover)),
            ("Receivables turnover", multiple(ratios.receivables_turnover)),
            (
                "Average collection period",
                format!("{} days", amount(ratios.average_collection_period)),
            ),
            ("Fixed asset turnover", multiple(ratios.fixed_asset_turnover)),
            ("Total asset turnover", multiple(ratios.total_asset_turnover)),
        ]);
        sections.push(format!("Financial Ratios\n{table}"));
    }

    if let Some(vertical) = &report.vertical {
        let table = metric_table(vec![
            ("Current assets / total assets", percent(vertical.current_assets_pct)),
            ("Cash / total assets", percent(vertical.cash_pct)),
            ("Receivables / total assets", percent(vertical.receivables_pct)),
            ("Inventory / total assets", percent(vertical.inventory_pct)),
            ("Liabilities / (liabilities + equity)", percent(vertical.liabilities_pct)),
            ("Equity / (liabilities + equity)", percent(vertical.equity_pct)),
        ]);
        sections.push(format!("Vertical Analysis\n{table}"));
    }

    if let Some(horizontal) = &report.horizontal {
        let mut table = new_table(&["Line item", "Current", "Prior", "Change", "Change %"]);
        for line in &horizontal.lines {
            table.add_row(vec![
                Cell::new(&line.label),
                Cell::new(amount(line.current_value)).set_alignment(CellAlignment::Right),
                Cell::new(amount(line.prior_value)).set_alignment(CellAlignment::Right),
                Cell::new(amount(line.absolute_variance)).set_alignment(CellAlignment::Right),
                Cell::new(percent(line.percent_variance)).set_alignment(CellAlignment::Right),
            ]);
        }
        sections.push(format!("Horizontal Analysis\n{table}"));
    }

    if let Some(cash_flow) = &report.cash_flow {
        let table = metric_table(vec![
            ("Net income", amount(cash_flow.net_income)),
            ("Depreciation", amount(cash_flow.depreciation)),
            ("Change in receivables", amount(cash_flow.receivables_change)),
            ("Change in inventory", amount(cash_flow.inventory_change)),
            ("Change in payables", amount(cash_flow.payables_change)),
            ("Operating cash flow", amount(cash_flow.operating_cash_flow)),
            ("Capital expenditure", amount(cash_flow.capital_expenditure)),
            ("Investing cash flow", amount(cash_flow.investing_cash_flow)),
            ("Financing cash flow", amount(cash_flow.financing_cash_flow)),
            ("Net change in cash", amount(cash_flow.net_cash_change)),
            ("Opening cash", amount(cash_flow.opening_cash)),
            ("Closing cash", amount(cash_flow.closing_cash)),
        ]);
        sections.push(format!("Cash Flow Statement\n{table}"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::{AnalysisKind, AnalyticsEngine};
    use core_types::{AnalysisRequest, PeriodFinancials};
    use rust_decimal_macros::dec;

    fn request() -> AnalysisRequest {
        let current = PeriodFinancials {
            sales: dec!(1000),
            net_income: dec!(50),
            cash: dec!(120),
            total_assets: dec!(2000),
            total_liabilities: dec!(1500),
            equity: dec!(500),
            ..Default::default()
        };
        let prior = PeriodFinancials {
            sales: dec!(800),
            cash: dec!(100),
            ..Default::default()
        };
        AnalysisRequest::new(current, prior)
    }

    #[test]
    fn renders_selected_sections_only() {
        let report = AnalyticsEngine::new()
            .calculate_selected(&request(), &[AnalysisKind::DuPont, AnalysisKind::Horizontal]);
        let output = render_report(&report);

        assert!(output.contains("DuPont Analysis"));
        assert!(output.contains("Horizontal Analysis"));
        assert!(!output.contains("Cash Flow Statement"));
        assert!(output.contains("10.00%"));
        assert!(output.contains("25.00%"));
    }

    #[test]
    fn formats_values_for_display() {
        assert_eq!(amount(dec!(1234.567)), "1234.57");
        assert_eq!(percent(dec!(33.3333)), "33.33%");
        assert_eq!(amount(dec!(-0.005)), "-0.00");
        assert_eq!(multiple(dec!(4)), "4.00x");
    }
}
