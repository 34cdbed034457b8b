use core_types::PeriodFinancials;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Fields suffixed `_pct` hold percentages already multiplied by 100 (25 means 25%).
// Every other ratio field is a plain multiple.

/// Return on equity expressed as margin × asset turnover × leverage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuPontBreakdown {
    pub profit_margin_pct: Decimal,
    pub asset_turnover: Decimal,
    pub financial_leverage: Decimal,
    pub roe_pct: Decimal,
}

/// Liquidity, leverage, activity and profitability ratios for one period.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSet {
    // I. Liquidity
    pub current_ratio: Decimal,
    pub quick_ratio: Decimal,

    // II. Leverage
    pub debt_ratio_pct: Decimal,
    pub debt_to_equity: Decimal,
    pub interest_coverage: Decimal,

    // III. Profitability
    pub return_on_assets_pct: Decimal,
    pub return_on_equity_pct: Decimal,
    pub net_margin_pct: Decimal,

    // IV. Activity
    pub inventory_turnover: Decimal,
    pub receivables_turnover: Decimal,
    /// Days, on a 360-day commercial year.
    pub average_collection_period: Decimal,
    pub fixed_asset_turnover: Decimal,
    pub total_asset_turnover: Decimal,
}

/// Common-size balance sheet.
///
/// Asset lines are a share of total assets; the liabilities/equity pair is a
/// share of their own sum.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalStructure {
    pub current_assets_pct: Decimal,
    pub cash_pct: Decimal,
    pub receivables_pct: Decimal,
    pub inventory_pct: Decimal,
    pub liabilities_pct: Decimal,
    pub equity_pct: Decimal,
}

/// The line items tracked by the horizontal analysis, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItem {
    Sales,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    Equity,
}

impl LineItem {
    /// Every tracked item. The order is the display order of the report.
    pub const ALL: [LineItem; 5] = [
        LineItem::Sales,
        LineItem::NetIncome,
        LineItem::TotalAssets,
        LineItem::TotalLiabilities,
        LineItem::Equity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LineItem::Sales => "Sales",
            LineItem::NetIncome => "Net Income",
            LineItem::TotalAssets => "Total Assets",
            LineItem::TotalLiabilities => "Total Liabilities",
            LineItem::Equity => "Equity",
        }
    }

    /// Reads this line item out of a period.
    pub fn value_in(&self, period: &PeriodFinancials) -> Decimal {
        match self {
            LineItem::Sales => period.sales,
            LineItem::NetIncome => period.net_income,
            LineItem::TotalAssets => period.total_assets,
            LineItem::TotalLiabilities => period.total_liabilities,
            LineItem::Equity => period.equity,
        }
    }
}

/// Period-over-period change of a single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineVariance {
    pub item: LineItem,
    pub label: String,
    pub current_value: Decimal,
    pub prior_value: Decimal,
    pub absolute_variance: Decimal,
    pub percent_variance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizontalVariance {
    pub lines: Vec<LineVariance>,
}

impl HorizontalVariance {
    pub fn line(&self, item: LineItem) -> Option<&LineVariance> {
        self.lines.iter().find(|line| line.item == item)
    }
}

/// Indirect-method cash-flow statement reconstructed from two balance sheets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    // I. Operating activities
    pub net_income: Decimal,
    pub depreciation: Decimal,
    pub receivables_change: Decimal,
    pub inventory_change: Decimal,
    pub payables_change: Decimal,
    pub operating_cash_flow: Decimal,

    // II. Investing activities
    pub capital_expenditure: Decimal,
    pub investing_cash_flow: Decimal,

    // III. Financing activities (residual)
    pub financing_cash_flow: Decimal,

    // IV. Cash reconciliation
    pub net_cash_change: Decimal,
    pub opening_cash: Decimal,
    pub closing_cash: Decimal,
}

impl CashFlowStatement {
    /// True when the three sections add up to the observed change in cash.
    pub fn reconciles(&self) -> bool {
        self.operating_cash_flow
            .checked_add(self.investing_cash_flow)
            .and_then(|sum| sum.checked_add(self.financing_cash_flow))
            .is_some_and(|total| total == self.net_cash_change)
    }
}

/// All five analyses of one request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub dupont: DuPontBreakdown,
    pub ratios: RatioSet,
    pub vertical: VerticalStructure,
    pub horizontal: HorizontalVariance,
    pub cash_flow: CashFlowStatement,
}

/// A report holding only the analyses a caller selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dupont: Option<DuPontBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratios: Option<RatioSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalVariance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flow: Option<CashFlowStatement>,
}

impl From<AnalysisReport> for PartialReport {
    fn from(report: AnalysisReport) -> Self {
        Self {
            dupont: Some(report.dupont),
            ratios: Some(report.ratios),
            vertical: Some(report.vertical),
            horizontal: Some(report.horizontal),
            cash_flow: Some(report.cash_flow),
        }
    }
}
