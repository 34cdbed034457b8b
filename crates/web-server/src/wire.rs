//! Tolerant parsing of analysis requests from JSON.
//!
//! Field names are matched case-insensitively and without `_`/`-`
//! separators, so `netIncome`, `NetIncome` and `net_income` are the same
//! field. The field names of the Spanish-language entry form are accepted as
//! aliases. Amounts may be JSON numbers or numeric strings; anything else
//! (null, booleans, unparsable text) counts as zero, and unknown fields are
//! ignored.

use core_types::{AnalysisRequest, CoreError, PeriodFinancials};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// The largest magnitude accepted for any amount.
pub const MAX_ABS_AMOUNT: Decimal = dec!(1000000000000000000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("The request body is empty")]
    EmptyBody,

    #[error("The request body is not valid JSON: {0}")]
    MalformedJson(String),

    #[error(transparent)]
    MissingPeriod(#[from] CoreError),

    #[error("Amount '{field}' exceeds the supported magnitude of 10^18")]
    AmountOutOfRange { field: String },
}

/// Parses a request body of the form `{ "currentPeriod": {...}, "priorPeriod": {...} }`.
///
/// A period that is absent, `null` or not an object is reported as missing.
pub fn parse_request(body: &[u8]) -> Result<AnalysisRequest, WireError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(WireError::EmptyBody);
    }

    let root: Value =
        serde_json::from_slice(body).map_err(|e| WireError::MalformedJson(e.to_string()))?;
    let Value::Object(root) = root else {
        return Err(WireError::MalformedJson(
            "expected a JSON object at the top level".to_string(),
        ));
    };

    let mut current = None;
    let mut prior = None;
    for (key, value) in &root {
        match canonical_key(key).as_str() {
            "currentperiod" | "current" | "periodoactual" => current = parse_period(value)?,
            "priorperiod" | "prior" | "previousperiod" | "periodoanterior" => {
                prior = parse_period(value)?
            }
            _ => {}
        }
    }

    Ok(AnalysisRequest::from_parts(current, prior)?)
}

fn parse_period(value: &Value) -> Result<Option<PeriodFinancials>, WireError> {
    let Value::Object(fields) = value else {
        return Ok(None);
    };
    period_from_fields(fields).map(Some)
}

fn period_from_fields(fields: &Map<String, Value>) -> Result<PeriodFinancials, WireError> {
    let mut period = PeriodFinancials::default();

    for (key, raw) in fields {
        let Some(slot) = field_slot(&mut period, &canonical_key(key)) else {
            continue;
        };
        let amount = coerce_amount(raw);
        if amount.abs() > MAX_ABS_AMOUNT {
            return Err(WireError::AmountOutOfRange { field: key.clone() });
        }
        *slot = amount;
    }

    Ok(period)
}

/// Maps a canonical field name to the amount it fills.
fn field_slot<'a>(period: &'a mut PeriodFinancials, key: &str) -> Option<&'a mut Decimal> {
    let slot = match key {
        "sales" | "ventas" => &mut period.sales,
        "netincome" | "utilidadneta" => &mut period.net_income,
        "depreciation" | "depreciacion" => &mut period.depreciation,
        "cash" | "efectivo" => &mut period.cash,
        "accountsreceivable" | "cuentasporcobrar" => &mut period.accounts_receivable,
        "inventory" | "inventario" => &mut period.inventory,
        "currentassets" | "activocorriente" => &mut period.current_assets,
        "accountspayable" | "cuentasporpagar" => &mut period.accounts_payable,
        "currentliabilities" | "pasivocorriente" => &mut period.current_liabilities,
        "totalassets" | "activototal" => &mut period.total_assets,
        "totalliabilities" | "pasivototal" => &mut period.total_liabilities,
        "equity" | "patrimonio" => &mut period.equity,
        "costofgoodssold" | "cogs" | "costobienesvendidos" => &mut period.cost_of_goods_sold,
        "creditsales" | "ventascredito" => &mut period.credit_sales,
        "operatingincome" | "utilidadoperativa" => &mut period.operating_income,
        "interestexpense" | "gastointereses" => &mut period.interest_expense,
        _ => return None,
    };
    Some(slot)
}

/// Lower-cases a key and drops everything but ASCII letters and digits.
fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Converts a JSON value into an amount, resolving anything unusable to zero.
///
/// Numbers go through their decimal text, so `0.1` stays exactly `0.1`.
pub fn coerce_amount(raw: &Value) -> Decimal {
    match raw {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Decimal {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or(Decimal::ZERO)
}
