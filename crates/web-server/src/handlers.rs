use crate::{error::AppError, wire, AppState};
use analytics::{AnalysisKind, AnalysisReport, PartialReport};
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// # POST /api/analysis/complete
/// Runs all five analyses on the submitted pair of periods.
/// Also mounted at `/api/analisis/completo` for the Spanish-language entry form.
pub async fn analyze_complete(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalysisReport>, AppError> {
    let request = wire::parse_request(&body)?;
    tracing::debug!(?request, "Received analysis request.");

    let report = state.engine.calculate(&request);
    tracing::debug!(?report, "Analysis complete.");

    Ok(Json(report))
}

/// # POST /api/analysis/:kind
/// Runs a single analysis (`dupont`, `ratios`, `vertical`, `horizontal`, `cash-flow`).
pub async fn analyze_one(
    Path(kind): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<PartialReport>, AppError> {
    let kind: AnalysisKind = kind.parse()?;
    let request = wire::parse_request(&body)?;
    tracing::debug!(analysis = %kind, ?request, "Received analysis request.");

    let report = state.engine.calculate_selected(&request, &[kind]);
    Ok(Json(report))
}
