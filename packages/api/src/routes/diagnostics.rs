use axum::{extract::State, Json};

use arcade_shared::services::diagnostics_service::DiagnosticsReport;

use crate::state::AppState;

/// Store reachability report. Always answers 200.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(state.diagnostics_service.report().await)
}
