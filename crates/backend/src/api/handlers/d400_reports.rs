use axum::extract::State;
use axum::Json;
use contracts::dashboards::d400_reports::dto::ReportsDto;

use crate::api::state::AppState;
use crate::dashboards::d400_reports;
use crate::shared::error::AppError;

/// GET /api/reports
pub async fn get_reports(State(state): State<AppState>) -> Result<Json<ReportsDto>, AppError> {
    let reports = d400_reports::service::get_reports(&state.db).await?;
    Ok(Json(reports))
}
