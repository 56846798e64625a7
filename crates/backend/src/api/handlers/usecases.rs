use axum::extract::State;
use axum::Json;
use contracts::usecases::u501_reload_catalog::ReloadSummary;

use crate::api::state::AppState;
use crate::shared::error::AppError;

/// POST /api/reload
///
/// Перечитать CSV и пересобрать каталог. Заказы не затрагиваются.
pub async fn u501_reload_catalog(
    State(state): State<AppState>,
) -> Result<Json<ReloadSummary>, AppError> {
    let summary = state.reloader.execute(&state.db).await?;
    Ok(Json(summary))
}
