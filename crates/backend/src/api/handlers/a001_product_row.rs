use axum::extract::State;
use axum::Json;
use contracts::domain::a001_product_row::aggregate::ProductRow;

use crate::api::state::AppState;
use crate::domain::a001_product_row;
use crate::shared::error::AppError;

/// GET /api/production
pub async fn list_production(State(state): State<AppState>) -> Result<Json<Vec<ProductRow>>, AppError> {
    let rows = a001_product_row::service::list_preview(&state.db).await?;
    Ok(Json(rows))
}
