use axum::extract::State;
use axum::Json;
use contracts::domain::a002_aggregated_product::aggregate::AggregatedProduct;

use crate::api::state::AppState;
use crate::domain::a002_aggregated_product;
use crate::shared::error::AppError;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<AggregatedProduct>>, AppError> {
    let items = a002_aggregated_product::service::list_by_name(&state.db).await?;
    Ok(Json(items))
}

/// GET /api/random_products
pub async fn list_random_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<AggregatedProduct>>, AppError> {
    let items = a002_aggregated_product::service::list_random(&state.db).await?;
    Ok(Json(items))
}
