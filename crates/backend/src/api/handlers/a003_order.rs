use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};
use contracts::domain::a003_order::aggregate::{CreateOrderForm, CreateOrderResponse, Order};

use crate::api::state::AppState;
use crate::domain::a003_order;
use crate::shared::error::AppError;

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    let orders = a003_order::service::list_orders(&state.db).await?;
    Ok(Json(orders))
}

/// POST /api/create_order
pub async fn create_order(
    State(state): State<AppState>,
    form: Result<Form<CreateOrderForm>, FormRejection>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!("Order form rejected: {}", rejection.body_text());
        AppError::validation(rejection.body_text())
    })?;

    let order_id = a003_order::service::create_order(&state.db, &form)
        .await
        .map_err(|e| {
            if !matches!(e, AppError::Storage(_)) {
                tracing::warn!("Order rejected: {}", e);
            }
            e
        })?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order_id,
    }))
}
