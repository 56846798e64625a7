use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers;
use crate::api::state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(|| async { "ok" }))
        // A002 Aggregated products (catalog)
        .route(
            "/api/products",
            get(handlers::a002_aggregated_product::list_products),
        )
        .route(
            "/api/random_products",
            get(handlers::a002_aggregated_product::list_random_products),
        )
        // A001 Raw workshop rows
        .route(
            "/api/production",
            get(handlers::a001_product_row::list_production),
        )
        // A003 Orders
        .route("/api/orders", get(handlers::a003_order::list_orders))
        .route(
            "/api/create_order",
            post(handlers::a003_order::create_order),
        )
        // D400 Reports
        .route("/api/reports", get(handlers::d400_reports::get_reports))
        // UseCase u501: Reload catalog from CSV
        .route(
            "/api/reload",
            post(handlers::usecases::u501_reload_catalog),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
