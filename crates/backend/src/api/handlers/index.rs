use axum::extract::State;
use axum::response::Html;

use crate::api::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.assets.index_html().to_string())
}
