use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::system::assets::AppAssets;
use crate::usecases::u501_reload_catalog::ReloadExecutor;

/// Общее состояние обработчиков. Всё, кроме пула соединений, неизменяемо.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub assets: Arc<AppAssets>,
    pub reloader: Arc<ReloadExecutor>,
}
