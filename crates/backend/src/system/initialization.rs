use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::api::state::AppState;
use crate::domain::a001_product_row::csv_import::CatalogSource;
use crate::shared::config::{self, Config};
use crate::shared::data::db;
use crate::system::assets::AppAssets;
use crate::usecases::u501_reload_catalog::ReloadExecutor;

/// Подготовить всё, что нужно серверу: БД, каталог, статические ресурсы.
///
/// Выполняется один раз до запуска сервера. Перезагрузка каталога
/// выполняется только если она включена в конфигурации.
pub async fn initialize(config: &Config) -> Result<AppState> {
    let db_path = config::get_database_path(config)?;
    let db = db::initialize_database(&db_path)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let source = CatalogSource::new(&config.import.csv_path, config.import.delimiter_byte()?);
    let reloader = ReloadExecutor::new(source);

    if config.import.reload_on_start {
        reloader
            .execute(&db)
            .await
            .context("Failed to reload catalog on startup")?;
    } else {
        tracing::info!("Catalog reload on startup is disabled, using stored catalog");
    }

    let assets = AppAssets::prepare(Path::new(&config.assets.logo_path));

    Ok(AppState {
        db,
        assets: Arc::new(assets),
        reloader: Arc::new(reloader),
    })
}
