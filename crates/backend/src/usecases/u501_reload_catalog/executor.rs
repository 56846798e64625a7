use contracts::usecases::u501_reload_catalog::ReloadSummary;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::domain::a001_product_row::csv_import::{self, CatalogLoad, CatalogSource};
use crate::domain::a001_product_row::repository as product_row_repository;
use crate::domain::a002_aggregated_product::{aggregator, repository as aggregated_repository};

/// Executor для UseCase перезагрузки каталога из CSV.
///
/// Читает файл, заменяет строки цехов и пересобирает агрегированный
/// набор в одной транзакции. Заказы не затрагиваются. Повторный запуск
/// на том же файле даёт то же состояние.
#[derive(Debug, Clone)]
pub struct ReloadExecutor {
    source: CatalogSource,
}

impl ReloadExecutor {
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    pub async fn execute(&self, db: &DatabaseConnection) -> Result<ReloadSummary, DbErr> {
        tracing::info!("Reloading catalog from {}", self.source.path.display());
        let load = csv_import::load_from_file(&self.source);
        apply_load(db, load).await
    }
}

/// Записать прочитанный каталог в БД
pub async fn apply_load(db: &DatabaseConnection, load: CatalogLoad) -> Result<ReloadSummary, DbErr> {
    let products = aggregator::aggregate(&load.rows);

    let txn = db.begin().await?;
    product_row_repository::replace_all(&txn, &load.rows).await?;
    aggregated_repository::replace_all(&txn, &products).await?;
    txn.commit().await?;

    let summary = ReloadSummary {
        loaded: load.rows.len(),
        skipped: load.skipped.len(),
        aggregated: products.len(),
    };
    tracing::info!(
        "Catalog reloaded: {} rows loaded, {} skipped, {} products aggregated",
        summary.loaded,
        summary.skipped,
        summary.aggregated
    );
    Ok(summary)
}
