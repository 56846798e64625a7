use contracts::domain::a001_product_row::aggregate::ProductRow;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::AppError;

/// Сколько строк исходных данных отдаётся в предпросмотр производства
pub const PREVIEW_LIMIT: u64 = 50;

/// Предпросмотр исходных данных: не более 50 строк по возрастанию id
pub async fn list_preview(db: &DatabaseConnection) -> Result<Vec<ProductRow>, AppError> {
    Ok(repository::list_first(db, PREVIEW_LIMIT).await?)
}
