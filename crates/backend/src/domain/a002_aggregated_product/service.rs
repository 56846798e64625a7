use contracts::domain::a002_aggregated_product::aggregate::AggregatedProduct;
use sea_orm::DatabaseConnection;

use super::{repository, sampling};
use crate::shared::error::AppError;

/// Каталог для выпадающего списка: все продукты по названию
pub async fn list_by_name(db: &DatabaseConnection) -> Result<Vec<AggregatedProduct>, AppError> {
    Ok(repository::list_by_name(db).await?)
}

/// Витрина: случайные 5–15 продуктов, новая выборка на каждый вызов
pub async fn list_random(db: &DatabaseConnection) -> Result<Vec<AggregatedProduct>, AppError> {
    let all = repository::list_by_name(db).await?;
    let mut rng = rand::thread_rng();
    Ok(sampling::sample(&all, &mut rng))
}

pub async fn find_by_article(
    db: &DatabaseConnection,
    article: i64,
) -> Result<Option<AggregatedProduct>, AppError> {
    Ok(repository::find_by_article(db, article).await?)
}
