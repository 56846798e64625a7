use contracts::dashboards::d400_reports::dto::ReportsDto;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::AppError;

/// Сводка по каталогу для страницы отчётов
pub async fn get_reports(db: &DatabaseConnection) -> Result<ReportsDto, AppError> {
    let categories = repository::get_avg_price_by_type(db).await?;
    let materials = repository::get_count_by_material(db).await?;

    Ok(ReportsDto {
        category_chart: categories
            .into_iter()
            .map(|c| (c.product_type, c.avg_price))
            .collect(),
        material_chart: materials
            .into_iter()
            .map(|m| (m.main_material, m.product_count))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_aggregated_product::{aggregator, repository as product_repository};
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::testing::product_row;

    #[tokio::test]
    async fn test_reports_group_catalog() {
        let db = connect_in_memory().await;

        let mut table = product_row(3, 300, "Стол", 3000.0, 1.0);
        table.product_type = "Столы".to_string();
        table.main_material = "Дуб".to_string();
        let rows = vec![
            product_row(1, 100, "Стул", 1000.0, 1.0),
            product_row(2, 200, "Табурет", 2000.0, 1.0),
            table,
        ];
        product_repository::replace_all(&db, &aggregator::aggregate(&rows))
            .await
            .unwrap();

        let reports = get_reports(&db).await.unwrap();
        assert_eq!(
            reports.category_chart,
            vec![("Столы".to_string(), 3000.0), ("Стулья".to_string(), 1500.0)]
        );
        assert_eq!(
            reports.material_chart,
            vec![("Береза".to_string(), 2), ("Дуб".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_reports_of_empty_catalog() {
        let db = connect_in_memory().await;
        assert_eq!(get_reports(&db).await.unwrap(), ReportsDto::default());
    }
}
