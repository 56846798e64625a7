use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};

/// Средняя минимальная цена по типу продукции
#[derive(Debug, Clone, FromQueryResult)]
pub struct CategoryPrice {
    pub product_type: String,
    pub avg_price: f64,
}

/// Количество продуктов по основному материалу
#[derive(Debug, Clone, FromQueryResult)]
pub struct MaterialCount {
    pub main_material: String,
    pub product_count: i64,
}

pub async fn get_avg_price_by_type<C: ConnectionTrait>(conn: &C) -> Result<Vec<CategoryPrice>, DbErr> {
    let sql = r#"
        SELECT
            product_type,
            COALESCE(AVG(minimum_partner_price), 0.0) AS avg_price
        FROM a002_aggregated_product
        GROUP BY product_type
        ORDER BY product_type
    "#;

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    CategoryPrice::find_by_statement(stmt).all(conn).await
}

pub async fn get_count_by_material<C: ConnectionTrait>(conn: &C) -> Result<Vec<MaterialCount>, DbErr> {
    let sql = r#"
        SELECT
            main_material,
            COUNT(*) AS product_count
        FROM a002_aggregated_product
        GROUP BY main_material
        ORDER BY main_material
    "#;

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    MaterialCount::find_by_statement(stmt).all(conn).await
}
