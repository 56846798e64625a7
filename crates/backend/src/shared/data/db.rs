use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, SqlxSqliteConnector, Statement};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

const CREATE_PRODUCT_ROW_TABLE: &str = r#"
    CREATE TABLE a001_product_row (
        id INTEGER PRIMARY KEY NOT NULL,
        product_name TEXT NOT NULL,
        article INTEGER NOT NULL,
        product_type TEXT NOT NULL,
        product_type_coefficient REAL NOT NULL DEFAULT 0,
        minimum_partner_price REAL NOT NULL DEFAULT 0,
        main_material TEXT NOT NULL DEFAULT '',
        raw_material_loss_percentage REAL NOT NULL DEFAULT 0,
        workshop_name TEXT NOT NULL DEFAULT '',
        workshop_type TEXT NOT NULL DEFAULT '',
        number_of_people_for_production INTEGER NOT NULL DEFAULT 0,
        manufacturing_time_hours REAL NOT NULL DEFAULT 0,
        total_labor_hours REAL NOT NULL DEFAULT 0
    );
"#;

const CREATE_AGGREGATED_PRODUCT_TABLE: &str = r#"
    CREATE TABLE a002_aggregated_product (
        id INTEGER PRIMARY KEY NOT NULL,
        article INTEGER UNIQUE NOT NULL,
        product_name TEXT NOT NULL,
        product_type TEXT NOT NULL,
        product_type_coefficient REAL NOT NULL DEFAULT 0,
        minimum_partner_price REAL NOT NULL DEFAULT 0,
        main_material TEXT NOT NULL DEFAULT '',
        raw_material_loss_percentage REAL NOT NULL DEFAULT 0,
        total_production_hours REAL NOT NULL DEFAULT 0,
        avg_manufacturing_time REAL NOT NULL DEFAULT 0,
        workshop_count INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_ORDER_TABLE: &str = r#"
    CREATE TABLE a003_order (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_article INTEGER NOT NULL,
        product_name TEXT NOT NULL,
        customer_name TEXT NOT NULL,
        customer_phone TEXT NOT NULL,
        customer_email TEXT,
        delivery_address TEXT,
        order_notes TEXT,
        urgency TEXT NOT NULL DEFAULT 'обычный',
        payment_method TEXT NOT NULL DEFAULT 'наличные',
        quantity INTEGER NOT NULL,
        unit_price REAL NOT NULL DEFAULT 0,
        total_price REAL NOT NULL DEFAULT 0,
        order_date TEXT NOT NULL,
        delivery_date TEXT,
        status TEXT NOT NULL DEFAULT 'новый'
    );
"#;

/// Таблицы приложения в порядке создания
const TABLES: [(&str, &str); 3] = [
    ("a001_product_row", CREATE_PRODUCT_ROW_TABLE),
    ("a002_aggregated_product", CREATE_AGGREGATED_PRODUCT_TABLE),
    ("a003_order", CREATE_ORDER_TABLE),
];

/// Открыть (или создать) файл БД и подготовить схему
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    tracing::info!("Opening database: {}", db_file.display());

    let options = SqliteConnectOptions::new()
        .filename(db_file)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    ensure_schema(&pool).await?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

async fn has_table(pool: &SqlitePool, table_name: &str) -> anyhow::Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM sqlite_master WHERE type='table' AND name = ?1",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// Создать отсутствующие таблицы. Существующие данные не трогаются.
async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool.clone());

    for (table_name, ddl) in TABLES {
        if has_table(pool, table_name).await? {
            continue;
        }
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "CREATE INDEX IF NOT EXISTS idx_a003_order_date ON a003_order (order_date);".to_string(),
    ))
    .await?;

    Ok(())
}

/// Пул in-memory БД для тестов. Одно соединение: у каждого соединения
/// SQLite в памяти своя база.
#[cfg(test)]
async fn in_memory_pool() -> SqlitePool {
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap()
}

/// In-memory БД со схемой для тестов
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let pool = in_memory_pool().await;
    ensure_schema(&pool).await.unwrap();
    SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_bootstrap_is_repeatable() {
        let pool = in_memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        for (table_name, _) in TABLES {
            assert!(has_table(&pool, table_name).await.unwrap());
        }
        // повторный запуск не должен падать на существующих таблицах
        ensure_schema(&pool).await.unwrap();
        assert!(has_table(&pool, "a003_order").await.unwrap());
    }
}
