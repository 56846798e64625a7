use contracts::domain::a001_product_row::aggregate::ProductRow;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_product_row")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub product_name: String,
    pub article: i64,
    pub product_type: String,
    pub product_type_coefficient: f64,
    pub minimum_partner_price: f64,
    pub main_material: String,
    pub raw_material_loss_percentage: f64,
    pub workshop_name: String,
    pub workshop_type: String,
    pub number_of_people_for_production: i64,
    pub manufacturing_time_hours: f64,
    pub total_labor_hours: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductRow {
    fn from(m: Model) -> Self {
        ProductRow {
            id: m.id,
            product_name: m.product_name,
            article: m.article,
            product_type: m.product_type,
            product_type_coefficient: m.product_type_coefficient,
            minimum_partner_price: m.minimum_partner_price,
            main_material: m.main_material,
            raw_material_loss_percentage: m.raw_material_loss_percentage,
            workshop_name: m.workshop_name,
            workshop_type: m.workshop_type,
            number_of_people_for_production: m.number_of_people_for_production,
            manufacturing_time_hours: m.manufacturing_time_hours,
            total_labor_hours: m.total_labor_hours,
        }
    }
}

impl From<&ProductRow> for ActiveModel {
    fn from(row: &ProductRow) -> Self {
        ActiveModel {
            id: Set(row.id),
            product_name: Set(row.product_name.clone()),
            article: Set(row.article),
            product_type: Set(row.product_type.clone()),
            product_type_coefficient: Set(row.product_type_coefficient),
            minimum_partner_price: Set(row.minimum_partner_price),
            main_material: Set(row.main_material.clone()),
            raw_material_loss_percentage: Set(row.raw_material_loss_percentage),
            workshop_name: Set(row.workshop_name.clone()),
            workshop_type: Set(row.workshop_type.clone()),
            number_of_people_for_production: Set(row.number_of_people_for_production),
            manufacturing_time_hours: Set(row.manufacturing_time_hours),
            total_labor_hours: Set(row.total_labor_hours),
        }
    }
}

/// Строк в одном INSERT (SQLite ограничивает число параметров запроса)
const INSERT_CHUNK: usize = 50;

/// Заменить все строки исходных данных. Вызывать внутри транзакции.
pub async fn replace_all<C: ConnectionTrait>(conn: &C, rows: &[ProductRow]) -> Result<(), DbErr> {
    Entity::delete_many().exec(conn).await?;

    for chunk in rows.chunks(INSERT_CHUNK) {
        let models: Vec<ActiveModel> = chunk.iter().map(ActiveModel::from).collect();
        Entity::insert_many(models).exec(conn).await?;
    }
    Ok(())
}

/// Первые `limit` строк по возрастанию id
pub async fn list_first<C: ConnectionTrait>(conn: &C, limit: u64) -> Result<Vec<ProductRow>, DbErr> {
    let rows = Entity::find()
        .order_by_asc(Column::Id)
        .limit(limit)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(rows)
}

#[cfg(test)]
pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    use sea_orm::PaginatorTrait;

    Entity::find().count(conn).await
}
