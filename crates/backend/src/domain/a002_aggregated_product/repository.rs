use contracts::domain::a002_aggregated_product::aggregate::AggregatedProduct;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_aggregated_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(unique)]
    pub article: i64,
    pub product_name: String,
    pub product_type: String,
    pub product_type_coefficient: f64,
    pub minimum_partner_price: f64,
    pub main_material: String,
    pub raw_material_loss_percentage: f64,
    pub total_production_hours: f64,
    pub avg_manufacturing_time: f64,
    pub workshop_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AggregatedProduct {
    fn from(m: Model) -> Self {
        AggregatedProduct {
            id: m.id,
            article: m.article,
            product_name: m.product_name,
            product_type: m.product_type,
            product_type_coefficient: m.product_type_coefficient,
            minimum_partner_price: m.minimum_partner_price,
            main_material: m.main_material,
            raw_material_loss_percentage: m.raw_material_loss_percentage,
            total_production_hours: m.total_production_hours,
            avg_manufacturing_time: m.avg_manufacturing_time,
            workshop_count: m.workshop_count,
        }
    }
}

impl From<&AggregatedProduct> for ActiveModel {
    fn from(p: &AggregatedProduct) -> Self {
        ActiveModel {
            id: Set(p.id),
            article: Set(p.article),
            product_name: Set(p.product_name.clone()),
            product_type: Set(p.product_type.clone()),
            product_type_coefficient: Set(p.product_type_coefficient),
            minimum_partner_price: Set(p.minimum_partner_price),
            main_material: Set(p.main_material.clone()),
            raw_material_loss_percentage: Set(p.raw_material_loss_percentage),
            total_production_hours: Set(p.total_production_hours),
            avg_manufacturing_time: Set(p.avg_manufacturing_time),
            workshop_count: Set(p.workshop_count),
        }
    }
}

const INSERT_CHUNK: usize = 50;

/// Полностью заменить агрегированный набор. Вызывать внутри транзакции.
pub async fn replace_all<C: ConnectionTrait>(
    conn: &C,
    products: &[AggregatedProduct],
) -> Result<(), DbErr> {
    Entity::delete_many().exec(conn).await?;

    for chunk in products.chunks(INSERT_CHUNK) {
        let models: Vec<ActiveModel> = chunk.iter().map(ActiveModel::from).collect();
        Entity::insert_many(models).exec(conn).await?;
    }
    Ok(())
}

/// Все продукты по названию (при равенстве по артикулу)
pub async fn list_by_name<C: ConnectionTrait>(conn: &C) -> Result<Vec<AggregatedProduct>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::ProductName)
        .order_by_asc(Column::Article)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn find_by_article<C: ConnectionTrait>(
    conn: &C,
    article: i64,
) -> Result<Option<AggregatedProduct>, DbErr> {
    let model = Entity::find()
        .filter(Column::Article.eq(article))
        .one(conn)
        .await?;
    Ok(model.map(Into::into))
}
