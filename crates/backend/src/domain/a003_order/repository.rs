use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a003_order::aggregate::Order;
use contracts::enums::{OrderStatus, PaymentMethod, Urgency};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_article: i64,
    pub product_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub order_notes: Option<String>,
    pub urgency: String,
    pub payment_method: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let urgency = Urgency::from_label(&m.urgency).unwrap_or_else(|| {
            tracing::warn!("Order {}: unknown urgency {:?}", m.id, m.urgency);
            Urgency::default()
        });
        let payment_method = PaymentMethod::from_label(&m.payment_method).unwrap_or_else(|| {
            tracing::warn!("Order {}: unknown payment method {:?}", m.id, m.payment_method);
            PaymentMethod::default()
        });
        let status = OrderStatus::from_label(&m.status).unwrap_or_else(|| {
            tracing::warn!("Order {}: unknown status {:?}", m.id, m.status);
            OrderStatus::default()
        });

        Order {
            id: m.id,
            product_article: m.product_article,
            product_name: m.product_name,
            customer_name: m.customer_name,
            customer_phone: m.customer_phone,
            customer_email: m.customer_email,
            delivery_address: m.delivery_address,
            order_notes: m.order_notes,
            urgency,
            payment_method,
            quantity: m.quantity,
            unit_price: m.unit_price,
            total_price: m.total_price,
            order_date: m.order_date,
            delivery_date: m.delivery_date,
            status,
        }
    }
}

/// Новый заказ до сохранения (id назначает БД)
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub product_article: i64,
    pub product_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub order_notes: Option<String>,
    pub urgency: Urgency,
    pub payment_method: PaymentMethod,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<NaiveDate>,
    pub status: OrderStatus,
}

/// Вставить заказ, вернуть сгенерированный id
pub async fn insert<C: ConnectionTrait>(conn: &C, order: NewOrder) -> Result<i64, DbErr> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        product_article: Set(order.product_article),
        product_name: Set(order.product_name),
        customer_name: Set(order.customer_name),
        customer_phone: Set(order.customer_phone),
        customer_email: Set(order.customer_email),
        delivery_address: Set(order.delivery_address),
        order_notes: Set(order.order_notes),
        urgency: Set(order.urgency.label().to_string()),
        payment_method: Set(order.payment_method.label().to_string()),
        quantity: Set(order.quantity),
        unit_price: Set(order.unit_price),
        total_price: Set(order.total_price),
        order_date: Set(order.order_date),
        delivery_date: Set(order.delivery_date),
        status: Set(order.status.label().to_string()),
    };

    let result = Entity::insert(active).exec(conn).await?;
    Ok(result.last_insert_id)
}

/// Все заказы, новые сверху
pub async fn list_newest_first<C: ConnectionTrait>(conn: &C) -> Result<Vec<Order>, DbErr> {
    let orders = Entity::find()
        .order_by_desc(Column::OrderDate)
        .order_by_desc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(orders)
}
