use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, PaymentMethod, Urgency};

/// Заказ клиента (a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,

    /// Артикул заказанного продукта
    pub product_article: i64,

    /// Название продукта на момент оформления заказа
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

/// Данные формы создания заказа.
///
/// Все поля приходят строками: разбор и проверка выполняются на сервере,
/// чтобы вернуть клиенту понятную ошибку вместо отказа десериализации.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderForm {
    pub product_article: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub order_notes: Option<String>,
    pub urgency: Option<String>,
    pub payment_method: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub total_price: Option<String>,
    pub delivery_date: Option<String>,
}

/// Ответ на успешное создание заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: i64,
}
