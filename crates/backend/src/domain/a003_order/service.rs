use chrono::{NaiveDate, Utc};
use contracts::domain::a003_order::aggregate::{CreateOrderForm, Order};
use contracts::enums::{OrderStatus, PaymentMethod, Urgency};
use sea_orm::DatabaseConnection;

use super::repository::{self, NewOrder};
use crate::domain::a002_aggregated_product;
use crate::shared::error::AppError;

/// Допустимое расхождение присланной суммы с пересчитанной
const TOTAL_PRICE_TOLERANCE: f64 = 0.01;

/// Проверенные данные формы
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub product_article: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: Option<String>,
    pub order_notes: Option<String>,
    pub urgency: Urgency,
    pub payment_method: PaymentMethod,
    pub quantity: i64,
    pub unit_price: f64,
    /// Сумма, присланная клиентом (только для сверки)
    pub client_total_price: Option<f64>,
    pub delivery_date: Option<NaiveDate>,
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(value: &Option<String>, message: &str) -> Result<String, AppError> {
    trimmed(value)
        .map(str::to_string)
        .ok_or_else(|| AppError::validation(message))
}

fn parse_price(value: &Option<String>, field: &str) -> Result<Option<f64>, AppError> {
    match trimmed(value) {
        None => Ok(None),
        Some(raw) => raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("Некорректное значение поля {}: {}", field, raw))),
    }
}

/// Разбор и проверка формы без обращения к БД
pub fn validate(form: &CreateOrderForm) -> Result<ValidatedOrder, AppError> {
    let product_article = trimmed(&form.product_article)
        .ok_or_else(|| AppError::validation("Не выбран товар"))?
        .parse::<i64>()
        .map_err(|_| AppError::validation("Некорректный артикул товара"))?;

    let customer_name = required(&form.customer_name, "Укажите имя клиента")?;
    let customer_phone = required(&form.customer_phone, "Укажите телефон клиента")?;

    let quantity = trimmed(&form.quantity)
        .and_then(|q| q.parse::<i64>().ok())
        .ok_or_else(|| AppError::validation("Некорректное количество"))?;
    if quantity < 1 {
        return Err(AppError::validation("Количество должно быть не меньше 1"));
    }

    let urgency = match trimmed(&form.urgency) {
        None => Urgency::default(),
        Some(label) => Urgency::from_label(label)
            .ok_or_else(|| AppError::validation(format!("Неизвестная срочность: {}", label)))?,
    };
    let payment_method = match trimmed(&form.payment_method) {
        None => PaymentMethod::default(),
        Some(label) => PaymentMethod::from_label(label)
            .ok_or_else(|| AppError::validation(format!("Неизвестный способ оплаты: {}", label)))?,
    };

    let delivery_date = match trimmed(&form.delivery_date) {
        None => None,
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::validation(format!("Некорректная дата доставки: {}", raw)))?,
        ),
    };

    Ok(ValidatedOrder {
        product_article,
        customer_name,
        customer_phone,
        customer_email: trimmed(&form.customer_email).map(str::to_string),
        delivery_address: trimmed(&form.delivery_address).map(str::to_string),
        order_notes: trimmed(&form.order_notes).map(str::to_string),
        urgency,
        payment_method,
        quantity,
        unit_price: parse_price(&form.unit_price, "unit_price")?.unwrap_or(0.0),
        client_total_price: parse_price(&form.total_price, "total_price")?,
        delivery_date,
    })
}

/// Создать заказ, вернуть его id.
///
/// Цена за единицу принимается от клиента как есть, итоговая сумма
/// пересчитывается на сервере.
pub async fn create_order(db: &DatabaseConnection, form: &CreateOrderForm) -> Result<i64, AppError> {
    let order = validate(form)?;

    let product = a002_aggregated_product::service::find_by_article(db, order.product_article)
        .await?
        .ok_or_else(|| AppError::not_found("Товар не найден"))?;

    if order.unit_price < product.minimum_partner_price {
        tracing::warn!(
            "Order for article {}: unit price {} is below catalog minimum {}",
            product.article,
            order.unit_price,
            product.minimum_partner_price
        );
    }

    let total_price = order.unit_price * order.quantity as f64;
    if let Some(client_total) = order.client_total_price {
        if (client_total - total_price).abs() > TOTAL_PRICE_TOLERANCE {
            tracing::warn!(
                "Order for article {}: client total {} replaced with {}",
                product.article,
                client_total,
                total_price
            );
        }
    }

    let id = repository::insert(
        db,
        NewOrder {
            product_article: product.article,
            product_name: product.product_name,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_email: order.customer_email,
            delivery_address: order.delivery_address,
            order_notes: order.order_notes,
            urgency: order.urgency,
            payment_method: order.payment_method,
            quantity: order.quantity,
            unit_price: order.unit_price,
            total_price,
            order_date: Utc::now(),
            delivery_date: order.delivery_date,
            status: OrderStatus::New,
        },
    )
    .await?;

    tracing::info!(
        "Order {} created: article {}, quantity {}, total {}",
        id,
        order.product_article,
        order.quantity,
        total_price
    );
    Ok(id)
}

/// Все заказы, новые сверху
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<Order>, AppError> {
    Ok(repository::list_newest_first(db).await?)
}
