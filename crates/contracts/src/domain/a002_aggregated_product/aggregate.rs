use serde::{Deserialize, Serialize};

/// Агрегированный продукт (a002): сводка по всем цехам одного артикула
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedProduct {
    pub id: i64,

    /// Артикул (уникален в агрегированном наборе)
    pub article: i64,

    pub product_name: String,
    pub product_type: String,

    /// Среднее значение коэффициента типа продукции
    pub product_type_coefficient: f64,

    /// Минимальная цена для партнёра среди всех цехов
    pub minimum_partner_price: f64,

    pub main_material: String,

    /// Средний процент потерь сырья
    pub raw_material_loss_percentage: f64,

    /// Сумма трудозатрат всех цехов, ч
    pub total_production_hours: f64,

    /// Среднее время изготовления, ч
    pub avg_manufacturing_time: f64,

    pub workshop_count: i64,
}
