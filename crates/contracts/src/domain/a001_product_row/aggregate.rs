use serde::{Deserialize, Serialize};

/// Строка исходных данных: вклад одного цеха в производство продукта (a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub product_name: String,

    /// Артикул продукта (повторяется для каждого цеха)
    pub article: i64,

    pub product_type: String,
    pub product_type_coefficient: f64,
    pub minimum_partner_price: f64,
    pub main_material: String,

    /// Процент потерь сырья
    pub raw_material_loss_percentage: f64,

    pub workshop_name: String,
    pub workshop_type: String,
    pub number_of_people_for_production: i64,
    pub manufacturing_time_hours: f64,
    pub total_labor_hours: f64,
}

impl ProductRow {
    /// Ключ группировки для агрегации: (артикул, название, тип, материал)
    pub fn group_key(&self) -> (i64, &str, &str, &str) {
        (
            self.article,
            self.product_name.as_str(),
            self.product_type.as_str(),
            self.main_material.as_str(),
        )
    }
}
