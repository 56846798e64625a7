//! Общие заготовки данных для тестов

use contracts::domain::a001_product_row::aggregate::ProductRow;

pub fn product_row(id: i64, article: i64, name: &str, price: f64, hours: f64) -> ProductRow {
    ProductRow {
        id,
        product_name: name.to_string(),
        article,
        product_type: "Стулья".to_string(),
        product_type_coefficient: 1.0,
        minimum_partner_price: price,
        main_material: "Береза".to_string(),
        raw_material_loss_percentage: 0.5,
        workshop_name: format!("Цех {}", id),
        workshop_type: "Сборка".to_string(),
        number_of_people_for_production: 2,
        manufacturing_time_hours: hours,
        total_labor_hours: hours,
    }
}
