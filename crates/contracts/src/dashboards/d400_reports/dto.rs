use serde::{Deserialize, Serialize};

/// Данные для графиков отчёта.
///
/// Пары сериализуются массивами `[ключ, значение]`, в таком виде их
/// ожидает страница отчётов.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportsDto {
    /// Средняя минимальная цена для партнёра по типу продукции
    pub category_chart: Vec<(String, f64)>,
    /// Количество продуктов по основному материалу
    pub material_chart: Vec<(String, i64)>,
}
