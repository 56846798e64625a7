use serde::{Deserialize, Serialize};

/// Итог перезагрузки каталога из CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReloadSummary {
    /// Загружено строк исходных данных
    pub loaded: usize,
    /// Пропущено некорректных строк
    pub skipped: usize,
    /// Создано агрегированных продуктов
    pub aggregated: usize,
}
