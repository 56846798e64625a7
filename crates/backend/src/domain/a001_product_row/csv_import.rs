use contracts::domain::a001_product_row::aggregate::ProductRow;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Колонки, которые обязаны присутствовать в заголовке файла
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "id",
    "product_name",
    "article",
    "product_type",
    "product_type_coefficient",
    "minimum_partner_price",
    "main_material",
    "raw_material_loss_percentage",
    "workshop_name",
    "workshop_type",
    "number_of_people_for_production",
    "manufacturing_time_hours",
    "total_labor_hours",
];

/// Откуда читать каталог
#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

/// Ошибка в отдельной строке файла: строка пропускается, загрузка продолжается
#[derive(Debug, Error)]
pub enum IngestionRowError {
    #[error("строка {line}: некорректная запись CSV: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("строка {line}: некорректный id {value:?}")]
    InvalidId { line: usize, value: String },

    #[error("строка {line}: повторяющийся id {id}")]
    DuplicateId { line: usize, id: i64 },
}

impl IngestionRowError {
    pub fn line(&self) -> usize {
        match self {
            IngestionRowError::Malformed { line, .. }
            | IngestionRowError::InvalidId { line, .. }
            | IngestionRowError::DuplicateId { line, .. } => *line,
        }
    }
}

/// Результат чтения файла каталога
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub rows: Vec<ProductRow>,
    pub skipped: Vec<IngestionRowError>,
}

/// Прочитать каталог из файла.
///
/// Отсутствующий или нечитаемый файл не является фатальной ошибкой:
/// возвращается пустой результат.
pub fn load_from_file(source: &CatalogSource) -> CatalogLoad {
    if !source.path.exists() {
        tracing::warn!("Catalog file {} not found", source.path.display());
        return CatalogLoad::default();
    }

    match std::fs::read(&source.path) {
        Ok(bytes) => {
            tracing::info!("Loading catalog from {}", source.path.display());
            parse_catalog(&bytes, source.delimiter)
        }
        Err(e) => {
            tracing::error!("Cannot read catalog file {}: {}", source.path.display(), e);
            CatalogLoad::default()
        }
    }
}

/// Разобрать содержимое CSV с заголовком
pub fn parse_catalog(data: &[u8], delimiter: u8) -> CatalogLoad {
    // Strip UTF-8 BOM if present
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(data);

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            tracing::error!("Failed to read catalog CSV headers: {}", e);
            return CatalogLoad::default();
        }
    };

    tracing::info!(
        "Catalog CSV headers: {:?}",
        headers.iter().collect::<Vec<_>>()
    );

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| column_index(name).is_none())
        .collect();
    if !missing.is_empty() {
        tracing::error!("Catalog CSV is missing columns: {}", missing.join(", "));
        return CatalogLoad::default();
    }

    let columns: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .filter_map(|name| column_index(name))
        .collect();

    let mut load = CatalogLoad::default();
    let mut seen_ids = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let line = idx + 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let err = IngestionRowError::Malformed { line, source: e };
                tracing::warn!("Skipping catalog row: {}", err);
                load.skipped.push(err);
                continue;
            }
        };

        let field = |column: usize| record.get(columns[column]).unwrap_or("").trim();

        let row = match build_row(line, field) {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!("Skipping catalog row: {}", err);
                load.skipped.push(err);
                continue;
            }
        };

        if !seen_ids.insert(row.id) {
            let err = IngestionRowError::DuplicateId { line, id: row.id };
            tracing::warn!("Skipping catalog row: {}", err);
            load.skipped.push(err);
            continue;
        }

        load.rows.push(row);

        if is_progress_point(load.rows.len()) {
            tracing::info!("Loaded {} catalog rows...", load.rows.len());
        }
    }

    tracing::info!(
        "Catalog loaded: {} rows, {} skipped",
        load.rows.len(),
        load.skipped.len()
    );

    load
}

/// Прогресс пишется в лог каждые 20 загруженных строк
const PROGRESS_STEP: usize = 20;

fn is_progress_point(loaded: usize) -> bool {
    loaded > 0 && loaded % PROGRESS_STEP == 0
}

/// Собрать строку по значениям колонок в порядке `REQUIRED_COLUMNS`
fn build_row<'a>(
    line: usize,
    field: impl Fn(usize) -> &'a str,
) -> Result<ProductRow, IngestionRowError> {
    let raw_id = field(0);
    let id = raw_id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| IngestionRowError::InvalidId {
            line,
            value: raw_id.to_string(),
        })?;

    Ok(ProductRow {
        id,
        product_name: field(1).to_string(),
        article: parse_int(field(2)),
        product_type: field(3).to_string(),
        product_type_coefficient: parse_float(field(4)),
        minimum_partner_price: parse_float(field(5)),
        main_material: field(6).to_string(),
        raw_material_loss_percentage: parse_float(field(7)),
        workshop_name: field(8).to_string(),
        workshop_type: field(9).to_string(),
        number_of_people_for_production: parse_int(field(10)),
        manufacturing_time_hours: parse_float(field(11)),
        total_labor_hours: parse_float(field(12)),
    })
}

/// Пустое или нечисловое значение превращается в 0
fn parse_int(s: &str) -> i64 {
    s.parse::<i64>().unwrap_or(0)
}

/// Пустое или нечисловое значение превращается в 0.0; допускается запятая
fn parse_float(s: &str) -> f64 {
    s.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,product_name,article,product_type,product_type_coefficient,minimum_partner_price,main_material,raw_material_loss_percentage,workshop_name,workshop_type,number_of_people_for_production,manufacturing_time_hours,total_labor_hours";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_parses_rows() {
        let text = csv_with(&[
            "1,Стул,100,Стулья,1.5,1000,Береза,0.7,Столярный,Обработка,3,2.0,6.0",
            "2,Стул,100,Стулья,1.5,1200,Береза,0.7,Покрасочный,Покраска,2,3.0,6.0",
        ]);
        let load = parse_catalog(text.as_bytes(), b',');

        assert!(load.skipped.is_empty());
        assert_eq!(load.rows.len(), 2);
        let first = &load.rows[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.product_name, "Стул");
        assert_eq!(first.article, 100);
        assert_eq!(first.minimum_partner_price, 1000.0);
        assert_eq!(first.workshop_name, "Столярный");
        assert_eq!(first.number_of_people_for_production, 3);
        assert_eq!(load.rows[1].total_labor_hours, 6.0);
    }

    #[test]
    fn test_empty_and_garbage_numbers_default_to_zero() {
        let text = csv_with(&["7,Шкаф,abc,Шкафы,,нет,ЛДСП,,Цех,Сборка,,\"1,5\","]);
        let load = parse_catalog(text.as_bytes(), b',');

        assert_eq!(load.rows.len(), 1);
        let row = &load.rows[0];
        assert_eq!(row.article, 0);
        assert_eq!(row.product_type_coefficient, 0.0);
        assert_eq!(row.minimum_partner_price, 0.0);
        assert_eq!(row.number_of_people_for_production, 0);
        assert_eq!(row.manufacturing_time_hours, 1.5);
        assert_eq!(row.total_labor_hours, 0.0);
    }

    #[test]
    fn test_bad_rows_are_skipped_and_loading_continues() {
        let text = csv_with(&[
            "x,Стол,200,Столы,1,500,Дуб,1,Цех,Сборка,1,1,1",
            "1,Стол,200,Столы,1,500,Дуб,1,Цех,Сборка,1,1,1",
            "2,слишком,мало,полей",
            "1,Стол,200,Столы,1,600,Дуб,1,Цех 2,Сборка,1,1,1",
            "3,Стол,200,Столы,1,700,Дуб,1,Цех 3,Сборка,1,1,1",
        ]);
        let load = parse_catalog(text.as_bytes(), b',');

        let ids: Vec<i64> = load.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(load.skipped.len(), 3);
        assert!(matches!(
            load.skipped[0],
            IngestionRowError::InvalidId { line: 1, .. }
        ));
        assert!(matches!(
            load.skipped[1],
            IngestionRowError::Malformed { line: 3, .. }
        ));
        assert!(matches!(
            load.skipped[2],
            IngestionRowError::DuplicateId { line: 4, id: 1 }
        ));
    }

    #[test]
    fn test_bom_and_custom_delimiter() {
        let text = format!(
            "\u{FEFF}{}\n5;Кровать;300;Кровати;2;15000;Сосна;1,2;Цех;Сборка;4;10;40",
            HEADER.replace(',', ";")
        );
        let load = parse_catalog(text.as_bytes(), b';');

        assert_eq!(load.rows.len(), 1);
        assert_eq!(load.rows[0].id, 5);
        assert_eq!(load.rows[0].raw_material_loss_percentage, 1.2);
    }

    #[test]
    fn test_progress_counts_loaded_rows_only() {
        assert!(!is_progress_point(0));
        assert!(!is_progress_point(19));
        assert!(is_progress_point(20));
        assert!(is_progress_point(40));

        // 21 строка данных, одна из них с плохим id: загружено 20
        let mut rows: Vec<String> = (1..=20)
            .map(|id| format!("{},Стул,100,Стулья,1,100,Береза,0,Цех,Сборка,1,1,1", id))
            .collect();
        rows.insert(5, "0,Стул,100,Стулья,1,100,Береза,0,Цех,Сборка,1,1,1".to_string());
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let load = parse_catalog(csv_with(&refs).as_bytes(), b',');

        assert_eq!(load.rows.len(), 20);
        assert_eq!(load.skipped.len(), 1);
        assert!(is_progress_point(load.rows.len()));
    }

    #[test]
    fn test_missing_column_yields_no_rows() {
        let text = "id,product_name,article\n1,Стул,100";
        let load = parse_catalog(text.as_bytes(), b',');
        assert!(load.rows.is_empty());
        assert!(load.skipped.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_fatal() {
        let source = CatalogSource::new("definitely/not/here/combined_data.csv", b',');
        let load = load_from_file(&source);
        assert!(load.rows.is_empty());
        assert!(load.skipped.is_empty());
    }
}
