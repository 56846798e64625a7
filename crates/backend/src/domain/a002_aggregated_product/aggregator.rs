use contracts::domain::a001_product_row::aggregate::ProductRow;
use contracts::domain::a002_aggregated_product::aggregate::AggregatedProduct;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug)]
struct GroupTotals {
    coefficient_sum: f64,
    min_price: f64,
    loss_sum: f64,
    labor_hours_sum: f64,
    manufacturing_hours_sum: f64,
    count: i64,
}

impl GroupTotals {
    fn new() -> Self {
        Self {
            coefficient_sum: 0.0,
            min_price: f64::INFINITY,
            loss_sum: 0.0,
            labor_hours_sum: 0.0,
            manufacturing_hours_sum: 0.0,
            count: 0,
        }
    }

    fn add(&mut self, row: &ProductRow) {
        self.coefficient_sum += row.product_type_coefficient;
        self.min_price = self.min_price.min(row.minimum_partner_price);
        self.loss_sum += row.raw_material_loss_percentage;
        self.labor_hours_sum += row.total_labor_hours;
        self.manufacturing_hours_sum += row.manufacturing_time_hours;
        self.count += 1;
    }
}

/// Свернуть строки цехов в агрегированные продукты.
///
/// Группировка по (артикул, название, тип, материал). Результат
/// упорядочен по названию, затем по артикулу, типу и материалу; id
/// назначаются 1..=n в этом порядке, поэтому одинаковый вход всегда даёт
/// одинаковый набор.
///
/// Артикул в результате уникален: если несколько групп делят один
/// артикул, остаётся первая по порядку, остальные отбрасываются с
/// предупреждением.
pub fn aggregate(rows: &[ProductRow]) -> Vec<AggregatedProduct> {
    let mut groups: BTreeMap<(i64, &str, &str, &str), GroupTotals> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.group_key())
            .or_insert_with(GroupTotals::new)
            .add(row);
    }

    let mut products: Vec<AggregatedProduct> = groups
        .into_iter()
        .map(|((article, name, product_type, material), totals)| {
            let n = totals.count as f64;
            AggregatedProduct {
                id: 0,
                article,
                product_name: name.to_string(),
                product_type: product_type.to_string(),
                product_type_coefficient: totals.coefficient_sum / n,
                minimum_partner_price: totals.min_price,
                main_material: material.to_string(),
                raw_material_loss_percentage: totals.loss_sum / n,
                total_production_hours: totals.labor_hours_sum,
                avg_manufacturing_time: totals.manufacturing_hours_sum / n,
                workshop_count: totals.count,
            }
        })
        .collect();

    products.sort_by(|a, b| {
        a.product_name
            .cmp(&b.product_name)
            .then(a.article.cmp(&b.article))
            .then_with(|| a.product_type.cmp(&b.product_type))
            .then_with(|| a.main_material.cmp(&b.main_material))
    });

    let mut articles = HashSet::new();
    products.retain(|p| {
        if articles.insert(p.article) {
            return true;
        }
        tracing::warn!(
            "Article {} is shared by several products, dropping '{}' ({}, {})",
            p.article,
            p.product_name,
            p.product_type,
            p.main_material
        );
        false
    });

    for (idx, product) in products.iter_mut().enumerate() {
        product.id = idx as i64 + 1;
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::product_row;

    #[test]
    fn test_two_workshops_of_one_chair() {
        let rows = vec![
            product_row(1, 100, "Chair", 1000.0, 2.0),
            product_row(2, 100, "Chair", 1200.0, 3.0),
        ];
        let products = aggregate(&rows);

        assert_eq!(products.len(), 1);
        let chair = &products[0];
        assert_eq!(chair.id, 1);
        assert_eq!(chair.article, 100);
        assert_eq!(chair.minimum_partner_price, 1000.0);
        assert_eq!(chair.total_production_hours, 5.0);
        assert_eq!(chair.avg_manufacturing_time, 2.5);
        assert_eq!(chair.workshop_count, 2);
    }

    #[test]
    fn test_group_statistics_match_contributing_rows() {
        let mut rows = Vec::new();
        for id in 1..=30 {
            let mut row = product_row(id, id % 4, "Изделие", 500.0 + (id * 37 % 11) as f64, id as f64 / 2.0);
            row.product_name = format!("Изделие {}", id % 4);
            row.product_type_coefficient = id as f64;
            rows.push(row);
        }

        let products = aggregate(&rows);
        assert_eq!(products.len(), 4);

        for product in &products {
            let members: Vec<&ProductRow> = rows
                .iter()
                .filter(|r| {
                    r.group_key()
                        == (
                            product.article,
                            product.product_name.as_str(),
                            product.product_type.as_str(),
                            product.main_material.as_str(),
                        )
                })
                .collect();

            assert_eq!(product.workshop_count, members.len() as i64);
            assert!(members
                .iter()
                .all(|r| product.minimum_partner_price <= r.minimum_partner_price));
            let labor: f64 = members.iter().map(|r| r.total_labor_hours).sum();
            assert!((product.total_production_hours - labor).abs() < 1e-9);
            let mean_coef =
                members.iter().map(|r| r.product_type_coefficient).sum::<f64>() / members.len() as f64;
            assert!((product.product_type_coefficient - mean_coef).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ordered_by_name_with_sequential_ids() {
        let rows = vec![
            product_row(1, 3, "Шкаф", 1.0, 1.0),
            product_row(2, 1, "Кресло", 1.0, 1.0),
            product_row(3, 2, "Диван", 1.0, 1.0),
        ];
        let products = aggregate(&rows);

        let names: Vec<&str> = products.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Диван", "Кресло", "Шкаф"]);
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let rows = vec![
            product_row(4, 7, "Стол", 300.0, 1.0),
            product_row(1, 5, "Стул", 100.0, 2.0),
            product_row(2, 5, "Стул", 90.0, 2.0),
        ];
        let mut shuffled = rows.clone();
        shuffled.reverse();

        assert_eq!(aggregate(&rows), aggregate(&rows));
        assert_eq!(aggregate(&rows), aggregate(&shuffled));
    }

    #[test]
    fn test_article_collision_keeps_first_group() {
        let mut other = product_row(2, 100, "Табурет", 50.0, 1.0);
        other.main_material = "Дуб".to_string();
        let rows = vec![product_row(1, 100, "Стул", 100.0, 1.0), other];

        let products = aggregate(&rows);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_name, "Стул");
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
