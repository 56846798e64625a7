pub mod a001_product_row;
pub mod a002_aggregated_product;
pub mod a003_order;
