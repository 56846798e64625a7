// Aggregate handlers
pub mod a001_product_row;
pub mod a002_aggregated_product;
pub mod a003_order;

// Dashboard handlers
pub mod d400_reports;

pub mod index;
pub mod usecases;
