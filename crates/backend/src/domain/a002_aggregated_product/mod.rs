pub mod aggregator;
pub mod repository;
pub mod sampling;
pub mod service;
