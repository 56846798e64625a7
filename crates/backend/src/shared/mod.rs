pub mod config;
pub mod data;
pub mod error;

#[cfg(test)]
pub mod testing;
