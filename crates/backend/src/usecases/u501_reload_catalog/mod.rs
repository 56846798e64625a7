pub mod executor;

pub use executor::ReloadExecutor;
