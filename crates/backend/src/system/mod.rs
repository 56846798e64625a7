pub mod assets;
pub mod initialization;
pub mod middleware;
pub mod tracing;
