pub mod config;
pub mod error;
pub mod results;
pub mod telemetry;
