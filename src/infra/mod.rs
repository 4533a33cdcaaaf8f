pub mod config;
pub mod database;
pub mod shutdown;
pub mod telemetry;
