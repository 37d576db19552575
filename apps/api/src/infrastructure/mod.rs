// Infrastructure layer module
// Contains database adapters, configuration and logging setup

pub mod database;
pub mod repositories;
pub mod telemetry;
