pub mod configuration;
pub mod db;
pub mod error;
pub mod format;
pub mod models;
pub mod rating_provider;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
pub mod util;
