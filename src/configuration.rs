use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub rating_provider: RatingProviderSettings,
    pub application_port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub movies_path: String,
    pub ratings_path: String,
}

impl DatabaseSettings {
    pub fn movies_connect_options(&self) -> SqliteConnectOptions {
        read_only_options(&self.movies_path)
    }

    pub fn ratings_connect_options(&self) -> SqliteConnectOptions {
        read_only_options(&self.ratings_path)
    }
}

// Both stores are shipped pre-populated and never written to.
fn read_only_options(path: &str) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false)
        .journal_mode(SqliteJournalMode::Delete)
}

#[derive(Deserialize, Clone, Debug)]
pub struct RatingProviderSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_milliseconds: u64,
}

impl RatingProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Loads `<filename>.json` and lets `APP_`-prefixed environment variables
/// override it, e.g. `APP_APPLICATION_PORT` or `APP_RATING_PROVIDER__API_KEY`.
pub fn get_configuration(filename: &str) -> Result<Settings, config::ConfigError> {
    let mut builder = Config::builder();
    builder = builder.add_source(File::new(filename, FileFormat::Json));
    builder = builder.add_source(
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    let config = builder.build()?;
    config.try_deserialize()
}
