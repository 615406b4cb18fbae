use config::{ConfigError, Environment};
use serde::Deserialize;

/// Connection settings for the database under test, read from the
/// environment (or a `.env` file): `DB_URL`, `DB_USERNAME`, `DB_PASSWORD`.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv::dotenv().ok();
        let mut cfg = config::Config::new();
        cfg.merge(Environment::with_prefix("DB"))?;
        cfg.try_into()
    }
}
