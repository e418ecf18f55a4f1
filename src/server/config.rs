use crate::server::error::config::ConfigError;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Optional path to a JSON master catalog seed file loaded at startup.
    pub master_data_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {value:?}"),
            })?,
            Err(_) => 5001,
        };

        let master_data_path = std::env::var("MASTER_DATA_PATH").ok();

        Ok(Self {
            host,
            port,
            database_url,
            master_data_path,
        })
    }
}
