/// Errors raised while loading configuration. Always fatal at startup,
/// never surfaced at request time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// Server configuration loaded from environment variables.
///
/// `MONGO_URI` is required; everything else has a development default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Document-store connection string (required).
    pub mongo_uri: String,
    /// Database name (default: `atelier`).
    pub mongo_db: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var     | Default      |
    /// |-------------|--------------|
    /// | `MONGO_URI` | (required)   |
    /// | `MONGO_DB`  | `atelier`    |
    /// | `HOST`      | `0.0.0.0`    |
    /// | `PORT`      | `3000`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mongo_uri =
            std::env::var("MONGO_URI").map_err(|_| ConfigError::Missing("MONGO_URI"))?;

        let mongo_db = std::env::var("MONGO_DB").unwrap_or_else(|_| "atelier".into());

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid("PORT", e.to_string()))?;

        Ok(Self {
            mongo_uri,
            mongo_db,
            host,
            port,
        })
    }
}
