use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub mongodb: MongoDBConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MongoDBConfig {
    pub connection_uri: String,
    /// Overrides the database named in the URI path when set.
    pub db_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    /// Reads configuration from environment variables. A missing MONGO_URI is
    /// deliberately not an error here: the connection attempt itself reports
    /// the failure and the server keeps serving.
    pub fn load() -> Self {
        Config {
            mongodb: MongoDBConfig {
                connection_uri: env::var("MONGO_URI").unwrap_or_default(),
                db_name: env::var("MONGO_DB_NAME").ok(),
            },
            logging: LoggingConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        }
    }
}
