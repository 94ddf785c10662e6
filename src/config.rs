use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Default configuration file name, resolved with any supported extension.
pub const CONFIG_FILE: &str = "crud_service";

/// Prefix for environment overrides, e.g. `CRUD_SERVICE__IDENTIFIER__START=100`.
pub const ENV_PREFIX: &str = "CRUD_SERVICE";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub identifier: IdentifierConfig,
    pub server: ServerConfig,
    pub logger: LoggerConfig,
}

impl ServiceConfig {
    /// Load defaults, then `crud_service.{toml,json,...}` if present, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<ServiceConfig>()
    }

    /// Parse a TOML document, ignoring files and the environment.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize::<ServiceConfig>()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Value the identifier sequence starts from; the first assigned identity is `start + 1`.
    pub start: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}
