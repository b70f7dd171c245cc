use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const ENV_PREFIX: &str = "JOBBOARD";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON postings file; the built-in postings are served when it is absent.
    pub data_path: PathBuf,
    pub latest_limit: usize,
    pub related_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Defaults, then `config/server.{toml,json,...}` if present, then
    /// `JOBBOARD__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("config/server").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000_i64)?
        .set_default("catalog.data_path", "data/jobs.json")?
        .set_default("catalog.latest_limit", catalog::DEFAULT_LATEST_LIMIT as i64)?
        .set_default("catalog.related_limit", catalog::DEFAULT_RELATED_LIMIT as i64)?
        .set_default("logging.json", false)
}
