use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variables read into [`Config`].
const ENV_KEYS: &[&str] = &[
    "db_path",
    "listen_addr",
    "static_dir",
    "loglevel",
    "simulate_latency",
];

/// Runtime configuration, sourced from the process environment (and `.env` via dotenvy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file. Required; there is no sensible default.
    pub db_path: PathBuf,

    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Frontend bundle served for every non-API path.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Fixed per-handler delays kept from the demo frontend's behaviour.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8081".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./ui/dist")
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_simulate_latency() -> bool {
    true
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new().merge(Env::raw().only(ENV_KEYS))
    }

    /// Extract the configuration. Fails when `DB_PATH` is absent or empty.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(&Self::figment())
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, figment::Error> {
        let cfg: Config = figment.extract()?;
        if cfg.db_path.as_os_str().is_empty() {
            return Err(figment::Error::from("DB_PATH is not set".to_string()));
        }
        Ok(cfg)
    }
}
