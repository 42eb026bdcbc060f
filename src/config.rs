use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "LANTERN_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Settings for the files being served.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory every served path is confined to.
    pub root: PathBuf,
    /// Upper bound on the bytes read for a request; anything past it is dropped.
    pub max_request_size: usize,
    /// Optional `mime.types` file replacing the built-in table.
    pub mime_types: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_request_size: 2048,
            mime_types: None,
        }
    }
}

impl Config {
    /// Loads the config file named by `LANTERN_CONFIG` (if any), then applies
    /// the `LISTEN` and `CONTENT_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml(&raw)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("CONTENT_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw).context("invalid config")?;
        if cfg.static_files.max_request_size == 0 {
            anyhow::bail!("static_files.max_request_size must be greater than zero");
        }
        Ok(cfg)
    }
}
