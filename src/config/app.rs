use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::DEFAULT_CONFIG_FILE;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Directory scanned for the newest Bitwarden export
    pub source_dir: PathBuf,
    /// Where the Keeper import file is written
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        default_paths()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse a config document; keys left out keep their defaults
pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load config at runtime; falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("BTOK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut conf = read_config_file(Path::new(&config_path));

        // Env always wins over the file
        if let Ok(dir) = std::env::var("BTOK_SOURCE_DIR") {
            conf.paths.source_dir = dir.into();
        }
        if let Ok(out) = std::env::var("BTOK_OUTPUT") {
            conf.paths.output = out.into();
        }

        conf
    })
}

fn read_config_file(path: &Path) -> Config {
    if !path.exists() {
        debug!("{} not found, using built-in defaults", path.display());
        return Config::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("cannot read {}: {err}; using built-in defaults", path.display());
            return Config::default();
        }
    };

    from_toml_str(&content).unwrap_or_else(|err| {
        warn!("invalid TOML in {}: {err}; using built-in defaults", path.display());
        Config::default()
    })
}
