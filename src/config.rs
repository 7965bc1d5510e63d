use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::embed::player::{PlayerConfig, DEFAULT_PLAYLIST_URL};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Deserialize, Default, Debug, Clone)]
pub struct FileConfig {
    pub playlist_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub debug: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub player: PlayerConfig,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub debug: bool,
}

impl Config {
    /// Merge CLI (and env, via clap) over the TOML file over built-in defaults.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        let playlist_url = args
            .playlist_url
            .clone()
            .or(file.playlist_url)
            .unwrap_or_else(|| DEFAULT_PLAYLIST_URL.to_string());
        Config {
            player: PlayerConfig::new(playlist_url),
            host: args.host.clone().or(file.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            static_dir: args
                .static_dir
                .clone()
                .or(file.static_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            debug: args.debug || file.debug.unwrap_or(false),
        }
    }

    /// `host:port`, bracketing bare IPv6 hosts.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Where a config file path came from. An explicit `--config` path is expected
/// to exist; a discovered one was seen on disk during the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Discovered(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => path,
        }
    }
}

/// `--config` if given, else `./scembed.toml`, else `<config dir>/scembed/config.toml`.
pub fn find_config_file(explicit: Option<&Path>) -> Option<ConfigSource> {
    if let Some(path) = explicit {
        return Some(ConfigSource::Explicit(path.to_owned()));
    }
    let candidates = std::iter::once(PathBuf::from("scembed.toml"))
        .chain(dirs::config_dir().map(|dir| dir.join("scembed").join("config.toml")));
    for candidate in candidates {
        if candidate.is_file() {
            return Some(ConfigSource::Discovered(candidate));
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_owned())
        } else {
            ConfigError::Io { path: path.to_owned(), source }
        }
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_owned(), source })
}
