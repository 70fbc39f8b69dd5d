use serde::Deserialize;
use std::{
    env, fmt, fs,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

// Runtime/server settings. Nothing here affects request semantics.

pub const CONFIG_PATH_VAR: &str = "PANTHEON_CONFIG";
pub const HOST_VAR: &str = "PANTHEON_HOST";
pub const PORT_VAR: &str = "PANTHEON_PORT";
pub const MAX_BODY_BYTES_VAR: &str = "PANTHEON_MAX_BODY_BYTES";
pub const SITE_NAME_VAR: &str = "PANTHEON_SITE_NAME";
pub const STATIC_DIR_VAR: &str = "PANTHEON_STATIC_DIR";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
const DEFAULT_SITE_NAME: &str = "Pantheon";
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read from an optional TOML file and then overridden by
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// TCP port to bind.
    pub port: u16,
    /// Largest request body the router will read.
    pub max_body_bytes: usize,
    /// Name shown in every rendered page.
    pub site_name: String,
    /// Directory served under `/static` (browser scripts for the game page).
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            site_name: DEFAULT_SITE_NAME.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Errors raised while assembling the server configuration.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, error: std::io::Error },
    Parse { path: String, error: toml::de::Error },
    InvalidOverride { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, error } => write!(f, "failed to read {path}: {error}"),
            ConfigError::Parse { path, error } => write!(f, "failed to parse {path}: {error}"),
            ConfigError::InvalidOverride { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Load from `PANTHEON_CONFIG` (when set) and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        base.with_overrides(|key| env::var(key).ok())
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.to_string(),
            error,
        })?;

        Self::from_toml_str(&content).map_err(|error| ConfigError::Parse {
            path: path.to_string(),
            error,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides looked up by variable name. Unset keys keep the
    /// current value; set but unparsable keys are rejected.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(HOST_VAR) {
            self.host = parse_override(HOST_VAR, value)?;
        }
        if let Some(value) = lookup(PORT_VAR) {
            self.port = parse_override(PORT_VAR, value)?;
        }
        if let Some(value) = lookup(MAX_BODY_BYTES_VAR) {
            self.max_body_bytes = parse_override(MAX_BODY_BYTES_VAR, value)?;
        }
        if let Some(value) = lookup(SITE_NAME_VAR) {
            self.site_name = value;
        }
        if let Some(value) = lookup(STATIC_DIR_VAR) {
            self.static_dir = PathBuf::from(value);
        }

        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_override<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidOverride { key, value })
}
