use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, bail};
use serde::Deserialize;

pub const ENV_HOST: &str = "MINI_HTTP_HOST";
pub const ENV_PORT: &str = "MINI_HTTP_PORT";
pub const ENV_MAX_REQUEST_BYTES: &str = "MINI_HTTP_MAX_REQUEST_BYTES";
pub const ENV_VERBOSE: &str = "MINI_HTTP_VERBOSE";
pub const ENV_ROOT: &str = "MINI_HTTP_ROOT";

/// Largest accepted `max_request_bytes` (1 MiB); the whole buffer is
/// allocated up front for every connection.
pub const MAX_REQUEST_BYTES_LIMIT: usize = 1 << 20;

/// Server settings.
///
/// Missing YAML keys fall back to the defaults: `127.0.0.1:8080`, 4096
/// bytes per request, quiet logging, serving the current directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upper bound on the bytes read from a connection before parsing.
    pub max_request_bytes: usize,
    /// Log raw requests and responses.
    pub verbose: bool,
    /// Directory served by the static file handler.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_request_bytes: 4096,
            verbose: false,
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_yaml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies overrides from `lookup`, which maps an environment variable
    /// name to its value.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = parse_var(ENV_PORT, &port)?;
        }
        if let Some(max) = lookup(ENV_MAX_REQUEST_BYTES) {
            self.max_request_bytes = parse_var(ENV_MAX_REQUEST_BYTES, &max)?;
        }
        if let Some(verbose) = lookup(ENV_VERBOSE) {
            self.verbose = parse_flag(&verbose)
                .with_context(|| format!("{ENV_VERBOSE}={verbose:?} is not a boolean"))?;
        }
        if let Some(root) = lookup(ENV_ROOT) {
            self.root = PathBuf::from(root);
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.is_empty() {
            bail!("host must not be empty");
        }
        if self.max_request_bytes == 0 {
            bail!("max_request_bytes must be greater than zero");
        }
        if self.max_request_bytes > MAX_REQUEST_BYTES_LIMIT {
            bail!(
                "max_request_bytes must be at most {MAX_REQUEST_BYTES_LIMIT}, got {}",
                self.max_request_bytes
            );
        }
        Ok(())
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn listen_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

fn parse_var<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("{key}={value:?} is not valid"))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
