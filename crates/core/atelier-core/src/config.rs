//! Configuration management and environment variable loading

use crate::{AtelierError, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the upstream API key
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Environment variable overriding the upstream endpoint
pub const API_URL_VAR: &str = "GOOGLE_API_URL";

/// Default upstream `generateContent` endpoint
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Largest JSON body accepted from the browser (images travel as data URLs)
pub const DEFAULT_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Load environment variables from .env file
///
/// Returns the path that was loaded, or `None` when there is no `.env`
/// file. Runs before logging is set up, so the caller reports the outcome.
pub fn load_env() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::LineParse(line, pos)) => Err(AtelierError::config(format!(
            "Failed to parse .env file at line {}, position {}",
            line, pos
        ))),
        Err(dotenvy::Error::Io(_)) => Ok(None),
        Err(e) => Err(AtelierError::config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

/// Load environment variables from a specific file
///
/// Variables already present in the environment are kept.
pub fn load_env_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    dotenvy::from_path(path.as_ref()).map_err(|e| {
        AtelierError::config(format!(
            "Failed to load {} environment file: {}",
            path.as_ref().display(),
            e
        ))
    })
}

/// Get optional environment variable with default
pub fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: Option<&str>) -> Option<bool> {
    value.and_then(|v| match v.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    })
}

/// Server configuration, resolved once at process start
#[derive(Clone)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Upstream credential; `None` means the proxy refuses to forward
    pub api_key: Option<String>,

    /// Upstream `generateContent` URL
    pub upstream_url: String,

    /// Directory holding the client bundle and `index.html`
    pub static_dir: PathBuf,

    /// Maximum accepted request body in bytes
    pub body_limit: usize,

    /// Enable permissive CORS
    pub enable_cors: bool,

    /// Probe the upstream at startup to decide whether chat uses it
    pub probe_upstream: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            static_dir: PathBuf::from("."),
            body_limit: DEFAULT_BODY_LIMIT,
            enable_cors: true,
            probe_upstream: true,
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("upstream_url", &self.upstream_url)
            .field("static_dir", &self.static_dir)
            .field("body_limit", &self.body_limit)
            .field("enable_cors", &self.enable_cors)
            .field("probe_upstream", &self.probe_upstream)
            .finish()
    }
}

impl ServerConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AtelierError::config(format!("PORT must be a port number, got '{}'", raw))
            })?,
            None => defaults.port,
        };

        let body_limit = match get("ATELIER_BODY_LIMIT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AtelierError::config(format!(
                    "ATELIER_BODY_LIMIT must be a byte count, got '{}'",
                    raw
                ))
            })?,
            None => defaults.body_limit,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            api_key: get(API_KEY_VAR),
            upstream_url: get(API_URL_VAR).unwrap_or(defaults.upstream_url),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            body_limit,
            enable_cors: parse_bool(get("ATELIER_CORS").as_deref()).unwrap_or(defaults.enable_cors),
            probe_upstream: parse_bool(get("ATELIER_PROBE_UPSTREAM").as_deref())
                .unwrap_or(defaults.probe_upstream),
        })
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
