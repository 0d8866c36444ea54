use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// Optional TOML config file (`--config <path>`); every field is an override.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP server port (default: 8080).
    port: Option<u16>,
    /// Bind address for the HTTP server (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    bind_address: Option<String>,
    /// Shared secret clients must present on every versioned API request.
    api_key: Option<String>,
    /// Log level filter string, e.g. "debug", "info,taskd=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default, human-readable) | "json" (structured for log aggregators).
    log_format: Option<String>,
}

// Config is resolved before tracing comes up, so diagnostics go to stderr.
fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!(
                "warn: could not read config file '{}': {e} — using defaults",
                path.display()
            );
            return None;
        }
    };
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "warn: could not parse config file '{}': {e} — using defaults",
                path.display()
            );
            None
        }
    }
}

// ─── Config ───────────────────────────────────────────────────────────────────

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (TASKD_PORT env var, default: 8080).
    pub port: u16,
    /// Bind address for the HTTP server (TASKD_BIND env var, default: "127.0.0.1").
    pub bind_address: String,
    /// Shared secret required on every `/apiv1` and `/apiv2` request.
    pub api_key: String,
    /// Log level filter string (TASKD_LOG env var, default: "info").
    pub log: String,
    /// Log output format: "pretty" (default) | "json".
    pub log_format: String,
}

impl Config {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env (passed as `Some(value)` from clap)
    ///   2. TOML file passed via `--config`
    ///   3. Built-in defaults
    ///
    /// The API key has no default: startup fails unless one is supplied by
    /// CLI, env, or the config file.
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        log: Option<String>,
        log_format: Option<String>,
        api_key: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        // Load TOML as the lowest-priority override layer
        let toml = config_path
            .as_deref()
            .and_then(load_toml)
            .unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let bind_address = bind_address
            .filter(|s| !s.is_empty())
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let log_format = log_format
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let api_key = match api_key
            .filter(|s| !s.is_empty())
            .or(toml.api_key.filter(|s| !s.is_empty()))
        {
            Some(key) => key,
            None => bail!(
                "no API key configured: set --api-key, TASKD_API_KEY, or api_key in the config file"
            ),
        };

        Ok(Self {
            port,
            bind_address,
            api_key,
            log,
            log_format,
        })
    }
}
