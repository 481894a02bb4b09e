//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_GENTX_DIR: &str = "./config/gentx";
pub const DEFAULT_CHAIN_ID: &str = "cyber-devnet";

/// Genesis host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Genesis document. `None` starts from the default state.
    pub genesis_file: Option<PathBuf>,

    /// Directory of `*.json` bootstrap transactions.
    pub gentx_dir: PathBuf,

    /// TOML overrides for the default parameters.
    pub params_file: Option<PathBuf>,

    /// Chain id used when wrapping the default state.
    pub chain_id: String,

    /// Where to write the assembled genesis document.
    pub output_file: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            genesis_file: None,
            gentx_dir: PathBuf::from(DEFAULT_GENTX_DIR),
            params_file: None,
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            output_file: None,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GL_GENESIS_FILE`: Genesis document (default: unset, use default state)
    /// - `GL_GENTX_DIR`: Bootstrap transaction directory (default: ./config/gentx)
    /// - `GL_PARAMS_FILE`: TOML parameter overrides (default: unset)
    /// - `GL_CHAIN_ID`: Chain id for the default state (default: cyber-devnet)
    /// - `GL_OUTPUT_FILE`: Output genesis document (default: unset)
    /// - `GL_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `GL_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            genesis_file: non_empty("GL_GENESIS_FILE").map(PathBuf::from),

            gentx_dir: non_empty("GL_GENTX_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GENTX_DIR)),

            params_file: non_empty("GL_PARAMS_FILE").map(PathBuf::from),

            chain_id: non_empty("GL_CHAIN_ID").unwrap_or_else(|| DEFAULT_CHAIN_ID.to_string()),

            output_file: non_empty("GL_OUTPUT_FILE").map(PathBuf::from),

            log_level: non_empty("GL_LOG_LEVEL")
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),

            json_logs: lookup("GL_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
