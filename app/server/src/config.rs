//! FILENAME: app/server/src/config.rs
// PURPOSE: Explicit server configuration built once at startup.
// CONTEXT: Loaded from an optional JSON file (CALC_CONFIG) and then
// overridden by CALC_* environment variables. The result is handed to the
// router; nothing reads the environment after startup.

use crate::error::ServiceError;
use engine::NumericMode;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_CONFIG_FILE: &str = "CALC_CONFIG";
pub const ENV_ADDR: &str = "CALC_ADDR";
pub const ENV_ROUTE: &str = "CALC_ROUTE";
pub const ENV_NUMERIC_MODE: &str = "CALC_NUMERIC_MODE";
pub const ENV_ERROR_POLICY: &str = "CALC_ERROR_POLICY";
pub const ENV_LOG_FILE: &str = "CALC_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "CALC_LOG_LEVEL";

/// How evaluation failures are reported to clients.
/// One policy per running server; status codes are the same under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fixed messages: "Expression is not valid" / "Internal server error".
    #[default]
    Generic,
    /// The error's own message, e.g. "mismatched parentheses".
    Descriptive,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(ErrorPolicy::Generic),
            "descriptive" => Ok(ErrorPolicy::Descriptive),
            other => Err(format!("unknown error policy: {}", other)),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Path of the evaluation route; must start with '/'
    pub route: String,
    pub numeric_mode: NumericMode,
    pub error_policy: ErrorPolicy,
    /// Unified log file. None = console only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// off, error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            route: "/api/v1/calculate".to_string(),
            numeric_mode: NumericMode::Float,
            error_policy: ErrorPolicy::Generic,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads the optional config file, applies environment overrides and validates.
    pub fn load() -> Result<Self, ServiceError> {
        let mut config = match std::env::var_os(ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ServiceError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_ADDR) {
            self.addr = addr
                .parse()
                .map_err(|e| ServiceError::Config(format!("{}={}: {}", ENV_ADDR, addr, e)))?;
        }
        if let Some(route) = lookup(ENV_ROUTE) {
            self.route = route;
        }
        if let Some(mode) = lookup(ENV_NUMERIC_MODE) {
            self.numeric_mode = mode.parse().map_err(ServiceError::Config)?;
        }
        if let Some(policy) = lookup(ENV_ERROR_POLICY) {
            self.error_policy = policy.parse().map_err(ServiceError::Config)?;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.log_file = if file.is_empty() { None } else { Some(PathBuf::from(file)) };
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if !self.route.starts_with('/') {
            return Err(ServiceError::Config(format!(
                "route must start with '/': {}",
                self.route
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ServiceError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ServiceError::Config(format!("unknown log level: {}", self.log_level)))
    }
}
