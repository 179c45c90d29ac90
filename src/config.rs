use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::BenchError;

/// Environment variable selecting `config/{env}.yaml`
pub const ENV_VAR: &str = "LIST_BENCH_ENV";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Emit one event per timing repeat (target `list_bench::repeat`)
    pub enable_tracing: bool,
    /// Self-check toggle. Absent means on for debug builds, off for release.
    pub self_check: Option<bool>,
    /// Append the BinSearch operation to the report
    pub binary_search: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "list_bench.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            enable_tracing: false,
            self_check: None,
            binary_search: false,
        }
    }
}

impl AppConfig {
    pub fn config_path(env: &str) -> PathBuf {
        PathBuf::from(format!("config/{}.yaml", env))
    }

    /// Load `config/{env}.yaml`; a missing file yields the defaults.
    pub fn load(env: &str) -> Result<Self, BenchError> {
        let config_path = Self::config_path(env);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        Self::from_yaml(&content)
            .map_err(|e| BenchError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self, BenchError> {
        serde_yaml::from_str(content).map_err(|e| BenchError::Config(e.to_string()))
    }

    pub fn self_check_enabled(&self) -> bool {
        self.self_check.unwrap_or(cfg!(debug_assertions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rotation, "never");
        assert!(!config.binary_search);
        assert_eq!(config.self_check_enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn test_config_partial_yaml() {
        let config = AppConfig::from_yaml(
            "log_level: debug\nenable_tracing: true\nself_check: false\nbinary_search: true\n",
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.enable_tracing);
        assert!(!config.self_check_enabled());
        assert!(config.binary_search);
        // Unspecified keys keep defaults
        assert_eq!(config.log_file, "list_bench.log");
    }

    #[test]
    fn test_config_malformed_yaml() {
        let err = AppConfig::from_yaml("use_json: [not, a, bool]").unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }

    #[test]
    fn test_config_missing_env_uses_defaults() {
        let config = AppConfig::load("no-such-env").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    /// The dev profile leaves the self-check to the build profile
    #[test]
    fn test_dev_profile_follows_build() {
        let config = AppConfig::from_yaml(include_str!("../config/dev.yaml")).unwrap();
        assert_eq!(config.self_check, None);
        assert_eq!(config.self_check_enabled(), cfg!(debug_assertions));
        assert!(!config.binary_search);
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            AppConfig::config_path("prod"),
            PathBuf::from("config/prod.yaml")
        );
    }
}
