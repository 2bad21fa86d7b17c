use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "ARCANTHA_CONFIG";

const DEFAULT_MAX_FRAME_DELTA_MS: u64 = 250;
const DEFAULT_METRICS_LOG_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Linear RGBA, each component in `0.0..=1.0`.
    pub clear_color: [f32; 4],
    pub maximize_on_start: bool,
    pub resizable: bool,
    pub vsync: bool,
    pub icon_path: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arcantha".to_string(),
            width: 800,
            height: 600,
            clear_color: [0.75, 0.5, 1.0, 1.0],
            maximize_on_start: false,
            resizable: true,
            vsync: true,
            icon_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    pub window: WindowConfig,
    pub max_frame_delta: Duration,
    pub metrics_log_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            max_frame_delta: Duration::from_millis(DEFAULT_MAX_FRAME_DELTA_MS),
            metrics_log_interval: Duration::from_millis(DEFAULT_METRICS_LOG_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    window: WindowConfig,
    max_frame_delta_ms: u64,
    metrics_log_interval_ms: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            max_frame_delta_ms: DEFAULT_MAX_FRAME_DELTA_MS,
            metrics_log_interval_ms: DEFAULT_METRICS_LOG_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path} at `{json_path}`: {message}")]
    Parse {
        path: PathBuf,
        json_path: String,
        message: String,
    },
    #[error("invalid config value `{field}`: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

/// Loads the config file named by `ARCANTHA_CONFIG`, or defaults when unset.
pub fn load_config() -> Result<LoopConfig, ConfigError> {
    match env::var(CONFIG_ENV_VAR) {
        Ok(value) => load_config_file(Path::new(&value)),
        Err(env::VarError::NotPresent) => Ok(LoopConfig::default()),
        Err(source) => Err(ConfigError::EnvVar {
            var: CONFIG_ENV_VAR,
            source,
        }),
    }
}

pub fn load_config_file(path: &Path) -> Result<LoopConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse_config(&raw, path)?;
    if let Some(icon_path) = config.window.icon_path.take() {
        config.window.icon_path = Some(resolve_relative_to(path, icon_path));
    }
    Ok(config)
}

fn parse_config(raw: &str, path: &Path) -> Result<LoopConfig, ConfigError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let file: ConfigFile =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|error| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                json_path: error.path().to_string(),
                message: error.inner().to_string(),
            }
        })?;

    let config = LoopConfig {
        window: file.window,
        max_frame_delta: Duration::from_millis(file.max_frame_delta_ms),
        metrics_log_interval: Duration::from_millis(file.metrics_log_interval_ms),
    };
    validate(&config)?;
    Ok(config)
}

fn validate(config: &LoopConfig) -> Result<(), ConfigError> {
    if config.window.width == 0 || config.window.height == 0 {
        return Err(ConfigError::InvalidValue {
            field: "window.width/window.height",
            message: format!(
                "window size must be non-zero, got {}x{}",
                config.window.width, config.window.height
            ),
        });
    }
    if config.max_frame_delta.is_zero() {
        return Err(ConfigError::InvalidValue {
            field: "max_frame_delta_ms",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.metrics_log_interval.is_zero() {
        return Err(ConfigError::InvalidValue {
            field: "metrics_log_interval_ms",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn resolve_relative_to(config_path: &Path, target: PathBuf) -> PathBuf {
    if target.is_absolute() {
        return target;
    }
    match config_path.parent() {
        Some(parent) => parent.join(target),
        None => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, text: &str) -> PathBuf {
        let path = dir.join("arcantha.json");
        fs::write(&path, text).expect("write config");
        path
    }

    #[test]
    fn defaults_match_stock_window() {
        let config = LoopConfig::default();

        assert_eq!(config.window.title, "Arcantha");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.window.clear_color, [0.75, 0.5, 1.0, 1.0]);
        assert!(config.window.resizable);
        assert!(!config.window.maximize_on_start);
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = parse_config("{}", Path::new("inline.json")).expect("parse");
        assert_eq!(config, LoopConfig::default());
    }

    #[test]
    fn partial_window_section_keeps_other_defaults() {
        let raw = r#"{ "window": { "title": "Sandbox", "width": 1024 }, "max_frame_delta_ms": 100 }"#;
        let config = parse_config(raw, Path::new("inline.json")).expect("parse");

        assert_eq!(config.window.title, "Sandbox");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.max_frame_delta, Duration::from_millis(100));
    }

    #[test]
    fn unknown_field_reports_json_path() {
        let raw = r#"{ "window": { "colour": [1, 1, 1, 1] } }"#;
        let error = parse_config(raw, Path::new("inline.json")).expect_err("unknown field");

        match error {
            ConfigError::Parse { json_path, .. } => assert!(json_path.starts_with("window")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let raw = r#"{ "window": { "height": 0 } }"#;
        let error = parse_config(raw, Path::new("inline.json")).expect_err("zero height");
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn zero_frame_delta_is_rejected() {
        let raw = r#"{ "max_frame_delta_ms": 0 }"#;
        let error = parse_config(raw, Path::new("inline.json")).expect_err("zero delta");
        assert!(matches!(
            error,
            ConfigError::InvalidValue {
                field: "max_frame_delta_ms",
                ..
            }
        ));
    }

    #[test]
    fn relative_icon_path_resolves_next_to_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_config(dir.path(), r#"{ "window": { "icon_path": "icon.png" } }"#);

        let config = load_config_file(&path).expect("load");

        assert_eq!(config.window.icon_path, Some(dir.path().join("icon.png")));
    }

    #[test]
    fn missing_config_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = load_config_file(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(error, ConfigError::ReadFile { .. }));
    }
}
