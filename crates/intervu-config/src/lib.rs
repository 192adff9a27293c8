use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_INTERVU_CONFIG: &str = "INTERVU_CONFIG";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_UI_THEME: &str = "dark";
const DEFAULT_ANALYZING_DELAY_MS: u64 = 3500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Message(String),
}

impl ConfigError {
    fn configuration(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntervuConfig {
    #[serde(default = "default_log_path")]
    pub log_path: String,
    #[serde(default)]
    pub api: ApiConfigToml,
    #[serde(default)]
    pub ui: UiConfigToml,
}

impl Default for IntervuConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            api: ApiConfigToml::default(),
            ui: UiConfigToml::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfigToml {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

impl Default for ApiConfigToml {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfigToml {
    #[serde(default = "default_ui_theme")]
    pub theme: String,
    #[serde(default = "default_analyzing_delay_ms")]
    pub analyzing_delay_ms: u64,
}

impl Default for UiConfigToml {
    fn default() -> Self {
        Self {
            theme: default_ui_theme(),
            analyzing_delay_ms: default_analyzing_delay_ms(),
        }
    }
}

impl IntervuConfig {
    pub fn analyzing_delay(&self) -> Duration {
        Duration::from_millis(self.ui.analyzing_delay_ms)
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

fn default_ui_theme() -> String {
    DEFAULT_UI_THEME.to_owned()
}

fn default_analyzing_delay_ms() -> u64 {
    DEFAULT_ANALYZING_DELAY_MS
}

fn default_log_path() -> String {
    default_intervu_data_dir()
        .join("intervu.log")
        .to_string_lossy()
        .into_owned()
}

pub fn load_from_env() -> Result<IntervuConfig, ConfigError> {
    let path = config_path_from_env()?;
    load_from_path(path)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<IntervuConfig, ConfigError> {
    load_or_create_config(path.as_ref())
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = resolve_home_dir().ok_or_else(|| {
        ConfigError::configuration("Unable to resolve home directory from HOME or USERPROFILE")
    })?;

    Ok(home.join(".config").join("intervu").join("config.toml"))
}

fn config_path_from_env() -> Result<PathBuf, ConfigError> {
    match std::env::var(ENV_INTERVU_CONFIG) {
        Ok(raw) => {
            if raw.trim().is_empty() {
                default_config_path()
            } else {
                Ok(raw.into())
            }
        }
        Err(std::env::VarError::NotPresent) => default_config_path(),
        Err(_) => Err(ConfigError::configuration(
            "INTERVU_CONFIG contained invalid UTF-8",
        )),
    }
}

fn default_intervu_data_dir() -> PathBuf {
    resolve_data_local_dir().join("intervu")
}

fn resolve_data_local_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(path) = std::env::var("LOCALAPPDATA") {
            let path = path.trim();
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        let path = path.trim();
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    match resolve_home_dir() {
        Some(home) => home.join(".local").join("share"),
        None => PathBuf::from("."),
    }
}

fn resolve_home_dir() -> Option<PathBuf> {
    for key in ["HOME", "USERPROFILE"] {
        if let Ok(value) = std::env::var(key) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(PathBuf::from(value));
            }
        }
    }
    None
}

fn load_or_create_config(path: &Path) -> Result<IntervuConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|err| {
                        ConfigError::configuration(format!(
                            "Failed to create parent directory {} for INTERVU_CONFIG: {err}",
                            parent.display()
                        ))
                    })?;
                }
            }

            let default_config = IntervuConfig::default();
            persist_config(path, &default_config)?;

            toml::to_string_pretty(&default_config).map_err(|err| {
                ConfigError::configuration(format!(
                    "Failed to serialize default INTERVU_CONFIG: {err}"
                ))
            })?
        }
        Err(err) => {
            return Err(ConfigError::configuration(format!(
                "Failed to read INTERVU_CONFIG from {}: {err}",
                path.display()
            )));
        }
    };

    let mut config: IntervuConfig = toml::from_str(&raw).map_err(|err| {
        ConfigError::configuration(format!(
            "Failed to parse INTERVU_CONFIG from {}: {err}",
            path.display()
        ))
    })?;

    let changed = normalize_config(&mut config);
    if changed {
        persist_config(path, &config)?;
    }

    Ok(config)
}

/// Blank fields are treated as "use the default" and written back, so a
/// hand-edited file cannot leave the client pointing at an empty host.
fn normalize_config(config: &mut IntervuConfig) -> bool {
    let mut changed = false;

    if config.api.base_url.trim().is_empty() {
        config.api.base_url = default_api_base_url();
        changed = true;
    }
    if config.ui.theme.trim().is_empty() {
        config.ui.theme = default_ui_theme();
        changed = true;
    }
    if config.log_path.trim().is_empty() {
        config.log_path = default_log_path();
        changed = true;
    }

    changed
}

fn persist_config(path: &Path, config: &IntervuConfig) -> Result<(), ConfigError> {
    let serialized = toml::to_string_pretty(config).map_err(|err| {
        ConfigError::configuration(format!("Failed to serialize INTERVU_CONFIG: {err}"))
    })?;

    std::fs::write(path, serialized).map_err(|err| {
        ConfigError::configuration(format!(
            "Failed to write INTERVU_CONFIG to {}: {err}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn env_lock() -> &'static Mutex<()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_env_vars<F>(vars: &[(&str, Option<&str>)], test: F)
    where
        F: FnOnce(),
    {
        let _guard = env_lock().lock().expect("env lock");
        let backup = vars
            .iter()
            .map(|(name, _)| ((*name).to_owned(), std::env::var(name).ok()))
            .collect::<Vec<_>>();

        for (name, value) in vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }

        test();

        for (name, value) in backup {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "intervu-config-{prefix}-{nanos}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&path).expect("create temp dir");
        path
    }

    fn remove_temp_path(path: &Path) {
        let _ = std::fs::remove_dir_all(path);
    }

    #[test]
    fn load_from_env_creates_default_config_when_missing() {
        let home = unique_temp_dir("home-defaults");
        let expected = home.join(".config").join("intervu").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (ENV_INTERVU_CONFIG, None),
                ("XDG_DATA_HOME", None),
            ],
            || {
                let config = load_from_env().expect("load defaults");
                assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
                assert_eq!(config.ui.theme, DEFAULT_UI_THEME);
                assert_eq!(config.ui.analyzing_delay_ms, DEFAULT_ANALYZING_DELAY_MS);
                assert!(expected.exists());
            },
        );

        remove_temp_path(&home);
    }

    #[test]
    fn load_from_env_honors_an_explicit_config_path() {
        let home = unique_temp_dir("home-explicit");
        let root = unique_temp_dir("explicit-path");
        let explicit = root.join("nested").join("custom.toml");
        let default = home.join(".config").join("intervu").join("config.toml");

        with_env_vars(
            &[
                ("HOME", Some(home.to_str().expect("home path"))),
                ("USERPROFILE", None),
                (
                    ENV_INTERVU_CONFIG,
                    Some(explicit.to_str().expect("config path")),
                ),
                ("XDG_DATA_HOME", None),
            ],
            || {
                let config = load_from_env().expect("load explicit config");
                assert!(explicit.exists());
                assert!(!default.exists());
                assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
            },
        );

        remove_temp_path(&home);
        remove_temp_path(&root);
    }

    #[test]
    fn partial_file_fills_the_missing_fields_with_defaults() {
        let root = unique_temp_dir("partial");
        let path = root.join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://practice.example/api\"\n")
            .expect("write fixture config");

        let config = load_from_path(&path).expect("load partial config");
        assert_eq!(config.api.base_url, "https://practice.example/api");
        assert_eq!(config.ui.theme, DEFAULT_UI_THEME);
        assert_eq!(config.ui.analyzing_delay_ms, DEFAULT_ANALYZING_DELAY_MS);

        remove_temp_path(&root);
    }

    #[test]
    fn blank_base_url_is_normalized_and_persisted() {
        let root = unique_temp_dir("normalize");
        let path = root.join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"  \"\n").expect("write fixture config");

        let config = load_from_path(&path).expect("load blank config");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);

        let rewritten = std::fs::read_to_string(&path).expect("read rewritten config");
        assert!(rewritten.contains(DEFAULT_API_BASE_URL));

        remove_temp_path(&root);
    }

    #[test]
    fn unparseable_file_reports_the_path() {
        let root = unique_temp_dir("invalid");
        let path = root.join("config.toml");
        std::fs::write(&path, "api = \"not a table\"").expect("write fixture config");

        let err = load_from_path(&path).expect_err("invalid config");
        assert!(err.to_string().contains("config.toml"));

        remove_temp_path(&root);
    }

    #[test]
    fn analyzing_delay_converts_to_a_duration() {
        let mut config = IntervuConfig::default();
        config.ui.analyzing_delay_ms = 100;
        assert_eq!(config.analyzing_delay(), Duration::from_millis(100));
    }
}
