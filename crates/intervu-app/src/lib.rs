use std::path::PathBuf;

use intervu_config::{ConfigError, IntervuConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
}

pub fn parse_cli_flags<I>(mut args: I) -> Result<CliFlags, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut flags = CliFlags::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                flags.config_path = Some(expect_value(&mut args, "--config")?.into());
            }
            "--base-url" => {
                flags.base_url = Some(expect_value(&mut args, "--base-url")?);
            }
            other => {
                return Err(ConfigError::Message(format!(
                    "unrecognized flag '{other}'; supported flags: --config <path>, --base-url <url>"
                )));
            }
        }
    }
    Ok(flags)
}

fn expect_value<I>(args: &mut I, flag: &str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::Message(format!("{flag} requires a value")))
}

/// Loads the configuration the flags point at and applies the one override
/// a flag can carry: the backend base URL.
pub fn resolve_config(flags: &CliFlags) -> Result<IntervuConfig, ConfigError> {
    let mut config = match &flags.config_path {
        Some(path) => intervu_config::load_from_path(path)?,
        None => intervu_config::load_from_env()?,
    };
    if let Some(base_url) = &flags.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn no_flags_parse_to_defaults() {
        let flags = parse_cli_flags(args(&[])).expect("parse empty");
        assert_eq!(flags, CliFlags::default());
    }

    #[test]
    fn config_and_base_url_flags_are_captured() {
        let flags = parse_cli_flags(args(&[
            "--config",
            "/tmp/intervu.toml",
            "--base-url",
            "https://practice.example/api",
        ]))
        .expect("parse flags");
        assert_eq!(flags.config_path, Some(PathBuf::from("/tmp/intervu.toml")));
        assert_eq!(
            flags.base_url.as_deref(),
            Some("https://practice.example/api")
        );
    }

    #[test]
    fn missing_values_and_unknown_flags_are_rejected() {
        assert!(parse_cli_flags(args(&["--config"])).is_err());
        assert!(parse_cli_flags(args(&["--verbose"])).is_err());
    }

    #[test]
    fn base_url_flag_overrides_the_loaded_config() {
        let dir = std::env::temp_dir().join(format!(
            "intervu-app-test-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.toml");

        let flags = CliFlags {
            config_path: Some(path.clone()),
            base_url: Some("https://override.example/api".to_owned()),
        };
        let config = resolve_config(&flags).expect("resolve config");
        assert_eq!(config.api.base_url, "https://override.example/api");
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
