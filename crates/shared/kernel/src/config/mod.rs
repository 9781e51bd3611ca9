use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config file looked up when no path is given (any extension `config` understands).
pub const DEFAULT_CONFIG_FILE: &str = "shell";
/// Prefix of environment overrides, e.g. `VCB__BRAND__LABEL`.
pub const ENV_PREFIX: &str = "VCB";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[vcb_derive::vcb_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration from a file with environment overrides on top.
///
/// 1. **Base File**: the given path, which must exist, or an optional [`DEFAULT_CONFIG_FILE`]
///    in the working directory. The format is picked from the extension (or the first
///    `shell.*` file found when the path has none). Missing keys keep their defaults.
/// 2. **Environment Overrides**: variables prefixed with `VCB__`, nested keys separated by
///    double underscores (`VCB__WINDOW__WIDTH=1024` maps to `window.width`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file cannot be found or read, or if the merged
/// values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use vcb_kernel::config::load_config;
/// use vcb_kernel::domain::config::ShellConfig;
///
/// let cfg: ShellConfig = load_config(Some("config/shell.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, None)
}

/// Same as [`load_config`], with the environment replaced by `env` when given.
fn load_layered<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = match path {
        Some(p) => (p.as_ref().to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use vcb_domain::config::ShellConfig;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn env_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("shell.toml");
        fs::write(&path, "[brand]\nlabel = \"From file\"\n\n[window]\nwidth = 900.0\n")?;

        let overrides = env(&[("VCB__BRAND__LABEL", "From env"), ("VCB__LOG__LEVEL", "debug")]);
        let cfg: ShellConfig = load_layered(Some(&path), Some(overrides))?;

        assert_eq!(cfg.brand.label, "From env");
        assert_eq!(cfg.log.level, "debug");
        assert!((cfg.window.width - 900.0).abs() < f64::EPSILON);
        assert_eq!(cfg.window.title, "Voice Call Bot");
        Ok(())
    }

    #[test]
    fn unrelated_env_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("shell.toml");
        fs::write(&path, "")?;

        let overrides = env(&[("OTHER__BRAND__LABEL", "nope")]);
        let cfg: ShellConfig = load_layered(Some(&path), Some(overrides))?;

        assert_eq!(cfg, ShellConfig::default());
        Ok(())
    }

    #[test]
    fn env_applies_without_default_file() -> Result<(), Box<dyn std::error::Error>> {
        let overrides = env(&[("VCB__BRAND__LABEL", "Night shift"), ("VCB__WINDOW__WIDTH", "1024")]);
        let cfg: ShellConfig = load_layered(None::<&str>, Some(overrides))?;

        assert_eq!(cfg.brand.label, "Night shift");
        assert!((cfg.window.width - 1024.0).abs() < f64::EPSILON);
        assert_eq!(cfg.window.title, "Voice Call Bot");
        Ok(())
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = dir.path().join("absent.toml");

        let overrides = env(&[("VCB__BRAND__LABEL", "Night shift")]);
        let err = load_layered::<ShellConfig>(Some(&path), Some(overrides))
            .expect_err("an explicit path must exist");
        assert!(err.to_string().contains("Failed to build config"), "got: {err}");
    }

    #[test]
    fn wrong_types_carry_context() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("shell.toml");
        fs::write(&path, "[window]\nwidth = \"wide\"\n")?;

        let err = load_layered::<ShellConfig>(Some(&path), Some(Map::new()))
            .expect_err("string width should not deserialize");
        assert!(err.to_string().contains("Failed to deserialize config"), "got: {err}");
        Ok(())
    }
}
