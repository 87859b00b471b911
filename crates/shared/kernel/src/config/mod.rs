use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variables overriding file settings start with this prefix (`AASM__SERVER__PORT`).
pub const ENV_PREFIX: &str = "AASM";
/// Config file looked up when no path is given (any extension `config` understands).
pub const DEFAULT_CONFIG_FILE: &str = "site";

#[aasm_derive::site_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with `AASM__`-prefixed environment variables.
///
/// Nested keys use double underscores: `AASM__LOGGING__LEVEL=debug` sets `logging.level`.
/// The file is optional; without it every field keeps its `Default`, so `T` should use
/// `#[serde(default)]`.
///
/// # Errors
/// Returns [`ConfigError`] when the file exists but cannot be parsed, or when the merged
/// values do not deserialize into `T`.
///
/// ```rust
/// use aasm_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct Listener {
///     port: u16,
/// }
///
/// let cfg: Listener = load_config(Some("does/not/exist")).unwrap();
/// assert_eq!(cfg.port, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), "Loading configuration");

    load_with(&path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .convert_case(config::Case::Snake)
}

fn load_with<T>(path: &Path, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use aasm_domain::config::SiteConfig;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        environment().source(Some(map))
    }

    #[test]
    fn prefixed_variables_reach_nested_keys() {
        let cfg: SiteConfig = load_with(
            Path::new("missing-site-config"),
            vars(&[("AASM__SERVER__PORT", "9191"), ("AASM__LOGGING__LEVEL", "debug")]),
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9191);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let cfg: SiteConfig =
            load_with(Path::new("missing-site-config"), vars(&[("SERVER__PORT", "1")])).unwrap();
        assert_eq!(cfg.server.port, 4583);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("site.toml");
        std::fs::write(&file, "[server]\nport = 8088\n").unwrap();

        let from_file: SiteConfig = load_with(&file, vars(&[])).unwrap();
        let overridden: SiteConfig = load_with(&file, vars(&[("AASM__SERVER__PORT", "9191")])).unwrap();

        assert_eq!(from_file.server.port, 8088);
        assert_eq!(overridden.server.port, 9191);
    }
}
