//! Configuration management for the explorer using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8501;

/// Default page title.
pub const DEFAULT_SITE_TITLE: &str = "Michigan Pioneer Settlement Explorer";

/// Environment variable overriding the bind address (`PORT`, `HOST` or `HOST:PORT`).
pub const BIND_ENV: &str = "PIONEER_BIND";

/// Environment variable overriding the report output directory.
pub const REPORTS_DIR_ENV: &str = "PIONEER_REPORTS_DIR";

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bind address '{0}'")]
    InvalidBind(String),
}

/// Application settings.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Host the web server binds to.
    pub host: String,
    /// Port the web server binds to.
    pub port: u16,
    /// Directory `pioneer plan` writes reports into.
    pub reports_dir: PathBuf,
    /// Title shown in the browser tab and the page header.
    pub site_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            reports_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// `host:port` string for display and binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a bind address: `PORT`, `HOST`, or `HOST:PORT`.
///
/// Missing parts fall back to `default_host` and `default_port`.
pub fn parse_bind_address(
    bind: &str,
    default_host: &str,
    default_port: u16,
) -> Result<(String, u16), ConfigError> {
    let bind = bind.trim();
    if bind.is_empty() {
        return Err(ConfigError::InvalidBind(bind.to_string()));
    }
    if let Some((host, port)) = bind.rsplit_once(':') {
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidBind(bind.to_string()))?;
        let host = if host.is_empty() { default_host } else { host };
        Ok((host.to_string(), port))
    } else if let Ok(port) = bind.parse::<u16>() {
        Ok((default_host.to_string(), port))
    } else {
        Ok((bind.to_string(), default_port))
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, prefer::FromValue)]
pub struct Config {
    /// Bind host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Bind port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u64>,
    /// Report output directory; relative paths resolve against the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_dir: Option<String>,
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    #[prefer(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers pioneer config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("pioneer").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse file contents, choosing the format from the file extension.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let config = match ext {
            "toml" => toml::from_str(contents)?,
            "yaml" | "yml" => serde_yaml::from_str(contents)?,
            _ => serde_json::from_str(contents)?,
        };
        Ok(config)
    }

    /// Directory relative paths resolve against: the config file's parent.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            match u16::try_from(port) {
                Ok(port) => settings.port = port,
                Err(_) => tracing::warn!("Ignoring out-of-range port {} in config", port),
            }
        }
        if let Some(ref dir) = self.reports_dir {
            settings.reports_dir = self.resolve_path(dir, base_dir);
        }
        if let Some(ref title) = self.site_title {
            settings.site_title = title.clone();
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

/// Apply `PIONEER_BIND` and `PIONEER_REPORTS_DIR` overrides.
fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
    if let Some(bind) = std::env::var(BIND_ENV).ok().filter(|s| !s.is_empty()) {
        tracing::debug!("Using {} from environment: {}", BIND_ENV, bind);
        let (host, port) = parse_bind_address(&bind, &settings.host, settings.port)?;
        settings.host = host;
        settings.port = port;
    }
    if let Some(dir) = std::env::var(REPORTS_DIR_ENV)
        .ok()
        .filter(|s| !s.is_empty())
    {
        tracing::debug!("Using {} from environment: {}", REPORTS_DIR_ENV, dir);
        settings.reports_dir = PathBuf::from(shellexpand::tilde(&dir).as_ref());
    }
    Ok(())
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
///
/// An explicit `--config` path that cannot be read or parsed is an error;
/// a discovered file that fails to parse is logged and ignored.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> Result<(Settings, Config), ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let mut settings = Settings::default();
    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    config.apply_to_settings(&mut settings, &base_dir);
    apply_env_overrides(&mut settings)?;

    Ok((settings, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_bind_address() {
        assert_eq!(
            parse_bind_address("8080", "127.0.0.1", 8501).unwrap(),
            ("127.0.0.1".to_string(), 8080)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0", "127.0.0.1", 8501).unwrap(),
            ("0.0.0.0".to_string(), 8501)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0:9000", "127.0.0.1", 8501).unwrap(),
            ("0.0.0.0".to_string(), 9000)
        );
        assert_eq!(
            parse_bind_address(":9000", "127.0.0.1", 8501).unwrap(),
            ("127.0.0.1".to_string(), 9000)
        );
        assert!(parse_bind_address("host:notaport", "127.0.0.1", 8501).is_err());
        assert!(parse_bind_address("  ", "127.0.0.1", 8501).is_err());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_address(), "127.0.0.1:8501");
        assert_eq!(settings.site_title, DEFAULT_SITE_TITLE);
    }

    #[test]
    fn test_parse_by_extension() {
        let toml = Config::parse("port = 9001\nsite_title = \"History 101\"", Path::new("a.toml"))
            .unwrap();
        assert_eq!(toml.port, Some(9001));
        assert_eq!(toml.site_title.as_deref(), Some("History 101"));

        let yaml = Config::parse("host: 0.0.0.0\n", Path::new("a.yaml")).unwrap();
        assert_eq!(yaml.host.as_deref(), Some("0.0.0.0"));

        let json = Config::parse(r#"{"reports_dir": "out"}"#, Path::new("a.json")).unwrap();
        assert_eq!(json.reports_dir.as_deref(), Some("out"));

        assert!(matches!(
            Config::parse("port = ", Path::new("bad.toml")),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_apply_resolves_relative_reports_dir() {
        let config = Config {
            reports_dir: Some("reports".to_string()),
            port: Some(9100),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings, Path::new("/srv/pioneer"));
        assert_eq!(settings.reports_dir, PathBuf::from("/srv/pioneer/reports"));
        assert_eq!(settings.port, 9100);
        assert_eq!(settings.host, DEFAULT_HOST);

        let config = Config {
            port: Some(70_000),
            ..Default::default()
        };
        config.apply_to_settings(&mut settings, Path::new("/srv/pioneer"));
        assert_eq!(settings.port, 9100);
    }

    #[tokio::test]
    async fn test_load_from_path_records_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pioneer.toml");
        std::fs::write(&path, "reports_dir = \"plans\"\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.base_dir().as_deref(), Some(dir.path()));
    }

    #[tokio::test]
    async fn test_load_from_missing_path() {
        let dir = tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
