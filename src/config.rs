//! Configuration loading for the `fxn` CLI.
//!
//! `fxn` reads `--config <path>` when given, else
//! `~/.function-network/config.toml` if it exists. The file must be private
//! to its owner. `--api-key`/`FXN_API_KEY` and `--base-url`/`FXN_BASE_URL`
//! override its values.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ClientOptions, DEFAULT_BASE_URL, FunctionError, Result};

/// Contents of the CLI config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, a missing user file yields
    /// an empty config (flags and env vars may supply everything).
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = match explicit_path {
            Some(path) if path.exists() => path.to_path_buf(),
            Some(path) => {
                return Err(FunctionError::Configuration(format!(
                    "no config file at {}",
                    path.display()
                )));
            }
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => path,
                None => return Ok(Config::default()),
            },
        };
        ensure_private(&path)?;
        Self::read(&path)
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| config_error(path, "cannot read", e))?;
        toml::from_str(&text).map_err(|e| config_error(path, "invalid TOML in", e))
    }

    /// Merge with command-line values into client options.
    ///
    /// Arguments win over the file; the base URL falls back to
    /// [`DEFAULT_BASE_URL`]. A key missing everywhere is left empty, which
    /// client construction rejects.
    pub fn client_options(self, api_key: Option<String>, base_url: Option<String>) -> ClientOptions {
        ClientOptions {
            api_key: api_key.or(self.api_key).unwrap_or_default(),
            base_url: base_url
                .or(self.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// `~/.function-network/config.toml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".function-network").join("config.toml"))
}

fn config_error(path: &Path, what: &str, err: impl fmt::Display) -> FunctionError {
    FunctionError::Configuration(format!("{what} {}: {err}", path.display()))
}

/// The file holds the API key, so only its owner may access it.
#[cfg(unix)]
fn ensure_private(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)
        .map_err(|e| config_error(path, "cannot inspect", e))?
        .permissions()
        .mode()
        & 0o777;
    if mode & 0o077 == 0 {
        return Ok(());
    }
    Err(FunctionError::Configuration(format!(
        "{} is accessible to other users (mode {mode:o}); restrict it with `chmod 600`",
        path.display()
    )))
}

#[cfg(not(unix))]
fn ensure_private(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();
        }
        path
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            api_key = "fxn-test-key"
            base_url = "http://localhost:8080"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("fxn-test-key"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"api_key = "from-file""#);
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("no config file at /nonexistent/config.toml"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "api_key = ");
        let err = Config::load(Some(&path)).unwrap_err().to_string();
        assert!(err.contains("invalid TOML in"));
        assert!(err.contains("config.toml"));
    }

    #[cfg(unix)]
    #[test]
    fn world_readable_config_is_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"api_key = "leaky""#);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let err = Config::load(Some(&path)).unwrap_err().to_string();
        assert!(err.contains("accessible to other users (mode 644)"));
    }

    #[test]
    fn arguments_override_file() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            base_url: Some("http://file:1".to_string()),
        };
        let options = config.client_options(Some("from-flag".to_string()), None);
        assert_eq!(options.api_key, "from-flag");
        assert_eq!(options.base_url, "http://file:1");
    }

    #[test]
    fn base_url_defaults_when_unset() {
        let options = Config::default().client_options(Some("key".to_string()), None);
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_key_is_left_empty() {
        let options = Config::default().client_options(None, None);
        assert!(options.api_key.is_empty());
    }
}
