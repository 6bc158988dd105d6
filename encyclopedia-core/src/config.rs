//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the encyclopedia.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: PathsConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default = "default_extension")]
    pub entry_extension: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_extension() -> String {
    String::from("md")
}

fn default_base_url() -> String {
    String::from("/")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub entries: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    String::from("127.0.0.1")
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse configuration from YAML text; relative paths stay relative to the cwd
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get the entries directory, resolved relative to config file
    pub fn entries_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.entries)
    }

    /// Entry file extension without the leading dot
    pub fn extension(&self) -> &str {
        self.entry_extension.trim_start_matches('.')
    }

    /// Address the web server binds to
    pub fn listen_addr(&self, port_override: Option<u16>) -> String {
        format!(
            "{}:{}",
            self.server.host,
            port_override.unwrap_or(self.server.port)
        )
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_deref().and_then(Path::parent) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }

    /// Normalized base URL with leading and trailing slash ("/foo/" or "/")
    pub fn normalized_base_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Ensure base URLs have a leading and trailing slash
pub fn normalize_base_url(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    if !s.ends_with('/') {
        s.push('/');
    }

    // Collapse duplicate slashes
    while s.contains("//") {
        s = s.replace("//", "/");
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
site:
  title: "Encyclopedia"
paths:
  entries: "entries"
"#;

    #[test]
    fn test_default_values() {
        let config = Config::from_yaml(MINIMAL).unwrap();

        assert_eq!(config.site.title, "Encyclopedia");
        assert_eq!(config.site.description, None);
        assert_eq!(config.extension(), "md");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.listen_addr(None), "127.0.0.1:8000");
        assert_eq!(config.listen_addr(Some(9000)), "127.0.0.1:9000");
    }

    #[test]
    fn test_entries_dir_relative_to_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("encyclopedia.yml");
        fs::write(&path, MINIMAL).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.entries_dir(), dir.path().join("entries"));
    }

    #[test]
    fn test_extension_strips_leading_dot() {
        let config = Config::from_yaml(
            r#"
site:
  title: "Wiki"
paths:
  entries: "/srv/wiki"
entry_extension: ".txt"
"#,
        )
        .unwrap();

        assert_eq!(config.extension(), "txt");
        assert_eq!(config.entries_dir(), PathBuf::from("/srv/wiki"));
    }

    #[test]
    fn test_missing_site_is_parse_error() {
        let err = Config::from_yaml("paths:\n  entries: entries\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("wiki"), "/wiki/");
        assert_eq!(normalize_base_url("//wiki//"), "/wiki/");
        assert_eq!(normalize_base_url(" /wiki "), "/wiki/");
    }
}
