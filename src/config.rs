use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://empllo.com/api/v1";
pub const DEFAULT_USER_AGENT: &str = "hireizon/0.1";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Listing endpoint returning the job feed.
    pub endpoint: String,
    /// sqlx database URL; the platform data dir is used when unset.
    pub database_url: Option<String>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            database_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Read `path`, or the platform config file when `None`. A missing
    /// file means defaults; env overrides are applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };
        let mut cfg = match path {
            Some(p) if p.exists() => Self::from_file(&p)?,
            _ => Self::default(),
        };
        cfg.apply_env();
        cfg.endpoint_url()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config: {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    // HIREIZON_ENDPOINT / HIREIZON_DATABASE_URL win over the file.
    fn apply_env(&mut self) {
        if let Some(v) = std::env::var("HIREIZON_ENDPOINT").ok().filter(|s| !s.trim().is_empty()) {
            self.endpoint = v;
        }
        if let Some(v) = std::env::var("HIREIZON_DATABASE_URL").ok().filter(|s| !s.trim().is_empty()) {
            self.database_url = Some(v);
        }
    }

    pub fn endpoint_url(&self) -> Result<url::Url> {
        let url = url::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL: {}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("endpoint must be http or https: {}", self.endpoint);
        }
        Ok(url)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "hireizon", "hireizon").map(|p| p.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = Config::from_toml("endpoint = \"http://localhost:8080/jobs\"\n").unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:8080/jobs");
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert!(cfg.database_url.is_none());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let cfg = Config { endpoint: "ftp://example.com/jobs".into(), ..Config::default() };
        assert!(cfg.endpoint_url().is_err());
        let cfg = Config { endpoint: "not a url".into(), ..Config::default() };
        assert!(cfg.endpoint_url().is_err());
        assert!(Config::default().endpoint_url().is_ok());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database_url = \"sqlite::memory:\"\nuser_agent = \"test\"\n").unwrap();
        let cfg = Config::from_file(&path).unwrap();
        assert_eq!(cfg.database_url.as_deref(), Some("sqlite::memory:"));
        assert_eq!(cfg.user_agent, "test");
    }
}
