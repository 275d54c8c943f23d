use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::core::fetchers;
use crate::core::http::ReqwestClient;
use crate::error::Result;

fn default_search_url() -> String {
    "https://www.google.com/search?q=%q%".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("lyrseek v{} (https://github.com/musicdock/lyrseek-cli)", version)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enabled lyrics sources, in priority order
    pub sources: Vec<String>,

    /// Search engine URL template; %q% is replaced with the escaped query
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: fetchers::default_sources(),
            search_url: default_search_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists (for Docker and development)
        dotenvy::dotenv().ok();

        // Start with default configuration
        let mut config = Self::default();

        // Override with file configuration if available
        let config_file = if let Some(path) = config_path {
            PathBuf::from(path)
        } else {
            Self::config_path()?
        };

        if config_file.exists() {
            let content = fs::read_to_string(&config_file)?;
            let file_config: Config = toml::from_str(&content)?;
            config = file_config;
        }

        // Override with environment variables (highest priority)
        config.load_from_env();

        // Save config file if it doesn't exist
        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        match ProjectDirs::from("net", "musicdock", "lyrseek-cli") {
            Some(project_dirs) => Ok(project_dirs.config_dir().join("config.toml")),
            None => {
                // Graceful fallback to current directory if project dirs unavailable
                warn!("ProjectDirs unavailable; falling back to current directory for config path");
                Ok(PathBuf::from("lyrseek.toml"))
            }
        }
    }

    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(anyhow::Error::from)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn load_from_env(&mut self) {
        if let Some(sources) = env_string("LYRSEEK_SOURCES") {
            self.sources = sources
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Some(search_url) = env_string("LYRSEEK_SEARCH_URL") {
            self.search_url = search_url;
        }

        if let Some(user_agent) = env_string("LYRSEEK_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Some(timeout) = env_string("LYRSEEK_TIMEOUT_SECONDS") {
            match timeout.parse() {
                Ok(secs) => self.timeout_seconds = secs,
                Err(_) => warn!("Ignoring invalid LYRSEEK_TIMEOUT_SECONDS: {}", timeout),
            }
        }
    }

    pub fn create_http_client(&self) -> ReqwestClient {
        ReqwestClient::new(&self.user_agent, self.timeout_seconds)
    }
}

fn env_string(var_name: &str) -> Option<String> {
    match env::var(var_name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_every_known_source() {
        let config = Config::default();
        assert_eq!(config.sources, fetchers::default_sources());
        assert!(config.search_url.contains("%q%"));
    }

    #[test]
    fn sources_env_override_splits_and_trims() {
        let mut config = Config::default();
        env::set_var("LYRSEEK_SOURCES", " azlyrics, genius ,,tekstowo ");
        config.load_from_env();
        env::remove_var("LYRSEEK_SOURCES");
        assert_eq!(config.sources, vec!["azlyrics", "genius", "tekstowo"]);
    }
}
