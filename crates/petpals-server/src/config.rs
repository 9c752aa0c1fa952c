use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Root domain tenant subdomains hang off of
    #[serde(default = "default_root_domain")]
    pub root_domain: String,

    /// PostgreSQL connection string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Per-read timeout for the domain data fetchers, in seconds
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root_domain: default_root_domain(),
            database_url: None,
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents).context("Failed to parse TOML config")?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PETPALS_HOST") {
            self.host = val;
        }

        if let Ok(val) = std::env::var("PETPALS_PORT") {
            if let Ok(port) = val.parse::<u16>() {
                self.port = port;
            }
        }

        if let Ok(val) = std::env::var("PETPALS_ROOT_DOMAIN") {
            self.root_domain = val;
        }

        if let Ok(val) = std::env::var("PETPALS_DATABASE_URL") {
            self.database_url = Some(val);
        }

        if let Ok(val) = std::env::var("PETPALS_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("PETPALS_READ_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                self.site.read_timeout_secs = secs;
            }
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_root_domain() -> String {
    "petpals.com".to_string()
}

fn default_read_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.root_domain, "petpals.com");
        assert_eq!(config.site.read_timeout_secs, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "root_domain: pups.example\nport: 8080\nsite:\n  read_timeout_secs: 2"
        )
        .unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.root_domain, "pups.example");
        assert_eq!(config.port, 8080);
        assert_eq!(config.site.read_timeout_secs, 2);
        // Unset fields keep their defaults
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "root_domain = \"pups.example\"\nport = 8081").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.root_domain, "pups.example");
        assert_eq!(config.port, 8081);
    }

    #[test]
    #[serial]
    fn test_merge_env_overrides() {
        unsafe {
            std::env::set_var("PETPALS_ROOT_DOMAIN", "env.example");
            std::env::set_var("PETPALS_PORT", "9090");
            std::env::set_var("PETPALS_DATABASE_URL", "postgres://env/petpals");
        }

        let mut config = ServerConfig::default();
        config.merge_env();

        assert_eq!(config.root_domain, "env.example");
        assert_eq!(config.port, 9090);
        assert_eq!(config.database_url.as_deref(), Some("postgres://env/petpals"));

        unsafe {
            std::env::remove_var("PETPALS_ROOT_DOMAIN");
            std::env::remove_var("PETPALS_PORT");
            std::env::remove_var("PETPALS_DATABASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_merge_env_ignores_invalid_port() {
        unsafe {
            std::env::set_var("PETPALS_PORT", "not-a-port");
        }

        let mut config = ServerConfig::default();
        config.merge_env();
        assert_eq!(config.port, 3000);

        unsafe {
            std::env::remove_var("PETPALS_PORT");
        }
    }
}
