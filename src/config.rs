use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_catalog_timeout")]
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            api_key: String::new(),
            timeout_secs: default_catalog_timeout(),
        }
    }
}

fn default_catalog_url() -> String { "https://api.thedogapi.com/v1".to_string() }
fn default_catalog_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_ttl() -> u64 { 30 * 60 }
fn default_cache_capacity() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Temperament tags appended to the built-in vocabulary
    #[serde(default)]
    pub extra_temperaments: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            extra_temperaments: Vec::new(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BREEDS_)
    /// 5. DOG_API_KEY for the catalog key
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BREEDS__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("BREEDS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Pick up the conventional `DOG_API_KEY` variable used by the catalog
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = std::env::var("DOG_API_KEY") {
        builder = builder.set_override("catalog.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.catalog.base_url, "https://api.thedogapi.com/v1");
        assert_eq!(settings.cache.ttl_secs, 1800);
        assert_eq!(settings.search.default_limit, 10);
        assert_eq!(settings.search.max_limit, 100);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    #[test]
    fn test_load_from_partial_file() {
        let path = std::env::temp_dir().join(format!("breed-finder-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[search]\nmax_limit = 25\nextra_temperaments = [\"tenacious\"]").unwrap();
        drop(file);

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.search.max_limit, 25);
        assert_eq!(settings.search.default_limit, 10);
        assert_eq!(settings.search.extra_temperaments, vec!["tenacious"]);
        assert_eq!(settings.server.port, 8080);
    }
}
