use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub products_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Использовать прокси из переменных окружения (HTTP_PROXY и т.п.)
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_use_system_proxy() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
products_url = "https://fakestoreapi.com/products"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<CatalogConfig> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from_path(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

/// Load configuration from an explicit file
pub fn load_config_from_path(path: &Path) -> anyhow::Result<CatalogConfig> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&contents)?;
    Ok(config)
}

pub fn default_config() -> anyhow::Result<CatalogConfig> {
    let config: CatalogConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.api.products_url, "https://fakestoreapi.com/products");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_defaults_when_missing() {
        let config: CatalogConfig = toml::from_str(
            r#"
            [api]
            products_url = "https://dummyjson.com/products"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.use_system_proxy);
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!("catalog-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[api]\nproducts_url = \"http://127.0.0.1:9/products\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.api.products_url, "http://127.0.0.1:9/products");
        assert_eq!(config.api.timeout_secs, 5);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join("catalog-config-does-not-exist.toml");
        assert!(load_config_from_path(&path).is_err());
    }
}
