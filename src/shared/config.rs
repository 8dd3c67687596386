use std::fs;
use std::path::Path;
use tracing::{debug, info};
use crate::shared::types::DashboardConfig;
use crate::shared::errors::AppError;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "Dashboard.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the given TOML file
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DashboardConfig, AppError> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e)))?;

        let config = Self::parse(&config_content)?;
        info!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    /// Load the explicit path when given, else `Dashboard.toml` if present, else defaults
    pub fn load_or_default(path: Option<&str>) -> Result<DashboardConfig, AppError> {
        match path {
            Some(path) => Self::load_config(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load_config(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(DashboardConfig::default())
            }
        }
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<DashboardConfig, AppError> {
        let config: DashboardConfig = toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        if config.table.rows_per_page == 0 {
            return Err(AppError::ConfigError("table.rows_per_page must be positive".to_string()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_zero_page_size() {
        let result = ConfigLoader::parse("[table]\nrows_per_page = 0\n");
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_parse_reads_sections() {
        let config = ConfigLoader::parse(
            "[chain]\ndefault_chain_id = 1101\n\n[bookmarks]\npath = \"/tmp/marks.json\"\n",
        )
        .unwrap();
        assert_eq!(config.chain.default_chain_id.0, 1101);
        assert_eq!(config.bookmarks.path, "/tmp/marks.json");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = ConfigLoader::load_config("/nonexistent/Dashboard.toml");
        assert!(result.is_err());
    }
}
