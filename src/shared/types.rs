//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::DataSourceError;

/// Rows shown per table page across the dashboard
pub const ROWS_PER_PAGE: usize = 10;

/// EVM chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MATIC: ChainId = ChainId(137);
    pub const MUMBAI: ChainId = ChainId(80001);
    pub const DOGECHAIN: ChainId = ChainId(2000);
    pub const ZKEVM: ChainId = ChainId(1101);

    pub fn name(&self) -> &'static str {
        match self.0 {
            137 => "Polygon",
            80001 => "Mumbai",
            2000 => "Dogechain",
            1101 => "Polygon zkEVM",
            _ => "Unknown",
        }
    }
}

impl Default for ChainId {
    fn default() -> Self {
        ChainId::MATIC
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 20-byte account or contract address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = DataSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 40 {
            return Err(DataSourceError::InvalidAddress(s.to_string()));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| DataSourceError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = DataSourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol,
            name,
        }
    }
}

/// Which analytics dataset the dashboard is browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsVersion {
    V2,
    #[default]
    V3,
}

impl AnalyticsVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsVersion::V2 => "v2",
            AnalyticsVersion::V3 => "v3",
        }
    }
}

impl FromStr for AnalyticsVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v2" => Ok(AnalyticsVersion::V2),
            "v3" => Ok(AnalyticsVersion::V3),
            other => Err(format!("unknown analytics version: {}", other)),
        }
    }
}

/// Chain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub default_chain_id: ChainId,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            default_chain_id: ChainId::MATIC,
        }
    }
}

/// Table presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rows_per_page: usize,
    pub show_pagination: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: ROWS_PER_PAGE,
            show_pagination: true,
        }
    }
}

/// Link construction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub base_url: String,
    pub version: AnalyticsVersion,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quickswap.exchange".to_string(),
            version: AnalyticsVersion::V3,
        }
    }
}

/// Bookmark persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarksConfig {
    pub path: String,
}

impl Default for BookmarksConfig {
    fn default() -> Self {
        Self {
            path: "bookmarks.json".to_string(),
        }
    }
}

/// Translation table configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Optional JSON file of `key -> text` overrides
    pub translations: Option<String>,
}

/// Token metadata configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Optional token list used to resolve addresses
    pub token_list: Option<String>,
}

/// Dashboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub chain: ChainConfig,
    pub table: TableConfig,
    pub links: LinksConfig,
    pub bookmarks: BookmarksConfig,
    pub i18n: I18nConfig,
    pub data: DataConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_parse_and_display() {
        let address: Address = "0x0D500B1d8E8eF31E21C99d1Db9A6444d3ADf1270".parse().unwrap();
        assert_eq!(address.to_string(), "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270");
        assert_eq!(address.as_bytes()[0], 0x0d);
    }

    #[test]
    fn test_address_rejects_malformed() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("0xzz500b1d8e8ef31e21c99d1db9a6444d3adf1270".parse::<Address>().is_err());
    }

    #[test]
    fn test_config_defaults_from_empty_toml() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config.chain.default_chain_id, ChainId::MATIC);
        assert_eq!(config.table.rows_per_page, ROWS_PER_PAGE);
        assert!(config.table.show_pagination);
        assert_eq!(config.links.version, AnalyticsVersion::V3);
    }

    #[test]
    fn test_config_partial_override() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [table]
            rows_per_page = 25

            [links]
            version = "v2"
            "#,
        )
        .unwrap();
        assert_eq!(config.table.rows_per_page, 25);
        assert!(config.table.show_pagination);
        assert_eq!(config.links.version, AnalyticsVersion::V2);
        assert_eq!(config.bookmarks.path, "bookmarks.json");
    }

    #[test]
    fn test_analytics_version_from_str() {
        assert_eq!("V2".parse::<AnalyticsVersion>(), Ok(AnalyticsVersion::V2));
        assert!("v4".parse::<AnalyticsVersion>().is_err());
    }
}
