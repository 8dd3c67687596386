//! String lookup for labels shown in tables and views

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::shared::errors::DataSourceError;

/// Translation service. Total over its key set: unknown keys come back unchanged.
pub trait Translator {
    fn translate(&self, key: &str) -> String;
}

/// Translator backed by an in-memory table
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    entries: HashMap<String, String>,
}

impl StaticTranslator {
    /// Empty table; every lookup echoes its key
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English labels
    pub fn english() -> Self {
        let entries = [
            ("name", "Name"),
            ("price", "Price"),
            ("24hPer", "24h %"),
            ("24hVol", "24h Volume"),
            ("liquidity", "Liquidity"),
            ("pair", "Pair"),
            ("tvl", "TVL"),
            ("24hFees", "24h Fees"),
            ("apr", "APR"),
            ("tokenId", "ID"),
            ("range", "Range"),
            ("status", "Status"),
            ("open", "Open"),
            ("closed", "Closed"),
            ("farming", "Farming"),
            ("myLiquidityPools", "My Liquidity Pools"),
            ("noLiquidityPositions", "You do not have any liquidity positions."),
            ("connectWallet", "Connect Wallet"),
            ("loading", "Loading"),
            ("noData", "No data"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }

    /// English labels overridden by a JSON object of `key -> text`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DataSourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DataSourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let overrides: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|e| DataSourceError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut translator = Self::english();
        translator.entries.extend(overrides);
        Ok(translator)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
