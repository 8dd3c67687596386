//! Token domain - token statistics records and their table

mod resolver;
mod rows;

pub use resolver::{TokenList, TokenResolver};
pub use rows::{token_columns, token_table_options, TokenCompactLayout, TokenExpandedLayout};

use serde::{Deserialize, Serialize};

use crate::domain::table::Record;
use crate::shared::serde_num;

/// Token statistics as delivered by the analytics indexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Token contract address
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, deserialize_with = "serde_num::opt_f64")]
    pub decimals: Option<f64>,
    #[serde(default, rename = "priceUSD", deserialize_with = "serde_num::opt_f64")]
    pub price_usd: Option<f64>,
    #[serde(default, rename = "priceChangeUSD", deserialize_with = "serde_num::opt_f64")]
    pub price_change_usd: Option<f64>,
    #[serde(default, rename = "oneDayVolumeUSD", deserialize_with = "serde_num::opt_f64")]
    pub one_day_volume_usd: Option<f64>,
    #[serde(default, rename = "totalLiquidityUSD", deserialize_with = "serde_num::opt_f64")]
    pub total_liquidity_usd: Option<f64>,
}

impl TokenRecord {
    /// Decimals as an integer, 18 when absent or out of range
    pub fn decimals_u8(&self) -> u8 {
        match self.decimals {
            Some(d) if (0.0..=255.0).contains(&d) => d as u8,
            _ => 18,
        }
    }
}

impl Record for TokenRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
