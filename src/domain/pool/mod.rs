//! Pool domain - liquidity pool statistics and their table

mod rows;

pub use rows::{pool_columns, pool_table_options, PoolCompactLayout, PoolExpandedLayout};

use serde::{Deserialize, Serialize};

use crate::domain::table::Record;
use crate::shared::serde_num;

/// Token side of a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolToken {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

/// Pool statistics as delivered by the analytics indexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPool")]
pub struct PoolRecord {
    /// Pool contract address
    pub id: String,
    /// `SYM0/SYM1`
    pub pair_name: String,
    pub token0: PoolToken,
    pub token1: PoolToken,
    /// Fee tier in hundredths of a basis point (500 = 0.05%)
    pub fee_tier: Option<u32>,
    pub tvl_usd: Option<f64>,
    pub one_day_volume_usd: Option<f64>,
    pub one_day_fees_usd: Option<f64>,
    /// Annualized fee yield in percent
    pub apr: Option<f64>,
}

impl PoolRecord {
    /// Fee tier as a percentage, e.g. `0.05%`
    pub fn fee_label(&self) -> Option<String> {
        self.fee_tier.map(|fee| format!("{}%", fee as f64 / 10_000.0))
    }
}

impl Record for PoolRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.pair_name
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPool {
    id: String,
    token0: PoolToken,
    token1: PoolToken,
    #[serde(default, alias = "feeTier", alias = "fee_tier", deserialize_with = "serde_num::opt_f64")]
    fee: Option<f64>,
    #[serde(
        default,
        rename = "totalValueLockedUSD",
        alias = "reserveUSD",
        alias = "tvl_usd",
        deserialize_with = "serde_num::opt_f64"
    )]
    tvl_usd: Option<f64>,
    #[serde(default, rename = "oneDayVolumeUSD", alias = "one_day_volume_usd", deserialize_with = "serde_num::opt_f64")]
    one_day_volume_usd: Option<f64>,
    #[serde(default, rename = "oneDayFeesUSD", alias = "feesUSD", alias = "one_day_fees_usd", deserialize_with = "serde_num::opt_f64")]
    one_day_fees_usd: Option<f64>,
    #[serde(default, deserialize_with = "serde_num::opt_f64")]
    apr: Option<f64>,
}

impl From<RawPool> for PoolRecord {
    fn from(raw: RawPool) -> Self {
        Self {
            pair_name: format!("{}/{}", raw.token0.symbol, raw.token1.symbol),
            id: raw.id,
            token0: raw.token0,
            token1: raw.token1,
            fee_tier: raw.fee.filter(|f| *f >= 0.0).map(|f| f as u32),
            tvl_usd: raw.tvl_usd,
            one_day_volume_usd: raw.one_day_volume_usd,
            one_day_fees_usd: raw.one_day_fees_usd,
            apr: raw.apr,
        }
    }
}
