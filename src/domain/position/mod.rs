//! Position domain - a wallet's concentrated-liquidity positions

mod fetcher;
mod rows;
mod view;

pub use fetcher::{PositionFetcher, PositionsResult};
pub use rows::{position_columns, position_table_options, PositionCompactLayout, PositionExpandedLayout};
pub use view::{MyPositionsView, NewestPosition, PositionsDisplay};

use serde::{Deserialize, Serialize};

use crate::domain::table::Record;
use crate::shared::serde_num;

/// One liquidity position NFT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPosition", rename_all = "camelCase")]
pub struct Position {
    pub token_id: u64,
    pub liquidity: u128,
    pub on_farming: bool,
    pub token0: String,
    pub token1: String,
    pub fee: Option<u32>,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Decimal string of `token_id`, the record id
    #[serde(skip)]
    id: String,
    /// `SYM0/SYM1`
    #[serde(skip)]
    pair: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPosition {
    #[serde(deserialize_with = "serde_num::lenient_u64")]
    token_id: u64,
    #[serde(deserialize_with = "serde_num::lenient_u128")]
    liquidity: u128,
    #[serde(default)]
    on_farming: bool,
    token0: String,
    token1: String,
    #[serde(default)]
    fee: Option<u32>,
    #[serde(default)]
    tick_lower: i32,
    #[serde(default)]
    tick_upper: i32,
}

impl From<RawPosition> for Position {
    fn from(raw: RawPosition) -> Self {
        Position {
            id: raw.token_id.to_string(),
            pair: format!("{}/{}", raw.token0, raw.token1),
            token_id: raw.token_id,
            liquidity: raw.liquidity,
            on_farming: raw.on_farming,
            token0: raw.token0,
            token1: raw.token1,
            fee: raw.fee,
            tick_lower: raw.tick_lower,
            tick_upper: raw.tick_upper,
        }
    }
}

impl Position {
    pub fn new(token_id: u64, liquidity: u128, on_farming: bool, token0: &str, token1: &str) -> Self {
        RawPosition {
            token_id,
            liquidity,
            on_farming,
            token0: token0.to_string(),
            token1: token1.to_string(),
            fee: None,
            tick_lower: 0,
            tick_upper: 0,
        }
        .into()
    }

    pub fn with_range(mut self, fee: u32, tick_lower: i32, tick_upper: i32) -> Self {
        self.fee = Some(fee);
        self.tick_lower = tick_lower;
        self.tick_upper = tick_upper;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.liquidity == 0
    }

    pub fn status(&self) -> PositionStatus {
        if self.on_farming {
            PositionStatus::Farming
        } else if self.is_closed() {
            PositionStatus::Closed
        } else {
            PositionStatus::Open
        }
    }
}

impl Record for Position {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.pair
    }
}

/// Display status of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Open,
    Closed,
    Farming,
}

impl PositionStatus {
    /// Translation key
    pub fn label_key(&self) -> &'static str {
        match self {
            PositionStatus::Open => "open",
            PositionStatus::Closed => "closed",
            PositionStatus::Farming => "farming",
        }
    }
}

/// User toggles on the positions page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionFilters {
    pub hide_closed: bool,
    pub hide_farming: bool,
}

/// Split into (open, closed) by liquidity, keeping input order
pub fn partition_positions(positions: &[Position]) -> (Vec<Position>, Vec<Position>) {
    positions.iter().cloned().partition(|p| !p.is_closed())
}

/// Farming positions first (unless hidden), then open non-farming, then closed
/// non-farming (unless hidden). A closed position that is farming appears once,
/// in the farming group.
pub fn filter_positions(positions: &[Position], filters: PositionFilters) -> Vec<Position> {
    let (open, closed) = partition_positions(positions);

    let mut filtered = Vec::with_capacity(positions.len());
    if !filters.hide_farming {
        filtered.extend(positions.iter().filter(|p| p.on_farming).cloned());
    }
    filtered.extend(open.into_iter().filter(|p| !p.on_farming));
    if !filters.hide_closed {
        filtered.extend(closed.into_iter().filter(|p| !p.on_farming));
    }
    filtered
}
