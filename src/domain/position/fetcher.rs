//! Position fetching interface

use async_trait::async_trait;

use crate::shared::types::Address;
use super::Position;

/// Result of a position fetch. `positions` is only meaningful once `loading` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionsResult {
    pub positions: Vec<Position>,
    pub loading: bool,
}

impl PositionsResult {
    pub fn loaded(positions: Vec<Position>) -> Self {
        Self {
            positions,
            loading: false,
        }
    }

    pub fn loading() -> Self {
        Self {
            positions: Vec::new(),
            loading: true,
        }
    }
}

/// Source of a wallet's positions
#[async_trait]
pub trait PositionFetcher: Send + Sync {
    async fn fetch_positions(&self, account: &Address) -> PositionsResult;
}
