//! Per-account position snapshot

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::position::{Position, PositionFetcher, PositionsResult};
use crate::shared::errors::DataSourceError;
use crate::shared::types::Address;
use super::snapshot::read_json;

/// Positions keyed by owner, loaded from a `{"0x<owner>": [positions...]}` file
#[derive(Debug, Clone, Default)]
pub struct SnapshotPositionFetcher {
    positions: HashMap<Address, Vec<Position>>,
}

impl SnapshotPositionFetcher {
    pub fn new(positions: HashMap<Address, Vec<Position>>) -> Self {
        Self { positions }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataSourceError> {
        let path = path.as_ref();
        let raw: HashMap<String, Vec<Position>> = read_json(path)?;

        let mut positions = HashMap::with_capacity(raw.len());
        for (owner, list) in raw {
            positions.insert(owner.parse::<Address>()?, list);
        }

        info!("Loaded positions for {} accounts from {}", positions.len(), path.display());
        Ok(Self { positions })
    }

    /// Owners present in the snapshot, in address order
    pub fn accounts(&self) -> Vec<Address> {
        let mut accounts: Vec<Address> = self.positions.keys().copied().collect();
        accounts.sort();
        accounts
    }
}

#[async_trait]
impl PositionFetcher for SnapshotPositionFetcher {
    async fn fetch_positions(&self, account: &Address) -> PositionsResult {
        let positions = self.positions.get(account).cloned().unwrap_or_default();
        debug!("Fetched {} positions for {}", positions.len(), account);
        PositionsResult::loaded(positions)
    }
}
