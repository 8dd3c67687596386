//! "My liquidity positions" view model

use serde::Serialize;
use tracing::debug;

use crate::shared::types::Address;
use super::{filter_positions, Position, PositionFilters, PositionsResult};

/// What the positions page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PositionsDisplay {
    /// No wallet: empty-state message plus a connect prompt
    ConnectWallet,
    Loading,
    /// Wallet connected, nothing to show
    Empty,
    Positions {
        /// Newest first
        positions: Vec<Position>,
        newest_token_id: Option<u64>,
    },
}

/// Highest token id of a position list, recomputed only when the list changes
#[derive(Debug, Default)]
pub struct NewestPosition {
    key: Option<Vec<u64>>,
    value: Option<u64>,
    computations: usize,
}

impl NewestPosition {
    pub fn get(&mut self, positions: &[Position]) -> Option<u64> {
        let unchanged = self
            .key
            .as_ref()
            .is_some_and(|key| key.iter().copied().eq(positions.iter().map(|p| p.token_id)));

        if !unchanged {
            self.key = Some(positions.iter().map(|p| p.token_id).collect());
            self.value = positions.iter().map(|p| p.token_id).max();
            self.computations += 1;
        }
        self.value
    }

    /// Number of times the value was actually recomputed
    pub fn computations(&self) -> usize {
        self.computations
    }
}

/// Filters, partitions and orders a wallet's positions across refreshes.
///
/// For a given account, the last non-empty upstream set is kept and shown
/// while the upstream transiently reports no positions. Switching accounts
/// (or disconnecting) drops it, so one wallet's positions never show for another.
#[derive(Debug, Default)]
pub struct MyPositionsView {
    filters: PositionFilters,
    account: Option<Address>,
    snapshot: Option<Vec<Position>>,
    newest: NewestPosition,
}

impl MyPositionsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: PositionFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> PositionFilters {
        self.filters
    }

    pub fn set_hide_closed(&mut self, hide: bool) {
        self.filters.hide_closed = hide;
    }

    pub fn set_hide_farming(&mut self, hide: bool) {
        self.filters.hide_farming = hide;
    }

    pub fn newest(&self) -> &NewestPosition {
        &self.newest
    }

    /// Fold one upstream delivery into the view and return what to display
    pub fn update(&mut self, account: Option<Address>, result: &PositionsResult) -> PositionsDisplay {
        if account != self.account {
            if self.snapshot.is_some() {
                debug!("Account changed, dropping preserved positions");
            }
            self.account = account;
            self.snapshot = None;
        }

        if account.is_none() {
            return PositionsDisplay::ConnectWallet;
        }
        if result.loading {
            return PositionsDisplay::Loading;
        }

        let source: &[Position] = if !result.positions.is_empty() {
            self.snapshot = Some(result.positions.clone());
            &result.positions
        } else if let Some(previous) = &self.snapshot {
            debug!("No positions from upstream, keeping previous {} for this account", previous.len());
            previous
        } else {
            &result.positions
        };

        let mut filtered = filter_positions(source, self.filters);
        if filtered.is_empty() {
            return PositionsDisplay::Empty;
        }

        filtered.sort_by(|a, b| b.token_id.cmp(&a.token_id));
        let newest_token_id = self.newest.get(&filtered);
        PositionsDisplay::Positions {
            positions: filtered,
            newest_token_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    fn positions() -> Vec<Position> {
        vec![
            Position::new(10, 100, false, "WETH", "USDC"),
            Position::new(30, 0, false, "WMATIC", "USDC"),
            Position::new(20, 50, true, "WBTC", "WETH"),
        ]
    }

    fn shown(display: &PositionsDisplay) -> Vec<u64> {
        match display {
            PositionsDisplay::Positions { positions, .. } => positions.iter().map(|p| p.token_id).collect(),
            other => panic!("unexpected display {:?}", other),
        }
    }

    #[test]
    fn test_no_account_prompts_connect() {
        let mut view = MyPositionsView::new();
        let display = view.update(None, &PositionsResult::loaded(positions()));
        assert_eq!(display, PositionsDisplay::ConnectWallet);
    }

    #[test]
    fn test_loading_wins_over_content() {
        let mut view = MyPositionsView::new();
        assert_eq!(view.update(Some(account(1)), &PositionsResult::loading()), PositionsDisplay::Loading);
    }

    #[test]
    fn test_sorted_newest_first() {
        let mut view = MyPositionsView::new();
        let display = view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        assert_eq!(shown(&display), vec![30, 20, 10]);
        match display {
            PositionsDisplay::Positions { newest_token_id, .. } => assert_eq!(newest_token_id, Some(30)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_filters_apply() {
        let mut view = MyPositionsView::new();
        view.set_hide_closed(true);
        view.set_hide_farming(true);
        let display = view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        assert_eq!(shown(&display), vec![10]);
    }

    #[test]
    fn test_transient_empty_keeps_previous_for_same_account() {
        let mut view = MyPositionsView::new();
        view.update(Some(account(1)), &PositionsResult::loaded(positions()));

        let display = view.update(Some(account(1)), &PositionsResult::loaded(Vec::new()));
        assert_eq!(shown(&display), vec![30, 20, 10]);
    }

    #[test]
    fn test_preserved_set_still_honors_filters() {
        let mut view = MyPositionsView::new();
        view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        view.set_hide_farming(true);

        let display = view.update(Some(account(1)), &PositionsResult::loaded(Vec::new()));
        assert_eq!(shown(&display), vec![30, 10]);
    }

    #[test]
    fn test_filters_can_empty_the_list() {
        let mut view = MyPositionsView::new();
        view.set_hide_closed(true);
        let only_closed = vec![Position::new(7, 0, false, "A", "B")];
        let display = view.update(Some(account(1)), &PositionsResult::loaded(only_closed));
        assert_eq!(display, PositionsDisplay::Empty);
    }

    #[test]
    fn test_account_switch_drops_previous() {
        let mut view = MyPositionsView::new();
        view.update(Some(account(1)), &PositionsResult::loaded(positions()));

        let display = view.update(Some(account(2)), &PositionsResult::loaded(Vec::new()));
        assert_eq!(display, PositionsDisplay::Empty);

        // switching back does not resurrect the first account's set either
        let display = view.update(Some(account(1)), &PositionsResult::loaded(Vec::new()));
        assert_eq!(display, PositionsDisplay::Empty);
    }

    #[test]
    fn test_disconnect_drops_previous() {
        let mut view = MyPositionsView::new();
        view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        view.update(None, &PositionsResult::loaded(Vec::new()));
        let display = view.update(Some(account(1)), &PositionsResult::loaded(Vec::new()));
        assert_eq!(display, PositionsDisplay::Empty);
    }

    #[test]
    fn test_newest_is_memoized() {
        let mut view = MyPositionsView::new();
        view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        assert_eq!(view.newest().computations(), 1);

        view.set_hide_closed(true);
        let display = view.update(Some(account(1)), &PositionsResult::loaded(positions()));
        assert_eq!(view.newest().computations(), 2);
        match display {
            PositionsDisplay::Positions { newest_token_id, .. } => assert_eq!(newest_token_id, Some(20)),
            other => panic!("unexpected display {:?}", other),
        }
    }
}
