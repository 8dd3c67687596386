//! Wallet domain - connected account and active chain

use crate::shared::types::{Address, ChainId};

/// Wallet/chain context consumed by views
pub trait WalletContext {
    /// Connected account, if any
    fn account(&self) -> Option<Address>;

    /// Chain reported by the wallet, if connected
    fn chain_id(&self) -> Option<ChainId>;

    /// Chain to use for lookups when no wallet is connected
    fn default_chain_id(&self) -> ChainId {
        ChainId::MATIC
    }

    fn current_chain_id(&self) -> ChainId {
        self.chain_id().unwrap_or_else(|| self.default_chain_id())
    }
}

/// Wallet state fixed at startup (from CLI flags or config)
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    account: Option<Address>,
    chain_id: Option<ChainId>,
    default_chain: ChainId,
}

impl StaticWallet {
    pub fn new(account: Option<Address>, chain_id: Option<ChainId>, default_chain: ChainId) -> Self {
        Self {
            account,
            chain_id,
            default_chain,
        }
    }

    /// No wallet connected
    pub fn disconnected(default_chain: ChainId) -> Self {
        Self::new(None, None, default_chain)
    }
}

impl WalletContext for StaticWallet {
    fn account(&self) -> Option<Address> {
        self.account
    }

    fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    fn default_chain_id(&self) -> ChainId {
        self.default_chain
    }
}
