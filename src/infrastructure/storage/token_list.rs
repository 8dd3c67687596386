//! Token list files (the `{"name": ..., "tokens": [...]}` format wallets share)

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::token::TokenList;
use crate::shared::errors::DataSourceError;
use crate::shared::types::{Address, ChainId, Token};
use super::snapshot::read_json;

#[derive(Deserialize)]
struct TokenListDocument {
    #[serde(default)]
    name: String,
    tokens: Vec<TokenListEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenListEntry {
    chain_id: u64,
    address: String,
    decimals: u8,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Load a token list. Entries with malformed addresses are skipped.
pub fn load_token_list<P: AsRef<Path>>(path: P) -> Result<TokenList, DataSourceError> {
    let path = path.as_ref();
    let document: TokenListDocument = read_json(path)?;

    let mut list = TokenList::new(document.name);
    for entry in document.tokens {
        match entry.address.parse::<Address>() {
            Ok(address) => list.insert(Token::new(
                ChainId(entry.chain_id),
                address,
                entry.decimals,
                entry.symbol,
                entry.name,
            )),
            Err(e) => warn!("Skipping token list entry {}: {}", entry.address, e),
        }
    }

    info!("Loaded token list '{}' with {} tokens", list.name(), list.len());
    Ok(list)
}
