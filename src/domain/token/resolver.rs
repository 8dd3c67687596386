//! Token resolution against a known token list

use std::collections::HashMap;

use crate::shared::types::{Address, ChainId, Token};

/// Resolves an address into token metadata.
///
/// Never fails for a well-formed address: unknown tokens resolve to a
/// best-effort candidate.
pub trait TokenResolver {
    fn resolve_token(&self, address: &Address, chain_id: ChainId, fallback: &[Token]) -> Token;
}

/// Known tokens keyed by chain and address
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    name: String,
    tokens: HashMap<(ChainId, Address), Token>,
}

impl TokenList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, token: Token) {
        self.tokens.insert((token.chain_id, token.address), token);
    }

    pub fn get(&self, chain_id: ChainId, address: &Address) -> Option<&Token> {
        self.tokens.get(&(chain_id, *address))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        let mut list = TokenList::new("custom");
        for token in iter {
            list.insert(token);
        }
        list
    }
}

impl TokenResolver for TokenList {
    fn resolve_token(&self, address: &Address, chain_id: ChainId, fallback: &[Token]) -> Token {
        if let Some(token) = self.get(chain_id, address) {
            return token.clone();
        }

        fallback
            .iter()
            .find(|t| t.chain_id == chain_id && t.address == *address)
            .or_else(|| fallback.iter().find(|t| t.address == *address))
            .cloned()
            .unwrap_or_else(|| Token::new(chain_id, *address, 18, None, None))
    }
}
