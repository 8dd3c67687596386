//! Bookmark domain - user-starred tokens and pools

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Set of bookmarked record ids.
///
/// `add` and `remove` are idempotent. Enumeration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: HashSet<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn add(&mut self, id: &str) {
        if !self.ids.contains(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Star click: add when absent, remove when present. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Ids in lexical order, for stable output
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

impl FromIterator<String> for BookmarkSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Which kind of record a bookmark refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkKind {
    Token,
    Pool,
}

impl fmt::Display for BookmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkKind::Token => write!(f, "token"),
            BookmarkKind::Pool => write!(f, "pool"),
        }
    }
}

impl FromStr for BookmarkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token" | "tokens" => Ok(BookmarkKind::Token),
            "pool" | "pools" | "pair" | "pairs" => Ok(BookmarkKind::Pool),
            other => Err(format!("unknown bookmark kind: {}", other)),
        }
    }
}

/// Application-wide bookmark store, owned by the application root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    pub tokens: BookmarkSet,
    pub pools: BookmarkSet,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: BookmarkKind) -> &BookmarkSet {
        match kind {
            BookmarkKind::Token => &self.tokens,
            BookmarkKind::Pool => &self.pools,
        }
    }

    pub fn get_mut(&mut self, kind: BookmarkKind) -> &mut BookmarkSet {
        match kind {
            BookmarkKind::Token => &mut self.tokens,
            BookmarkKind::Pool => &mut self.pools,
        }
    }
}
