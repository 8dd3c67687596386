//! Link construction for analytics pages

use crate::shared::types::AnalyticsVersion;

/// Builds links to dashboard pages. Pure string construction.
pub trait Navigator {
    fn build_link(&self, path: &str) -> String;
}

/// Navigator rooted at a fixed base URL
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    version: AnalyticsVersion,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>, version: AnalyticsVersion) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, version }
    }

    pub fn version(&self) -> AnalyticsVersion {
        self.version
    }

    /// `/analytics/{version}/token/{address}`
    pub fn token_path(&self, address: &str) -> String {
        format!("/analytics/{}/token/{}", self.version.as_str(), address)
    }

    /// `/analytics/{version}/pair/{id}`
    pub fn pair_path(&self, id: &str) -> String {
        format!("/analytics/{}/pair/{}", self.version.as_str(), id)
    }

    /// `/pool/{token_id}`
    pub fn position_path(&self, token_id: u64) -> String {
        format!("/pool/{}", token_id)
    }
}

impl Navigator for LinkBuilder {
    fn build_link(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
