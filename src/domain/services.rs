//! Collaborators shared by every row layout

use std::sync::Arc;

use crate::domain::token::TokenResolver;
use crate::domain::wallet::WalletContext;
use crate::shared::i18n::Translator;
use crate::shared::navigation::{LinkBuilder, Navigator};

/// Read-only services a layout consults while rendering a row
#[derive(Clone)]
pub struct DisplayServices {
    pub resolver: Arc<dyn TokenResolver>,
    pub wallet: Arc<dyn WalletContext>,
    pub translator: Arc<dyn Translator>,
    pub links: LinkBuilder,
}

impl DisplayServices {
    pub fn new(
        resolver: Arc<dyn TokenResolver>,
        wallet: Arc<dyn WalletContext>,
        translator: Arc<dyn Translator>,
        links: LinkBuilder,
    ) -> Self {
        Self {
            resolver,
            wallet,
            translator,
            links,
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// Absolute URL for a dashboard path
    pub fn href(&self, path: &str) -> String {
        self.links.build_link(path)
    }
}
