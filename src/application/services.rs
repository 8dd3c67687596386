//! Application services and use cases

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::bookmark::{BookmarkKind, Bookmarks};
use crate::domain::pool::{pool_table_options, PoolRecord};
use crate::domain::position::{position_table_options, MyPositionsView, Position, PositionFetcher, PositionsDisplay, PositionsResult};
use crate::domain::services::DisplayServices;
use crate::domain::table::{DataTable, LayoutMode, TableView};
use crate::domain::token::{token_table_options, TokenList, TokenRecord, TokenResolver};
use crate::domain::wallet::WalletContext;
use crate::infrastructure::storage::{load_token_list, BookmarkFile};
use crate::shared::errors::AppError;
use crate::shared::i18n::{StaticTranslator, Translator};
use crate::shared::navigation::LinkBuilder;
use crate::shared::types::DashboardConfig;

/// Application root: owns the bookmark store and builds every table
pub struct DashboardService {
    config: DashboardConfig,
    services: DisplayServices,
    bookmarks: Bookmarks,
    bookmark_file: BookmarkFile,
}

impl DashboardService {
    /// Wire collaborators from config and load persisted bookmarks
    pub fn new(config: &DashboardConfig, wallet: Arc<dyn WalletContext>) -> Result<Self, AppError> {
        let translator: Arc<dyn Translator> = match &config.i18n.translations {
            Some(path) => Arc::new(StaticTranslator::from_json_file(path)?),
            None => Arc::new(StaticTranslator::english()),
        };
        let resolver: Arc<dyn TokenResolver> = match &config.data.token_list {
            Some(path) => Arc::new(load_token_list(path)?),
            None => Arc::new(TokenList::new("empty")),
        };
        let links = LinkBuilder::new(config.links.base_url.clone(), config.links.version);
        let services = DisplayServices::new(resolver, wallet, translator, links);

        let bookmark_file = BookmarkFile::new(&config.bookmarks.path);
        let bookmarks = bookmark_file.load()?;
        info!(
            "Dashboard ready: {} token and {} pool bookmarks",
            bookmarks.tokens.len(),
            bookmarks.pools.len()
        );

        Ok(Self {
            config: config.clone(),
            services,
            bookmarks,
            bookmark_file,
        })
    }

    pub fn services(&self) -> &DisplayServices {
        &self.services
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn token_table(&self, data: Vec<TokenRecord>, layout: LayoutMode) -> Result<DataTable<TokenRecord>, AppError> {
        let table = &self.config.table;
        let options = token_table_options(&self.services, data, table.rows_per_page, table.show_pagination, layout);
        Ok(DataTable::new(options)?)
    }

    pub fn pool_table(&self, data: Vec<PoolRecord>, layout: LayoutMode) -> Result<DataTable<PoolRecord>, AppError> {
        let table = &self.config.table;
        let options = pool_table_options(&self.services, data, table.rows_per_page, table.show_pagination, layout);
        Ok(DataTable::new(options)?)
    }

    pub fn position_table(&self, data: Vec<Position>, layout: LayoutMode) -> Result<DataTable<Position>, AppError> {
        Ok(DataTable::new(position_table_options(&self.services, data, layout))?)
    }

    pub fn render_tokens(&self, table: &DataTable<TokenRecord>, loading: bool) -> TableView {
        table.render(&self.bookmarks.tokens, loading)
    }

    pub fn render_pools(&self, table: &DataTable<PoolRecord>, loading: bool) -> TableView {
        table.render(&self.bookmarks.pools, loading)
    }

    pub fn add_bookmark(&mut self, kind: BookmarkKind, id: &str) -> Result<(), AppError> {
        self.bookmarks.get_mut(kind).add(id);
        self.persist()
    }

    pub fn remove_bookmark(&mut self, kind: BookmarkKind, id: &str) -> Result<(), AppError> {
        self.bookmarks.get_mut(kind).remove(id);
        self.persist()
    }

    /// Star click. Returns whether the id is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, kind: BookmarkKind, id: &str) -> Result<bool, AppError> {
        let checked = self.bookmarks.get_mut(kind).toggle(id);
        debug!("Bookmark {} {} -> {}", kind, id, checked);
        self.persist()?;
        Ok(checked)
    }

    fn persist(&self) -> Result<(), AppError> {
        self.bookmark_file.save(&self.bookmarks)?;
        Ok(())
    }

    /// Fetch the connected account's positions and fold them into `view`
    pub async fn refresh_positions(
        &self,
        view: &mut MyPositionsView,
        fetcher: &dyn PositionFetcher,
    ) -> PositionsDisplay {
        let account = self.services.wallet.account();
        let result = match &account {
            Some(address) => fetcher.fetch_positions(address).await,
            None => PositionsResult::default(),
        };
        view.update(account, &result)
    }
}
