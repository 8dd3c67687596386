//! CLI commands and handlers
use clap::{Args, Parser, Subcommand};
use crate::application::report::{positions_notice, render_table_text, PositionsReport, TableReport};
use crate::application::services::DashboardService;
use crate::domain::bookmark::{BookmarkKind, BookmarkSet};
use crate::domain::position::{MyPositionsView, PositionFilters, PositionsDisplay};
use crate::domain::table::{DataTable, LayoutMode, Record, SortDirection, TableView};
use crate::domain::wallet::StaticWallet;
use crate::infrastructure::storage::{load_pools, load_tokens, SnapshotPositionFetcher};
use crate::shared::errors::AppError;
use crate::shared::types::{Address, AnalyticsVersion, DashboardConfig};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "poolboard")]
#[command(about = "Sortable, paginated analytics tables for a DEX dashboard")]
pub struct Cli {
    /// Path to config file (defaults to Dashboard.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the token table
    Tokens(TableArgs),

    /// Show the pool table
    Pools(TableArgs),

    /// Show a wallet's liquidity positions
    Positions {
        /// Position snapshot file (JSON map of owner -> positions)
        #[arg(long)]
        data: String,

        /// Connected account; omit to view as a disconnected wallet
        #[arg(long)]
        account: Option<String>,

        #[arg(long)]
        hide_closed: bool,

        #[arg(long)]
        hide_farming: bool,

        /// Use the compact (mobile) layout
        #[arg(long)]
        compact: bool,

        /// Print a JSON report instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Manage bookmarked tokens and pools
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Bookmark a token or pool
    Add { kind: BookmarkKind, id: String },

    /// Remove a bookmark
    Remove { kind: BookmarkKind, id: String },

    /// Flip a bookmark, like clicking its star
    Toggle { kind: BookmarkKind, id: String },

    /// List bookmarks, optionally of one kind
    List { kind: Option<BookmarkKind> },
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Snapshot file (JSON array, or the indexer's `{"data": {...}}` envelope)
    #[arg(long)]
    pub data: String,

    /// Column to sort by. Without --asc/--desc this behaves like a header click.
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    #[arg(long)]
    pub desc: bool,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides config)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Show every row on one page
    #[arg(long)]
    pub no_pagination: bool,

    /// Analytics version used in links, v2 or v3 (overrides config)
    #[arg(long)]
    pub analytics: Option<AnalyticsVersion>,

    /// Use the compact (mobile) layout
    #[arg(long)]
    pub compact: bool,

    /// Print a JSON report instead of a text table
    #[arg(long)]
    pub json: bool,
}

impl TableArgs {
    fn direction(&self) -> Option<SortDirection> {
        match (self.asc, self.desc) {
            (true, _) => Some(SortDirection::Asc),
            (_, true) => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// CLI flags take priority over the config file
    fn apply_overrides(&self, mut config: DashboardConfig) -> Result<DashboardConfig, AppError> {
        if let Some(rows) = self.rows {
            if rows == 0 {
                return Err(AppError::ConfigError("--rows must be positive".to_string()));
            }
            config.table.rows_per_page = rows;
        }
        if self.no_pagination {
            config.table.show_pagination = false;
        }
        if let Some(version) = self.analytics {
            config.links.version = version;
        }
        Ok(config)
    }
}

fn layout_mode(compact: bool) -> LayoutMode {
    if compact {
        LayoutMode::Compact
    } else {
        LayoutMode::Expanded
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute the selected command
    pub async fn execute(command: Commands, config: DashboardConfig) -> Result<(), AppError> {
        match command {
            Commands::Tokens(args) => Self::execute_tokens_command(args, config).await,
            Commands::Pools(args) => Self::execute_pools_command(args, config).await,
            Commands::Positions { data, account, hide_closed, hide_farming, compact, json } => {
                let filters = PositionFilters { hide_closed, hide_farming };
                Self::execute_positions_command(data, account, filters, compact, json, config).await
            }
            Commands::Bookmark { action } => Self::execute_bookmark_command(action, config).await,
        }
    }

    /// Execute tokens command
    async fn execute_tokens_command(args: TableArgs, config: DashboardConfig) -> Result<(), AppError> {
        let config = args.apply_overrides(config)?;
        let service = Self::disconnected_service(&config)?;

        let tokens = load_tokens(&args.data)?;
        let mut table = service.token_table(tokens, layout_mode(args.compact))?;
        Self::apply_table_args(&mut table, &args)?;

        let view = service.render_tokens(&table, false);
        Self::print_table("tokens", view, args.json, &service)
    }

    /// Execute pools command
    async fn execute_pools_command(args: TableArgs, config: DashboardConfig) -> Result<(), AppError> {
        let config = args.apply_overrides(config)?;
        let service = Self::disconnected_service(&config)?;

        let pools = load_pools(&args.data)?;
        let mut table = service.pool_table(pools, layout_mode(args.compact))?;
        Self::apply_table_args(&mut table, &args)?;

        let view = service.render_pools(&table, false);
        Self::print_table("pools", view, args.json, &service)
    }

    /// Execute positions command
    async fn execute_positions_command(
        data: String,
        account: Option<String>,
        filters: PositionFilters,
        compact: bool,
        json: bool,
        config: DashboardConfig,
    ) -> Result<(), AppError> {
        let account = account.map(|a| a.parse::<Address>()).transpose()?;
        let chain = config.chain.default_chain_id;
        let wallet = Arc::new(StaticWallet::new(account, account.map(|_| chain), chain));
        let service = DashboardService::new(&config, wallet)?;

        let fetcher = SnapshotPositionFetcher::from_file(&data)?;
        let mut view = MyPositionsView::with_filters(filters);
        let display = service.refresh_positions(&mut view, &fetcher).await;

        if json {
            let report = PositionsReport::new(account.map(|a| a.to_string()), display);
            println!("{}", report.to_json()?);
            return Ok(());
        }

        let translator = service.services().translator.as_ref();
        if let Some(notice) = positions_notice(&display, translator) {
            println!("{}", notice);
            return Ok(());
        }

        if let PositionsDisplay::Positions { positions, newest_token_id } = display {
            info!("Showing {} positions, newest #{:?}", positions.len(), newest_token_id);
            let table = service.position_table(positions, layout_mode(compact))?;
            println!("{}", service.services().t("myLiquidityPools"));
            println!("{}", render_table_text(&table.render(&BookmarkSet::new(), false), translator));
        }
        Ok(())
    }

    /// Execute bookmark command
    async fn execute_bookmark_command(action: BookmarkAction, config: DashboardConfig) -> Result<(), AppError> {
        let mut service = Self::disconnected_service(&config)?;

        match action {
            BookmarkAction::Add { kind, id } => {
                service.add_bookmark(kind, &id)?;
                info!("Bookmarked {} {}", kind, id);
            }
            BookmarkAction::Remove { kind, id } => {
                service.remove_bookmark(kind, &id)?;
                info!("Removed {} bookmark {}", kind, id);
            }
            BookmarkAction::Toggle { kind, id } => {
                let checked = service.toggle_bookmark(kind, &id)?;
                println!("{} {} {}", if checked { "★" } else { "☆" }, kind, id);
            }
            BookmarkAction::List { kind } => {
                let kinds = match kind {
                    Some(kind) => vec![kind],
                    None => vec![BookmarkKind::Token, BookmarkKind::Pool],
                };
                for kind in kinds {
                    println!("{}:", kind);
                    for id in service.bookmarks().get(kind).sorted_ids() {
                        println!("  {}", id);
                    }
                }
            }
        }
        Ok(())
    }

    fn disconnected_service(config: &DashboardConfig) -> Result<DashboardService, AppError> {
        let wallet = Arc::new(StaticWallet::disconnected(config.chain.default_chain_id));
        DashboardService::new(config, wallet)
    }

    /// Sort and page a table as requested on the command line
    fn apply_table_args<R: Record>(table: &mut DataTable<R>, args: &TableArgs) -> Result<(), AppError> {
        match (&args.sort, args.direction()) {
            (Some(column), Some(direction)) => table.sort_by(column, direction)?,
            (Some(column), None) => table.click_header(column)?,
            (None, Some(direction)) => {
                let active = table.state().active_column.clone();
                table.sort_by(&active, direction)?
            }
            (None, None) => {}
        }

        let requested = args.page.saturating_sub(1);
        let page = table.go_to_page(requested);
        if page != requested {
            warn!("Page {} is out of range, showing page {}", args.page, page + 1);
        }
        Ok(())
    }

    fn print_table(name: &str, view: TableView, json: bool, service: &DashboardService) -> Result<(), AppError> {
        if json {
            println!("{}", TableReport::new(name, view).to_json()?);
        } else {
            println!("{}", render_table_text(&view, service.services().translator.as_ref()));
        }
        Ok(())
    }
}
