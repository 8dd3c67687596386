//! Token table columns and row layouts

use crate::domain::services::DisplayServices;
use crate::domain::table::{
    Alignment, Cell, CellContent, ColumnDefinition, CompactBlock, CompactLine, LayoutMode, RenderableRow,
    RowContext, RowLayout, SortDirection, TableOptions,
};
use crate::shared::types::{Address, Token};
use crate::shared::utils::{format_price_change, format_usd, price_class};
use super::TokenRecord;

/// Column sorted by default
pub const DEFAULT_SORT_COLUMN: &str = "liquidity";

/// Token table columns: name, price, 24h %, 24h volume, liquidity
pub fn token_columns(services: &DisplayServices) -> Vec<ColumnDefinition<TokenRecord>> {
    vec![
        ColumnDefinition::text("name", services.t("name"), |t: &TokenRecord| Some(t.name.clone())),
        ColumnDefinition::numeric("price", services.t("price"), |t: &TokenRecord| t.price_usd),
        ColumnDefinition::numeric("change24h", services.t("24hPer"), |t: &TokenRecord| {
            t.price_change_usd
        }),
        ColumnDefinition::numeric("volume24h", services.t("24hVol"), |t: &TokenRecord| {
            t.one_day_volume_usd
        }),
        ColumnDefinition::numeric("liquidity", services.t("liquidity"), |t: &TokenRecord| {
            t.total_liquidity_usd
        })
        .align(Alignment::Right),
    ]
}

/// Token table: liquidity descending, both layouts wired to `services`
pub fn token_table_options(
    services: &DisplayServices,
    data: Vec<TokenRecord>,
    page_size: usize,
    pagination_enabled: bool,
    layout: LayoutMode,
) -> TableOptions<TokenRecord> {
    TableOptions {
        columns: token_columns(services),
        default_column: DEFAULT_SORT_COLUMN.to_string(),
        default_direction: SortDirection::Desc,
        page_size,
        pagination_enabled,
        data,
        compact_renderer: Box::new(TokenCompactLayout::new(services.clone())),
        expanded_renderer: Box::new(TokenExpandedLayout::new(services.clone())),
        layout,
    }
}

/// Name cell shared by both layouts: star toggle, name, symbol and page link
fn token_heading(services: &DisplayServices, token: &TokenRecord, ctx: &RowContext<'_>) -> CellContent {
    let resolved = resolve(services, token);
    let address = resolved
        .as_ref()
        .map(|t| t.address.to_string())
        .unwrap_or_else(|| token.id.clone());
    let symbol = if token.symbol.is_empty() {
        resolved.and_then(|t| t.symbol).unwrap_or_default()
    } else {
        token.symbol.clone()
    };

    CellContent::Entity {
        title: token.name.clone(),
        subtitle: (!symbol.is_empty()).then(|| format!("({})", symbol)),
        href: services.href(&services.links.token_path(&address)),
        bookmark: Some(ctx.bookmark_toggle(&token.id)),
    }
}

/// Resolve the record's address, offering the record itself as the fallback candidate
fn resolve(services: &DisplayServices, token: &TokenRecord) -> Option<Token> {
    let address: Address = token.id.parse().ok()?;
    let chain_id = services.wallet.current_chain_id();
    let candidate = Token::new(
        chain_id,
        address,
        token.decimals_u8(),
        (!token.symbol.is_empty()).then(|| token.symbol.clone()),
        (!token.name.is_empty()).then(|| token.name.clone()),
    );
    Some(services.resolver.resolve_token(&address, chain_id, &[candidate]))
}

fn change_cell(token: &TokenRecord) -> CellContent {
    let change = token.price_change_usd.unwrap_or(0.0);
    CellContent::Change {
        text: format_price_change(change),
        class: price_class(change),
    }
}

/// Desktop layout: one cell per token column
pub struct TokenExpandedLayout {
    services: DisplayServices,
}

impl TokenExpandedLayout {
    pub fn new(services: DisplayServices) -> Self {
        Self { services }
    }
}

impl RowLayout<TokenRecord> for TokenExpandedLayout {
    fn render_row(&self, token: &TokenRecord, ctx: &RowContext<'_>) -> RenderableRow {
        let contents = vec![
            token_heading(&self.services, token, ctx),
            CellContent::amount(format_usd(token.price_usd)),
            change_cell(token),
            CellContent::amount(format_usd(token.one_day_volume_usd)),
            CellContent::amount(format_usd(token.total_liquidity_usd)),
        ];

        RenderableRow::Expanded {
            id: token.id.clone(),
            cells: ctx
                .headers
                .iter()
                .zip(contents)
                .map(|(header, content)| Cell {
                    column_id: header.id.clone(),
                    align: header.align,
                    content,
                })
                .collect(),
        }
    }
}

/// Mobile layout: heading plus labelled stat lines
pub struct TokenCompactLayout {
    services: DisplayServices,
}

impl TokenCompactLayout {
    pub fn new(services: DisplayServices) -> Self {
        Self { services }
    }
}

impl RowLayout<TokenRecord> for TokenCompactLayout {
    fn render_row(&self, token: &TokenRecord, ctx: &RowContext<'_>) -> RenderableRow {
        let s = &self.services;
        let lines = vec![
            CompactLine {
                label: s.t("price"),
                content: CellContent::amount(format_usd(token.price_usd)),
            },
            CompactLine {
                label: s.t("24hPer"),
                content: change_cell(token),
            },
            CompactLine {
                label: s.t("24hVol"),
                content: CellContent::amount(format_usd(token.one_day_volume_usd)),
            },
            CompactLine {
                label: s.t("liquidity"),
                content: CellContent::amount(format_usd(token.total_liquidity_usd)),
            },
        ];

        RenderableRow::Compact {
            id: token.id.clone(),
            block: CompactBlock {
                heading: token_heading(s, token, ctx),
                lines,
                spaced: ctx.index != 0,
            },
        }
    }
}
