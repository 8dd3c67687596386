//! Pool table columns and row layouts

use crate::domain::services::DisplayServices;
use crate::domain::table::{
    Alignment, CellContent, ColumnCellsLayout, ColumnDefinition, CompactBlock, CompactLine,
    LayoutMode, RenderableRow, RowContext, RowLayout, SortDirection, TableOptions,
};
use crate::shared::utils::{format_number, format_usd};
use super::PoolRecord;

pub const DEFAULT_SORT_COLUMN: &str = "tvl";

pub fn pool_columns(services: &DisplayServices) -> Vec<ColumnDefinition<PoolRecord>> {
    vec![
        ColumnDefinition::text("pair", services.t("pair"), |p: &PoolRecord| Some(p.pair_name.clone())),
        ColumnDefinition::numeric("tvl", services.t("tvl"), |p: &PoolRecord| p.tvl_usd),
        ColumnDefinition::numeric("volume24h", services.t("24hVol"), |p: &PoolRecord| p.one_day_volume_usd),
        ColumnDefinition::numeric("fees24h", services.t("24hFees"), |p: &PoolRecord| p.one_day_fees_usd),
        ColumnDefinition::numeric("apr", services.t("apr"), |p: &PoolRecord| p.apr).align(Alignment::Right),
    ]
}

/// Pool table: TVL descending
pub fn pool_table_options(
    services: &DisplayServices,
    data: Vec<PoolRecord>,
    page_size: usize,
    pagination_enabled: bool,
    layout: LayoutMode,
) -> TableOptions<PoolRecord> {
    TableOptions {
        columns: pool_columns(services),
        default_column: DEFAULT_SORT_COLUMN.to_string(),
        default_direction: SortDirection::Desc,
        page_size,
        pagination_enabled,
        data,
        compact_renderer: Box::new(PoolCompactLayout::new(services.clone())),
        expanded_renderer: Box::new(PoolExpandedLayout::new(services.clone())),
        layout,
    }
}

fn pair_heading(services: &DisplayServices, pool: &PoolRecord, ctx: &RowContext<'_>) -> CellContent {
    CellContent::Entity {
        title: pool.pair_name.clone(),
        subtitle: pool.fee_label(),
        href: services.href(&services.links.pair_path(&pool.id)),
        bookmark: Some(ctx.bookmark_toggle(&pool.id)),
    }
}

fn apr_text(pool: &PoolRecord) -> String {
    match pool.apr {
        Some(apr) => format!("{}%", format_number(Some(apr))),
        None => "-".to_string(),
    }
}

/// Desktop layout, one cell function per pool column
pub struct PoolExpandedLayout {
    inner: ColumnCellsLayout<PoolRecord>,
}

impl PoolExpandedLayout {
    pub fn new(services: DisplayServices) -> Self {
        let inner = ColumnCellsLayout::new()
            .cell(move |pool: &PoolRecord, ctx: &RowContext<'_>| pair_heading(&services, pool, ctx))
            .cell(|pool: &PoolRecord, _: &RowContext<'_>| CellContent::amount(format_usd(pool.tvl_usd)))
            .cell(|pool: &PoolRecord, _: &RowContext<'_>| {
                CellContent::amount(format_usd(pool.one_day_volume_usd))
            })
            .cell(|pool: &PoolRecord, _: &RowContext<'_>| {
                CellContent::amount(format_usd(pool.one_day_fees_usd))
            })
            .cell(|pool: &PoolRecord, _: &RowContext<'_>| CellContent::text(apr_text(pool)));
        Self { inner }
    }
}

impl RowLayout<PoolRecord> for PoolExpandedLayout {
    fn render_row(&self, pool: &PoolRecord, ctx: &RowContext<'_>) -> RenderableRow {
        self.inner.render_row(pool, ctx)
    }
}

/// Mobile layout
pub struct PoolCompactLayout {
    services: DisplayServices,
}

impl PoolCompactLayout {
    pub fn new(services: DisplayServices) -> Self {
        Self { services }
    }
}

impl RowLayout<PoolRecord> for PoolCompactLayout {
    fn render_row(&self, pool: &PoolRecord, ctx: &RowContext<'_>) -> RenderableRow {
        let s = &self.services;
        RenderableRow::Compact {
            id: pool.id.clone(),
            block: CompactBlock {
                heading: pair_heading(s, pool, ctx),
                lines: vec![
                    CompactLine {
                        label: s.t("tvl"),
                        content: CellContent::amount(format_usd(pool.tvl_usd)),
                    },
                    CompactLine {
                        label: s.t("24hVol"),
                        content: CellContent::amount(format_usd(pool.one_day_volume_usd)),
                    },
                    CompactLine {
                        label: s.t("24hFees"),
                        content: CellContent::amount(format_usd(pool.one_day_fees_usd)),
                    },
                    CompactLine {
                        label: s.t("apr"),
                        content: CellContent::text(apr_text(pool)),
                    },
                ],
                spaced: ctx.index != 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::bookmark::BookmarkSet;
    use crate::domain::pool::PoolToken;
    use crate::domain::table::{DataTable, TableView};
    use crate::domain::token::TokenList;
    use crate::domain::wallet::StaticWallet;
    use crate::shared::i18n::StaticTranslator;
    use crate::shared::navigation::LinkBuilder;
    use crate::shared::types::{AnalyticsVersion, ChainId};

    fn services() -> DisplayServices {
        DisplayServices::new(
            Arc::new(TokenList::new("empty")),
            Arc::new(StaticWallet::disconnected(ChainId::MATIC)),
            Arc::new(StaticTranslator::english()),
            LinkBuilder::new("https://dash.example", AnalyticsVersion::V3),
        )
    }

    fn pool(id: &str, tvl: Option<f64>, apr: Option<f64>) -> PoolRecord {
        PoolRecord {
            id: id.to_string(),
            pair_name: "WETH/USDC".to_string(),
            token0: PoolToken { id: "0x1".into(), symbol: "WETH".into(), name: String::new() },
            token1: PoolToken { id: "0x2".into(), symbol: "USDC".into(), name: String::new() },
            fee_tier: Some(3000),
            tvl_usd: tvl,
            one_day_volume_usd: Some(10.0),
            one_day_fees_usd: None,
            apr,
        }
    }

    #[test]
    fn test_pool_table_sorts_by_tvl_desc() {
        let services = services();
        let data = vec![pool("p1", Some(5.0), None), pool("p2", None, None), pool("p3", Some(8.0), Some(4.2))];
        let table = DataTable::new(pool_table_options(&services, data, 10, true, LayoutMode::Expanded)).unwrap();
        let ids: Vec<&str> = table.engine().sorted().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
    }

    #[test]
    fn test_pool_expanded_cells() {
        let services = services();
        let mut bookmarks = BookmarkSet::new();
        bookmarks.add("p3");
        let table = DataTable::new(pool_table_options(
            &services,
            vec![pool("p3", Some(8.0), Some(4.2))],
            10,
            true,
            LayoutMode::Expanded,
        ))
        .unwrap();

        let rows = match table.render(&bookmarks, false) {
            TableView::Rows { rows, .. } => rows,
            other => panic!("unexpected view {:?}", other),
        };
        match &rows[0] {
            RenderableRow::Expanded { cells, .. } => {
                assert_eq!(cells.len(), 5);
                assert_eq!(cells[0].content.display(), "★ WETH/USDC 0.3%");
                assert_eq!(cells[3].content, CellContent::amount("$0"));
                assert_eq!(cells[4].content, CellContent::text("4.20%"));
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn test_pool_compact_lines() {
        let services = services();
        let layout = PoolCompactLayout::new(services);
        let bookmarks = BookmarkSet::new();
        let ctx = RowContext { headers: &[], bookmarks: &bookmarks, index: 1 };
        match layout.render_row(&pool("p1", Some(1500.0), None), &ctx) {
            RenderableRow::Compact { block, .. } => {
                assert!(block.spaced);
                assert_eq!(block.lines[0].label, "TVL");
                assert_eq!(block.lines[0].content, CellContent::amount("$1,500.00"));
                assert_eq!(block.lines[3].content, CellContent::text("-"));
            }
            other => panic!("unexpected row {:?}", other),
        }
    }
}
