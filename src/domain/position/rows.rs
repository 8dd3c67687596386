//! Position table columns and row layouts

use crate::domain::services::DisplayServices;
use crate::domain::table::{
    Alignment, CellContent, ColumnCellsLayout, ColumnDefinition, CompactBlock, CompactLine,
    LayoutMode, RenderableRow, RowContext, RowLayout, SortDirection, TableOptions,
};
use super::Position;

pub const DEFAULT_SORT_COLUMN: &str = "tokenId";

pub fn position_columns(services: &DisplayServices) -> Vec<ColumnDefinition<Position>> {
    vec![
        ColumnDefinition::integer("tokenId", services.t("tokenId"), |p: &Position| Some(u128::from(p.token_id))),
        ColumnDefinition::text("pair", services.t("pair"), |p: &Position| {
            Some(format!("{}/{}", p.token0, p.token1))
        }),
        ColumnDefinition::text("range", services.t("range"), |p: &Position| Some(range_text(p))),
        ColumnDefinition::integer("liquidity", services.t("liquidity"), |p: &Position| Some(p.liquidity))
            .align(Alignment::Right),
        ColumnDefinition::text("status", services.t("status"), |p: &Position| {
            Some(p.status().label_key().to_string())
        }),
    ]
}

/// Positions table: newest token id first, everything on one page
pub fn position_table_options(
    services: &DisplayServices,
    data: Vec<Position>,
    layout: LayoutMode,
) -> TableOptions<Position> {
    TableOptions {
        columns: position_columns(services),
        default_column: DEFAULT_SORT_COLUMN.to_string(),
        default_direction: SortDirection::Desc,
        page_size: data.len().max(1),
        pagination_enabled: false,
        data,
        compact_renderer: Box::new(PositionCompactLayout::new(services.clone())),
        expanded_renderer: Box::new(PositionExpandedLayout::new(services.clone())),
        layout,
    }
}

fn range_text(position: &Position) -> String {
    format!("{} ↔ {}", position.tick_lower, position.tick_upper)
}

fn position_heading(services: &DisplayServices, position: &Position) -> CellContent {
    CellContent::Entity {
        title: format!("{}/{}", position.token0, position.token1),
        subtitle: position.fee.map(|fee| format!("{}%", fee as f64 / 10_000.0)),
        href: services.href(&services.links.position_path(position.token_id)),
        bookmark: None,
    }
}

fn status_cell(services: &DisplayServices, position: &Position) -> CellContent {
    CellContent::text(services.t(position.status().label_key()))
}

pub struct PositionExpandedLayout {
    inner: ColumnCellsLayout<Position>,
}

impl PositionExpandedLayout {
    pub fn new(services: DisplayServices) -> Self {
        let status_services = services.clone();
        let inner = ColumnCellsLayout::new()
            .cell(|p: &Position, _: &RowContext<'_>| CellContent::text(format!("#{}", p.token_id)))
            .cell(move |p: &Position, _: &RowContext<'_>| position_heading(&services, p))
            .cell(|p: &Position, _: &RowContext<'_>| CellContent::text(range_text(p)))
            .cell(|p: &Position, _: &RowContext<'_>| CellContent::amount(p.liquidity.to_string()))
            .cell(move |p: &Position, _: &RowContext<'_>| status_cell(&status_services, p));
        Self { inner }
    }
}

impl RowLayout<Position> for PositionExpandedLayout {
    fn render_row(&self, position: &Position, ctx: &RowContext<'_>) -> RenderableRow {
        self.inner.render_row(position, ctx)
    }
}

pub struct PositionCompactLayout {
    services: DisplayServices,
}

impl PositionCompactLayout {
    pub fn new(services: DisplayServices) -> Self {
        Self { services }
    }
}

impl RowLayout<Position> for PositionCompactLayout {
    fn render_row(&self, position: &Position, ctx: &RowContext<'_>) -> RenderableRow {
        let s = &self.services;
        RenderableRow::Compact {
            id: position.token_id.to_string(),
            block: CompactBlock {
                heading: position_heading(s, position),
                lines: vec![
                    CompactLine {
                        label: s.t("tokenId"),
                        content: CellContent::text(format!("#{}", position.token_id)),
                    },
                    CompactLine {
                        label: s.t("range"),
                        content: CellContent::text(range_text(position)),
                    },
                    CompactLine {
                        label: s.t("liquidity"),
                        content: CellContent::amount(position.liquidity.to_string()),
                    },
                    CompactLine {
                        label: s.t("status"),
                        content: status_cell(s, position),
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

    #[test]
    fn test_positions_sorted_by_token_id_desc() {
        let data = vec![
            Position::new(3, 10, false, "WETH", "USDC"),
            Position::new(11, 0, false, "WBTC", "USDC"),
            Position::new(7, 5, true, "DAI", "USDC"),
        ];
        let table = DataTable::new(position_table_options(&services(), data, LayoutMode::Expanded)).unwrap();
        let ids: Vec<u64> = table.engine().sorted().map(|p| p.token_id).collect();
        assert_eq!(ids, vec![11, 7, 3]);
        assert!(!table.engine().pagination_enabled());
    }

    #[test]
    fn test_liquidity_sorts_exactly_beyond_f64_precision() {
        let base = 1_000_000_000_000_000_000_000u128;
        let data = vec![
            Position::new(1, base, false, "WETH", "USDC"),
            Position::new(2, base + 1000, false, "WETH", "USDC"),
        ];
        let mut table = DataTable::new(position_table_options(&services(), data, LayoutMode::Expanded)).unwrap();

        table.sort_by("liquidity", SortDirection::Desc).unwrap();
        let ids: Vec<u64> = table.engine().sorted().map(|p| p.token_id).collect();
        assert_eq!(ids, vec![2, 1]);

        table.sort_by("liquidity", SortDirection::Asc).unwrap();
        let ids: Vec<u64> = table.engine().sorted().map(|p| p.token_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_positions_table_builds() {
        let table = DataTable::new(position_table_options(&services(), Vec::new(), LayoutMode::Expanded)).unwrap();
        assert!(matches!(table.render(&BookmarkSet::new(), false), TableView::Empty { .. }));
    }

    #[test]
    fn test_expanded_row_cells() {
        let position = Position::new(42, 0, false, "WMATIC", "USDC").with_range(500, -60, 60);
        let table = DataTable::new(position_table_options(&services(), vec![position], LayoutMode::Expanded)).unwrap();
        let rows = match table.render(&BookmarkSet::new(), false) {
            TableView::Rows { rows, .. } => rows,
            other => panic!("unexpected view {:?}", other),
        };

        match &rows[0] {
            RenderableRow::Expanded { id, cells } => {
                assert_eq!(id, "42");
                assert_eq!(cells.len(), 5);
                assert_eq!(cells[0].content, CellContent::text("#42"));
                assert_eq!(cells[1].content.display(), "WMATIC/USDC 0.05%");
                match &cells[1].content {
                    CellContent::Entity { href, .. } => assert_eq!(href, "https://dash.example/pool/42"),
                    other => panic!("unexpected cell {:?}", other),
                }
                assert_eq!(cells[2].content, CellContent::text("-60 ↔ 60"));
                assert_eq!(cells[4].content, CellContent::text("Closed"));
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn test_compact_row_lines() {
        let layout = PositionCompactLayout::new(services());
        let bookmarks = BookmarkSet::new();
        let ctx = RowContext { headers: &[], bookmarks: &bookmarks, index: 2 };
        match layout.render_row(&Position::new(5, 99, true, "A", "B"), &ctx) {
            RenderableRow::Compact { block, .. } => {
                assert!(block.spaced);
                assert_eq!(block.lines[2].content, CellContent::amount("99"));
                assert_eq!(block.lines[3].content, CellContent::text("Farming"));
            }
            other => panic!("unexpected row {:?}", other),
        }
    }
}
