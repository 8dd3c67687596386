//! Row layouts and the presenter that ties them to the engine

use serde::Serialize;
use tracing::warn;

use crate::domain::bookmark::BookmarkSet;
use crate::shared::errors::TableError;
use crate::shared::utils::PriceClass;
use super::column::{Alignment, ColumnDefinition};
use super::engine::{EngineOptions, HeaderCell, PagerInfo, SortDirection, SortableTable, TableState};
use super::Record;

/// Viewport layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Narrow viewport, one composite block per record
    Compact,
    /// One cell per column
    #[default]
    Expanded,
}

/// Star affordance state for a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkToggle {
    pub id: String,
    pub checked: bool,
}

/// What a single cell displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Text { text: String },
    Amount { text: String },
    Change { text: String, class: PriceClass },
    Entity {
        title: String,
        subtitle: Option<String>,
        href: String,
        bookmark: Option<BookmarkToggle>,
    },
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        CellContent::Text { text: text.into() }
    }

    pub fn amount(text: impl Into<String>) -> Self {
        CellContent::Amount { text: text.into() }
    }

    /// Plain-text rendering
    pub fn display(&self) -> String {
        match self {
            CellContent::Text { text } | CellContent::Amount { text } => text.clone(),
            CellContent::Change { text, .. } => format!("{}%", text),
            CellContent::Entity { title, subtitle, bookmark, .. } => {
                let star = match bookmark {
                    Some(b) if b.checked => "★ ",
                    Some(_) => "☆ ",
                    None => "",
                };
                match subtitle {
                    Some(sub) => format!("{}{} {}", star, title, sub),
                    None => format!("{}{}", star, title),
                }
            }
        }
    }
}

/// One expanded-layout cell, aligned with a column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub column_id: String,
    pub align: Alignment,
    pub content: CellContent,
}

/// Labelled line inside a compact block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactLine {
    pub label: String,
    pub content: CellContent,
}

/// Compact-layout composite block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactBlock {
    pub heading: CellContent,
    pub lines: Vec<CompactLine>,
    /// Every block but the first on a page is separated from its predecessor
    pub spaced: bool,
}

/// Output of a row layout for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum RenderableRow {
    Expanded { id: String, cells: Vec<Cell> },
    Compact { id: String, block: CompactBlock },
}

impl RenderableRow {
    pub fn id(&self) -> &str {
        match self {
            RenderableRow::Expanded { id, .. } | RenderableRow::Compact { id, .. } => id,
        }
    }
}

/// Read-only context handed to layouts for one row
pub struct RowContext<'a> {
    pub headers: &'a [HeaderCell],
    pub bookmarks: &'a BookmarkSet,
    /// Position of the row on the current page
    pub index: usize,
}

impl RowContext<'_> {
    pub fn bookmark_toggle(&self, id: &str) -> BookmarkToggle {
        BookmarkToggle {
            id: id.to_string(),
            checked: self.bookmarks.contains(id),
        }
    }
}

/// Layout strategy: maps a record to a renderable row.
///
/// Implementations must be pure; they may run once per visible record per pass.
pub trait RowLayout<R> {
    fn render_row(&self, record: &R, ctx: &RowContext<'_>) -> RenderableRow;
}

/// Expanded layout built from per-column cell functions
pub struct ColumnCellsLayout<R> {
    cell_fns: Vec<Box<dyn Fn(&R, &RowContext<'_>) -> CellContent>>,
}

impl<R: Record> ColumnCellsLayout<R> {
    pub fn new() -> Self {
        Self { cell_fns: Vec::new() }
    }

    /// Append the cell for the next column
    pub fn cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&R, &RowContext<'_>) -> CellContent + 'static,
    {
        self.cell_fns.push(Box::new(f));
        self
    }
}

impl<R: Record> Default for ColumnCellsLayout<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RowLayout<R> for ColumnCellsLayout<R> {
    fn render_row(&self, record: &R, ctx: &RowContext<'_>) -> RenderableRow {
        let cells = ctx
            .headers
            .iter()
            .zip(self.cell_fns.iter())
            .map(|(header, f)| Cell {
                column_id: header.id.clone(),
                align: header.align,
                content: f(record, ctx),
            })
            .collect();
        RenderableRow::Expanded {
            id: record.id().to_string(),
            cells,
        }
    }
}

/// Rendered table for one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TableView {
    /// Upstream data has not arrived yet
    Loading,
    /// Data arrived and has no records
    Empty { headers: Vec<HeaderCell> },
    Rows {
        layout: LayoutMode,
        headers: Vec<HeaderCell>,
        rows: Vec<RenderableRow>,
        pager: PagerInfo,
    },
}

/// Full configuration surface of a data table
pub struct TableOptions<R> {
    pub columns: Vec<ColumnDefinition<R>>,
    pub default_column: String,
    pub default_direction: SortDirection,
    pub page_size: usize,
    pub pagination_enabled: bool,
    pub data: Vec<R>,
    pub compact_renderer: Box<dyn RowLayout<R>>,
    pub expanded_renderer: Box<dyn RowLayout<R>>,
    pub layout: LayoutMode,
}

/// Sortable table engine plus its two layout strategies
pub struct DataTable<R> {
    engine: SortableTable<R>,
    compact: Box<dyn RowLayout<R>>,
    expanded: Box<dyn RowLayout<R>>,
    layout: LayoutMode,
}

impl<R: Record> DataTable<R> {
    pub fn new(options: TableOptions<R>) -> Result<Self, TableError> {
        let mut engine = SortableTable::new(EngineOptions {
            columns: options.columns,
            default_column: options.default_column,
            default_direction: options.default_direction,
            page_size: options.page_size,
            pagination_enabled: options.pagination_enabled,
        })?;
        engine.set_data(options.data);

        Ok(Self {
            engine,
            compact: options.compact_renderer,
            expanded: options.expanded_renderer,
            layout: options.layout,
        })
    }

    pub fn engine(&self) -> &SortableTable<R> {
        &self.engine
    }

    pub fn state(&self) -> &TableState {
        self.engine.state()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub fn set_data(&mut self, records: Vec<R>) {
        self.engine.set_data(records);
    }

    pub fn click_header(&mut self, column_id: &str) -> Result<(), TableError> {
        self.engine.click_header(column_id)
    }

    pub fn sort_by(&mut self, column_id: &str, direction: SortDirection) -> Result<(), TableError> {
        self.engine.sort_by(column_id, direction)
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.engine.go_to_page(page)
    }

    /// Render the current page, or the loading state while upstream is loading
    pub fn render(&self, bookmarks: &BookmarkSet, loading: bool) -> TableView {
        if loading {
            return TableView::Loading;
        }

        let plan = self.engine.plan();
        if plan.is_empty() {
            return TableView::Empty { headers: plan.headers };
        }

        let layout: &dyn RowLayout<R> = match self.layout {
            LayoutMode::Compact => self.compact.as_ref(),
            LayoutMode::Expanded => self.expanded.as_ref(),
        };

        let rows = plan
            .rows
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let ctx = RowContext {
                    headers: &plan.headers,
                    bookmarks,
                    index,
                };
                let row = layout.render_row(record, &ctx);
                align_cells(row, &plan.headers)
            })
            .collect();

        TableView::Rows {
            layout: self.layout,
            headers: plan.headers,
            rows,
            pager: plan.pager,
        }
    }
}

/// Expanded rows carry exactly one cell per column
fn align_cells(row: RenderableRow, headers: &[HeaderCell]) -> RenderableRow {
    match row {
        RenderableRow::Expanded { id, mut cells } if cells.len() != headers.len() => {
            warn!(
                "Row {} rendered {} cells for {} columns",
                id,
                cells.len(),
                headers.len()
            );
            cells.truncate(headers.len());
            for header in &headers[cells.len()..] {
                cells.push(Cell {
                    column_id: header.id.clone(),
                    align: header.align,
                    content: CellContent::text(""),
                });
            }
            RenderableRow::Expanded { id, cells }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Pool {
        id: String,
        tvl: f64,
    }

    impl Record for Pool {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.id
        }
    }

    struct BlockLayout;

    impl RowLayout<Pool> for BlockLayout {
        fn render_row(&self, record: &Pool, ctx: &RowContext<'_>) -> RenderableRow {
            RenderableRow::Compact {
                id: record.id.clone(),
                block: CompactBlock {
                    heading: CellContent::Entity {
                        title: record.id.clone(),
                        subtitle: None,
                        href: format!("/pair/{}", record.id),
                        bookmark: Some(ctx.bookmark_toggle(&record.id)),
                    },
                    lines: vec![CompactLine {
                        label: "TVL".to_string(),
                        content: CellContent::amount(format!("{}", record.tvl)),
                    }],
                    spaced: ctx.index != 0,
                },
            }
        }
    }

    fn pools() -> Vec<Pool> {
        vec![
            Pool { id: "a".into(), tvl: 5.0 },
            Pool { id: "b".into(), tvl: 9.0 },
            Pool { id: "c".into(), tvl: 1.0 },
        ]
    }

    fn data_table(expanded: ColumnCellsLayout<Pool>, data: Vec<Pool>) -> DataTable<Pool> {
        DataTable::new(TableOptions {
            columns: vec![
                ColumnDefinition::text("id", "Id", |p: &Pool| Some(p.id.clone())),
                ColumnDefinition::numeric("tvl", "TVL", |p: &Pool| Some(p.tvl)),
            ],
            default_column: "tvl".to_string(),
            default_direction: SortDirection::Desc,
            page_size: 2,
            pagination_enabled: true,
            data,
            compact_renderer: Box::new(BlockLayout),
            expanded_renderer: Box::new(expanded),
            layout: LayoutMode::Expanded,
        })
        .unwrap()
    }

    fn two_cells() -> ColumnCellsLayout<Pool> {
        ColumnCellsLayout::new()
            .cell(|p: &Pool, _ctx: &RowContext<'_>| CellContent::text(p.id.clone()))
            .cell(|p: &Pool, _ctx: &RowContext<'_>| CellContent::amount(format!("{}", p.tvl)))
    }

    #[test]
    fn test_expanded_rows_align_with_columns() {
        let table = data_table(two_cells(), pools());
        let view = table.render(&BookmarkSet::new(), false);
        match view {
            TableView::Rows { rows, pager, .. } => {
                assert_eq!(pager.total_pages, 2);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].id(), "b");
                match &rows[0] {
                    RenderableRow::Expanded { cells, .. } => {
                        assert_eq!(cells.len(), 2);
                        assert_eq!(cells[0].column_id, "id");
                        assert_eq!(cells[1].column_id, "tvl");
                    }
                    other => panic!("unexpected row {:?}", other),
                }
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_short_layout_is_padded() {
        let short = ColumnCellsLayout::new()
            .cell(|p: &Pool, _ctx: &RowContext<'_>| CellContent::text(p.id.clone()));
        let table = data_table(short, pools());
        if let TableView::Rows { rows, .. } = table.render(&BookmarkSet::new(), false) {
            if let RenderableRow::Expanded { cells, .. } = &rows[0] {
                assert_eq!(cells.len(), 2);
                assert_eq!(cells[1].content, CellContent::text(""));
                return;
            }
        }
        panic!("expected expanded rows");
    }

    #[test]
    fn test_compact_layout_reads_bookmarks() {
        let mut table = data_table(two_cells(), pools());
        table.set_layout(LayoutMode::Compact);
        let mut bookmarks = BookmarkSet::new();
        bookmarks.add("c");
        table.go_to_page(1);

        match table.render(&bookmarks, false) {
            TableView::Rows { rows, layout, .. } => {
                assert_eq!(layout, LayoutMode::Compact);
                assert_eq!(rows.len(), 1);
                match &rows[0] {
                    RenderableRow::Compact { block, .. } => {
                        assert!(!block.spaced);
                        assert_eq!(block.heading.display(), "★ c");
                    }
                    other => panic!("unexpected row {:?}", other),
                }
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_loading_and_empty_states() {
        let table = data_table(two_cells(), Vec::new());
        assert_eq!(table.render(&BookmarkSet::new(), true), TableView::Loading);
        match table.render(&BookmarkSet::new(), false) {
            TableView::Empty { headers } => assert_eq!(headers.len(), 2),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_render_does_not_touch_state() {
        let table = data_table(two_cells(), pools());
        let before = table.state().clone();
        let first = table.render(&BookmarkSet::new(), false);
        let second = table.render(&BookmarkSet::new(), false);
        assert_eq!(first, second);
        assert_eq!(table.state(), &before);
    }
}
