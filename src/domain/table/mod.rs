//! Table domain - generic sorting, pagination and row layouts

mod column;
mod engine;
mod layout;

pub use column::{Alignment, ColumnDefinition, SortKey};
pub use engine::{EngineOptions, HeaderCell, PagerInfo, RenderPlan, SortDirection, SortableTable, TableState};
pub use layout::{
    BookmarkToggle, Cell, CellContent, ColumnCellsLayout, CompactBlock, CompactLine, DataTable,
    LayoutMode, RenderableRow, RowContext, RowLayout, TableOptions, TableView,
};

/// Minimal capability a record needs to be shown in a table
pub trait Record {
    /// Stable unique identifier, also the bookmark key
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;
}
