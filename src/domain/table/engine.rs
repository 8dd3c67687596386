//! Sortable, paginated table engine

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shared::errors::TableError;
use super::column::{Alignment, ColumnDefinition, SortKey};
use super::Record;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Mutable view state of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub active_column: String,
    pub direction: SortDirection,
    pub current_page: usize,
}

/// Engine configuration
#[derive(Debug)]
pub struct EngineOptions<R> {
    pub columns: Vec<ColumnDefinition<R>>,
    pub default_column: String,
    pub default_direction: SortDirection,
    pub page_size: usize,
    pub pagination_enabled: bool,
}

/// Header metadata for one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub align: Alignment,
    pub numeric: bool,
    pub is_active: bool,
    /// Set only on the active column
    pub direction: Option<SortDirection>,
}

/// Pager metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagerInfo {
    pub enabled: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_rows: usize,
}

/// What a render pass should show
#[derive(Debug)]
pub struct RenderPlan<'a, R> {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<&'a R>,
    pub pager: PagerInfo,
}

impl<R> RenderPlan<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Owns sort column, direction and page; derives the visible slice of a dataset.
///
/// Records are held in input order and never mutated. Sorting produces an index
/// permutation, recomputed on every dataset replacement or sort change.
#[derive(Debug)]
pub struct SortableTable<R> {
    columns: Vec<ColumnDefinition<R>>,
    state: TableState,
    page_size: usize,
    pagination_enabled: bool,
    records: Vec<R>,
    order: Vec<usize>,
}

impl<R: Record> SortableTable<R> {
    /// Validate options and build an empty table
    pub fn new(options: EngineOptions<R>) -> Result<Self, TableError> {
        if options.columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        if options.page_size == 0 {
            return Err(TableError::InvalidPageSize(options.page_size));
        }
        for (i, column) in options.columns.iter().enumerate() {
            if options.columns[..i].iter().any(|c| c.id == column.id) {
                return Err(TableError::DuplicateColumn(column.id.clone()));
            }
        }
        if !options.columns.iter().any(|c| c.id == options.default_column) {
            return Err(TableError::UnknownColumn(options.default_column));
        }

        debug!(
            "Table created: {} columns, sort {} {}, page size {}",
            options.columns.len(),
            options.default_column,
            options.default_direction.as_str(),
            options.page_size
        );

        Ok(Self {
            columns: options.columns,
            state: TableState {
                active_column: options.default_column,
                direction: options.default_direction,
                current_page: 0,
            },
            page_size: options.page_size,
            pagination_enabled: options.pagination_enabled,
            records: Vec::new(),
            order: Vec::new(),
        })
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn columns(&self) -> &[ColumnDefinition<R>] {
        &self.columns
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pagination_enabled(&self) -> bool {
        self.pagination_enabled
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `ceil(len / page_size)`, never below 1
    pub fn total_pages(&self) -> usize {
        if !self.pagination_enabled {
            return 1;
        }
        self.records.len().div_ceil(self.page_size).max(1)
    }

    /// Replace the dataset, keeping sort state and clamping the page
    pub fn set_data(&mut self, records: Vec<R>) {
        self.records = records;
        self.resort();

        let last_page = self.total_pages() - 1;
        if self.state.current_page > last_page {
            debug!(
                "Page {} out of range after data update, clamping to {}",
                self.state.current_page, last_page
            );
            self.state.current_page = last_page;
        }
    }

    /// Header click: flip the active column, or activate another column ascending on page 0
    pub fn click_header(&mut self, column_id: &str) -> Result<(), TableError> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return Err(TableError::UnknownColumn(column_id.to_string()));
        }

        if self.state.active_column == column_id {
            self.state.direction = self.state.direction.flip();
        } else {
            self.state.active_column = column_id.to_string();
            self.state.direction = SortDirection::Asc;
            self.state.current_page = 0;
        }
        self.resort();
        Ok(())
    }

    /// Set sort column and direction directly; resets to page 0
    pub fn sort_by(&mut self, column_id: &str, direction: SortDirection) -> Result<(), TableError> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return Err(TableError::UnknownColumn(column_id.to_string()));
        }
        self.state.active_column = column_id.to_string();
        self.state.direction = direction;
        self.state.current_page = 0;
        self.resort();
        Ok(())
    }

    /// Pager click, clamped to `[0, total_pages - 1]`. Returns the page actually selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.state.current_page = page.min(self.total_pages() - 1);
        self.state.current_page
    }

    /// Every record in sorted order
    pub fn sorted(&self) -> impl Iterator<Item = &R> + '_ {
        self.order.iter().map(move |&i| &self.records[i])
    }

    /// Records on the current page in sorted order
    pub fn visible_rows(&self) -> Vec<&R> {
        if !self.pagination_enabled {
            return self.sorted().collect();
        }
        let start = self.state.current_page * self.page_size;
        self.order
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn headers(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| {
                let is_active = column.id == self.state.active_column;
                HeaderCell {
                    id: column.id.clone(),
                    label: column.label.clone(),
                    align: column.align,
                    numeric: column.numeric,
                    is_active,
                    direction: is_active.then_some(self.state.direction),
                }
            })
            .collect()
    }

    pub fn pager(&self) -> PagerInfo {
        PagerInfo {
            enabled: self.pagination_enabled,
            current_page: self.state.current_page,
            total_pages: self.total_pages(),
            page_size: self.page_size,
            total_rows: self.records.len(),
        }
    }

    pub fn plan(&self) -> RenderPlan<'_, R> {
        RenderPlan {
            headers: self.headers(),
            rows: self.visible_rows(),
            pager: self.pager(),
        }
    }

    fn active_column(&self) -> &ColumnDefinition<R> {
        // active_column is validated on every write
        self.columns
            .iter()
            .find(|c| c.id == self.state.active_column)
            .unwrap_or(&self.columns[0])
    }

    fn resort(&mut self) {
        let column = self.active_column();
        let keys: Vec<SortKey> = self.records.iter().map(|r| column.key_of(r)).collect();
        let missing = keys.iter().filter(|k| k.is_missing()).count();
        if missing > 0 {
            debug!("{} records have no value for column {}", missing, column.id);
        }

        let mut order: Vec<usize> = (0..self.records.len()).collect();
        // slice::sort_by is stable; reversing the comparator keeps ties in input order
        match self.state.direction {
            SortDirection::Asc => order.sort_by(|&a, &b| keys[a].compare(&keys[b])),
            SortDirection::Desc => order.sort_by(|&a, &b| keys[b].compare(&keys[a])),
        }
        self.order = order;
    }
}
