//! Poolboard - sortable, paginated analytics tables for a DEX dashboard
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

// Re-export main types for convenience
pub use domain::table::{DataTable, SortableTable, TableView};
pub use domain::bookmark::{BookmarkSet, Bookmarks};
pub use domain::position::MyPositionsView;
pub use application::services::DashboardService;
