//! JSON files standing in for the indexing service, plus bookmark persistence

pub mod bookmark_file;
pub mod position_source;
pub mod snapshot;
pub mod token_list;

pub use bookmark_file::BookmarkFile;
pub use position_source::SnapshotPositionFetcher;
pub use snapshot::{load_pools, load_tokens};
pub use token_list::load_token_list;
