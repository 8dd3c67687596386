//! Infrastructure layer - file-backed data sources and persistence

pub mod storage;
