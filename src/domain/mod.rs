//! Domain layer - tables, records and the collaborators they consult

pub mod bookmark;
pub mod pool;
pub mod position;
pub mod services;
pub mod table;
pub mod token;
pub mod wallet;
