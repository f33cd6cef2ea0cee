// Service exports
pub mod catalog;

pub use catalog::{CatalogStore, CatalogError, read_records, write_records};
