//! Equipment content for the arena: catalog lookups and file loaders.
//!
//! The loader converts a RON equipment file into an [`EquipmentCatalog`];
//! the catalog resolves names to definitions for hero assembly and exposes
//! the full name lists for selection UIs.
pub mod catalog;
pub mod loader;

pub use catalog::{CatalogError, EquipmentCatalog};
pub use loader::{EquipmentFile, EquipmentLoader, LoadResult};
