//! Typed client for the Dragonfish ERP REST API.
//!
//! Every endpoint is a single GET returning a `{ Resultados, TotalRegistros }`
//! envelope; authentication is a fixed header set (`Authorization`,
//! `IdCliente`) plus the per-request `BaseDeDatos` database selector.

mod client;
mod error;
pub mod models;
mod query;
mod taxonomy;

pub use client::ErpClient;
pub use error::ApiError;
pub use models::{
    Article, Color, Equivalence, KitComponent, Page, PriceEntry, Size, StockRecord, TaxonomyEntry,
};
pub use query::StockQuery;
pub use taxonomy::Taxonomy;
