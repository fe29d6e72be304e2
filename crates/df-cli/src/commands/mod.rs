pub mod articles;
pub mod colors;
pub mod config;
pub mod equivalences;
pub mod mcp;
pub mod sizes;
pub mod stock;
pub mod summary;
pub mod taxonomy;
pub mod tools;
