//! Query tools over the Dragonfish API.
//!
//! Each tool fetches from the API and renders a user-facing string (tables,
//! markdown detail views) or flat records for the spreadsheet exporter. The
//! user-facing text is Spanish, matching the ERP it fronts.

pub mod articles;
pub mod colors;
pub mod equivalences;
pub mod lookup;
pub mod pivot;
pub mod sizes;
pub mod stock;
pub mod table;
pub mod taxonomies;

use df_api::ApiError;
use df_export::ExportError;

/// Errors surfaced by the tool layer.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),
}

/// Render a boolean the way the ERP UI does.
pub(crate) fn si_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

/// Render an optional number, falling back to a placeholder.
pub(crate) fn opt_display<T: std::fmt::Display>(value: &Option<T>, fallback: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => fallback.to_string(),
    }
}
