//! Crate Errors

use thiserror::Error;

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level errors
///
/// Draft validation failures are reported separately as
/// [`ValidationErrors`](crate::ValidationErrors), since they are shown
/// inline rather than propagated.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid store config: {0}")]
    Config(#[from] serde_json::Error),
}
