//! Error types for extraction and scraping
//!
//! `ExtractError` covers the tree-level extraction primitives; `ScrapeError`
//! wraps it with the failures of the outer fetch/navigate layer.

use thiserror::Error;

/// Errors from the generic extraction primitives.
///
/// `NoMatchingRow` and `LinkNotFound` are deliberately distinct: the first
/// means the requested data is absent, the second means a row matched but
/// the document no longer has the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No row satisfied every column constraint
    #[error("no row matched the given constraints")]
    NoMatchingRow,

    /// A row matched, but its designated cell holds no usable anchor
    #[error("matching row has no link in cell {column}")]
    LinkNotFound { column: usize },

    /// The segmenter was handed an empty sibling sequence.
    /// Call-site bug, not a document-quality issue.
    #[error("no nodes given to segment")]
    EmptyInput,
}

/// Errors from fetching and navigating course profile pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP request or body read failed
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),

    /// Scraped or constructed URL was not parseable
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Extraction primitive reported a failure
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// A fetched page is missing a container the scraper relies on
    #[error("page is missing expected section: {0}")]
    MissingSection(&'static str),
}
