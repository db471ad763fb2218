//! Error taxonomy for dashboard initialization.
//!
//! Both variants of [`DashboardError`] are fatal: the app logs them and
//! replaces the page with a static notice. An empty filter result is not an
//! error; see [`crate::RenderOutcome::EmptySelection`].

/// Top-level failure of the load step.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Malformed(#[from] MalformedDataError),
}

/// The dataset could not be fetched or decoded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request could not be built or the fetch promise rejected.
    #[error("failed to fetch {url}: {reason}")]
    Network { url: String, reason: String },
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },
    /// The response body could not be read as text.
    #[error("failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },
    /// The body is not valid JSON.
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The payload parsed but does not have the shape of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedDataError {
    #[error("data is missing or improperly formatted: expected an array, found {found}")]
    NotAnArray { found: &'static str },
    #[error("data is missing or improperly formatted: the array is empty")]
    Empty,
    #[error("data is missing or improperly formatted: record {index} is not an object")]
    RecordNotObject { index: usize },
}
