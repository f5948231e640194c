//! Errors raised while loading the flavor catalog.

use thiserror::Error;

/// Failures of the catalog load path.
///
/// The `Display` text of each variant is what the menu screen shows, so
/// messages are user-facing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connectivity probe reported no network.
    #[error("No Internet Connection")]
    Offline,

    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog request failed with status {status}")]
    Status { status: u16 },

    /// The body was not a list of flavors.
    #[error("Malformed catalog response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The catalog returned `null` or an empty list.
    #[error("Something went wrong")]
    EmptyCatalog,
}

impl FetchError {
    /// Short machine-readable kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Offline => "offline",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
            FetchError::EmptyCatalog => "empty_catalog",
        }
    }
}
