//! Error types

mod api;

pub use api::*;

/// Top-level error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Page numbers are 1-based.
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),
}

impl Error {
    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status_code(),
            Self::InvalidPage(_) => None,
        }
    }
}
