//! Art Institute of Chicago artworks client library
//!
//! An async client for the public artworks endpoint, plus the UI-independent
//! state behind a lazily paginated artworks table with cross-page selection.

pub mod api;
pub mod error;
pub mod model;
pub mod rate_limit;
pub mod selection;
pub mod selector;
pub mod source;
pub mod table;

mod client;

pub use client::*;
pub use source::PageSource;
