//! Artworks endpoint: URL building, response parsing and page results.

mod artworks;
mod page;

pub use artworks::*;
pub use page::Page;
