//! The page-fetching seam between table logic and the network.

use async_trait::async_trait;

use crate::ArticClient;
use crate::api::Page;
use crate::error::Error;
use crate::model::ArtworkRow;

/// Something that can serve 1-based pages of artwork rows.
///
/// [`ArticClient`] is the production implementation; the table state and
/// the cross-page selector only depend on this trait.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches one page.
    async fn fetch_page(&self, page: u32) -> Result<Page<ArtworkRow>, Error>;
}

#[async_trait]
impl PageSource for ArticClient {
    async fn fetch_page(&self, page: u32) -> Result<Page<ArtworkRow>, Error> {
        self.fetch_artworks(page).await
    }
}

#[async_trait]
impl<S: PageSource + ?Sized> PageSource for std::sync::Arc<S> {
    async fn fetch_page(&self, page: u32) -> Result<Page<ArtworkRow>, Error> {
        (**self).fetch_page(page).await
    }
}
