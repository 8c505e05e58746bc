//! Artworks listing: `GET <base>/artworks?page=<n>`.

use serde_json::Value;
use url::Url;

use crate::api::Page;
use crate::error::ApiError;
use crate::model::ArtworkRow;

/// Default base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Builds the artworks listing URL for a 1-based page number.
pub fn artworks_url(base_url: &str, page: u32) -> Result<Url, ApiError> {
    let raw = format!("{}/artworks", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}

/// Parses an artworks listing body into a page of rows.
///
/// Lenient: a `data` member that is
/// absent or not an array yields an empty page, and pagination fields that
/// are absent or non-numeric are left unset.
pub fn parse_artworks_body(body: &Value) -> Page<ArtworkRow> {
    let records = body
        .get("data")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(ArtworkRow::from_value).collect())
        .unwrap_or_default();

    let mut page = Page::new(records);

    let Some(pagination) = body.get("pagination") else {
        return page;
    };
    let number = |key: &str| pagination.get(key).and_then(Value::as_u64);

    if let Some(total) = number("total") {
        page = page.with_total_count(total);
    }
    if let Some(pages) = number("total_pages") {
        page = page.with_total_pages(pages);
    }
    if let Some(current) = number("current_page") {
        page = page.with_current_page(current);
    }
    if let Some(limit) = number("limit") {
        page = page.with_limit(limit);
    }
    page
}
