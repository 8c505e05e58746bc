//! Tests against the real public API.
//!
//! Ignored by default since they need network access.
//! Run them with: `cargo test -p artic-lib -- --ignored`

use std::time::Duration;

use artic_lib::ArticClient;
use artic_lib::selector::CrossPageSelector;

fn client() -> ArticClient {
    ArticClient::builder()
        .timeout(Duration::from_secs(30))
        .user_agent("artic-lib tests")
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_first_page() {
    let page = client().fetch_artworks(1).await.expect("page 1 should load");

    assert!(!page.is_empty());
    assert!(page.len() <= 12);
    assert!(page.total_count().unwrap_or(0) > 0);
    assert!(page.records().iter().all(|row| row.id.is_some()));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_select_first_fifteen() {
    let ids = CrossPageSelector::new()
        .select_first(&client(), Some(15))
        .await
        .expect("selection should succeed")
        .expect("count is positive");

    assert_eq!(ids.len(), 15);
}

#[tokio::test]
async fn test_page_zero_is_rejected() {
    let err = client().fetch_artworks(0).await.unwrap_err();
    assert!(matches!(err, artic_lib::error::Error::InvalidPage(0)));
}
