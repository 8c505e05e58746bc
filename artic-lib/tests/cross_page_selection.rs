//! Cross-page "select first N" behaviour.

mod common;

use std::time::Duration;

use artic_lib::model::ArtworkId;
use artic_lib::selector::CrossPageSelector;
use artic_lib::table::{BulkOutcome, TableState};
use common::{MockSource, ids, load};

#[tokio::test]
async fn test_fifteen_across_pages_of_twelve() {
    let source = MockSource::uniform(50, 12, 101);

    let selected = CrossPageSelector::new()
        .select_first(&source, Some(15))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(selected, ids(101..=115));
    assert_eq!(source.calls(), vec![1, 2]);
}

#[tokio::test]
async fn test_first_n_regardless_of_chunking() {
    let source = MockSource::from_chunks(vec![vec![4, 8], vec![15], vec![16, 23, 42]]);

    let selected = CrossPageSelector::new()
        .select_first(&source, Some(5))
        .await
        .unwrap();

    assert_eq!(selected, Some(ids([4, 8, 15, 16, 23])));
}

#[tokio::test]
async fn test_exhausted_upstream_returns_fewer() {
    let source = MockSource::uniform(7, 3, 1);

    let selected = CrossPageSelector::new()
        .select_first(&source, Some(10))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(selected, ids(1..=7));
    // Pages 1-3 hold records, page 4 is the empty stop signal.
    assert_eq!(source.calls(), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_non_positive_or_unset_count_is_a_no_op() {
    let source = MockSource::uniform(50, 12, 1);
    let selector = CrossPageSelector::new();

    for count in [None, Some(0), Some(-4)] {
        assert_eq!(selector.select_first(&source, count).await.unwrap(), None);
    }
    assert!(source.calls().is_empty());

    let mut state = TableState::new();
    state.select_rows([ArtworkId(9)]);
    state.open_overlay();
    state.set_count_input(Some(0));

    assert_eq!(state.begin_bulk_select(), None);
    assert!(!state.is_bulk_running());
    assert!(state.selected().contains(ArtworkId(9)));
    assert!(state.is_overlay_open());
}

#[tokio::test]
async fn test_bulk_select_replaces_selection() {
    let source = MockSource::uniform(50, 12, 101);
    let mut state = TableState::new();
    load(&mut state, &source).await;

    state.select_rows([ArtworkId(1), ArtworkId(2)]);
    state.open_overlay();
    state.set_count_input(Some(15));

    let count = state.begin_bulk_select();
    let result = CrossPageSelector::new().select_first(&source, count).await;

    assert_eq!(state.finish_bulk_select(result), BulkOutcome::Applied(15));
    assert!(!state.is_overlay_open());
    assert!(!state.selected().contains(ArtworkId(1)));
    assert_eq!(state.visible_selection().len(), 12);
}

#[tokio::test]
async fn test_error_aborts_without_partial_selection() {
    let source = MockSource::uniform(50, 12, 101).failing_on(2);
    let mut state = TableState::new();
    state.select_rows([ArtworkId(7)]);
    state.open_overlay();
    state.set_count_input(Some(30));

    let count = state.begin_bulk_select();
    let result = CrossPageSelector::new().select_first(&source, count).await;
    assert_eq!(result.as_ref().unwrap_err().status_code(), Some(503));

    assert_eq!(state.finish_bulk_select(result), BulkOutcome::Failed);
    assert_eq!(state.selected().iter().collect::<Vec<_>>(), vec![ArtworkId(7)]);
    assert!(state.is_overlay_open());
    assert_eq!(source.calls(), vec![1, 2]);
}

#[tokio::test]
async fn test_concurrent_fetch_keeps_page_order() {
    // Earlier pages answer slowest, so completion order is reversed.
    let source = MockSource::uniform(40, 4, 1)
        .with_delay(|page| Duration::from_millis(u64::from(12u32.saturating_sub(page)) * 5));

    let selected = CrossPageSelector::new()
        .with_concurrency(4)
        .select_first(&source, Some(18))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(selected, ids(1..=18));
    let calls = source.calls();
    assert!(calls.len() >= 5);
    assert!(calls.len() <= 5 + 3);
}
