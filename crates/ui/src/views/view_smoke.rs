use std::sync::atomic::Ordering;

use super::test_harness::{FakeDeckApi, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn table_view_smoke_renders_fresh_deck() {
    let mut harness = setup_view_harness(FakeDeckApi::default());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("52 cards remaining"), "missing count in {html}");
    assert!(html.contains("No card drawn"), "missing placeholder in {html}");
    assert!(html.contains("Start drawing"), "missing polling toggle in {html}");
    assert!(html.contains("Shuffle deck"), "missing shuffle in {html}");
    assert!(
        html.contains("Shuffle speed: Normal (1000 ms)"),
        "missing speed toggle in {html}"
    );
    assert_eq!(harness.api.new_deck_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn table_view_smoke_hides_controls_when_deck_fetch_fails() {
    let mut harness = setup_view_harness(FakeDeckApi {
        fail_new_deck: true,
        ..FakeDeckApi::default()
    });
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to fetch deck."), "missing banner in {html}");
    assert!(!html.contains("Start drawing"), "controls rendered in {html}");
    assert!(!html.contains("Shuffle deck"), "controls rendered in {html}");
    assert!(!html.contains("cards remaining"), "count rendered in {html}");
}
