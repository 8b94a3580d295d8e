use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use deck_core::model::DeckId;
use services::{
    CardPayload, DeckApi, DeckApiError, DeckSessionService, DrawResponse, NewDeckResponse,
    ShuffleResponse,
};

use crate::context::{UiApp, build_app_context};
use crate::views::DeckTableView;
use crate::views::table::TableTestHandles;
use crate::vm::PendingRequest;

/// In-memory deck that counts requests.
///
/// Draws count down from the dealt deck unless a response was queued with
/// `queue_draw`.
#[derive(Default)]
pub struct FakeDeckApi {
    pub fail_new_deck: bool,
    /// Cards in a freshly dealt deck; `52 * deck_count` when unset.
    pub deck_size: Option<u32>,
    pub draw_delay: Duration,
    pub shuffle_delay: Duration,
    pub new_deck_calls: AtomicUsize,
    pub draw_calls: AtomicUsize,
    pub(crate) server_remaining: Mutex<u32>,
    pub(crate) queued_draws: Mutex<VecDeque<Result<DrawResponse, DeckApiError>>>,
}

impl FakeDeckApi {
    pub fn queue_draw(&self, response: Result<DrawResponse, DeckApiError>) {
        self.queued_draws.lock().unwrap().push_back(response);
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeckApi for FakeDeckApi {
    async fn new_shuffled_deck(&self, deck_count: u32) -> Result<NewDeckResponse, DeckApiError> {
        self.new_deck_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_new_deck {
            return Err(DeckApiError::HttpStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        let remaining = self.deck_size.unwrap_or(52 * deck_count);
        *self.server_remaining.lock().unwrap() = remaining;
        Ok(NewDeckResponse {
            deck_id: "harness-deck".to_string(),
            remaining,
        })
    }

    async fn draw(&self, _deck_id: &DeckId, _count: u32) -> Result<DrawResponse, DeckApiError> {
        self.draw_calls.fetch_add(1, Ordering::SeqCst);
        if !self.draw_delay.is_zero() {
            tokio::time::sleep(self.draw_delay).await;
        }
        if let Some(queued) = self.queued_draws.lock().unwrap().pop_front() {
            return queued;
        }
        let mut remaining = self.server_remaining.lock().unwrap();
        if *remaining == 0 {
            return Ok(DrawResponse {
                cards: Some(Vec::new()),
                remaining: Some(0),
            });
        }
        *remaining -= 1;
        Ok(DrawResponse {
            cards: Some(vec![CardPayload {
                code: "AS".to_string(),
                image: "https://cards.test/AS.png".to_string(),
                value: "ACE".to_string(),
                suit: "SPADES".to_string(),
            }]),
            remaining: Some(*remaining),
        })
    }

    async fn reshuffle(&self, _deck_id: &DeckId) -> Result<ShuffleResponse, DeckApiError> {
        if !self.shuffle_delay.is_zero() {
            tokio::time::sleep(self.shuffle_delay).await;
        }
        *self.server_remaining.lock().unwrap() = 52;
        Ok(ShuffleResponse { remaining: 52 })
    }
}

struct TestApp {
    deck_sessions: Arc<DeckSessionService>,
}

impl UiApp for TestApp {
    fn deck_sessions(&self) -> Arc<DeckSessionService> {
        Arc::clone(&self.deck_sessions)
    }

    fn api_label(&self) -> String {
        "fake".to_string()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: TableTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DeckTableView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeDeckApi>,
    pub handles: TableTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the deck request settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Keep driving the dom until `duration` has passed on the tokio clock.
    ///
    /// Meant for paused-clock tests, where idle waits jump straight to the
    /// next timer.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        let mut rounds = 0;
        while tokio::time::Instant::now() < deadline && rounds < 10_000 {
            self.drive_async().await;
            rounds += 1;
        }
    }

    /// Same as clicking "Start drawing" / "Stop drawing".
    pub fn toggle_polling(&mut self) {
        let toggle = self.handles.toggle_polling();
        self.dom.in_runtime(|| toggle.call(()));
        drive_dom(&mut self.dom);
    }

    /// Same as clicking the shuffle button.
    pub fn shuffle(&mut self) {
        let shuffle = self.handles.shuffle();
        self.dom.in_runtime(|| shuffle.call(()));
        drive_dom(&mut self.dom);
    }

    pub fn pending(&self) -> Option<PendingRequest> {
        let pending = self.handles.pending();
        self.dom.in_runtime(|| *pending.peek())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(api: FakeDeckApi) -> ViewHarness {
    let api = Arc::new(api);
    let deck_sessions = Arc::new(DeckSessionService::new(
        Arc::clone(&api) as Arc<dyn DeckApi>,
        1,
    ));
    let app = Arc::new(TestApp { deck_sessions });
    let handles = TableTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, api, handles }
}
