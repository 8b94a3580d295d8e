#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use tokio::time::{MissedTickBehavior, interval, sleep};

use deck_core::model::{DeckSession, ShuffleSpeed};
use deck_core::time::{DRAW_POLL_INTERVAL, ERROR_BANNER_TTL};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ErrorBanner, PendingRequest, TimerSlot, banner_message, map_deck_table};

/// Marks a request as in flight until dropped.
///
/// Dropping happens on completion and when the owning task is cancelled, so a
/// stopped poll cannot leave the table stuck as busy.
struct PendingGuard {
    pending: Signal<Option<PendingRequest>>,
}

impl PendingGuard {
    fn enter(mut pending: Signal<Option<PendingRequest>>, request: PendingRequest) -> Self {
        pending.set(Some(request));
        Self { pending }
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        // The signal is gone if the view unmounted first.
        if let Ok(mut pending) = self.pending.try_write() {
            *pending = None;
        }
    }
}

#[component]
pub fn DeckTableView() -> Element {
    let ctx = use_context::<AppContext>();
    let deck_sessions = ctx.deck_sessions();

    let session = use_signal(|| None::<DeckSession>);
    let pending = use_signal(|| None::<PendingRequest>);
    let mut polling = use_signal(TimerSlot::<Task>::default);
    let mut banner = use_signal(ErrorBanner::default);
    let mut banner_timer = use_signal(TimerSlot::<Task>::default);
    let mut speed = use_signal(ShuffleSpeed::default);

    let show_error = use_callback(move |message: &'static str| {
        let mut banner = banner;
        let mut banner_timer = banner_timer;
        let generation = banner.write().show(message);
        let hide = spawn(async move {
            sleep(ERROR_BANNER_TTL).await;
            if banner.write().hide(generation) {
                banner_timer.write().release();
            }
        });
        banner_timer.write().replace(hide);
    });

    let init_sessions = deck_sessions.clone();
    let resource = use_resource(move || {
        let deck_sessions = init_sessions.clone();
        let mut session = session;
        async move {
            match deck_sessions.initialize().await {
                Ok(started) => {
                    session.set(Some(started));
                    Ok::<_, ViewError>(())
                }
                Err(err) => {
                    show_error.call(banner_message(&err));
                    Err(ViewError::DeckUnavailable)
                }
            }
        }
    });

    use_drop(move || {
        if let Ok(mut slot) = polling.try_write() {
            slot.cancel();
        }
        if let Ok(mut slot) = banner_timer.try_write() {
            slot.cancel();
        }
    });

    let poll_sessions = deck_sessions.clone();
    let toggle_polling = use_callback(move |()| {
        if polling.write().cancel() {
            tracing::debug!("polling stopped");
            return;
        }
        let deck_sessions = poll_sessions.clone();
        let mut session = session;
        let mut polling_slot = polling;
        let ticker_task = spawn(async move {
            let mut ticker = interval(DRAW_POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the first draw waits a full interval.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if pending.peek().is_some() {
                    continue;
                }
                let Some(mut local) = (*session.peek()).clone() else {
                    continue;
                };
                let result = {
                    let _guard = PendingGuard::enter(pending, PendingRequest::Drawing);
                    deck_sessions.draw(&mut local).await
                };
                match result {
                    Ok(_) => session.set(Some(local)),
                    Err(err) => {
                        show_error.call(banner_message(&err));
                        if err.stops_polling() {
                            polling_slot.write().release();
                            tracing::debug!(error = %err, "polling stopped by draw");
                            break;
                        }
                    }
                }
            }
        });
        polling.write().replace(ticker_task);
        tracing::debug!("polling started");
    });

    let shuffle_sessions = deck_sessions.clone();
    let on_shuffle = use_callback(move |()| {
        if pending.peek().is_some() {
            return;
        }
        let Some(mut local) = (*session.peek()).clone() else {
            return;
        };
        let deck_sessions = shuffle_sessions.clone();
        let mut session = session;
        let guard = PendingGuard::enter(pending, PendingRequest::Shuffling);
        spawn(async move {
            let result = {
                let _guard = guard;
                deck_sessions.shuffle(&mut local).await
            };
            match result {
                Ok(()) => session.set(Some(local)),
                Err(err) => show_error.call(banner_message(&err)),
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<TableTestHandles>() {
                handles.register(toggle_polling, on_shuffle, pending);
            }
        }
    }

    let state = view_state_from_resource(resource);
    let banner_text = banner.read().message();

    rsx! {
        div { class: "page table-page",
            if let Some(message) = banner_text {
                div { class: "error-banner", role: "alert",
                    span { class: "error-banner-text", "{message}" }
                    button {
                        class: "error-banner-dismiss",
                        r#type: "button",
                        aria_label: "Dismiss",
                        onclick: move |_| {
                            banner.write().dismiss();
                            banner_timer.write().cancel();
                        },
                        "×"
                    }
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "view-hint", "Shuffling a fresh deck..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-hint", "{err.message()}" }
                },
                ViewState::Ready(()) => match session() {
                    None => {
                        let hint = ViewError::DeckUnavailable.message();
                        rsx! {
                            p { class: "view-hint", "{hint}" }
                        }
                    }
                    Some(current) => {
                        let vm = map_deck_table(
                            &current,
                            polling.read().is_active(),
                            pending(),
                            speed(),
                        );
                        rsx! {
                            div { class: "table-card",
                                if let Some(face) = vm.card.as_ref() {
                                    img {
                                        class: "table-card-image",
                                        src: "{face.image_url}",
                                        alt: "{face.alt}",
                                    }
                                } else {
                                    div { class: "table-card-placeholder", "No card drawn" }
                                }
                            }
                            p { class: "table-remaining", "{vm.remaining_label}" }
                            div { class: "table-actions",
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| toggle_polling.call(()),
                                    "{vm.polling_label}"
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    disabled: !vm.can_shuffle,
                                    onclick: move |_| on_shuffle.call(()),
                                    "{vm.shuffle_label}"
                                }
                                button {
                                    class: "btn btn-ghost",
                                    r#type: "button",
                                    onclick: move |_| speed.set(speed().toggled()),
                                    "{vm.speed_label}"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct TableTestHandles {
    toggle_polling: Rc<RefCell<Option<Callback<()>>>>,
    shuffle: Rc<RefCell<Option<Callback<()>>>>,
    pending: Rc<RefCell<Option<Signal<Option<PendingRequest>>>>>,
}

#[cfg(test)]
impl TableTestHandles {
    pub(crate) fn register(
        &self,
        toggle_polling: Callback<()>,
        shuffle: Callback<()>,
        pending: Signal<Option<PendingRequest>>,
    ) {
        *self.toggle_polling.borrow_mut() = Some(toggle_polling);
        *self.shuffle.borrow_mut() = Some(shuffle);
        *self.pending.borrow_mut() = Some(pending);
    }

    pub(crate) fn toggle_polling(&self) -> Callback<()> {
        (*self.toggle_polling.borrow()).expect("toggle registered")
    }

    pub(crate) fn shuffle(&self) -> Callback<()> {
        (*self.shuffle.borrow()).expect("shuffle registered")
    }

    pub(crate) fn pending(&self) -> Signal<Option<PendingRequest>> {
        (*self.pending.borrow()).expect("pending registered")
    }
}
