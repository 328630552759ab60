use crate::shared::event_bus::on_event;
use contracts::shared::events::{SnackbarColor, SnackbarMessage, EVENT_SNACKBAR};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SNACKBAR_TIMEOUT_MS: u32 = 4000;

fn color_class(color: SnackbarColor) -> &'static str {
    match color {
        SnackbarColor::Success => "snackbar--success",
        SnackbarColor::Info => "snackbar--info",
        SnackbarColor::Warning => "snackbar--warning",
        SnackbarColor::Error => "snackbar--error",
    }
}

/// Shows the latest `i-snackbar` message and hides it after a timeout.
#[component]
pub fn Snackbar() -> impl IntoView {
    let message = RwSignal::new(None::<SnackbarMessage>);
    // Bumped on every message so an old timer cannot hide a newer one.
    let generation = RwSignal::new(0u64);

    on_event(EVENT_SNACKBAR, move |payload| {
        let parsed = payload
            .cloned()
            .and_then(|v| serde_json::from_value::<SnackbarMessage>(v).ok());
        let Some(msg) = parsed else {
            log::warn!("ignoring malformed snackbar payload: {:?}", payload);
            return;
        };

        let current = generation.get_untracked() + 1;
        generation.set(current);
        message.set(Some(msg));

        spawn_local(async move {
            TimeoutFuture::new(SNACKBAR_TIMEOUT_MS).await;
            if generation.get_untracked() == current {
                message.set(None);
            }
        });
    });

    view! {
        {move || message.get().map(|msg| view! {
            <div class=format!("snackbar {}", color_class(msg.color)) role="status">
                <span class="snackbar__text">{msg.text}</span>
                <button class="snackbar__close" on:click=move |_| message.set(None)>"×"</button>
            </div>
        })}
    }
}
