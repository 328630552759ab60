use crate::shared::event_bus::on_event;
use contracts::shared::events::EVENT_SHOW_DRAWER;
use leptos::prelude::*;

/// App-wide UI flags shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Navigation drawer on the left
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(false),
        }
    }

    /// Open the drawer whenever a page emits `i-show-drawer`.
    ///
    /// Must run inside a component that has the event bus in context.
    pub fn init_event_subscriptions(&self) {
        let this = *self;
        on_event(EVENT_SHOW_DRAWER, move |_| this.show_left());
    }

    pub fn show_left(&self) {
        self.left_open.set(true);
    }

    pub fn hide_left(&self) {
        self.left_open.set(false);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the global context
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
