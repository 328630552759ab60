//! Named-event publish/subscribe channel shared by page components.
//!
//! Components receive the bus through Leptos context instead of a global, and
//! emitters only see the [`EventBus`] trait.

use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Write side of the bus.
pub trait EventBus {
    /// Deliver `payload` to every subscriber of `name`
    fn emit(&self, name: &str, payload: Option<Value>);

    /// Serialize `payload` and emit it under `name`
    fn emit_payload<T: Serialize>(&self, name: &str, payload: &T)
    where
        Self: Sized,
    {
        match serde_json::to_value(payload) {
            Ok(value) => self.emit(name, Some(value)),
            Err(e) => log::error!("event '{}' dropped: cannot serialize payload: {}", name, e),
        }
    }
}

type Handler = Arc<dyn Fn(Option<&Value>) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    by_event: HashMap<String, Vec<(SubscriptionId, Handler)>>,
}

/// In-process bus provided to the whole app via context.
#[derive(Clone, Default)]
pub struct AppEventBus {
    inner: Arc<Mutex<Subscribers>>,
}

impl AppEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Subscribers> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscribe<F>(&self, name: &str, handler: F) -> SubscriptionId
    where
        F: Fn(Option<&Value>) + Send + Sync + 'static,
    {
        let mut subs = self.lock();
        subs.next_id += 1;
        let id = SubscriptionId(subs.next_id);
        subs.by_event
            .entry(name.to_string())
            .or_default()
            .push((id, Arc::new(handler)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.lock();
        for handlers in subs.by_event.values_mut() {
            handlers.retain(|(sid, _)| *sid != id);
        }
        subs.by_event.retain(|_, handlers| !handlers.is_empty());
    }

    #[cfg(test)]
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.lock().by_event.get(name).map(Vec::len).unwrap_or(0)
    }
}

impl EventBus for AppEventBus {
    fn emit(&self, name: &str, payload: Option<Value>) {
        // Handlers run outside the lock so they may emit or subscribe themselves.
        let handlers: Vec<Handler> = self
            .lock()
            .by_event
            .get(name)
            .map(|hs| hs.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default();

        log::debug!("event '{}' -> {} subscriber(s)", name, handlers.len());
        for handler in handlers {
            handler(payload.as_ref());
        }
    }
}

/// Put a fresh bus into context for the component tree below.
pub fn provide_event_bus() -> AppEventBus {
    let bus = AppEventBus::new();
    provide_context(bus.clone());
    bus
}

/// Hook to access the app event bus
pub fn use_event_bus() -> AppEventBus {
    use_context::<AppEventBus>().expect("AppEventBus not found in component tree")
}

/// Subscribe for the lifetime of the current component.
pub fn on_event<F>(name: &str, handler: F)
where
    F: Fn(Option<&Value>) + Send + Sync + 'static,
{
    let bus = use_event_bus();
    let id = bus.subscribe(name, handler);
    on_cleanup(move || bus.unsubscribe(id));
}
