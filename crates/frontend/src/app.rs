use crate::domain::a002_integration::ui::list::IntegrationList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::event_bus::provide_event_bus;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Bus first: the global context subscribes to it.
    provide_event_bus();

    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_event_subscriptions();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <IntegrationList /> }.into_any()
        />
    }
}
