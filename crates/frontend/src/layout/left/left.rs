use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Navigation drawer; an overlay click closes it.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <div class="drawer-overlay" class:hidden=move || !is_open() on:click=move |_| ctx.hide_left()></div>
        <div data-zone="left" class="left drawer" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
