use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

/// Confirmation dialog gating a destructive action.
#[component]
pub fn YesNoDialog(
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    on_yes: Callback<()>,
    on_no: Callback<()>,
    /// Label of the confirm button (default: "Yes").
    #[prop(optional, into)]
    yes_label: Option<String>,
) -> impl IntoView {
    let yes_label = yes_label.unwrap_or_else(|| "Yes".to_string());

    view! {
        <ModalFrame on_close=on_no title=title modal_class="modal--confirm">
            <p class="modal__text">{text}</p>
            <div class="modal__actions">
                <button class="button button--secondary" on:click=move |_| on_no.run(())>
                    "Cancel"
                </button>
                <button class="button button--danger" on:click=move |_| on_yes.run(())>
                    {yes_label}
                </button>
            </div>
        </ModalFrame>
    }
}
