use super::view_model::IntegrationDetailsViewModel;
use crate::domain::a002_integration::ui::list::IntegrationController;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_integration::aggregate::IntegrationAuthMethod;
use contracts::domain::common::parse_item_id;
use leptos::prelude::*;

/// Edit dialog for one integration; empty selection means "new".
#[component]
pub fn IntegrationDetails(controller: IntegrationController) -> impl IntoView {
    let existing = controller
        .state()
        .with_untracked(|s| s.selected_item().cloned());
    let vm = IntegrationDetailsViewModel::new(controller.page().project_id(), existing);

    let title = if vm.is_edit_mode() {
        "Edit integration"
    } else {
        "New integration"
    };

    let on_close = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.close_edit_dialog())
    };

    let form = vm.form;
    let error = vm.error;
    let saving = vm.saving;
    let needs_header = move || form.with(|f| f.auth_method.needs_header());

    view! {
        <ModalFrame on_close=on_close title=title modal_class="integration-details-modal">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="integration_name">"Name"</label>
                    <input
                        type="text"
                        id="integration_name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="integration_template">"Template ID"</label>
                    <input
                        type="number"
                        id="integration_template"
                        prop:value=move || {
                            form.with(|f| f.template_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:input=move |ev| {
                            let id = parse_item_id(&event_target_value(&ev)).ok();
                            form.update(|f| f.template_id = id);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="integration_auth">"Auth method"</label>
                    <select
                        id="integration_auth"
                        prop:value=move || form.with(|f| f.auth_method.as_str())
                        on:change=move |ev| {
                            let method = IntegrationAuthMethod::from_code(&event_target_value(&ev))
                                .unwrap_or_default();
                            form.update(|f| f.auth_method = method);
                        }
                    >
                        {IntegrationAuthMethod::ALL
                            .into_iter()
                            .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <Show when=needs_header>
                    <div class="form-group">
                        <label for="integration_header">"Auth header"</label>
                        <input
                            type="text"
                            id="integration_header"
                            prop:value=move || form.with(|f| f.auth_header.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    f.auth_header = if value.trim().is_empty() { None } else { Some(value) }
                                });
                            }
                        />
                    </div>
                </Show>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="integration_searchable"
                        prop:checked=move || form.with(|f| f.searchable)
                        on:change=move |ev| form.update(|f| f.searchable = event_target_checked(&ev))
                    />
                    <label for="integration_searchable">"Searchable"</label>
                </div>
            </div>

            <div class="modal__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click={
                        move |_| vm.save_command(controller.clone())
                    }
                >
                    "Save"
                </button>
            </div>
        </ModalFrame>
    }
}
