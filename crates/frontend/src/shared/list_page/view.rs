use super::controller::ListPageController;
use super::page::ItemListPage;
use crate::shared::components::yes_no_dialog::YesNoDialog;
use crate::shared::event_bus::EventBus;
use crate::shared::http::HttpClient;
use crate::shared::icons::icon;
use contracts::domain::common::Identifiable;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Common list page: header, table with edit/delete actions and the delete
/// confirmation. `children` is the page's edit dialog, rendered while the
/// edit dialog flag is set.
#[component]
pub fn ItemListView<P, H, B>(
    controller: ListPageController<P, H, B>,
    #[prop(into)] title: String,
    /// Label of the "create" button
    #[prop(into)]
    new_label: String,
    children: ChildrenFn,
) -> impl IntoView
where
    P: ItemListPage,
    H: HttpClient + Send + Sync + 'static,
    B: EventBus + Send + Sync + 'static,
{
    let state = controller.state();

    // Initial load. A failure leaves `items` unset and is reported the same
    // way as a failed delete.
    {
        let ctrl = controller.clone();
        spawn_local(async move {
            if let Err(err) = ctrl.initialize().await {
                log::error!("initial load failed: {}", err);
                ctrl.notify_error(&err);
            }
        });
    }

    let refresh = {
        let ctrl = controller.clone();
        move |_| {
            let ctrl = ctrl.clone();
            spawn_local(async move {
                if let Err(err) = ctrl.load_items().await {
                    ctrl.notify_error(&err);
                }
            });
        }
    };

    let show_drawer = {
        let ctrl = controller.clone();
        move |_| ctrl.reveal_navigation_drawer()
    };

    let create_new = {
        let ctrl = controller.clone();
        move |_| ctrl.start_creating_item()
    };

    let on_yes = {
        let ctrl = controller.clone();
        Callback::new(move |_: ()| {
            let ctrl = ctrl.clone();
            spawn_local(async move { ctrl.confirm_deletion().await });
        })
    };

    let on_no = {
        let ctrl = controller.clone();
        Callback::new(move |_: ()| ctrl.close_delete_dialog())
    };

    let project_name = move || {
        state.with(|s| s.project.as_ref().map(|p| p.name.clone()).unwrap_or_default())
    };

    let header_cells = move || {
        state.with(|s| {
            s.headers
                .iter()
                .map(|h| {
                    let style = h.width.as_ref().map(|w| format!("width: {w};"));
                    view! { <th class="table__header-cell" style=style>{h.text.clone()}</th> }
                })
                .collect_view()
        })
    };

    let rows = {
        let ctrl = controller.clone();
        move || {
            let (items, headers) = state.with(|s| (s.items.clone(), s.headers.clone()));
            let Some(items) = items else {
                return view! {
                    <tr><td class="table__cell table__cell--muted" colspan="100">"Loading..."</td></tr>
                }
                .into_any();
            };
            if items.is_empty() {
                return view! {
                    <tr><td class="table__cell table__cell--muted" colspan="100">"No data"</td></tr>
                }
                .into_any();
            }

            items
                .into_iter()
                .map(|item| {
                    let id = item.id();
                    let row = serde_json::to_value(&item).unwrap_or_default();
                    let cells = headers
                        .iter()
                        .map(|h| view! { <td class="table__cell">{h.cell_text(&row)}</td> })
                        .collect_view();
                    let edit_ctrl = ctrl.clone();
                    let delete_ctrl = ctrl.clone();
                    view! {
                        <tr class="table__row">
                            {cells}
                            <td class="table__cell table__cell--actions">
                                <button
                                    class="button button--ghost"
                                    title="Edit"
                                    on:click=move |_| edit_ctrl.start_editing_item(id)
                                >
                                    {icon("edit")}
                                </button>
                                <button
                                    class="button button--ghost"
                                    title="Delete"
                                    on:click=move |_| delete_ctrl.request_item_deletion(id)
                                >
                                    {icon("delete")}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <button class="button button--ghost header__menu" on:click=show_drawer>
                        {icon("menu")}
                    </button>
                    <h1 class="header__title">{title}</h1>
                    <span class="header__subtitle">{project_name}</span>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=create_new>
                        {icon("plus")}
                        {new_label}
                    </button>
                    <button class="button button--secondary" on:click=refresh>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header_cells}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || state.with(|s| s.edit_dialog_visible)>
                {children()}
            </Show>

            <Show when=move || state.with(|s| s.delete_dialog_visible)>
                <YesNoDialog
                    title="Delete"
                    text="Do you really want to delete this item?"
                    yes_label="Delete"
                    on_yes=on_yes
                    on_no=on_no
                />
            </Show>
        </div>
    }
}
