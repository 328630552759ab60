use crate::domain::a002_integration::ui::details::IntegrationDetails;
use crate::shared::event_bus::{use_event_bus, AppEventBus};
use crate::shared::http::GlooHttpClient;
use crate::shared::list_page::{ItemListPage, ItemListView, ListPageController};
use crate::shared::query::current_props;
use contracts::domain::a002_integration::aggregate::Integration;
use contracts::domain::common::ItemId;
use contracts::shared::events::EVENT_INTEGRATION;
use contracts::shared::list_page::ColumnHeader;
use leptos::prelude::*;

/// Webhook integrations of one project
#[derive(Clone, Copy, Debug)]
pub struct IntegrationListPage {
    project_id: ItemId,
}

impl IntegrationListPage {
    pub fn new(project_id: ItemId) -> Self {
        Self { project_id }
    }

    pub fn project_id(&self) -> ItemId {
        self.project_id
    }
}

impl ItemListPage for IntegrationListPage {
    type Item = Integration;

    fn items_url(&self) -> String {
        format!("/api/project/{}/integrations", self.project_id)
    }

    fn single_item_url(&self, item_id: ItemId) -> String {
        format!("/api/project/{}/integrations/{}", self.project_id, item_id)
    }

    fn event_name(&self) -> &'static str {
        EVENT_INTEGRATION
    }

    fn headers(&self) -> Vec<ColumnHeader> {
        vec![
            ColumnHeader::new("Name", "name"),
            ColumnHeader::new("Auth method", "auth_method").with_width("160px"),
            ColumnHeader::new("Template", "template_id").with_width("120px"),
        ]
    }
}

pub type IntegrationController = ListPageController<IntegrationListPage, GlooHttpClient, AppEventBus>;

#[component]
#[allow(non_snake_case)]
pub fn IntegrationList() -> impl IntoView {
    let props = current_props();
    let Some(project_id) = props.project_id else {
        return view! {
            <div class="page">
                <div class="warning-box">
                    <span class="warning-box__text">"Select a project to see its integrations"</span>
                </div>
            </div>
        }
        .into_any();
    };

    let controller = ListPageController::new(
        IntegrationListPage::new(project_id),
        props,
        GlooHttpClient::new(),
        use_event_bus(),
    );
    let dialog_controller = controller.clone();

    view! {
        <ItemListView controller=controller title="Integrations" new_label="New integration">
            <IntegrationDetails controller=dialog_controller.clone() />
        </ItemListView>
    }
    .into_any()
}
