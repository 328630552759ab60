use contracts::domain::common::{Identifiable, ItemId};
use contracts::shared::list_page::ColumnHeader;
use serde::{Deserialize, Serialize};

/// What a concrete list page must supply.
pub trait ItemListPage: Send + Sync + 'static {
    type Item: Identifiable + Send + Sync + 'static;

    /// Collection endpoint, e.g. `/api/project/1/integrations`
    fn items_url(&self) -> String;

    /// Endpoint of one record; used for DELETE and PUT
    fn single_item_url(&self, item_id: ItemId) -> String;

    /// Bus event broadcast when a record of this page changes
    fn event_name(&self) -> &'static str;

    /// Table columns
    fn headers(&self) -> Vec<ColumnHeader>;
}

/// Construction-time inputs of a list page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPageProps {
    /// Parent project; the project record is loaded only when set
    pub project_id: Option<ItemId>,
    /// Current user, forwarded to the edit dialog
    pub user_id: Option<ItemId>,
}

impl ListPageProps {
    pub fn for_project(project_id: ItemId) -> Self {
        Self {
            project_id: Some(project_id),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: Option<ItemId>) -> Self {
        self.user_id = user_id;
        self
    }
}
