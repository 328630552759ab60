use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::common::{Identifiable, ItemId};
use contracts::shared::list_page::ColumnHeader;

#[derive(Clone, Debug)]
pub struct ListPageState<T> {
    /// `None` until the first successful load
    pub items: Option<Vec<T>>,
    pub project: Option<Project>,
    /// Record targeted by the edit or delete dialog
    pub selected_item_id: Option<ItemId>,
    pub edit_dialog_visible: bool,
    pub delete_dialog_visible: bool,
    pub headers: Vec<ColumnHeader>,
}

impl<T: Identifiable> ListPageState<T> {
    pub fn new(headers: Vec<ColumnHeader>) -> Self {
        Self {
            items: None,
            project: None,
            selected_item_id: None,
            edit_dialog_visible: false,
            delete_dialog_visible: false,
            headers,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    pub fn find_item(&self, item_id: ItemId) -> Option<&T> {
        self.items.as_ref()?.iter().find(|item| item.id() == item_id)
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.find_item(self.selected_item_id?)
    }

    pub fn request_deletion(&mut self, item_id: ItemId) {
        self.selected_item_id = Some(item_id);
        self.delete_dialog_visible = true;
    }

    pub fn start_editing(&mut self, item_id: ItemId) {
        self.selected_item_id = Some(item_id);
        self.edit_dialog_visible = true;
    }

    /// Edit dialog with no selection means "create"
    pub fn start_creating(&mut self) {
        self.selected_item_id = None;
        self.edit_dialog_visible = true;
    }

    /// Swap in a freshly loaded list; a selection that is gone is dropped.
    pub fn replace_items(&mut self, items: Vec<T>) {
        if let Some(selected) = self.selected_item_id {
            if !items.iter().any(|item| item.id() == selected) {
                self.selected_item_id = None;
            }
        }
        self.items = Some(items);
    }
}
