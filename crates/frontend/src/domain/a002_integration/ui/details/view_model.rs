use super::model;
use crate::domain::a002_integration::ui::list::IntegrationController;
use crate::shared::error::error_message;
use contracts::domain::a002_integration::aggregate::{Integration, IntegrationDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the integration edit dialog
#[derive(Clone)]
pub struct IntegrationDetailsViewModel {
    pub form: RwSignal<IntegrationDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl IntegrationDetailsViewModel {
    /// Prefill from the selected record, or start an empty form for `project_id`
    pub fn new(project_id: i64, existing: Option<Integration>) -> Self {
        let form = existing
            .map(IntegrationDto::from)
            .unwrap_or_else(|| IntegrationDto::new_for_project(project_id));
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    /// Validate, send, then let the list reload.
    pub fn save_command(&self, controller: IntegrationController) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            log::debug!(
                "saving integration {:?} (user {:?})",
                current.id,
                controller.props().user_id
            );
            let result = model::save_form(controller.http(), controller.page(), &current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    error.set(None);
                    if let Err(e) = controller.on_item_saved().await {
                        controller.notify_error(&e);
                    }
                }
                Err(e) => error.set(Some(error_message(&e))),
            }
        });
    }
}
