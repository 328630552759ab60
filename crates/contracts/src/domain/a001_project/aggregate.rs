use crate::domain::common::{Identifiable, ItemId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Проект — родительский контекст для списков
///
/// Фронтенд использует только `id` и `name`; остальные поля
/// сохраняются как есть и не валидируются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identifiable for Project {
    fn id(&self) -> ItemId {
        self.id
    }
}

/// URL проекта в REST API
pub fn project_path(project_id: ItemId) -> String {
    format!("/api/project/{}", project_id)
}
