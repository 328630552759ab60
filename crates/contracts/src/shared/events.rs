//! Имена и payload событий шины между компонентами фронтенда

use serde::{Deserialize, Serialize};

/// Показать навигационную панель (без payload)
pub const EVENT_SHOW_DRAWER: &str = "i-show-drawer";

/// Всплывающее уведомление (`SnackbarMessage`)
pub const EVENT_SNACKBAR: &str = "i-snackbar";

/// Изменение интеграций проекта (`ItemChange<Integration>`)
pub const EVENT_INTEGRATION: &str = "i-integration";

/// Что произошло с записью
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemAction {
    Delete,
}

/// Payload события изменения записи: `{action, item}`
///
/// `item` может отсутствовать, если запись не найдена в локальном списке.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemChange<T> {
    pub action: ItemAction,
    pub item: Option<T>,
}

impl<T> ItemChange<T> {
    pub fn deleted(item: Option<T>) -> Self {
        Self {
            action: ItemAction::Delete,
            item,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackbarColor {
    Success,
    Info,
    Warning,
    Error,
}

/// Payload события `i-snackbar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnackbarMessage {
    pub color: SnackbarColor,
    pub text: String,
}

impl SnackbarMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            color: SnackbarColor::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_change_wire_format() {
        let change = ItemChange::deleted(Some(json!({"id": 1, "name": "A"})));
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"action": "delete", "item": {"id": 1, "name": "A"}})
        );
    }

    #[test]
    fn test_missing_item_serializes_as_null() {
        let change: ItemChange<serde_json::Value> = ItemChange::deleted(None);
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({"action": "delete", "item": null})
        );
    }

    #[test]
    fn test_snackbar_wire_format() {
        let msg = SnackbarMessage::error("Request failed");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"color": "error", "text": "Request failed"})
        );
    }
}
