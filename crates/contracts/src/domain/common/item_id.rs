use serde::{de::DeserializeOwned, Serialize};

/// Числовой идентификатор записи, как его отдаёт REST API
pub type ItemId = i64;

/// Трейт для записей, отображаемых в списках
///
/// Остальная структура записи определяется конкретной страницей.
pub trait Identifiable: Clone + Serialize + DeserializeOwned + std::fmt::Debug {
    /// Идентификатор записи
    fn id(&self) -> ItemId;
}

/// Разобрать идентификатор из строки (параметр маршрута, query string)
pub fn parse_item_id(s: &str) -> Result<ItemId, String> {
    s.trim()
        .parse::<ItemId>()
        .map_err(|e| format!("Invalid id '{}': {}", s, e))
}
