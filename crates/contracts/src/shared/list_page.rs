use serde::{Deserialize, Serialize};

/// Описание колонки таблицы списка
///
/// `value` — имя поля записи в JSON, из которого берётся значение ячейки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub width: Option<String>,
}

impl ColumnHeader {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            width: None,
        }
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Текст ячейки для записи, сериализованной в JSON
    ///
    /// Вложенные поля адресуются через точку: `template.name`.
    pub fn cell_text(&self, row: &serde_json::Value) -> String {
        let mut current = row;
        for part in self.value.split('.') {
            match current.get(part) {
                Some(v) => current = v,
                None => return String::new(),
            }
        }
        match current {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
