use crate::domain::common::{Identifiable, ItemId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth method
// ============================================================================

/// Способ аутентификации входящего вебхука интеграции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationAuthMethod {
    #[default]
    None,
    Token,
    Hmac,
    Github,
    Bitbucket,
}

impl IntegrationAuthMethod {
    pub const ALL: [IntegrationAuthMethod; 5] = [
        IntegrationAuthMethod::None,
        IntegrationAuthMethod::Token,
        IntegrationAuthMethod::Hmac,
        IntegrationAuthMethod::Github,
        IntegrationAuthMethod::Bitbucket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationAuthMethod::None => "none",
            IntegrationAuthMethod::Token => "token",
            IntegrationAuthMethod::Hmac => "hmac",
            IntegrationAuthMethod::Github => "github",
            IntegrationAuthMethod::Bitbucket => "bitbucket",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// Нужен ли заголовок с секретом
    pub fn needs_header(&self) -> bool {
        matches!(self, IntegrationAuthMethod::Token | IntegrationAuthMethod::Hmac)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Интеграция проекта: входящий вебхук, запускающий шаблон
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: ItemId,
    pub project_id: ItemId,
    pub name: String,
    pub template_id: ItemId,

    #[serde(default)]
    pub auth_method: IntegrationAuthMethod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_secret_id: Option<ItemId>,

    #[serde(default)]
    pub searchable: bool,
}

impl Identifiable for Integration {
    fn id(&self) -> ItemId {
        self.id
    }
}

// ============================================================================
// DTO для формы
// ============================================================================

/// Данные формы создания/редактирования интеграции
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub project_id: ItemId,
    pub name: String,
    pub template_id: Option<ItemId>,
    pub auth_method: IntegrationAuthMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_secret_id: Option<ItemId>,
    pub searchable: bool,
}

impl IntegrationDto {
    pub fn new_for_project(project_id: ItemId) -> Self {
        Self {
            project_id,
            ..Self::default()
        }
    }

    /// Проверка перед отправкой на сервер
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.template_id.is_none() {
            return Err("Template is required".to_string());
        }
        if self.auth_method.needs_header()
            && self
                .auth_header
                .as_deref()
                .map(|h| h.trim().is_empty())
                .unwrap_or(true)
        {
            return Err("Auth header is required for this auth method".to_string());
        }
        Ok(())
    }
}

impl From<Integration> for IntegrationDto {
    fn from(i: Integration) -> Self {
        Self {
            id: Some(i.id),
            project_id: i.project_id,
            name: i.name,
            template_id: Some(i.template_id),
            auth_method: i.auth_method,
            auth_header: i.auth_header,
            auth_secret_id: i.auth_secret_id,
            searchable: i.searchable,
        }
    }
}
