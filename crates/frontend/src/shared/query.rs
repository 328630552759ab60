//! Page inputs taken from the location query string.

use crate::shared::list_page::ListPageProps;
use web_sys::window;

/// Parse `project_id` / `user_id` from a query string such as `?project_id=1`.
pub fn props_from_query(search: &str) -> Result<ListPageProps, String> {
    serde_qs::from_str::<ListPageProps>(search.trim_start_matches('?'))
        .map_err(|e| format!("Invalid query string '{}': {}", search, e))
}

/// Query string carrying `props`, without the leading `?`; empty when nothing is set.
pub fn props_to_query(props: &ListPageProps) -> String {
    let mut parts = Vec::new();
    if let Some(id) = props.project_id {
        parts.push(format!("project_id={}", id));
    }
    if let Some(id) = props.user_id {
        parts.push(format!("user_id={}", id));
    }
    parts.join("&")
}

/// Props of the current page; defaults when the query is missing or malformed.
pub fn current_props() -> ListPageProps {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    props_from_query(&search).unwrap_or_else(|e| {
        log::warn!("{}", e);
        ListPageProps::default()
    })
}
