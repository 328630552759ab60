//! Sidebar with the project's pages

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::list_page::ListPageProps;
use crate::shared::query::{current_props, props_to_query};
use leptos::prelude::*;

/// (path, label, icon)
const MENU_ITEMS: &[(&str, &str, &str)] = &[("/integrations", "Integrations", "integrations")];

fn menu_href(path: &str, props: &ListPageProps) -> String {
    let query = props_to_query(props);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let props = current_props();

    view! {
        <nav class="sidebar">
            {MENU_ITEMS
                .iter()
                .map(|(path, label, icon_name)| {
                    view! {
                        <a class="sidebar__item" href=menu_href(path, &props) on:click=move |_| ctx.hide_left()>
                            {icon(icon_name)}
                            <span class="sidebar__label">{*label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_href_keeps_project_and_user() {
        let props = ListPageProps::for_project(3).with_user(Some(5));
        assert_eq!(
            menu_href("/integrations", &props),
            "/integrations?project_id=3&user_id=5"
        );
        assert_eq!(
            menu_href("/integrations", &ListPageProps::for_project(3)),
            "/integrations?project_id=3"
        );
        assert_eq!(
            menu_href("/integrations", &ListPageProps::default()),
            "/integrations"
        );
    }
}
