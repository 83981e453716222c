use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn NavItem(href: &'static str, icon_name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="sidebar__item">
            {icon(icon_name)}
            <span>{label}</span>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("docs")}
                <span>"Docs Admin"</span>
            </div>

            <div class="sidebar__section">"Content"</div>
            <NavItem href="/docs" icon_name="docs" label="Docs" />
            <NavItem href="/categories" icon_name="folder" label="Categories" />
            <NavItem href="/subcategories" icon_name="folder-tree" label="Subcategories" />
            <NavItem href="/tags" icon_name="tag" label="Tags" />

            <div class="sidebar__section">"Companies"</div>
            <NavItem href="/public-documents" icon_name="building" label="Public documents" />
        </nav>
    }
}
