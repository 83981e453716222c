pub mod state;

use std::collections::HashMap;

use contracts::domain::category::Category;
use contracts::domain::doc::{Doc, DocPayload, DocStatus};
use contracts::domain::subcategory::Subcategory;
use contracts::domain::tag::Tag;
use contracts::shared::constants::MAX_HOMEPAGE_DOCS;
use contracts::shared::list::SortField;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api as category_api;
use crate::domain::doc::api;
use crate::domain::doc::ui::details::DocDialog;
use crate::domain::subcategory::api as subcategory_api;
use crate::domain::tag::api as tag_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::sort::sort_indicator;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use state::create_state;

fn status_badge(status: DocStatus) -> AnyView {
    match status {
        DocStatus::Draft => view! { <span class="badge badge--warning">"Draft"</span> }.into_any(),
        DocStatus::Published => {
            view! { <span class="badge badge--success">"Published"</span> }.into_any()
        }
        DocStatus::Archived => {
            view! { <span class="badge badge--neutral">"Archived"</span> }.into_any()
        }
    }
}

#[component]
pub fn DocList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_input = RwSignal::new(String::new());

    // Reference data for the form pickers (and the category column).
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let subcategories: RwSignal<Vec<Subcategory>> = RwSignal::new(Vec::new());
    let tags: RwSignal<Vec<Tag>> = RwSignal::new(Vec::new());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Doc>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Doc>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_docs(query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.data;
                        s.meta = page.meta;
                        s.is_loaded = true;
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("doc list fetch failed: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let load_categories = move || {
        spawn_local(async move {
            match category_api::fetch_category_options().await {
                Ok(list) => categories.set(list),
                Err(e) => log::warn!("category options fetch failed: {}", e),
            }
        });
    };
    let load_subcategories = move || {
        spawn_local(async move {
            match subcategory_api::fetch_subcategory_options().await {
                Ok(list) => subcategories.set(list),
                Err(e) => log::warn!("subcategory options fetch failed: {}", e),
            }
        });
    };
    let load_tags = move || {
        spawn_local(async move {
            match tag_api::fetch_tag_options().await {
                Ok(list) => tags.set(list),
                Err(e) => log::warn!("tag options fetch failed: {}", e),
            }
        });
    };
    load_categories();
    load_subcategories();
    load_tags();

    let query_key = Memo::new(move |_| state.with(|s| s.query.query_string()));
    Effect::new(move |_| {
        query_key.track();
        load();
    });

    let handle_create = move |payload: DocPayload| {
        set_saving.set(true);
        spawn_local(async move {
            match api::create_doc(payload).await {
                Ok(()) => {
                    toasts.success("Doc created");
                    set_saving.set(false);
                    set_show_create.set(false);
                    load();
                }
                Err(e) => {
                    toasts.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    let handle_update = move |payload: DocPayload| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_doc(&current.id, payload).await {
                Ok(()) => {
                    toasts.success("Doc updated");
                    set_saving.set(false);
                    editing.set(None);
                    load();
                }
                Err(e) => {
                    toasts.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(current) = deleting.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::delete_doc(&current.id).await {
                Ok(()) => {
                    toasts.success("Doc deleted");
                    set_saving.set(false);
                    deleting.set(None);
                    load();
                }
                Err(e) => {
                    toasts.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    let toggle_sort = move |field: SortField| {
        move |_| state.update(|s| s.query.toggle_sort(field))
    };

    let category_names = Memo::new(move |_| {
        categories
            .get()
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect::<HashMap<String, String>>()
    });
    let category_name = move |id: &str| -> String {
        category_names.with(|names| names.get(id).cloned().unwrap_or_else(|| "—".to_string()))
    };

    let homepage_slots = move || {
        state.with(|s| {
            s.meta
                .homepage_total
                .map(|used| format!("Homepage slots: {}/{}", used, MAX_HOMEPAGE_DOCS))
        })
    };

    let empty_message = move || {
        let q = state.with(|s| s.query.search_query.clone());
        if q.is_empty() {
            "No docs yet. Create your first one.".to_string()
        } else {
            format!("No docs match \"{}\"", q)
        }
    };

    view! {
        <div class="content">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Docs"</h1>
                    <Badge>{move || state.with(|s| s.meta.total.to_string())}</Badge>
                    {move || homepage_slots().map(|text| view! {
                        <span class="badge badge--neutral">{text}</span>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " New doc"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="toolbar">
                <SearchBox
                    input=search_input
                    placeholder="Search docs..."
                    on_commit=Callback::new(move |text: String| {
                        state.update(|s| s.query.commit_search(&text));
                    })
                    on_clear=Callback::new(move |_| {
                        state.update(|s| s.query.clear_search());
                    })
                />
                <select
                    class="toolbar__status"
                    prop:value=move || state.with(|s| s.query.status.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.query.set_status(if value.is_empty() { None } else { Some(value) })
                        });
                    }
                >
                    <option value="">"All statuses"</option>
                    <option value="draft">"Draft"</option>
                    <option value="published">"Published"</option>
                    <option value="archived">"Archived"</option>
                </select>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">
                    {e}
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        "Retry"
                    </Button>
                </div>
            })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Flags"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(SortField::CreatedAt)>
                                "Created"
                                {move || state.with(|s| sort_indicator(s.query.sort_by, s.query.sort, SortField::CreatedAt))}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort(SortField::UpdatedAt)>
                                "Updated"
                                {move || state.with(|s| sort_indicator(s.query.sort_by, s.query.sort, SortField::UpdatedAt))}
                            </th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() && !state.with(|s| s.is_loaded) {
                                view! {
                                    <tr>
                                        <td colspan="7" class="table__state-cell">
                                            <Spinner />
                                            " Loading..."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else if state.with(|s| s.is_loaded && s.items.is_empty()) {
                                view! {
                                    <tr>
                                        <td colspan="7" class="table__state-cell">{empty_message()}</td>
                                    </tr>
                                }.into_any()
                            } else {
                                state.with(|s| s.items.clone()).into_iter().map(|doc| {
                                    let edit_record = doc.clone();
                                    let delete_record = doc.clone();
                                    let title = if doc.title.trim().is_empty() {
                                        "(untitled draft)".to_string()
                                    } else {
                                        doc.title.clone()
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{title}</td>
                                            <td class="table__cell">{category_name(&doc.category_id)}</td>
                                            <td class="table__cell">{status_badge(doc.status)}</td>
                                            <td class="table__cell table__cell--flags">
                                                {doc.is_featured.then(|| icon("star"))}
                                                {doc.is_homepage.then(|| icon("home"))}
                                            </td>
                                            <td class="table__cell">{format_datetime(&doc.created_at)}</td>
                                            <td class="table__cell">{format_datetime(&doc.updated_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(edit_record.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deleting.set(Some(delete_record.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.query.page))
                total_pages=Signal::derive(move || state.with(|s| s.meta.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.meta.total))
                limit=Signal::derive(move || state.with(|s| s.query.limit))
                on_page_change=Callback::new(move |page| state.update(|s| s.query.set_page(page)))
                on_limit_change=Callback::new(move |limit| state.update(|s| s.query.set_limit(limit)))
            />

            {move || show_create.get().then(|| view! {
                <DocDialog
                    categories=categories
                    subcategories=subcategories
                    tags=tags
                    homepage_total=Signal::derive(move || state.with(|s| s.meta.homepage_total))
                    saving=saving
                    on_submit=Callback::new(handle_create)
                    on_cancel=Callback::new(move |_| set_show_create.set(false))
                    on_categories_changed=Callback::new(move |_| load_categories())
                    on_subcategories_changed=Callback::new(move |_| load_subcategories())
                    on_tags_changed=Callback::new(move |_| load_tags())
                />
            })}

            {move || editing.get().map(|doc| view! {
                <DocDialog
                    initial=doc
                    categories=categories
                    subcategories=subcategories
                    tags=tags
                    homepage_total=Signal::derive(move || state.with(|s| s.meta.homepage_total))
                    saving=saving
                    on_submit=Callback::new(handle_update)
                    on_cancel=Callback::new(move |_| editing.set(None))
                    on_categories_changed=Callback::new(move |_| load_categories())
                    on_subcategories_changed=Callback::new(move |_| load_subcategories())
                    on_tags_changed=Callback::new(move |_| load_tags())
                />
            })}

            {move || deleting.get().map(|doc| {
                let label = if doc.title.trim().is_empty() { "this draft".to_string() } else { format!("\"{}\"", doc.title) };
                view! {
                    <ConfirmDialog
                        title="Delete doc"
                        message=format!("Delete {}? This cannot be undone.", label)
                        confirming=saving
                        on_confirm=Callback::new(handle_delete)
                        on_cancel=Callback::new(move |_| deleting.set(None))
                    />
                }
            })}
        </div>
    }
}
