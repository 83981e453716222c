pub mod state;

use std::collections::HashMap;

use contracts::domain::category::{Category, CategoryStatus};
use contracts::domain::subcategory::{Subcategory, SubcategoryPayload};
use contracts::shared::constants::MAX_HOMEPAGE_SUBCATEGORIES;
use contracts::shared::list::SortField;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api as category_api;
use crate::domain::subcategory::api;
use crate::domain::subcategory::ui::details::SubcategoryDialog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::sort::sort_indicator;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use state::create_state;

#[component]
pub fn SubcategoryList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_input = RwSignal::new(String::new());

    // Categories are fetched once for the name column and the dialog picker.
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Subcategory>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Subcategory>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_subcategories(query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.data;
                        s.meta = page.meta;
                        s.is_loaded = true;
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("subcategory list fetch failed: {}", e);
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
    load_categories();

    let query_key = Memo::new(move |_| state.with(|s| s.query.query_string()));
    Effect::new(move |_| {
        query_key.track();
        load();
    });

    let handle_create = move |payload: SubcategoryPayload| {
        set_saving.set(true);
        spawn_local(async move {
            match api::create_subcategory(payload).await {
                Ok(()) => {
                    toasts.success("Subcategory created");
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

    let handle_update = move |payload: SubcategoryPayload| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_subcategory(&current.id, payload).await {
                Ok(()) => {
                    toasts.success("Subcategory updated");
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
            match api::delete_subcategory(&current.id).await {
                Ok(()) => {
                    toasts.success("Subcategory deleted");
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
                .map(|used| format!("Homepage slots: {}/{}", used, MAX_HOMEPAGE_SUBCATEGORIES))
        })
    };

    let empty_message = move || {
        let q = state.with(|s| s.query.search_query.clone());
        if q.is_empty() {
            "No subcategories yet. Create your first one.".to_string()
        } else {
            format!("No subcategories match \"{}\"", q)
        }
    };

    view! {
        <div class="content">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Subcategories"</h1>
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
                        " New subcategory"
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
                    placeholder="Search subcategories..."
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
                    <option value="active">"Active"</option>
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Homepage"</th>
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
                                state.with(|s| s.items.clone()).into_iter().map(|subcategory| {
                                    let edit_record = subcategory.clone();
                                    let delete_record = subcategory.clone();
                                    let status = subcategory.status;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{subcategory.name.clone()}</td>
                                            <td class="table__cell">{category_name(&subcategory.category_id)}</td>
                                            <td class="table__cell">
                                                {match status {
                                                    CategoryStatus::Active => view! { <span class="badge badge--success">"Active"</span> }.into_any(),
                                                    CategoryStatus::Archived => view! { <span class="badge badge--neutral">"Archived"</span> }.into_any(),
                                                }}
                                            </td>
                                            <td class="table__cell">
                                                {subcategory.is_homepage.then(|| icon("home"))}
                                            </td>
                                            <td class="table__cell">{format_datetime(&subcategory.created_at)}</td>
                                            <td class="table__cell">{format_datetime(&subcategory.updated_at)}</td>
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
                <SubcategoryDialog
                    categories=categories
                    homepage_total=Signal::derive(move || state.with(|s| s.meta.homepage_total))
                    saving=saving
                    on_submit=Callback::new(handle_create)
                    on_cancel=Callback::new(move |_| set_show_create.set(false))
                    on_categories_changed=Callback::new(move |_| load_categories())
                />
            })}

            {move || editing.get().map(|subcategory| view! {
                <SubcategoryDialog
                    initial=subcategory
                    categories=categories
                    homepage_total=Signal::derive(move || state.with(|s| s.meta.homepage_total))
                    saving=saving
                    on_submit=Callback::new(handle_update)
                    on_cancel=Callback::new(move |_| editing.set(None))
                    on_categories_changed=Callback::new(move |_| load_categories())
                />
            })}

            {move || deleting.get().map(|subcategory| view! {
                <ConfirmDialog
                    title="Delete subcategory"
                    message=format!("Delete subcategory \"{}\"?", subcategory.name)
                    confirming=saving
                    on_confirm=Callback::new(handle_delete)
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </div>
    }
}
