pub mod state;

use contracts::domain::category::{Category, CategoryPayload, CategoryStatus};
use contracts::shared::list::SortField;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api;
use crate::domain::category::ui::details::CategoryDialog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::sort::sort_indicator;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use state::create_state;

fn status_badge(status: CategoryStatus) -> AnyView {
    match status {
        CategoryStatus::Active => {
            view! { <span class="badge badge--success">"Active"</span> }.into_any()
        }
        CategoryStatus::Archived => {
            view! { <span class="badge badge--neutral">"Archived"</span> }.into_any()
        }
    }
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_input = RwSignal::new(String::new());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Category>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Category>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_categories(query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.data;
                        s.meta = page.meta;
                        s.is_loaded = true;
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("category list fetch failed: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    // Refetch whenever the committed query tuple changes; the memo keeps
    // item/meta writes from re-triggering the effect.
    let query_key = Memo::new(move |_| state.with(|s| s.query.query_string()));
    Effect::new(move |_| {
        query_key.track();
        load();
    });

    let handle_create = move |payload: CategoryPayload| {
        set_saving.set(true);
        spawn_local(async move {
            match api::create_category(payload).await {
                Ok(()) => {
                    toasts.success("Category created");
                    set_saving.set(false);
                    set_show_create.set(false);
                    load();
                }
                Err(e) => {
                    // keep the dialog open so the input can be corrected
                    toasts.error(e);
                    set_saving.set(false);
                }
            }
        });
    };

    let handle_update = move |payload: CategoryPayload| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_category(&current.id, payload).await {
                Ok(()) => {
                    toasts.success("Category updated");
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
            match api::delete_category(&current.id).await {
                Ok(()) => {
                    toasts.success("Category deleted");
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

    let empty_message = move || {
        let q = state.with(|s| s.query.search_query.clone());
        if q.is_empty() {
            "No categories yet. Create your first one.".to_string()
        } else {
            format!("No categories match \"{}\"", q)
        }
    };

    view! {
        <div class="content">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                    <Badge>{move || state.with(|s| s.meta.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " New category"
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
                    placeholder="Search categories..."
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
                            <th class="table__header-cell">"Slug"</th>
                            <th class="table__header-cell">"Status"</th>
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
                                        <td colspan="6" class="table__state-cell">
                                            <Spinner />
                                            " Loading..."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else if state.with(|s| s.is_loaded && s.items.is_empty()) {
                                view! {
                                    <tr>
                                        <td colspan="6" class="table__state-cell">{empty_message()}</td>
                                    </tr>
                                }.into_any()
                            } else {
                                state.with(|s| s.items.clone()).into_iter().map(|category| {
                                    let edit_record = category.clone();
                                    let delete_record = category.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{category.name.clone()}</td>
                                            <td class="table__cell"><code>{category.slug.clone()}</code></td>
                                            <td class="table__cell">{status_badge(category.status)}</td>
                                            <td class="table__cell">{format_datetime(&category.created_at)}</td>
                                            <td class="table__cell">{format_datetime(&category.updated_at)}</td>
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
                <CategoryDialog
                    saving=saving
                    on_submit=Callback::new(handle_create)
                    on_cancel=Callback::new(move |_| set_show_create.set(false))
                />
            })}

            {move || editing.get().map(|category| view! {
                <CategoryDialog
                    initial=category
                    saving=saving
                    on_submit=Callback::new(handle_update)
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            {move || deleting.get().map(|category| view! {
                <ConfirmDialog
                    title="Delete category"
                    message=format!("Delete category \"{}\"? Its subcategories keep their data but lose the listing.", category.name)
                    confirming=saving
                    on_confirm=Callback::new(handle_delete)
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </div>
    }
}
