pub mod state;

use contracts::domain::tag::{Tag, TagPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::tag::api;
use crate::domain::tag::ui::details::TagDialog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use state::create_state;

#[component]
pub fn TagList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search_input = RwSignal::new(String::new());

    let (show_create, set_show_create) = signal(false);
    let editing: RwSignal<Option<Tag>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Tag>> = RwSignal::new(None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        let query = state.with_untracked(|s| s.query.clone());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_tags(query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.items = page.data;
                        s.meta = page.meta;
                        s.is_loaded = true;
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("tag list fetch failed: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let query_key = Memo::new(move |_| state.with(|s| s.query.query_string()));
    Effect::new(move |_| {
        query_key.track();
        load();
    });

    let handle_create = move |payload: TagPayload| {
        set_saving.set(true);
        spawn_local(async move {
            match api::create_tag(payload).await {
                Ok(()) => {
                    toasts.success("Tag created");
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

    let handle_update = move |payload: TagPayload| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_tag(&current.id, payload).await {
                Ok(()) => {
                    toasts.success("Tag updated");
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
            match api::delete_tag(&current.id).await {
                Ok(()) => {
                    toasts.success("Tag deleted");
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

    let empty_message = move || {
        let q = state.with(|s| s.query.search_query.clone());
        if q.is_empty() {
            "No tags yet. Create your first one.".to_string()
        } else {
            format!("No tags match \"{}\"", q)
        }
    };

    view! {
        <div class="content">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tags"</h1>
                    <Badge>{move || state.with(|s| s.meta.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " New tag"
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
                    placeholder="Search tags..."
                    on_commit=Callback::new(move |text: String| {
                        state.update(|s| s.query.commit_search(&text));
                    })
                    on_clear=Callback::new(move |_| {
                        state.update(|s| s.query.clear_search());
                    })
                />
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
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() && !state.with(|s| s.is_loaded) {
                                view! {
                                    <tr>
                                        <td colspan="3" class="table__state-cell">
                                            <Spinner />
                                            " Loading..."
                                        </td>
                                    </tr>
                                }.into_any()
                            } else if state.with(|s| s.is_loaded && s.items.is_empty()) {
                                view! {
                                    <tr>
                                        <td colspan="3" class="table__state-cell">{empty_message()}</td>
                                    </tr>
                                }.into_any()
                            } else {
                                state.with(|s| s.items.clone()).into_iter().map(|tag| {
                                    let edit_record = tag.clone();
                                    let delete_record = tag.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{tag.name.clone()}</td>
                                            <td class="table__cell"><code>{tag.slug.clone()}</code></td>
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
                <TagDialog
                    saving=saving
                    on_submit=Callback::new(handle_create)
                    on_cancel=Callback::new(move |_| set_show_create.set(false))
                />
            })}

            {move || editing.get().map(|tag| view! {
                <TagDialog
                    initial=tag
                    saving=saving
                    on_submit=Callback::new(handle_update)
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            {move || deleting.get().map(|tag| view! {
                <ConfirmDialog
                    title="Delete tag"
                    message=format!("Delete tag \"{}\"? Docs keep working, the tag is removed from them.", tag.name)
                    confirming=saving
                    on_confirm=Callback::new(handle_delete)
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </div>
    }
}
