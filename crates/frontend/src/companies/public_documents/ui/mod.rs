use contracts::companies::public_document::CompanyKind;
use contracts::shared::list::SortOrder;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::engine::{Column, VpdTable, PAGE_SIZE_OPTIONS};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

fn parse_kind(value: &str) -> CompanyKind {
    match value {
        "v2" => CompanyKind::CompanyV2,
        "llp" => CompanyKind::Llp,
        _ => CompanyKind::CompanyV3,
    }
}

/// Public filings browser: one fetch per CIN, then the whole table -- facets,
/// search, sort, paging, column visibility -- runs client-side in `VpdTable`.
#[component]
pub fn PublicDocumentsPage() -> impl IntoView {
    let toasts = use_toasts();
    let cin = RwSignal::new(String::new());
    let kind_value = RwSignal::new("v3".to_string());
    let (loading, set_loading) = signal(false);
    let table: RwSignal<Option<VpdTable>> = RwSignal::new(None);
    let (columns_menu_open, set_columns_menu_open) = signal(false);

    let load = move || {
        let cin_value = cin.get_untracked().trim().to_string();
        if cin_value.is_empty() {
            toasts.info("Enter a CIN first");
            return;
        }
        let kind = parse_kind(&kind_value.get_untracked());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_public_documents(&cin_value, kind).await {
                Ok(docs) => {
                    table.set(Some(VpdTable::new(kind, docs)));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("public documents fetch failed: {}", e);
                    toasts.error(e);
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="content">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Public documents"</h1>
                </div>
            </div>

            <div class="toolbar">
                <Input value=cin placeholder="CIN / LLPIN..." />
                <select
                    class="toolbar__status"
                    prop:value=move || kind_value.get()
                    on:change=move |ev| kind_value.set(event_target_value(&ev))
                >
                    <option value="v3">{CompanyKind::CompanyV3.label()}</option>
                    <option value="v2">{CompanyKind::CompanyV2.label()}</option>
                    <option value="llp">{CompanyKind::Llp.label()}</option>
                </select>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("search")}
                    {move || if loading.get() { " Loading..." } else { " Load documents" }}
                </Button>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="table__state-block">
                            <Spinner />
                            " Fetching documents..."
                        </div>
                    }.into_any();
                }
                if table.with(|t| t.is_none()) {
                    return view! {
                        <div class="table__state-block">
                            "Enter a CIN and load its public filing documents."
                        </div>
                    }.into_any();
                }

                view! { <DocumentsTable table=table columns_menu_open=columns_menu_open set_columns_menu_open=set_columns_menu_open /> }.into_any()
            }}
        </div>
    }
}

#[component]
fn DocumentsTable(
    table: RwSignal<Option<VpdTable>>,
    columns_menu_open: ReadSignal<bool>,
    set_columns_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    // All reducer calls funnel through this helper.
    let update = move |f: &dyn Fn(&mut VpdTable)| {
        table.update(|t| {
            if let Some(t) = t.as_mut() {
                f(t);
            }
        })
    };
    let read = move |f: &dyn Fn(&VpdTable) -> String| {
        table.with(|t| t.as_ref().map(f).unwrap_or_default())
    };

    let category_menu_open =
        Signal::derive(move || table.with(|t| t.as_ref().is_some_and(|t| t.category_menu_open)));
    let form_menu_open =
        Signal::derive(move || table.with(|t| t.as_ref().is_some_and(|t| t.form_id_menu_open)));
    let has_form_ids =
        Signal::derive(move || table.with(|t| t.as_ref().is_some_and(|t| t.kind.has_form_ids())));
    let search = Signal::derive(move || read(&|t| t.search.clone()));
    let page_size_options = PAGE_SIZE_OPTIONS.iter().map(|&s| s as u64).collect::<Vec<_>>();

    view! {
        <div class="vpd-table">
            <div class="toolbar toolbar--filters">
                <input
                    type="text"
                    class="search-box__input"
                    placeholder="Search file, category, date..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        update(&|t| t.set_search(&text));
                    }
                />

                // Category facet, staged two-step commit
                <div class="dropdown" style="position: relative;">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| update(&|t| {
                            if t.category_menu_open {
                                t.cancel_category_filter();
                            } else {
                                t.open_category_menu();
                            }
                        })
                    >
                        {icon("filter")}
                        {move || {
                            let n = table.with(|t| t.as_ref().map(|t| t.selected_categories.len()).unwrap_or(0));
                            if n == 0 { "Category".to_string() } else { format!("Category ({})", n) }
                        }}
                    </button>
                    {move || category_menu_open.get().then(|| view! {
                        <div class="dropdown__panel">
                            {move || table.with(|t| t.as_ref().map(|t| t.category_counts.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|(category, count)| {
                                    let checked_category = category.clone();
                                    let toggle_category = category.clone();
                                    view! {
                                        <label class="dropdown__option" class:dropdown__option--disabled=count == 0>
                                            <input
                                                type="checkbox"
                                                disabled=count == 0
                                                prop:checked=move || table.with(|t| {
                                                    t.as_ref().is_some_and(|t| t.temp_categories.contains(&checked_category))
                                                })
                                                on:change=move |_| {
                                                    let category = toggle_category.clone();
                                                    update(&move |t| t.toggle_temp_category(&category));
                                                }
                                            />
                                            <span>{format!("{} ({})", category, count)}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                            <div class="dropdown__actions">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| update(&|t| t.cancel_category_filter())
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| update(&|t| t.apply_category_filter())
                                >
                                    "Apply"
                                </Button>
                            </div>
                        </div>
                    })}
                </div>

                // Form facet, v3 filings only
                {move || has_form_ids.get().then(|| view! {
                    <div class="dropdown" style="position: relative;">
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| update(&|t| {
                                if t.form_id_menu_open {
                                    t.cancel_form_id_filter();
                                } else {
                                    t.open_form_id_menu();
                                }
                            })
                        >
                            {icon("filter")}
                            {move || {
                                let n = table.with(|t| t.as_ref().map(|t| t.selected_form_ids.len()).unwrap_or(0));
                                if n == 0 { "Form".to_string() } else { format!("Form ({})", n) }
                            }}
                        </button>
                        {move || form_menu_open.get().then(|| view! {
                            <div class="dropdown__panel">
                                {move || table.with(|t| t.as_ref().map(|t| t.form_id_counts.clone()).unwrap_or_default())
                                    .into_iter()
                                    .map(|(form_id, count)| {
                                        let checked_form = form_id.clone();
                                        let toggle_form = form_id.clone();
                                        view! {
                                            <label class="dropdown__option" class:dropdown__option--disabled=count == 0>
                                                <input
                                                    type="checkbox"
                                                    disabled=count == 0
                                                    prop:checked=move || table.with(|t| {
                                                        t.as_ref().is_some_and(|t| t.temp_form_ids.contains(&checked_form))
                                                    })
                                                    on:change=move |_| {
                                                        let form_id = toggle_form.clone();
                                                        update(&move |t| t.toggle_temp_form_id(&form_id));
                                                    }
                                                />
                                                <span>{format!("{} ({})", form_id, count)}</span>
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                                <div class="dropdown__actions">
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| update(&|t| t.cancel_form_id_filter())
                                    >
                                        "Cancel"
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| update(&|t| t.apply_form_id_filter())
                                    >
                                        "Apply"
                                    </Button>
                                </div>
                            </div>
                        })}
                    </div>
                })}

                // Year facet commits immediately
                <div class="year-chips">
                    {move || table.with(|t| t.as_ref().map(|t| t.year_options()).unwrap_or_default())
                        .into_iter()
                        .map(|year| {
                            view! {
                                <button
                                    type="button"
                                    class="year-chips__chip"
                                    class:year-chips__chip--active=move || table.with(|t| {
                                        t.as_ref().is_some_and(|t| t.selected_years.contains(&year))
                                    })
                                    on:click=move |_| update(&move |t| t.toggle_year(year))
                                >
                                    {year.to_string()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // Column visibility
                <div class="dropdown" style="position: relative; margin-left: auto;">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| set_columns_menu_open.update(|o| *o = !*o)
                    >
                        {icon("columns")}
                        "Columns"
                    </button>
                    {move || columns_menu_open.get().then(|| view! {
                        <div class="dropdown__panel">
                            {[Column::FileName, Column::Category, Column::FilingDate, Column::FormId]
                                .into_iter()
                                .filter(|column| *column != Column::FormId || has_form_ids.get())
                                .map(|column| {
                                    view! {
                                        <label class="dropdown__option">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || table.with(|t| {
                                                    t.as_ref().is_some_and(|t| t.is_column_visible(column))
                                                })
                                                on:change=move |_| update(&move |t| t.toggle_column(column))
                                            />
                                            <span>{column.label()}</span>
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                    })}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| update(&|t| t.reset_filters())
                >
                    {icon("x")}
                    {move || {
                        let n = table.with(|t| t.as_ref().map(|t| t.active_filter_count()).unwrap_or(0));
                        if n == 0 { "Reset filters".to_string() } else { format!("Reset filters ({})", n) }
                    }}
                </Button>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {move || table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::FileName))).then(|| view! {
                                <th class="table__header-cell">"File name"</th>
                            })}
                            {move || table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::Category))).then(|| view! {
                                <th class="table__header-cell">"Category"</th>
                            })}
                            {move || table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::FilingDate))).then(|| view! {
                                <th
                                    class="table__header-cell table__header-cell--sortable"
                                    on:click=move |_| update(&|t| t.toggle_date_sort())
                                >
                                    "Filing date"
                                    {move || table.with(|t| match t.as_ref().and_then(|t| t.date_sort) {
                                        Some(SortOrder::Asc) => " ▲",
                                        Some(SortOrder::Desc) => " ▼",
                                        None => " ▼",
                                    })}
                                </th>
                            })}
                            {move || table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::FormId))).then(|| view! {
                                <th class="table__header-cell">"Form"</th>
                            })}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = table.with(|t| t.as_ref().map(|t| t.page_rows()).unwrap_or_default());
                            if rows.is_empty() {
                                let message = table.with(|t| {
                                    t.as_ref().map(|t| {
                                        if t.active_filter_count() == 0 {
                                            "No public documents on file.".to_string()
                                        } else {
                                            "No documents match the active filters.".to_string()
                                        }
                                    }).unwrap_or_default()
                                });
                                view! {
                                    <tr>
                                        <td colspan="5" class="table__state-cell">{message}</td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let file_url = row.doc.file_url.clone();
                                    view! {
                                        <tr class="table__row">
                                            {table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::FileName))).then(|| view! {
                                                <td class="table__cell">{row.doc.file_name.clone()}</td>
                                            })}
                                            {table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::Category))).then(|| view! {
                                                <td class="table__cell">{row.category.clone()}</td>
                                            })}
                                            {table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::FilingDate))).then(|| view! {
                                                <td class="table__cell">{format_date(&row.doc.filing_date)}</td>
                                            })}
                                            {table.with(|t| t.as_ref().is_some_and(|t| t.is_column_visible(Column::FormId))).then(|| view! {
                                                <td class="table__cell">{row.doc.form_id.clone().unwrap_or_else(|| "—".to_string())}</td>
                                            })}
                                            <td class="table__cell table__cell--actions">
                                                <a class="button button--secondary" href=file_url target="_blank" rel="noopener">
                                                    {icon("download")}
                                                    "View"
                                                </a>
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
                current_page=Signal::derive(move || table.with(|t| t.as_ref().map(|t| t.page as u64).unwrap_or(1)))
                total_pages=Signal::derive(move || table.with(|t| t.as_ref().map(|t| t.total_pages() as u64).unwrap_or(1)))
                total_count=Signal::derive(move || table.with(|t| t.as_ref().map(|t| t.total_filtered() as u64).unwrap_or(0)))
                limit=Signal::derive(move || table.with(|t| t.as_ref().map(|t| t.page_size as u64).unwrap_or(10)))
                on_page_change=Callback::new(move |page: u64| update(&move |t| t.set_page(page as usize)))
                on_limit_change=Callback::new(move |limit: u64| update(&move |t| t.set_page_size(limit as usize)))
                limit_options=page_size_options
            />
        </div>
    }
}
