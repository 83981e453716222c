use crate::shared::icons::icon;
use leptos::prelude::*;

/// Which page numbers to render: a window around the current page plus the
/// first and last, with `0` standing in for an ellipsis gap.
fn page_window(current: u64, total: u64) -> Vec<u64> {
    let mut pages = Vec::new();
    let mut last_pushed = 0;
    for page in 1..=total {
        let near = page.abs_diff(current) <= 1;
        if page == 1 || page == total || near {
            if last_pushed != 0 && page != last_pushed + 1 {
                pages.push(0);
            }
            pages.push(page);
            last_pushed = page;
        }
    }
    pages
}

/// Numbered pagination plus a page-size select. Renders nothing while the
/// data fits on a single page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u64>,
    #[prop(into)] total_pages: Signal<u64>,
    #[prop(into)] total_count: Signal<u64>,
    #[prop(into)] limit: Signal<u64>,
    on_page_change: Callback<u64>,
    on_limit_change: Callback<u64>,
    /// Page-size options; defaults to the list-endpoint set.
    #[prop(optional)]
    limit_options: Option<Vec<u64>>,
) -> impl IntoView {
    let limit_opts =
        limit_options.unwrap_or_else(|| crate::shared::list_query::LIMIT_OPTIONS.to_vec());

    view! {
        <Show when=move || (total_pages.get() > 1)>
            <div class="pagination">
                <button
                    class="pagination__btn"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>

                {move || page_window(current_page.get(), total_pages.get())
                    .into_iter()
                    .map(|page| {
                        if page == 0 {
                            view! { <span class="pagination__gap">{"…"}</span> }.into_any()
                        } else {
                            view! {
                                <button
                                    class="pagination__btn"
                                    class:pagination__btn--active=move || current_page.get() == page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()}

                <button
                    class="pagination__btn"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>

                <span class="pagination__info">
                    {move || format!("{} items", total_count.get())}
                </span>

                <select
                    class="pagination__limit"
                    on:change=move |ev| {
                        let value = event_target_value(&ev)
                            .parse()
                            .unwrap_or(crate::shared::list_query::DEFAULT_LIMIT);
                        on_limit_change.run(value);
                    }
                    prop:value=move || limit.get().to_string()
                >
                    {limit_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || limit.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::page_window;

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_window(1, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn large_totals_collapse_with_gaps() {
        assert_eq!(page_window(5, 10), vec![1, 0, 4, 5, 6, 0, 10]);
        assert_eq!(page_window(1, 10), vec![1, 2, 0, 10]);
        assert_eq!(page_window(10, 10), vec![1, 0, 9, 10]);
    }
}
