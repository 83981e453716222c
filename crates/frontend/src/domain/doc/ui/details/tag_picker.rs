use contracts::domain::tag::Tag;
use contracts::shared::constants::MAX_DOC_TAGS;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Multi-select tag picker with the 5-tag cap. Hitting the cap shows a
/// non-blocking notice and leaves the selection unchanged.
#[component]
pub fn TagPicker(
    #[prop(into)] options: Signal<Vec<Tag>>,
    selected: RwSignal<Vec<String>>,
    #[prop(optional)] disabled: Signal<bool>,
    on_create_new: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let (open, set_open) = signal(false);
    let filter = RwSignal::new(String::new());

    let add_tag = move |id: String| {
        let mut current = selected.get_untracked();
        if current.contains(&id) {
            return;
        }
        if current.len() >= MAX_DOC_TAGS {
            toasts.info(format!("A doc can carry at most {} tags", MAX_DOC_TAGS));
            return;
        }
        current.push(id);
        selected.set(current);
    };

    let remove_tag = move |id: String| {
        selected.update(|list| list.retain(|t| *t != id));
    };

    let selected_tags = move || {
        let ids = selected.get();
        let all = options.get();
        ids.into_iter()
            .map(|id| {
                let label = all
                    .iter()
                    .find(|t| t.id == id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| id.clone());
                (id, label)
            })
            .collect::<Vec<_>>()
    };

    let available = move || {
        let needle = filter.get().to_lowercase();
        let chosen = selected.get();
        options
            .get()
            .into_iter()
            .filter(|t| !chosen.contains(&t.id))
            .filter(|t| needle.is_empty() || t.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="tag-picker">
            <div class="tag-picker__chips">
                {move || selected_tags().into_iter().map(|(id, label)| {
                    view! {
                        <span class="tag-picker__chip">
                            {label}
                            <button
                                type="button"
                                class="tag-picker__chip-remove"
                                disabled=move || disabled.get()
                                on:click=move |_| remove_tag(id.clone())
                            >
                                {icon("x")}
                            </button>
                        </span>
                    }
                }).collect_view()}
                <button
                    type="button"
                    class="tag-picker__add"
                    disabled=move || disabled.get()
                    on:click=move |_| {
                        filter.set(String::new());
                        set_open.update(|o| *o = !*o);
                    }
                >
                    {icon("plus")}
                    {move || format!("Add tag ({}/{})", selected.get().len(), MAX_DOC_TAGS)}
                </button>
            </div>

            {move || open.get().then(|| view! {
                <div class="combobox__panel">
                    <input
                        type="text"
                        class="combobox__filter"
                        placeholder="Type to filter..."
                        prop:value=move || filter.get()
                        on:input=move |ev| filter.set(event_target_value(&ev))
                    />
                    <div class="combobox__options">
                        {move || {
                            let items = available();
                            if items.is_empty() {
                                view! { <div class="combobox__empty">"No matches"</div> }.into_any()
                            } else {
                                items.into_iter().map(|tag| {
                                    let id = tag.id.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="combobox__option"
                                            on:click=move |_| add_tag(id.clone())
                                        >
                                            {tag.name.clone()}
                                        </button>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                    <button
                        type="button"
                        class="combobox__create"
                        on:click=move |_| {
                            set_open.set(false);
                            on_create_new.run(());
                        }
                    >
                        {icon("plus")}
                        "New tag..."
                    </button>
                </div>
            })}
        </div>
    }
}
