use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dropdown picker for referencing another entity by id.
///
/// Options are filtered by a text box inside the open panel; when the wanted
/// entry does not exist, the footer button hands off to an inline-create
/// dialog owned by the caller. The newly created entry shows up after the
/// caller refetches options -- it is not auto-selected.
#[component]
pub fn RefCombobox(
    /// `(id, label)` pairs, already fetched by the caller.
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Selected id; empty string means nothing selected.
    selected: RwSignal<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: Signal<bool>,
    /// Label for the inline-create footer button; the button is omitted when
    /// no callback is given.
    #[prop(optional)]
    create_label: Option<&'static str>,
    #[prop(optional)] on_create_new: Option<Callback<()>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let filter = RwSignal::new(String::new());

    let selected_label = move || {
        let id = selected.get();
        if id.is_empty() {
            return placeholder.get().unwrap_or_else(|| "Select...".to_string());
        }
        options
            .get()
            .into_iter()
            .find(|(option_id, _)| *option_id == id)
            .map(|(_, label)| label)
            .unwrap_or(id)
    };

    let filtered = move || {
        let needle = filter.get().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="combobox" style="position: relative;">
            <button
                type="button"
                class="combobox__control"
                disabled=move || disabled.get()
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        filter.set(String::new());
                        set_open.update(|o| *o = !*o);
                    }
                }
            >
                <span>{selected_label}</span>
                {icon("chevron-down")}
            </button>

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
                            let items = filtered();
                            if items.is_empty() {
                                view! { <div class="combobox__empty">"No matches"</div> }.into_any()
                            } else {
                                items.into_iter().map(|(id, label)| {
                                    let option_id = id.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="combobox__option"
                                            class:combobox__option--selected=move || selected.get() == option_id
                                            on:click=move |_| {
                                                selected.set(id.clone());
                                                set_open.set(false);
                                            }
                                        >
                                            {label}
                                        </button>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                    {on_create_new.map(|callback| view! {
                        <button
                            type="button"
                            class="combobox__create"
                            on:click=move |_| {
                                set_open.set(false);
                                callback.run(());
                            }
                        >
                            {icon("plus")}
                            {create_label.unwrap_or("Create new...")}
                        </button>
                    })}
                </div>
            })}
        </div>
    }
}
