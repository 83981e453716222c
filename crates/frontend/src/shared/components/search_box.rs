use crate::shared::icons::icon;
use leptos::prelude::*;

/// Two-phase search box: typing only updates the local input signal; the
/// query commits on Enter or on the search button. Clearing commits an empty
/// query immediately.
#[component]
pub fn SearchBox(
    /// Live input value, owned by the caller so it survives re-renders.
    input: RwSignal<String>,
    /// Called with the text to commit (Enter / search button).
    on_commit: Callback<String>,
    /// Called when the clear button is pressed.
    on_clear: Callback<()>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let commit = move || on_commit.run(input.get_untracked());
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="search-box" style="position: relative; display: inline-flex; align-items: center; gap: 6px;">
            <input
                type="text"
                class="search-box__input"
                placeholder=placeholder_text
                prop:value=move || input.get()
                disabled=move || disabled.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        commit();
                    }
                }
            />
            {move || if !input.get().is_empty() {
                view! {
                    <button
                        class="search-box__clear"
                        style="position: absolute; right: 76px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; color: #666; line-height: 1;"
                        title="Clear"
                        on:click=move |_| {
                            input.set(String::new());
                            on_clear.run(());
                        }
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
            <button
                class="button button--secondary search-box__submit"
                disabled=move || disabled.get()
                on:click=move |_| commit()
            >
                {icon("search")}
                "Search"
            </button>
        </div>
    }
}
