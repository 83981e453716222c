use contracts::domain::category::{Category, CategoryPayload, CategoryStatus};
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

fn parse_status(value: &str) -> CategoryStatus {
    match value {
        "archived" => CategoryStatus::Archived,
        _ => CategoryStatus::Active,
    }
}

/// Create/update dialog for a category. `initial` pre-fills the form; the
/// dialog never calls the API -- the caller owns the mutation and keeps the
/// dialog open on failure.
#[component]
pub fn CategoryDialog(
    #[prop(optional)] initial: Option<Category>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<CategoryPayload>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let init = initial
        .as_ref()
        .map(CategoryPayload::from_record)
        .unwrap_or_default();
    let title = if initial.is_some() {
        "Edit category"
    } else {
        "New category"
    };

    let name = RwSignal::new(init.name);
    let slug = RwSignal::new(init.slug);
    let description = RwSignal::new(init.description);
    let meta_title = RwSignal::new(init.meta_title);
    let meta_description = RwSignal::new(init.meta_description);
    let status = RwSignal::new(init.status.as_str().to_string());

    let errors: RwSignal<Vec<FieldError>> = RwSignal::new(Vec::new());
    let field_error = move |path: &'static str| {
        errors.with(|list| error_for(list, path).map(|e| e.message.clone()))
    };

    let handle_save = move |_| {
        let payload = CategoryPayload {
            name: name.get_untracked(),
            slug: slug.get_untracked(),
            description: description.get_untracked(),
            meta_title: meta_title.get_untracked(),
            meta_description: meta_description.get_untracked(),
            status: parse_status(&status.get_untracked()),
        };
        let found = payload.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        on_submit.run(payload.finalize());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Name"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                        {move || field_error("name").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Slug"</Label>
                        <Input
                            value=slug
                            placeholder="left blank, derived from the name"
                            disabled=Signal::derive(move || saving.get())
                        />
                        {move || field_error("slug").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Textarea value=description disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Meta title"</Label>
                        <Input
                            value=meta_title
                            placeholder="defaults to the name"
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Meta description"</Label>
                        <Input
                            value=meta_description
                            placeholder="defaults to the description"
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Status"</Label>
                        <select
                            class="form__select"
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            <option value="active">"Active"</option>
                            <option value="archived">"Archived"</option>
                        </select>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
