use contracts::domain::tag::{Tag, TagPayload};
use contracts::shared::validation::{error_for, FieldError};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Create/update dialog for a tag.
#[component]
pub fn TagDialog(
    #[prop(optional)] initial: Option<Tag>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<TagPayload>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let init = initial
        .as_ref()
        .map(TagPayload::from_record)
        .unwrap_or_default();
    let title = if initial.is_some() {
        "Edit tag"
    } else {
        "New tag"
    };

    let name = RwSignal::new(init.name);
    let slug = RwSignal::new(init.slug);

    let errors: RwSignal<Vec<FieldError>> = RwSignal::new(Vec::new());
    let field_error = move |path: &'static str| {
        errors.with(|list| error_for(list, path).map(|e| e.message.clone()))
    };

    let handle_save = move |_| {
        let payload = TagPayload {
            name: name.get_untracked(),
            slug: slug.get_untracked(),
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
            <div class="modal modal--narrow" on:click=move |ev| ev.stop_propagation()>
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
