use contracts::domain::category::{Category, CategoryPayload, CategoryStatus};
use contracts::domain::subcategory::{Subcategory, SubcategoryPayload};
use contracts::shared::constants::MAX_HOMEPAGE_SUBCATEGORIES;
use contracts::shared::validation::{can_set_homepage, error_for, FieldError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api as category_api;
use crate::domain::category::ui::details::CategoryDialog;
use crate::shared::components::ref_combobox::RefCombobox;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

fn parse_status(value: &str) -> CategoryStatus {
    match value {
        "archived" => CategoryStatus::Archived,
        _ => CategoryStatus::Active,
    }
}

/// Create/update dialog for a subcategory. The category reference is picked
/// from a combobox with inline creation; once a subcategory exists, its
/// category is immutable and the picker is disabled.
#[component]
pub fn SubcategoryDialog(
    #[prop(optional)] initial: Option<Subcategory>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    /// Homepage slots in use, from the last list fetch; `None` until known.
    #[prop(into)]
    homepage_total: Signal<Option<u64>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<SubcategoryPayload>,
    on_cancel: Callback<()>,
    /// Fired after an inline category create so the caller can refetch.
    on_categories_changed: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let is_edit = initial.is_some();
    let init = initial
        .as_ref()
        .map(SubcategoryPayload::from_record)
        .unwrap_or_default();
    let was_homepage = init.is_homepage;
    let title = if is_edit {
        "Edit subcategory"
    } else {
        "New subcategory"
    };

    let name = RwSignal::new(init.name);
    let slug = RwSignal::new(init.slug);
    let description = RwSignal::new(init.description);
    let meta_title = RwSignal::new(init.meta_title);
    let meta_description = RwSignal::new(init.meta_description);
    let status = RwSignal::new(init.status.as_str().to_string());
    let category_id = RwSignal::new(init.category_id);
    let is_homepage = RwSignal::new(init.is_homepage);

    let (show_create_category, set_show_create_category) = signal(false);
    let (creating_category, set_creating_category) = signal(false);

    let errors: RwSignal<Vec<FieldError>> = RwSignal::new(Vec::new());
    let field_error = move |path: &'static str| {
        errors.with(|list| error_for(list, path).map(|e| e.message.clone()))
    };

    let category_options = Signal::derive(move || {
        categories
            .get()
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect::<Vec<_>>()
    });

    // Advisory cap, checked against the last fetched meta before any call.
    let toggle_homepage = move |checked: bool| {
        if checked {
            let used = homepage_total.get_untracked().unwrap_or(0);
            if !can_set_homepage(was_homepage, used, MAX_HOMEPAGE_SUBCATEGORIES) {
                toasts.error(format!(
                    "Homepage already has {} subcategories. Remove one first.",
                    MAX_HOMEPAGE_SUBCATEGORIES
                ));
                return;
            }
        }
        is_homepage.set(checked);
    };

    let handle_inline_category_create = move |payload: CategoryPayload| {
        set_creating_category.set(true);
        spawn_local(async move {
            match category_api::create_category(payload).await {
                Ok(()) => {
                    toasts.success("Category created");
                    set_creating_category.set(false);
                    set_show_create_category.set(false);
                    // refetched list makes the new category selectable;
                    // it is intentionally not auto-selected
                    on_categories_changed.run(());
                }
                Err(e) => {
                    toasts.error(e);
                    set_creating_category.set(false);
                }
            }
        });
    };

    let handle_save = move |_| {
        let payload = SubcategoryPayload {
            name: name.get_untracked(),
            slug: slug.get_untracked(),
            description: description.get_untracked(),
            meta_title: meta_title.get_untracked(),
            meta_description: meta_description.get_untracked(),
            status: parse_status(&status.get_untracked()),
            category_id: category_id.get_untracked(),
            is_homepage: is_homepage.get_untracked(),
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
                        <Label>"Category"</Label>
                        <RefCombobox
                            options=category_options
                            selected=category_id
                            placeholder="Select a category..."
                            disabled=Signal::derive(move || saving.get() || is_edit)
                            create_label="New category..."
                            on_create_new=Callback::new(move |_| set_show_create_category.set(true))
                        />
                        {is_edit.then(|| view! {
                            <div class="form__hint">"The category cannot be changed after creation."</div>
                        })}
                        {move || field_error("categoryId").map(|msg| view! { <div class="form__error">{msg}</div> })}
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

                    <div class="form__group">
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || is_homepage.get()
                                on:change=move |ev| toggle_homepage(event_target_checked(&ev))
                            />
                            <span>"Show on homepage"</span>
                        </label>
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

            {move || show_create_category.get().then(|| view! {
                <CategoryDialog
                    saving=creating_category
                    on_submit=Callback::new(handle_inline_category_create)
                    on_cancel=Callback::new(move |_| set_show_create_category.set(false))
                />
            })}
        </div>
    }
}
