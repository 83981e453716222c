pub mod image_field;
pub mod tag_picker;

use contracts::domain::category::{Category, CategoryPayload};
use contracts::domain::doc::{Doc, DocPayload, DocStatus};
use contracts::domain::subcategory::{Subcategory, SubcategoryPayload};
use contracts::domain::tag::{Tag, TagPayload};
use contracts::shared::constants::MAX_HOMEPAGE_DOCS;
use contracts::shared::validation::{can_set_homepage, error_for, FieldError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::category::api as category_api;
use crate::domain::category::ui::details::CategoryDialog;
use crate::domain::media::api as media_api;
use crate::domain::subcategory::api as subcategory_api;
use crate::domain::subcategory::ui::details::SubcategoryDialog;
use crate::domain::tag::api as tag_api;
use crate::domain::tag::ui::details::TagDialog;
use crate::shared::components::ref_combobox::RefCombobox;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use image_field::{ImageField, StagedImage};
use tag_picker::TagPicker;

fn parse_status(value: &str) -> DocStatus {
    match value {
        "published" => DocStatus::Published,
        "archived" => DocStatus::Archived,
        _ => DocStatus::Draft,
    }
}

async fn upload_staged(staged: Option<StagedImage>) -> Result<Option<String>, String> {
    match staged {
        None => Ok(None),
        Some(image) => media_api::upload_media(image.file).await.map(|m| Some(m.id)),
    }
}

/// Create/update dialog for a doc.
///
/// Image files are staged locally and uploaded only at submit, both at once;
/// the payload is handed to the caller only after both ids resolved (or no
/// file was staged). Validation relaxes for drafts.
#[component]
pub fn DocDialog(
    #[prop(optional)] initial: Option<Doc>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] subcategories: Signal<Vec<Subcategory>>,
    #[prop(into)] tags: Signal<Vec<Tag>>,
    /// Homepage doc slots in use, from the last list fetch.
    #[prop(into)]
    homepage_total: Signal<Option<u64>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<DocPayload>,
    on_cancel: Callback<()>,
    on_categories_changed: Callback<()>,
    on_subcategories_changed: Callback<()>,
    on_tags_changed: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let init = initial
        .as_ref()
        .map(DocPayload::from_record)
        .unwrap_or_default();
    let was_homepage = init.is_homepage;
    let dialog_title = if initial.is_some() {
        "Edit doc"
    } else {
        "New doc"
    };

    let title = RwSignal::new(init.title);
    let slug = RwSignal::new(init.slug);
    let excerpt = RwSignal::new(init.excerpt);
    let content = RwSignal::new(init.content);
    let meta_title = RwSignal::new(init.meta_title);
    let meta_description = RwSignal::new(init.meta_description);
    let category_id = RwSignal::new(init.category_id);
    let subcategory_id = RwSignal::new(init.subcategory_id.unwrap_or_default());
    let tag_ids = RwSignal::new(init.tag_ids);
    let status = RwSignal::new(init.status.as_str().to_string());
    let is_featured = RwSignal::new(init.is_featured);
    let is_homepage = RwSignal::new(init.is_homepage);

    let persisted_header = init.header_image_id;
    let persisted_thumbnail = init.thumbnail_id;
    let header_staged: RwSignal<Option<StagedImage>, LocalStorage> = RwSignal::new_local(None);
    let thumbnail_staged: RwSignal<Option<StagedImage>, LocalStorage> = RwSignal::new_local(None);

    let (uploading, set_uploading) = signal(false);
    let busy = Signal::derive(move || saving.get() || uploading.get());

    let (show_create_category, set_show_create_category) = signal(false);
    let (show_create_subcategory, set_show_create_subcategory) = signal(false);
    let (show_create_tag, set_show_create_tag) = signal(false);
    let (creating_ref, set_creating_ref) = signal(false);

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

    // Subcategory choices follow the selected category.
    let subcategory_options = Signal::derive(move || {
        let category = category_id.get();
        subcategories
            .get()
            .into_iter()
            .filter(|s| category.is_empty() || s.category_id == category)
            .map(|s| (s.id, s.name))
            .collect::<Vec<_>>()
    });

    // A subcategory from another category cannot stay selected.
    Effect::new(move |_| {
        let category = category_id.get();
        let current = subcategory_id.get_untracked();
        if current.is_empty() {
            return;
        }
        let belongs = subcategories
            .get_untracked()
            .iter()
            .any(|s| s.id == current && s.category_id == category);
        if !belongs {
            subcategory_id.set(String::new());
        }
    });

    let toggle_homepage = move |checked: bool| {
        if checked {
            let used = homepage_total.get_untracked().unwrap_or(0);
            if !can_set_homepage(was_homepage, used, MAX_HOMEPAGE_DOCS) {
                toasts.error(format!(
                    "Homepage already has {} docs. Remove one first.",
                    MAX_HOMEPAGE_DOCS
                ));
                return;
            }
        }
        is_homepage.set(checked);
    };

    let handle_inline_category_create = move |payload: CategoryPayload| {
        set_creating_ref.set(true);
        spawn_local(async move {
            match category_api::create_category(payload).await {
                Ok(()) => {
                    toasts.success("Category created");
                    set_creating_ref.set(false);
                    set_show_create_category.set(false);
                    on_categories_changed.run(());
                }
                Err(e) => {
                    toasts.error(e);
                    set_creating_ref.set(false);
                }
            }
        });
    };

    let handle_inline_subcategory_create = move |payload: SubcategoryPayload| {
        set_creating_ref.set(true);
        spawn_local(async move {
            match subcategory_api::create_subcategory(payload).await {
                Ok(()) => {
                    toasts.success("Subcategory created");
                    set_creating_ref.set(false);
                    set_show_create_subcategory.set(false);
                    on_subcategories_changed.run(());
                }
                Err(e) => {
                    toasts.error(e);
                    set_creating_ref.set(false);
                }
            }
        });
    };

    let handle_inline_tag_create = move |payload: TagPayload| {
        set_creating_ref.set(true);
        spawn_local(async move {
            match tag_api::create_tag(payload).await {
                Ok(()) => {
                    toasts.success("Tag created");
                    set_creating_ref.set(false);
                    set_show_create_tag.set(false);
                    on_tags_changed.run(());
                }
                Err(e) => {
                    toasts.error(e);
                    set_creating_ref.set(false);
                }
            }
        });
    };

    let persisted_header_for_save = persisted_header.clone();
    let persisted_thumbnail_for_save = persisted_thumbnail.clone();
    let handle_save = move |_| {
        let subcategory = subcategory_id.get_untracked();
        let payload = DocPayload {
            title: title.get_untracked(),
            slug: slug.get_untracked(),
            excerpt: excerpt.get_untracked(),
            content: content.get_untracked(),
            category_id: category_id.get_untracked(),
            subcategory_id: (!subcategory.is_empty()).then_some(subcategory),
            meta_title: meta_title.get_untracked(),
            meta_description: meta_description.get_untracked(),
            header_image_id: persisted_header_for_save.clone(),
            thumbnail_id: persisted_thumbnail_for_save.clone(),
            is_featured: is_featured.get_untracked(),
            tag_ids: tag_ids.get_untracked(),
            status: parse_status(&status.get_untracked()),
            is_homepage: is_homepage.get_untracked(),
        };

        let found = payload.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());

        let header = header_staged.get_untracked();
        let thumbnail = thumbnail_staged.get_untracked();
        set_uploading.set(true);
        spawn_local(async move {
            let mut payload = payload;
            // fan out both uploads, join before the doc write
            let (header_id, thumbnail_id) =
                futures::future::join(upload_staged(header), upload_staged(thumbnail)).await;
            let merged = header_id.and_then(|h| thumbnail_id.map(|t| (h, t)));
            match merged {
                Ok((header_id, thumbnail_id)) => {
                    if let Some(id) = header_id {
                        payload.header_image_id = Some(id);
                    }
                    if let Some(id) = thumbnail_id {
                        payload.thumbnail_id = Some(id);
                    }
                    set_uploading.set(false);
                    on_submit.run(payload.finalize());
                }
                Err(e) => {
                    // either upload failing aborts the whole submit
                    toasts.error(e);
                    set_uploading.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{dialog_title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Title"</Label>
                        <Input value=title disabled=busy />
                        {move || field_error("title").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Category"</Label>
                            <RefCombobox
                                options=category_options
                                selected=category_id
                                placeholder="Select a category..."
                                disabled=busy
                                create_label="New category..."
                                on_create_new=Callback::new(move |_| set_show_create_category.set(true))
                            />
                            {move || field_error("categoryId").map(|msg| view! { <div class="form__error">{msg}</div> })}
                        </div>

                        <div class="form__group">
                            <Label>"Subcategory"</Label>
                            <RefCombobox
                                options=subcategory_options
                                selected=subcategory_id
                                placeholder="Optional subcategory..."
                                disabled=busy
                                create_label="New subcategory..."
                                on_create_new=Callback::new(move |_| set_show_create_subcategory.set(true))
                            />
                        </div>
                    </div>

                    <div class="form__group">
                        <Label>"Slug"</Label>
                        <Input
                            value=slug
                            placeholder="left blank, derived from the title"
                            disabled=busy
                        />
                        {move || field_error("slug").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Excerpt"</Label>
                        <Textarea value=excerpt disabled=busy />
                        {move || field_error("excerpt").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Content"</Label>
                        <Textarea value=content attr:rows="12" disabled=busy />
                        {move || field_error("content").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Tags"</Label>
                        <TagPicker
                            options=tags
                            selected=tag_ids
                            disabled=busy
                            on_create_new=Callback::new(move |_| set_show_create_tag.set(true))
                        />
                        {move || field_error("tagIds").map(|msg| view! { <div class="form__error">{msg}</div> })}
                    </div>

                    <div class="form__row">
                        <ImageField
                            label="Header image"
                            persisted=persisted_header.clone()
                            staged=header_staged
                            disabled=busy
                        />
                        <ImageField
                            label="Thumbnail"
                            persisted=persisted_thumbnail.clone()
                            staged=thumbnail_staged
                            disabled=busy
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Meta title"</Label>
                        <Input value=meta_title placeholder="defaults to the title" disabled=busy />
                    </div>

                    <div class="form__group">
                        <Label>"Meta description"</Label>
                        <Input
                            value=meta_description
                            placeholder="defaults to the excerpt"
                            disabled=busy
                        />
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Status"</Label>
                            <select
                                class="form__select"
                                prop:value=move || status.get()
                                on:change=move |ev| status.set(event_target_value(&ev))
                            >
                                <option value="draft">"Draft"</option>
                                <option value="published">"Published"</option>
                                <option value="archived">"Archived"</option>
                            </select>
                        </div>

                        <div class="form__group">
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_featured.get()
                                    on:change=move |ev| is_featured.set(event_target_checked(&ev))
                                />
                                <span>"Featured"</span>
                            </label>
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
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    // native button: the save handler reads the staged files,
                    // which live in a local-storage signal
                    <button
                        class="button button--primary"
                        disabled=move || busy.get()
                        on:click=handle_save
                    >
                        {move || {
                            if uploading.get() {
                                "Uploading images..."
                            } else if saving.get() {
                                "Saving..."
                            } else {
                                "Save"
                            }
                        }}
                    </button>
                </div>
            </div>

            {move || show_create_category.get().then(|| view! {
                <CategoryDialog
                    saving=creating_ref
                    on_submit=Callback::new(handle_inline_category_create)
                    on_cancel=Callback::new(move |_| set_show_create_category.set(false))
                />
            })}

            {move || show_create_subcategory.get().then(|| view! {
                <SubcategoryDialog
                    categories=categories
                    homepage_total=Signal::derive(|| None::<u64>)
                    saving=creating_ref
                    on_submit=Callback::new(handle_inline_subcategory_create)
                    on_cancel=Callback::new(move |_| set_show_create_subcategory.set(false))
                    on_categories_changed=Callback::new(move |_| on_categories_changed.run(()))
                />
            })}

            {move || show_create_tag.get().then(|| view! {
                <TagDialog
                    saving=creating_ref
                    on_submit=Callback::new(handle_inline_tag_create)
                    on_cancel=Callback::new(move |_| set_show_create_tag.set(false))
                />
            })}
        </div>
    }
}
