use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// A file picked in the form but not yet uploaded. Upload happens when the
/// parent form submits; until then only a local object URL exists.
#[derive(Clone)]
pub struct StagedImage {
    pub file: web_sys::File,
    pub preview_url: String,
}

fn revoke(staged: &Option<StagedImage>) {
    if let Some(image) = staged {
        let _ = web_sys::Url::revoke_object_url(&image.preview_url);
    }
}

/// Image input with deferred upload. Selecting a file replaces any prior
/// local preview without network I/O; removing reverts to the persisted
/// image (edit mode) or clears the field.
#[component]
pub fn ImageField(
    #[prop(into)] label: String,
    /// Media id already saved on the record, if any.
    persisted: Option<String>,
    /// Staged file, owned by the parent so it can upload at submit time.
    /// Local storage: `web_sys::File` cannot cross threads.
    staged: RwSignal<Option<StagedImage>, LocalStorage>,
    #[prop(optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let has_persisted = persisted.is_some();

    let handle_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(preview_url) => {
                staged.update(|current| {
                    revoke(current);
                    *current = Some(StagedImage { file, preview_url });
                });
            }
            Err(e) => log::warn!("object URL creation failed: {e:?}"),
        }
        // allow re-picking the same file
        input.set_value("");
    };

    let handle_remove = move |_| {
        staged.update(|current| {
            revoke(current);
            *current = None;
        });
    };

    view! {
        <div class="form__group image-field">
            <label class="form__label">{label}</label>
            <div class="image-field__body">
                {move || match staged.get() {
                    Some(image) => view! {
                        <img class="image-field__preview" src=image.preview_url alt="preview" />
                    }.into_any(),
                    None => {
                        if has_persisted {
                            view! {
                                <div class="image-field__placeholder">
                                    {icon("image")}
                                    <span>"Current image kept"</span>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="image-field__placeholder">
                                    {icon("image")}
                                    <span>"No image — default will be used"</span>
                                </div>
                            }.into_any()
                        }
                    }
                }}
                <div class="image-field__actions">
                    <input
                        type="file"
                        accept="image/*"
                        disabled=move || disabled.get()
                        on:change=handle_file
                    />
                    {move || staged.get().is_some().then(|| view! {
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=handle_remove
                        >
                            {icon("x")}
                            {if has_persisted { "Revert to saved image" } else { "Remove" }}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}
