//! Centralized toast notifications.
//!
//! Signal-held stack plus a host component mounted once at the app root;
//! entries dismiss themselves after a few seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    text: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, kind: ToastKind, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|list| {
            list.push(ToastEntry {
                id,
                kind,
                text: text.into(),
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|list| list.retain(|e| e.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host" style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px;">
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=entry.kind.class() on:click=move |_| svc.dismiss(id)>
                            {entry.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
