use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ToastService for centralized notifications
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
