use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Two-column application frame: fixed navigation on the left, the routed
/// page in the center.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell" style="display: flex; min-height: 100vh;">
            <Sidebar />
            <main class="app-shell__center" style="flex: 1; min-width: 0; padding: 16px; overflow-x: hidden;">
                {children()}
            </main>
        </div>
    }
}
