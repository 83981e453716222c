use leptos::prelude::*;
use thaw::*;

/// Destructive-action confirmation. Carries no payload: the caller keeps the
/// selected entity in its own state and acts on confirm.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    /// Disables both buttons while the caller's delete call is in flight.
    #[prop(into)]
    confirming: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| {
            if !confirming.get_untracked() {
                on_cancel.run(());
            }
        }>
            <div class="modal modal--narrow" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                </div>
                <div class="modal-body">
                    <p>{message}</p>
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=Signal::derive(move || confirming.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=Signal::derive(move || confirming.get())
                    >
                        {move || if confirming.get() { "Deleting..." } else { "Delete" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
