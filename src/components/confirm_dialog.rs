//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Dialog asking the user to confirm a deletion before it is sent.
///
/// Clicking the backdrop cancels, same as the explicit button.
#[component]
pub fn ConfirmDialog(
    /// Question shown in the dialog body.
    message: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--confirm" on:click=move |ev| ev.stop_propagation()>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Excluir"
                    </button>
                </div>
            </div>
        </div>
    }
}
