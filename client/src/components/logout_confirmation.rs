//! Modal gate asking the operator to confirm or cancel a logout.

use leptos::prelude::*;

/// Binary decision point: confirm commits the logout, cancel dismisses.
#[component]
pub fn LogoutConfirmation(on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="logout-overlay">
            <div class="logout-box" role="dialog" aria-modal="true" tabindex="0" on:keydown=on_keydown>
                <h2>"Logout Confirmation"</h2>
                <p>"You are about to logout from YouNeed."</p>
                <div class="logout-actions">
                    <button class="logout-btn-confirm" on:click=move |_| on_confirm.run(())>
                        "Logout"
                    </button>
                    <button class="logout-btn-cancel" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
