//! Entry point: admin username + access key login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer that authenticates the shared `SessionStore`. A failure is
//! reported with a blocking notification and leaves both the session and the
//! typed input untouched so the operator can correct it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AuthFailure, Authenticator, AuthenticatorHandle, Credentials, SessionStore};
use crate::util::auth::Navigation;

/// Authenticate `credentials` against `store`; on success return where to go.
fn submit_credentials(
    store: &mut SessionStore,
    authenticator: &dyn Authenticator,
    credentials: &Credentials,
) -> Result<Navigation, AuthFailure> {
    store.authenticate(authenticator, credentials)?;
    Ok(Navigation::to_dashboard())
}

/// Blocking browser alert; SSR has no one to notify.
fn notify_failure(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let authenticator = expect_context::<AuthenticatorHandle>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::new(username.get_untracked(), secret.get_untracked());

        // Work on a copy so a rejected attempt never touches the shared store.
        let mut store = session.get_untracked();
        match submit_credentials(&mut store, authenticator.get(), &credentials) {
            Ok(nav) => {
                session.set(store);
                error.set(None);
                navigate(nav.path, nav.options());
            }
            Err(failure) => {
                let message = failure.to_string();
                notify_failure(&message);
                error.set(Some(message));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="info-side">
                    <h1>"YouNeed"</h1>
                    <p>"Admin Control Center"</p>
                    <small class="info-side__note">
                        "Secure encrypted login for authorized personnel only."
                    </small>
                </div>
                <div class="form-side">
                    <h2>"Admin Login"</h2>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Admin Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Access Key"
                            prop:value=move || secret.get()
                            on:input=move |ev| secret.set(event_target_value(&ev))
                        />
                        <button type="submit" class="admin-btn">
                            "Enter Dashboard"
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                </div>
            </div>
            <footer class="login-footer">"© 2025 All Rights Reserved"</footer>
        </div>
    }
}
