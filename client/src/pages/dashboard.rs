//! Protected dashboard shell: header, navigation, active view, logout gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at the protected path. The guard is evaluated once per mount; an
//! unauthenticated visit renders only a history-replacing redirect to the
//! entry point. While mounted, a session revoked elsewhere drops the shell to
//! `Unauthorized` and redirects.
//!
//! Navigation requested by a transition is parked in `pending_nav` and
//! executed by an effect, after the session and phase writes have landed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_home::DashboardHome;
use crate::components::logout_confirmation::LogoutConfirmation;
use crate::components::sidebar::Sidebar;
use crate::components::validate_prescription::ValidatePrescription;
use crate::state::session::SessionStore;
use crate::state::shell::{ShellAction, ShellPhase, View};
use crate::util::auth::Navigation;
use crate::util::dark_mode;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let phase = RwSignal::new(ShellPhase::mount(&session.get_untracked()));

    if let Some(nav) = phase.get_untracked().redirect() {
        return view! { <Redirect path=nav.path options=nav.options()/> }.into_any();
    }

    let pending_nav = RwSignal::new(None::<Navigation>);

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut store = session.get_untracked();
        let mut next = phase.get_untracked();
        let nav = next.dispatch(action, &mut store);
        if store.is_authenticated() != session.with_untracked(SessionStore::is_authenticated) {
            session.set(store);
        }
        phase.set(next);
        if nav.is_some() {
            pending_nav.set(nav);
        }
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(nav) = pending_nav.get() {
            pending_nav.set(None);
            navigate(nav.path, nav.options());
        }
    });

    // Session revoked outside the shell.
    Effect::new(move || {
        let store = session.get();
        let mut next = phase.get_untracked();
        if let Some(nav) = next.revalidate(&store) {
            phase.set(next);
            pending_nav.set(Some(nav));
        }
    });

    Effect::new(move || dark_mode::apply(phase.with(ShellPhase::theme)));
    on_cleanup(dark_mode::clear);

    let operator = move || session.with(|s| s.session().map(|x| x.username.clone()).unwrap_or_default());

    let shell = move || phase.with(|p| p.state().copied().unwrap_or_default());
    let current_view = Memo::new(move |_| shell().view);
    let sidebar_open = Memo::new(move |_| shell().sidebar_open);

    let on_select = Callback::new(move |view: View| dispatch.run(ShellAction::SelectView(view)));
    let on_close = Callback::new(move |()| dispatch.run(ShellAction::CloseMenu));
    let on_confirm = Callback::new(move |()| dispatch.run(ShellAction::ConfirmLogout));
    let on_cancel = Callback::new(move |()| dispatch.run(ShellAction::CancelLogout));

    view! {
        <Show when=move || phase.with(|p| p.state().is_some())>
            <header class="dashboard-header">
                <div class="menu" on:click=move |_| dispatch.run(ShellAction::ToggleMenu) title="Menu">
                    "☰"
                </div>
                <h3 class="dashboard-header__title">"Admin Dashboard"</h3>
                <div class="header-right">
                    <span class="header-operator">{operator}</span>
                    <div
                        class="toggle"
                        on:click=move |_| dispatch.run(ShellAction::ToggleTheme)
                        title="Toggle dark mode"
                    >
                        {move || phase.with(|p| p.theme().toggle_icon())}
                    </div>
                    <button
                        class="logout-btn-header"
                        on:click=move |_| dispatch.run(ShellAction::RequestLogout)
                    >
                        "Logout"
                    </button>
                </div>
            </header>

            <Sidebar open=sidebar_open current_view=current_view on_select=on_select on_close=on_close/>

            <div class="dashboard-main" data-view=move || current_view.get().id()>
                {move || view_panel(current_view.get())}
            </div>

            <Show when=move || shell().logout_pending>
                <LogoutConfirmation on_confirm=on_confirm on_cancel=on_cancel/>
            </Show>
        </Show>
    }
    .into_any()
}

/// Mount exactly the panel for `view`; the others do not exist.
fn view_panel(view: View) -> AnyView {
    match view {
        View::Home => view! { <DashboardHome/> }.into_any(),
        View::Validate => view! { <ValidatePrescription/> }.into_any(),
    }
}
