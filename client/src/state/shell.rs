//! Dashboard shell state machine.
//!
//! DESIGN
//! ======
//! The shell is a pure reducer over `ShellPhase`. Components hold the phase
//! in an `RwSignal`, feed it `ShellAction`s, and perform the returned
//! `Navigation` only after both the phase and the session have been written
//! back. A confirmed logout therefore flips the session flag before the
//! redirect is issued.
//!
//! `Unauthorized` is absorbing: once entered, every action is ignored until
//! the shell is mounted again after a fresh login.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use serde::{Deserialize, Serialize};

use crate::state::session::SessionStore;
use crate::state::theme::ThemeState;
use crate::util::auth::{Guard, Navigation, evaluate_guard};

/// Panels the shell can show. Exactly one is mounted at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Metric cards, trend chart and leaderboards.
    #[default]
    Home,
    /// Prescription validation workspace.
    Validate,
}

impl View {
    /// Navigation order.
    pub const ALL: [View; 2] = [View::Home, View::Validate];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Validate => "validate",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Dashboard",
            View::Validate => "Validate",
        }
    }
}

/// State owned by a mounted, authorized shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub view: View,
    pub sidebar_open: bool,
    pub logout_pending: bool,
    pub theme: ThemeState,
}

/// User intents the shell reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    ToggleTheme,
    ToggleMenu,
    OpenMenu,
    CloseMenu,
    SelectView(View),
    RequestLogout,
    ConfirmLogout,
    CancelLogout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellPhase {
    Unauthorized,
    Authorized(ShellState),
}

impl ShellPhase {
    /// Evaluate the guard for this mount and build the initial phase.
    #[must_use]
    pub fn mount(session: &SessionStore) -> Self {
        match evaluate_guard(session) {
            Guard::Allow => ShellPhase::Authorized(ShellState::default()),
            Guard::Redirect(_) => ShellPhase::Unauthorized,
        }
    }

    /// Redirect owed by the current phase, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<Navigation> {
        match self {
            ShellPhase::Unauthorized => Some(Navigation::to_entry()),
            ShellPhase::Authorized(_) => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<&ShellState> {
        match self {
            ShellPhase::Unauthorized => None,
            ShellPhase::Authorized(state) => Some(state),
        }
    }

    /// Active theme; light once unauthorized.
    #[must_use]
    pub fn theme(&self) -> ThemeState {
        self.state().map(|s| s.theme).unwrap_or_default()
    }

    /// Drop to `Unauthorized` if the session was revoked elsewhere.
    ///
    /// Returns the redirect only on the transition itself.
    pub fn revalidate(&mut self, session: &SessionStore) -> Option<Navigation> {
        if matches!(self, ShellPhase::Authorized(_)) && !session.is_authenticated() {
            log::debug!("session revoked while dashboard mounted");
            *self = ShellPhase::Unauthorized;
            return Some(Navigation::to_entry());
        }
        None
    }

    /// Apply `action` and return the navigation it requires.
    pub fn dispatch(&mut self, action: ShellAction, session: &mut SessionStore) -> Option<Navigation> {
        if let Some(nav) = self.revalidate(session) {
            return Some(nav);
        }
        let ShellPhase::Authorized(state) = self else {
            return None;
        };
        log::debug!("shell action {action:?}");

        match action {
            ShellAction::ToggleTheme => {
                state.theme.toggle();
            }
            ShellAction::ToggleMenu => state.sidebar_open = !state.sidebar_open,
            ShellAction::OpenMenu => state.sidebar_open = true,
            ShellAction::CloseMenu => state.sidebar_open = false,
            ShellAction::SelectView(view) => {
                state.view = view;
                state.sidebar_open = false;
            }
            ShellAction::RequestLogout => state.logout_pending = true,
            ShellAction::CancelLogout => state.logout_pending = false,
            ShellAction::ConfirmLogout => {
                if !state.logout_pending {
                    return None;
                }
                session.terminate();
                *self = ShellPhase::Unauthorized;
                return Some(Navigation::to_entry());
            }
        }
        None
    }
}
