//! Route guard and navigation targets shared by the login page and the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The protected path evaluates the guard once per navigation attempt and
//! redirects to the entry point, replacing history, when no session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;

/// Unauthenticated landing route with the login form.
pub const ENTRY_PATH: &str = "/";
/// Route that mounts the dashboard shell.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A navigation request produced by a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub path: &'static str,
    pub replace: bool,
}

impl Navigation {
    /// Back to the login form. Replaces history so back cannot re-enter.
    #[must_use]
    pub const fn to_entry() -> Self {
        Self { path: ENTRY_PATH, replace: true }
    }

    /// Into the protected area. Replaces history so back skips the login form.
    #[must_use]
    pub const fn to_dashboard() -> Self {
        Self { path: DASHBOARD_PATH, replace: true }
    }

    #[must_use]
    pub fn options(self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

/// Outcome of evaluating the protected-path guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(Navigation),
}

/// Evaluate the guard for one navigation attempt.
#[must_use]
pub fn evaluate_guard(session: &SessionStore) -> Guard {
    if session.is_authenticated() {
        Guard::Allow
    } else {
        log::debug!("unauthenticated access to {DASHBOARD_PATH}, redirecting");
        Guard::Redirect(Navigation::to_entry())
    }
}
