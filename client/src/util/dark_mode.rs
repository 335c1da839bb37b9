//! Global dark theme marker.
//!
//! Adds or removes the `dark` class on `<body>` so every stylesheet rule keyed
//! on it reacts at once. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The preference is not written to `localStorage`; it lives only as long as
//! the dashboard shell. SSR paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeState;

/// Apply or remove the marker on `<body>`.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let class_list = body.class_list();
        let result = if theme.marker().is_some() {
            class_list.add_1(crate::state::theme::DARK_CLASS)
        } else {
            class_list.remove_1(crate::state::theme::DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("failed to update theme marker");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Remove the marker regardless of the current theme.
pub fn clear() {
    apply(ThemeState::default());
}

