//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `shell`, `theme`) so each component
//! depends on a small focused model. All of it is plain data; Leptos signals
//! wrap it at the component layer.

pub mod session;
pub mod shell;
pub mod theme;
