//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and view panels. They receive state
//! through props and report intent through callbacks; the shell owns state.

pub mod dashboard_home;
pub mod logout_confirmation;
pub mod sidebar;
pub mod validate_prescription;
