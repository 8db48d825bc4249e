//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and interaction surfaces while reading/writing
//! the shared session state from the Leptos context provider.

pub mod app_bar;
pub mod chart_card;
pub mod cookie_banner;
pub mod login_dialog;
