//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and forms while reading the session store and
//! backend configuration from Leptos context providers.

pub mod content_editor;
pub mod footer;
pub mod header;
pub mod post_card;
pub mod post_form;
pub mod route_gate;
