//! Utility helpers shared across UI modules.

pub mod markdown;
pub mod slug;
