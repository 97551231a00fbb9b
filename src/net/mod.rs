//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` owns addressing and configuration, `identity` the account and
//! session endpoints, `content` the post documents, `media` the image
//! bucket, and `types` the shared wire schema.

pub mod backend;
pub mod content;
pub mod identity;
pub mod media;
pub mod types;
