//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is the only shared mutable state in the application;
//! `gate` and `resolver` hold the pure transition logic around it so route
//! guarding stays unit-testable outside the UI framework.

pub mod gate;
pub mod resolver;
pub mod session;
