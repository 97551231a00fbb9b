//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Session requirements are declared at the router, not
//! here: pages assume their gate already admitted them.

pub mod add_post;
pub mod all_posts;
pub mod edit_post;
pub mod home;
pub mod login;
pub mod post;
pub mod signup;
