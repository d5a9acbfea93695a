//! Terminal client for the blog API.
//!
//! - `api`: blocking HTTP calls, one per action, and the [`api::Session`]
//!   holding the bearer token of the run.
//! - `ui`: the interactive menu and the text rendering of posts.
pub mod api;
pub mod ui;
