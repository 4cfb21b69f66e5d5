//! Coffee-drink catalog and trivia quiz REST service backed by SQLite.
//!
//! The crate exposes two API surfaces on one Axum server:
//! - `/drinks*` - menu CRUD, with mutation gated behind bearer-token permissions
//! - `/categories*`, `/questions*`, `/quizzes` - paginated trivia listings,
//!   search, and exclusion-filtered random quiz play
//!
//! Handlers stay thin: repositories in [`db`] fetch rows and the pure
//! functions in [`core`] do the page windowing, filtering and selection.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;
