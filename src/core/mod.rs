//! Core module containing the query and selection logic behind the API
//!
//! This module contains:
//! - Page windowing for question listings
//! - Substring search and category filtering
//! - Exclusion-filtered random selection for quiz play

mod selection;

pub use selection::*;
