//! Leptos components mounted into server-rendered markup.

pub mod search_results;
