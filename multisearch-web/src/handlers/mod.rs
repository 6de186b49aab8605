//! HTTP request handlers

pub mod api;
pub mod htmx;

pub use api::{SearchParams, api_search};
pub use htmx::{SearchForm, results_fragment, submit_search};
