//! Multisearch Web - HTMX + Tailwind UI over the search core
//!
//! Server-side rendered pages with HTMX partial updates, plus a JSON API
//! endpoint for external clients. All HTML is assembled from small component
//! functions; there is no template engine.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

pub use server::{AppState, router, run_server};
