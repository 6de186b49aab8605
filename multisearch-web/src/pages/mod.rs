//! Full page rendering

pub mod search;

pub use search::{render_page, search_page};
