//! Document loading
//!
//! - `parse`: turns JSON text into a [`crate::types::Document`], leniently
//! - `fetch`: reads a URL or file in the background and stores the result

pub mod fetch;
pub mod parse;

pub use fetch::load_document_background;
