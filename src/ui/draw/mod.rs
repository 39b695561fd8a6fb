//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, spinners, messages)
//! - `modals`: Visibility dropdown and source input modal
//! - `panels`: Main panels (sidebar, details)
//! - `styling`: Icons, colors and style constants

mod components;
mod modals;
mod panels;
mod styling;

pub use components::{render_footer, render_header};
pub use modals::{render_source_input_modal, render_visibility_menu};
pub use panels::{clamp_details_scroll, render_details_panel, render_sidebar_panel};

/// Pretty-print a JSON value for display
pub fn format_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests;
