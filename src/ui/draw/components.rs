//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (source, status, document title)
//! - Footer (command help)
//! - Loading spinner
//! - Error/empty state messages

use crate::state::AppState;
use crate::types::{InputMode, LoadingState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with source and load status
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let source = state
        .data
        .source
        .as_deref()
        .unwrap_or("No source configured");

    let status_text = match &state.data.loading_state {
        LoadingState::Idle => "Idle".to_string(),
        LoadingState::Fetching => "Fetching...".to_string(),
        LoadingState::Parsing => "Parsing...".to_string(),
        LoadingState::Complete => match &state.data.document {
            Some(document) => {
                let title = document
                    .info
                    .as_ref()
                    .and_then(|info| info.title.as_deref())
                    .unwrap_or("untitled");
                format!("{title} loaded")
            }
            None => "empty document".to_string(),
        },
        LoadingState::Error(_) => "Error".to_string(),
    };

    let header = Paragraph::new(format!("swagger sidebar - {source} [{status_text}]"))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help for the current input mode
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = match state.input.mode {
        InputMode::Normal if state.ui.yank_flash => "Yanked to clipboard",
        InputMode::Normal => {
            "j/k:Nav Space:Toggle/Select /:Filter ^L:Clear i:Info v:Visibility y:Yank ,:Source ^R:Reload q:Quit"
        }
        InputMode::Filtering => "Type to filter | Enter:Keep Esc:Clear ^L:Clear",
        InputMode::VisibilityMenu => "j/k:Nav Space:Show/Hide Esc/v:Close",
        InputMode::EnteringSource => "Enter:Open ^L:Clear ^W:Delete word Esc:Cancel",
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Render loading spinner animation
pub fn render_loading_spinner(
    frame: &mut Frame,
    area: Rect,
    loading_state: &LoadingState,
    spinner_index: usize,
) {
    let progress_text = match loading_state {
        LoadingState::Fetching => "Fetching document",
        LoadingState::Parsing => "Parsing document",
        _ => "",
    };

    let loading_text = format!(
        "{} {}\n\nPlease wait...",
        SPINNER[spinner_index % SPINNER.len()],
        progress_text
    );

    let loading = Paragraph::new(loading_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("[1] Sidebar"));

    frame.render_widget(loading, area);
}

/// Render error message with retry instructions
pub fn render_error_message(frame: &mut Frame, area: Rect, error: &str, retry_count: u32) {
    let retry_text = if retry_count > 0 {
        format!("\n\nRetry attempt: {retry_count}")
    } else {
        String::new()
    };

    let error_msg = format!(
        "❌ {error}{retry_text}\n\nPress [Ctrl+R] to retry\nPress [,] to change source"
    );

    let error_widget = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title("[1] Sidebar"));

    frame.render_widget(error_widget, area);
}

/// Render the message shown before any document is loaded
pub fn render_empty_message(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No document loaded\n\nPress [,] to open a URL or file")
        .block(Block::default().borders(Borders::ALL).title("[1] Sidebar"));

    frame.render_widget(empty, area);
}
