//! Modal dialog rendering
//!
//! This module contains rendering functions for modal dialogs:
//! - Visibility dropdown (show/hide sidebar sections)
//! - Document source modal (URL or file path)

use super::styling;
use crate::sidebar::SectionKind;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the visibility dropdown listing every sidebar section
pub fn render_visibility_menu(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let item_count = SectionKind::ALL.len() as u16;
    let modal_width = 36.min(area.width);
    // items plus borders plus the help line
    let modal_height = (item_count + 4).min(area.height);
    let modal_area = centered(area, modal_width, modal_height);

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" VISIBILITY ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(styling::modal_bg()).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Items
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let visibility = state.sidebar.visibility();
    let items: Vec<ListItem> = SectionKind::ALL
        .iter()
        .map(|kind| {
            let visible = visibility.is_visible(*kind);
            let mark = if visible { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{mark} "),
                    Style::default().fg(if visible { Color::Green } else { Color::DarkGray }),
                ),
                Span::raw(kind.label()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.ui.menu_index));

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let help = Paragraph::new("Space: Toggle  |  Esc: Close")
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

/// Render the modal asking for a document URL or file path
pub fn render_source_input_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.7).min(90.0) as u16;
    let modal_height = 10.min(area.height);
    let modal_area = centered(area, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Open Document ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(styling::modal_bg()).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let desc = Paragraph::new("OpenAPI JSON document: an http(s) URL or a local file path")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let label = Paragraph::new("► Source:").style(Style::default().fg(Color::Yellow));
    frame.render_widget(label, chunks[1]);

    let input = Paragraph::new(format!("{}_", state.input.source_input)).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(input, chunks[2]);

    if let Some(error) = &state.input.source_error {
        let error = Paragraph::new(format!("✗ {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[3]);
    }

    let help = Paragraph::new(
        "Enter: Open  |  Ctrl+L: Clear  |  Ctrl+W: Delete word  |  Esc: Cancel",
    )
    .style(Style::default().fg(Color::Rgb(150, 150, 150)))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
