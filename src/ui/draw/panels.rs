//! Main panel rendering
//!
//! This module contains rendering functions for the two main panels:
//! - Sidebar panel (left side) - INFO plus the mounted sections
//! - Details panel (right side) - the selected line in full

use super::components::{render_empty_message, render_error_message, render_loading_spinner};
use super::{format_json, styling};
use crate::sidebar::{Icon, SidebarLine};
use crate::state::AppState;
use crate::types::{InputMode, LoadingState};
use crate::utils::{first_line, truncate};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the left panel with the sidebar lines
pub fn render_sidebar_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
    list_state: &mut ListState,
) {
    match &state.data.loading_state {
        LoadingState::Fetching | LoadingState::Parsing => {
            render_loading_spinner(frame, area, &state.data.loading_state, spinner_index);
            return;
        }
        LoadingState::Error(error) => {
            render_error_message(frame, area, error, state.data.retry_count);
            return;
        }
        LoadingState::Idle if state.data.document.is_none() => {
            render_empty_message(frame, area);
            return;
        }
        LoadingState::Idle | LoadingState::Complete => {}
    }

    let border_color = if state.input.mode == InputMode::Normal
        || state.input.mode == InputMode::Filtering
    {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[1] Sidebar")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    // A null document renders nothing inside the frame
    let items: Vec<ListItem> = state
        .sidebar
        .lines()
        .iter()
        .map(|line| ListItem::new(sidebar_line(line, state)))
        .collect();

    if items.is_empty() {
        list_state.select(None);
    } else {
        list_state.select(Some(state.ui.selected_line));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render the right panel with details of the selected line
pub fn render_details_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("[2] Details")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::unfocused_border()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = match state.selected_line() {
        Some(line) => detail_lines(line, state),
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.details_scroll.min(u16::MAX as usize) as u16, 0))
        .style(Style::default().fg(Color::White));

    frame.render_widget(content, inner_area);
}

/// Keep the details scroll offset within the content of the current selection
pub fn clamp_details_scroll(state: &mut AppState) {
    let line_count = match state.selected_line() {
        Some(line) => detail_lines(line, state).len(),
        None => 1,
    };
    state.ui.details_scroll = state.ui.details_scroll.min(line_count.saturating_sub(1));
}

// ============================================================================
// Private Helper Functions
// ============================================================================

fn sidebar_line<'a>(line: &'a SidebarLine, state: &AppState) -> Line<'a> {
    match line {
        SidebarLine::InfoHeader { expanded } => {
            let mut spans = vec![Span::styled(
                format!(
                    "{} {} INFO",
                    styling::expand_marker(*expanded),
                    styling::icon_glyph(Icon::Info)
                ),
                Style::default()
                    .fg(styling::section_title())
                    .add_modifier(Modifier::BOLD),
            )];
            if !expanded {
                spans.push(Span::styled(
                    format!(" {}", styling::icon_glyph(Icon::Ellipsis)),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        SidebarLine::InfoField { label, value } => Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
            Span::raw(value.as_str()),
        ]),
        SidebarLine::SectionHeader {
            kind,
            expanded,
            shown,
            total,
            filter,
        } => {
            let mut spans = vec![Span::styled(
                format!("{} {}", styling::expand_marker(*expanded), kind.title()),
                Style::default()
                    .fg(styling::section_title())
                    .add_modifier(Modifier::BOLD),
            )];

            let editing = state.input.mode == InputMode::Filtering
                && state.input.filter_target == Some(*kind);

            if editing || !filter.is_empty() {
                let cursor = if editing { "_" } else { "" };
                spans.push(Span::styled(
                    format!("  /{filter}{cursor}"),
                    Style::default().fg(if editing { Color::Yellow } else { Color::Green }),
                ));
                spans.push(Span::styled(
                    format!(" [{shown}/{total}]"),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" ({total})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            Line::from(spans)
        }
        SidebarLine::Row { kind, row } => {
            let mut spans = vec![
                Span::raw("    "),
                Span::styled(
                    styling::icon_glyph(kind.icon()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
            ];

            for method in &row.methods {
                spans.push(Span::styled(
                    format!("{method} "),
                    Style::default()
                        .fg(styling::get_method_color(method))
                        .add_modifier(Modifier::BOLD),
                ));
            }

            spans.push(Span::raw(row.key.as_str()));

            if let Some(tooltip) = &row.tooltip {
                spans.push(Span::styled(
                    format!("  {}", truncate(first_line(tooltip), 60)),
                    Style::default().fg(styling::tooltip_fg()),
                ));
            }

            Line::from(spans)
        }
        SidebarLine::EmptyBody { filtered, .. } => {
            let text = if *filtered { "no matches" } else { "empty" };
            Line::from(Span::styled(
                format!("    ({text})"),
                Style::default().fg(Color::DarkGray),
            ))
        }
    }
}

fn detail_lines<'a>(line: &'a SidebarLine, state: &'a AppState) -> Vec<Line<'a>> {
    let label_style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = Vec::new();

    match line {
        SidebarLine::InfoHeader { .. } | SidebarLine::InfoField { .. } => {
            lines.push(Line::from(Span::styled(
                "INFO",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            let fields = state
                .data
                .document
                .as_ref()
                .and_then(|document| document.info.as_ref())
                .map(|info| info.fields())
                .unwrap_or_default();

            if fields.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No info in this document",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for (label, value) in fields {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), label_style),
                    Span::raw(value),
                ]));
            }
        }
        SidebarLine::SectionHeader {
            kind,
            expanded,
            shown,
            total,
            filter,
        } => {
            lines.push(Line::from(Span::styled(
                kind.title(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Entries: ", label_style),
                Span::raw(total.to_string()),
            ]));
            if !filter.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled("Filter: ", label_style),
                    Span::raw(filter.as_str()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Matching: ", label_style),
                    Span::raw(shown.to_string()),
                ]));
            }
            lines.push(Line::from(vec![
                Span::styled("State: ", label_style),
                Span::raw(if *expanded { "expanded" } else { "collapsed" }),
            ]));
        }
        SidebarLine::Row { kind, row } => {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", kind.label()), label_style),
                Span::styled(
                    row.key.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));

            if !row.methods.is_empty() {
                let mut spans = vec![Span::styled("Methods: ", label_style)];
                for method in &row.methods {
                    spans.push(Span::styled(
                        format!("{method} "),
                        Style::default().fg(styling::get_method_color(method)),
                    ));
                }
                lines.push(Line::from(spans));
            }

            if let Some(tooltip) = &row.tooltip {
                lines.push(Line::from(""));
                for text in tooltip.lines() {
                    lines.push(Line::from(text));
                }
            }

            if let Some(descriptor) = state.selected_descriptor() {
                lines.push(Line::from(""));
                for text in format_json(descriptor).lines() {
                    lines.push(Line::from(Span::styled(
                        text.to_string(),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }
        SidebarLine::EmptyBody { kind, filtered } => {
            let text = if *filtered {
                format!("No {} match the filter", kind.label().to_lowercase())
            } else {
                format!("No {} in this document", kind.label().to_lowercase())
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}
