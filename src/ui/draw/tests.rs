use super::*;
use crate::actions::{apply_action, AppAction};
use crate::document::parse::parse_document;
use crate::sidebar::{SectionKind, SidebarLine};
use crate::state::AppState;
use crate::types::{InputMode, LoadingState};
use ratatui::{backend::TestBackend, widgets::ListState, Terminal};

fn loaded_state() -> AppState {
    let mut state = AppState::default();
    state.set_document(
        parse_document(
            r#"{
                "info": { "title": "Petstore", "version": "1.0.0" },
                "paths": {
                    "/pets": { "get": { "summary": "List pets" } }
                },
                "components": {
                    "schemas": { "Pet": {} }
                }
            }"#,
        )
        .unwrap(),
    );
    state.data.loading_state = LoadingState::Complete;
    state
}

fn render(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut list_state = ListState::default();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_sidebar_panel(frame, area, state, 0, &mut list_state);
            match state.input.mode {
                InputMode::VisibilityMenu => render_visibility_menu(frame, state),
                InputMode::EnteringSource => render_source_input_modal(frame, state),
                _ => {}
            }
        })
        .unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_sidebar_lists_sections_and_rows() {
    let screen = render(&loaded_state());
    assert!(screen.contains("INFO"));
    assert!(screen.contains("PATHS"));
    assert!(screen.contains("/pets"));
    assert!(screen.contains("List pets"));
    assert!(screen.contains("SCHEMAS"));
    assert!(screen.contains("Pet"));
    assert!(!screen.contains("SERVERS"));
}

#[test]
fn test_sidebar_loading_and_error_states() {
    let mut state = AppState::default();
    state.data.loading_state = LoadingState::Fetching;
    assert!(render(&state).contains("Fetching document"));

    state.data.loading_state = LoadingState::Error("Load error: boom".to_string());
    assert!(render(&state).contains("Load error: boom"));

    state.data.loading_state = LoadingState::Idle;
    assert!(render(&state).contains("No document loaded"));
}

#[test]
fn test_null_document_renders_empty_sidebar() {
    let mut state = AppState::default();
    state.set_document(parse_document("null").unwrap());
    state.data.loading_state = LoadingState::Complete;

    let screen = render(&state);
    assert!(screen.contains("[1] Sidebar"));
    assert!(!screen.contains("INFO"));
}

#[test]
fn test_visibility_menu_marks_sections() {
    let mut state = loaded_state();
    state.sidebar.toggle_visibility(SectionKind::Servers);
    state.input.mode = InputMode::VisibilityMenu;

    let screen = render(&state);
    assert!(screen.contains("VISIBILITY"));
    assert!(screen.contains("[ ] Servers"));
    assert!(screen.contains("[x] Paths"));
}

#[test]
fn test_source_modal_shows_error() {
    let mut state = AppState::default();
    state.input.mode = InputMode::EnteringSource;
    state.input.source_input = "ftp://nope".to_string();
    state.input.source_error = Some("Only http:// and https:// URLs are supported".to_string());

    let screen = render(&state);
    assert!(screen.contains("Open Document"));
    assert!(screen.contains("ftp://nope"));
    assert!(screen.contains("Only http://"));
}

#[test]
fn test_format_json_is_pretty() {
    let value = serde_json::json!({ "type": "object" });
    assert_eq!(format_json(&value), "{\n  \"type\": \"object\"\n}");
}

#[test]
fn test_details_scroll_stays_within_content() {
    let mut state = loaded_state();
    state.ui.selected_line = state
        .sidebar
        .lines()
        .iter()
        .position(|line| matches!(line, SidebarLine::Row { row, .. } if row.key == "Pet"))
        .unwrap();

    for _ in 0..50 {
        apply_action(AppAction::ScrollDetailsDown, &mut state);
        clamp_details_scroll(&mut state);
    }
    // "Schemas Pet", a blank line, then "{}"
    assert_eq!(state.ui.details_scroll, 2);

    apply_action(AppAction::ScrollDetailsUp, &mut state);
    clamp_details_scroll(&mut state);
    assert_eq!(state.ui.details_scroll, 0);
}
