use crate::sidebar::{SectionKind, SectionState, SidebarLine};
use crate::state::AppState;
use crate::types::InputMode;

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// testable without a terminal
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation actions
    NavigateUp,
    NavigateDown,
    NavigateTop,
    NavigateBottom,
    ActivateSelected,

    // Sidebar actions
    ToggleInfo,
    ToggleSectionVisibility(SectionKind),
    ToggleSectionExpanded(SectionKind),

    // Filter actions
    EnterFilterMode,
    ExitFilterMode,
    AppendToFilter(String),
    BackspaceFilter,
    ClearFilter,

    // Visibility menu actions
    OpenVisibilityMenu,
    CloseVisibilityMenu,
    MenuUp,
    MenuDown,
    ToggleMenuItem,

    // Source input actions
    EnterSourceInputMode { source: Option<String> },
    ExitSourceInputMode,
    AppendToSourceInput(String),
    BackspaceSourceInput,
    ClearSourceInput,
    DeleteWordSourceInput,
    SetSourceError(Option<String>),

    // Details panel
    ScrollDetailsUp,
    ScrollDetailsDown,

    SetYankFlash(bool),
}

/// Lines scrolled per Ctrl+U / Ctrl+D
const SCROLL_STEP: usize = 5;

/// Apply an action to the application state
/// This is a pure state transformation function that mutates AppState based on the action
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Navigation
        AppAction::NavigateUp => {
            state.ui.selected_line = state.ui.selected_line.saturating_sub(1);
            state.ui.details_scroll = 0;
        }
        AppAction::NavigateDown => {
            let max = state.sidebar.lines().len().saturating_sub(1);
            state.ui.selected_line = (state.ui.selected_line + 1).min(max);
            state.ui.details_scroll = 0;
        }
        AppAction::NavigateTop => {
            state.ui.selected_line = 0;
            state.ui.details_scroll = 0;
        }
        AppAction::NavigateBottom => {
            state.ui.selected_line = state.sidebar.lines().len().saturating_sub(1);
            state.ui.details_scroll = 0;
        }
        AppAction::ActivateSelected => {
            let activation = state.sidebar.activate(state.ui.selected_line);
            tracing::debug!(?activation, "activated line {}", state.ui.selected_line);
        }

        // Sidebar
        AppAction::ToggleInfo => {
            state.sidebar.toggle_info();
            state.ui.selected_line = 0;
        }
        AppAction::ToggleSectionVisibility(kind) => {
            state.sidebar.toggle_visibility(kind);
        }
        AppAction::ToggleSectionExpanded(kind) => {
            if let Some(section) = state.sidebar.section_mut(kind) {
                section.toggle_expanded();
            }
        }

        // Filter
        AppAction::EnterFilterMode => {
            if let Some(kind) = state.selected_section() {
                state.input.mode = InputMode::Filtering;
                state.input.filter_target = Some(kind);
                // filtering a collapsed section shows nothing
                if let Some(section) = state.sidebar.section_mut(kind) {
                    section.expanded = true;
                }
            }
        }
        AppAction::ExitFilterMode => {
            state.input.mode = InputMode::Normal;
            state.input.filter_target = None;
        }
        AppAction::AppendToFilter(text) => {
            if let Some(section) = filter_section(state) {
                section.push_filter(&text);
            }
        }
        AppAction::BackspaceFilter => {
            if let Some(section) = filter_section(state) {
                section.pop_filter();
            }
        }
        AppAction::ClearFilter => {
            if let Some(section) = filter_section(state) {
                section.clear_filter();
            }
        }

        // Visibility menu
        AppAction::OpenVisibilityMenu => {
            state.input.mode = InputMode::VisibilityMenu;
            state.ui.menu_index = 0;
        }
        AppAction::CloseVisibilityMenu => {
            state.input.mode = InputMode::Normal;
        }
        AppAction::MenuUp => {
            state.ui.menu_index = state.ui.menu_index.saturating_sub(1);
        }
        AppAction::MenuDown => {
            state.ui.menu_index = (state.ui.menu_index + 1).min(SectionKind::ALL.len() - 1);
        }
        AppAction::ToggleMenuItem => {
            if let Some(kind) = SectionKind::ALL.get(state.ui.menu_index) {
                state.sidebar.toggle_visibility(*kind);
            }
        }

        // Source input
        AppAction::EnterSourceInputMode { source } => {
            state.input.mode = InputMode::EnteringSource;
            state.input.source_input = source.unwrap_or_default();
            state.input.source_error = None;
        }
        AppAction::ExitSourceInputMode => {
            state.input.mode = InputMode::Normal;
            state.input.source_input.clear();
            state.input.source_error = None;
        }
        AppAction::AppendToSourceInput(text) => {
            state.input.source_input.push_str(&text);
        }
        AppAction::BackspaceSourceInput => {
            state.input.source_input.pop();
        }
        AppAction::ClearSourceInput => {
            state.input.source_input.clear();
        }
        AppAction::DeleteWordSourceInput => {
            delete_word(&mut state.input.source_input);
        }
        AppAction::SetSourceError(error) => {
            state.input.source_error = error;
        }

        // Details
        AppAction::ScrollDetailsUp => {
            state.ui.details_scroll = state.ui.details_scroll.saturating_sub(SCROLL_STEP);
        }
        AppAction::ScrollDetailsDown => {
            state.ui.details_scroll = state.ui.details_scroll.saturating_add(SCROLL_STEP);
        }

        AppAction::SetYankFlash(flash) => {
            state.ui.yank_flash = flash;
        }
    }

    state.refresh_sidebar();

    // Keep the cursor on the section being filtered
    if state.input.mode == InputMode::Filtering {
        if let Some(kind) = state.input.filter_target {
            if !matches!(state.selected_line(), Some(line) if line.section() == Some(kind)) {
                state.select_section_header(kind);
            }
        }
    }
}

/// Shell state of the section targeted by filter edits: the filter target in
/// filter mode, otherwise the section under the cursor
fn filter_section(state: &mut AppState) -> Option<&mut SectionState> {
    let kind = state.input.filter_target.or_else(|| state.selected_section())?;
    state.sidebar.section_mut(kind)
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    // Cut back to the last space or path separator
    if let Some(pos) = s.rfind(|c: char| c.is_whitespace() || c == '/') {
        s.truncate(pos);
    } else {
        s.clear();
    }
}

/// Key of the selected row, used by the yank handler
pub fn selected_row_key(state: &AppState) -> Option<String> {
    match state.selected_line()? {
        SidebarLine::Row { row, .. } => Some(row.key.clone()),
        _ => None,
    }
}
