//! Visibility menu input handling

use crate::actions::AppAction;
use crossterm::event::{KeyCode, KeyEvent};

/// Map a key in the visibility dropdown to an action
pub fn menu_action(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MenuDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MenuUp),
        KeyCode::Char(' ') | KeyCode::Enter => Some(AppAction::ToggleMenuItem),
        KeyCode::Esc | KeyCode::Char('v') | KeyCode::Char('q') => {
            Some(AppAction::CloseVisibilityMenu)
        }
        _ => None,
    }
}
