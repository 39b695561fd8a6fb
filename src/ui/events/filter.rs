//! Filter mode input handling

use super::helpers::{apply, apply_many, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Handle a key while typing into a section filter (with paste batching support)
pub fn handle_filter_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, count) = collect_paste_batch(c);
            tracing::trace!("filter input: {count} chars");
            apply(state, AppAction::AppendToFilter(batch));
        }
        _ => {
            let actions = filter_actions(key);
            if !actions.is_empty() {
                apply_many(state, actions);
            }
        }
    }
}

/// Actions for a non-character key in filter mode
pub fn filter_actions(key: KeyEvent) -> Vec<AppAction> {
    match key.code {
        // Esc drops the query, Enter keeps it
        KeyCode::Esc => vec![AppAction::ClearFilter, AppAction::ExitFilterMode],
        KeyCode::Enter => vec![AppAction::ExitFilterMode],
        KeyCode::Backspace => vec![AppAction::BackspaceFilter],
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![AppAction::ClearFilter]
        }
        _ => Vec::new(),
    }
}
