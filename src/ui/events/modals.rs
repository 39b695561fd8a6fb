//! Modal dialog handlers
//!
//! This module handles user input for the document source modal.

use super::helpers::{apply, apply_many, collect_paste_batch};
use crate::actions::AppAction;
use crate::config;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Handle source dialog activation, prefilled with the current source
pub fn handle_source_dialog(state: &Arc<RwLock<AppState>>) {
    let source = state.read().ok().and_then(|s| s.data.source.clone());
    apply(state, AppAction::EnterSourceInputMode { source });
    tracing::debug!("entering source input mode");
}

/// Handle source input modal (with paste batching support)
///
/// Returns the submitted source once it passes validation.
pub fn handle_source_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) -> Option<String> {
    match key.code {
        KeyCode::Enter => {
            let source = state
                .read()
                .map(|s| s.input.source_input.trim().to_string())
                .unwrap_or_default();

            let (actions, submitted) = submit_source(source);
            apply_many(state, actions);
            return submitted;
        }
        KeyCode::Esc => apply(state, AppAction::ExitSourceInputMode),
        KeyCode::Backspace => apply(state, AppAction::BackspaceSourceInput),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearSourceInput);
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordSourceInput);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (batch, _) = collect_paste_batch(c);
            apply(state, AppAction::AppendToSourceInput(batch));
        }
        _ => {}
    }

    None
}

/// Validate a submitted source: close the modal and hand the source back,
/// or keep the modal open with the validation message
fn submit_source(source: String) -> (Vec<AppAction>, Option<String>) {
    match config::validate_source(&source) {
        Ok(()) => {
            tracing::info!(%source, "source submitted");
            (vec![AppAction::ExitSourceInputMode], Some(source))
        }
        Err(e) => {
            tracing::debug!(%source, "invalid source: {e}");
            (vec![AppAction::SetSourceError(Some(e))], None)
        }
    }
}
