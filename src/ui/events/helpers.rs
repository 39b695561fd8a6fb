//! Helper functions for event handling
//!
//! This module contains utility functions used across event handlers:
//! - State locking helpers (apply actions)
//! - Paste batching

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::InputMode;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    match state.write() {
        Ok(mut s) => apply_action(action, &mut s),
        Err(_) => tracing::error!(?action, "state lock poisoned, action dropped"),
    }
}

/// Apply multiple actions to state under one lock
pub fn apply_many(state: &Arc<RwLock<AppState>>, actions: Vec<AppAction>) {
    match state.write() {
        Ok(mut s) => {
            for action in actions {
                apply_action(action, &mut s);
            }
        }
        Err(_) => tracing::error!("state lock poisoned, {} actions dropped", actions.len()),
    }
}

/// Current input mode; a poisoned lock reads as normal mode
pub fn input_mode(state: &Arc<RwLock<AppState>>) -> InputMode {
    state
        .read()
        .map(|s| s.input.mode.clone())
        .unwrap_or(InputMode::Normal)
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this function checks for any immediately available
/// character events and batches them together. This enables fast paste operations
/// in terminals.
///
/// Returns a tuple of (batched_string, character_count)
pub fn collect_paste_batch(initial_char: char) -> (String, usize) {
    let mut chars = vec![initial_char];

    // Drain any immediately available character events
    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        match event::read() {
            Ok(Event::Key(next_key)) => match next_key.code {
                KeyCode::Char(next_c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    chars.push(next_c);
                }
                _ => break,
            },
            _ => break,
        }
    }

    let count = chars.len();
    (chars.into_iter().collect(), count)
}
