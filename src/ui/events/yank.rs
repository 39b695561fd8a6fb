//! Yank (copy) handlers
//!
//! This module handles copying the selected row key to the system clipboard.

use super::helpers::apply;
use crate::actions::{selected_row_key, AppAction};
use crate::state::AppState;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// How long the footer shows the yank confirmation
const FLASH_DURATION: Duration = Duration::from_millis(200);

/// Yank the key of the selected row to the clipboard
pub fn handle_yank_row_key(state: &Arc<RwLock<AppState>>) {
    let Some(key) = state.read().ok().and_then(|s| selected_row_key(&s)) else {
        tracing::debug!("nothing to yank: selection is not a row");
        return;
    };

    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(key.clone()));
    match copied {
        Ok(()) => {
            tracing::debug!(%key, "yanked row key");
            apply(state, AppAction::SetYankFlash(true));

            // Spawn task to clear flash after delay
            let state_clone = Arc::clone(state);
            tokio::spawn(async move {
                tokio::time::sleep(FLASH_DURATION).await;
                apply(&state_clone, AppAction::SetYankFlash(false));
            });
        }
        Err(e) => {
            tracing::warn!("failed to copy to clipboard: {e}");
        }
    }
}
