use crate::document::parse::parse_document;
use crate::state::AppState;
use crate::types::LoadingState;
use anyhow::{Context, Result};
use std::sync::{Arc, RwLock};

/// Spawns a background task that loads and parses the document at `source`.
///
/// Each call starts a new load generation. A task whose generation has been
/// superseded by a later call leaves the state alone.
pub fn load_document_background(state: Arc<RwLock<AppState>>, source: String) {
    let generation = match state.write() {
        Ok(mut s) => {
            s.data.load_generation += 1;
            s.data.loading_state = LoadingState::Fetching;
            s.data.source = Some(source.clone());
            s.data.load_generation
        }
        Err(_) => return,
    };

    tokio::spawn(async move {
        tracing::info!(%source, generation, "loading document");

        let text = match read_source(&source).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(%source, "failed to load document: {e:#}");
                update_if_current(&state, generation, |s| {
                    s.data.loading_state = LoadingState::Error(format!("Load error: {e:#}"));
                });
                return;
            }
        };

        update_if_current(&state, generation, |s| {
            s.data.loading_state = LoadingState::Parsing;
        });

        match parse_document(&text) {
            Ok(document) => {
                tracing::info!(%source, empty = document.is_none(), "document parsed");
                update_if_current(&state, generation, |s| {
                    s.set_document(document);
                    s.data.loading_state = LoadingState::Complete;
                    s.data.retry_count = 0;
                });
            }
            Err(e) => {
                tracing::error!(%source, "failed to parse document: {e:#}");
                update_if_current(&state, generation, |s| {
                    s.data.loading_state = LoadingState::Error(format!("Parse error: {e:#}"));
                });
            }
        }
    });
}

/// Apply `update` only while `generation` is still the latest load
fn update_if_current(
    state: &Arc<RwLock<AppState>>,
    generation: u64,
    update: impl FnOnce(&mut AppState),
) {
    let Ok(mut s) = state.write() else {
        return;
    };
    if s.data.load_generation != generation {
        tracing::debug!(
            generation,
            latest = s.data.load_generation,
            "dropping result of superseded load"
        );
        return;
    }
    update(&mut s);
}

/// Whether `source` names a remote document rather than a local file
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the raw document text from a URL or a file path
pub async fn read_source(source: &str) -> Result<String> {
    if is_remote(source) {
        let response = reqwest::get(source)
            .await
            .with_context(|| format!("request to {source} failed"))?
            .error_for_status()
            .with_context(|| format!("{source} returned an error status"))?;

        response
            .text()
            .await
            .with_context(|| format!("failed to read body of {source}"))
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read {source}"))
    }
}
