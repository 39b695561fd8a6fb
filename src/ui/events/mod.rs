//! Event handling system for swagger-sidebar-tui
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles multiple input modes:
//! - Normal: Sidebar navigation and commands
//! - Filtering: Typing into the filter of one section
//! - VisibilityMenu: The dropdown that shows or hides sections
//! - EnteringSource: Modal for opening a document URL or file
//!
//! # Architecture
//!
//! The EventHandler uses an action pattern where input events generate AppActions
//! that are applied to AppState via the apply_action function in actions.rs.
//!
//! # Lock Management
//!
//! Handlers take the `Arc<RwLock<AppState>>` lock only for the duration of a
//! single read or a batch of actions, never across a clipboard or terminal call.

mod filter;
mod helpers;
mod menu;
mod modals;
mod normal;
mod yank;

use helpers::apply;

use crate::state::AppState;
use crate::types::InputMode;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use normal::NormalCommand;
use std::sync::{Arc, RwLock};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the app loop should do after an input event
#[derive(Debug, Default, PartialEq)]
pub struct EventOutcome {
    /// Load the current source again
    pub reload: bool,
    /// A newly submitted source to save and load
    pub submitted_source: Option<String>,
}

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main event handling loop - dispatches to appropriate handlers based on input mode
    pub fn handle_events(&mut self, state: &Arc<RwLock<AppState>>) -> Result<EventOutcome> {
        let mut outcome = EventOutcome::default();

        if !event::poll(POLL_INTERVAL)? {
            return Ok(outcome);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(outcome);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(outcome);
        }

        match helpers::input_mode(state) {
            InputMode::EnteringSource => {
                outcome.submitted_source = modals::handle_source_input(key, state);
            }

            InputMode::Filtering => filter::handle_filter_input(key, state),

            InputMode::VisibilityMenu => {
                if let Some(action) = menu::menu_action(key) {
                    apply(state, action);
                }
            }

            InputMode::Normal => match normal::normal_command(key) {
                Some(NormalCommand::Action(action)) => apply(state, action),
                Some(NormalCommand::Quit) => self.should_quit = true,
                Some(NormalCommand::Reload) => outcome.reload = true,
                Some(NormalCommand::Yank) => yank::handle_yank_row_key(state),
                Some(NormalCommand::ChangeSource) => modals::handle_source_dialog(state),
                None => {}
            },
        }

        Ok(outcome)
    }
}
