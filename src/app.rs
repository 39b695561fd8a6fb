use crate::config::Config;
use crate::document;
use crate::sidebar::{Sidebar, TracingReporter};
use crate::state::AppState;
use crate::types::{InputMode, LoadingState};
use crate::ui::{self, draw, events::EventOutcome};
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
    config: Config,
}

impl App {
    /// Build the app from the saved config; a source given on the command
    /// line wins over the configured one
    pub fn new(cli_source: Option<String>) -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config, cli_source))
    }

    fn with_config(config: Config, cli_source: Option<String>) -> Self {
        let sidebar = Sidebar::new(
            config.sidebar.visibility(),
            config.sidebar.guard_policy(),
            Arc::new(TracingReporter),
        );

        let mut state = AppState::new(sidebar);
        state.data.source = cli_source.or_else(|| config.document.source.clone());

        // Show the source modal if there is nothing to open
        if state.data.source.is_none() {
            state.input.mode = InputMode::EnteringSource;
        }

        Self {
            state: Arc::new(RwLock::new(state)),
            list_state: ListState::default(),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
            config,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.load_current_source();

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            let EventOutcome {
                reload,
                submitted_source,
            } = self.event_handler.handle_events(&self.state)?;

            if let Ok(mut s) = self.state.write() {
                draw::clamp_details_scroll(&mut s);
            }

            // If a source was submitted, save it and start loading
            if let Some(source) = submitted_source {
                if let Err(e) = self.config.set_source(source.clone()) {
                    tracing::warn!("failed to save config: {e}");
                }
                document::load_document_background(Arc::clone(&self.state), source);
            } else if reload {
                self.reload();
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let Ok(state) = self.state.read() else {
            return;
        };

        // Create main layout: Header, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[1]);

        draw::render_header(frame, main_chunks[0], &state);

        draw::render_sidebar_panel(
            frame,
            body_chunks[0],
            &state,
            self.spinner_index,
            &mut self.list_state,
        );
        draw::render_details_panel(frame, body_chunks[1], &state);

        draw::render_footer(frame, main_chunks[2], &state);

        // Render modals LAST - after everything else
        match state.input.mode {
            InputMode::VisibilityMenu => draw::render_visibility_menu(frame, &state),
            InputMode::EnteringSource => draw::render_source_input_modal(frame, &state),
            InputMode::Normal | InputMode::Filtering => {}
        }
    }

    fn load_current_source(&self) {
        let source = self.state.read().ok().and_then(|s| s.data.source.clone());
        if let Some(source) = source {
            document::load_document_background(Arc::clone(&self.state), source);
        }
    }

    fn reload(&self) {
        if let Ok(mut s) = self.state.write() {
            if matches!(s.data.loading_state, LoadingState::Error(_)) {
                s.data.retry_count += 1;
            }
        }
        self.load_current_source();
    }
}
