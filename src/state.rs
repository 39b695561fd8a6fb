use crate::sidebar::{SectionKind, Sidebar, SidebarLine};
use crate::types::{Document, InputMode, LoadingState};
use serde_json::Value;
use std::sync::Arc;

/// Loaded document and where it came from
#[derive(Debug, Clone)]
pub struct DataState {
    pub source: Option<String>,
    /// `None` both before the first load and for a `null` document;
    /// `loading_state` tells the two apart
    pub document: Option<Arc<Document>>,
    pub loading_state: LoadingState,
    pub retry_count: u32,
    /// Bumped by every load; results of older loads are discarded
    pub load_generation: u64,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            source: None,
            document: None,
            loading_state: LoadingState::Idle,
            retry_count: 0,
            load_generation: 0,
        }
    }
}

/// Text input and modal state
#[derive(Debug, Clone)]
pub struct InputState {
    pub mode: InputMode,
    /// Section whose filter receives typed characters in filter mode
    pub filter_target: Option<SectionKind>,
    pub source_input: String,
    /// Validation message shown in the source modal
    pub source_error: Option<String>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            filter_target: None,
            source_input: String::new(),
            source_error: None,
        }
    }
}

/// Cursor and scrolling state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Selected index into the sidebar lines
    pub selected_line: usize,
    /// Highlighted entry of the visibility menu
    pub menu_index: usize,
    /// Scroll offset of the details panel (lines)
    pub details_scroll: usize,
    /// Briefly set after a successful yank
    pub yank_flash: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: DataState,
    pub input: InputState,
    pub ui: UiState,
    pub sidebar: Sidebar,
}

impl AppState {
    pub fn new(sidebar: Sidebar) -> Self {
        Self {
            sidebar,
            ..Default::default()
        }
    }

    /// Replace the document and rebuild the sidebar around it
    pub fn set_document(&mut self, document: Option<Document>) {
        self.data.document = document.map(Arc::new);
        self.ui.details_scroll = 0;
        self.refresh_sidebar();
    }

    /// Rebuild the sidebar lines and keep the selection inside them
    pub fn refresh_sidebar(&mut self) {
        self.sidebar.rebuild(self.data.document.as_ref());
        tracing::trace!(
            lines = self.sidebar.lines().len(),
            row_computations = self.sidebar.computations(),
            "sidebar rebuilt"
        );

        if self
            .input
            .filter_target
            .is_some_and(|kind| !self.sidebar.is_mounted(kind))
        {
            self.input.filter_target = None;
            if self.input.mode == InputMode::Filtering {
                self.input.mode = InputMode::Normal;
            }
        }

        let max = self.sidebar.lines().len().saturating_sub(1);
        if self.ui.selected_line > max {
            self.ui.selected_line = max;
        }
    }

    pub fn selected_line(&self) -> Option<&SidebarLine> {
        self.sidebar.lines().get(self.ui.selected_line)
    }

    /// Section of the selected line (header, row or empty body)
    pub fn selected_section(&self) -> Option<SectionKind> {
        self.selected_line().and_then(SidebarLine::section)
    }

    /// The raw descriptor of the selected row
    pub fn selected_descriptor(&self) -> Option<&Value> {
        let document = self.data.document.as_deref()?;
        match self.selected_line()? {
            SidebarLine::Row { kind, row } => kind.descriptor(document, row),
            _ => None,
        }
    }

    /// Move the selection onto a section's header, if it is listed
    pub fn select_section_header(&mut self, kind: SectionKind) {
        if let Some(index) = self.sidebar.header_index(kind) {
            self.ui.selected_line = index;
        }
    }
}
