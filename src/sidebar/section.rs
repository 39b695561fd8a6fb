//! Section kinds and per-section shell state
//!
//! Every list section of the sidebar is one [`SectionKind`]. The kind knows
//! where its entries live in the document and how its rows look; the shell
//! state ([`SectionState`]) holds what the user changes at runtime.

use super::filter::{filter_entries, FilterMode, SidebarRow};
use crate::types::{Document, EntryMap};
use serde_json::Value;

const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Symbolic icon shown in front of a row or header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Indentation,
    Key,
    Globe,
    Info,
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Servers,
    Paths,
    Requests,
    Responses,
    Parameters,
    Headers,
    Schemas,
    Security,
}

impl SectionKind {
    /// Render order, which is also the order of the visibility menu
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Servers,
        SectionKind::Paths,
        SectionKind::Requests,
        SectionKind::Responses,
        SectionKind::Parameters,
        SectionKind::Headers,
        SectionKind::Schemas,
        SectionKind::Security,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Servers => "SERVERS",
            SectionKind::Paths => "PATHS",
            SectionKind::Requests => "REQUESTS",
            SectionKind::Responses => "RESPONSES",
            SectionKind::Parameters => "PARAMETERS",
            SectionKind::Headers => "HEADERS",
            SectionKind::Schemas => "SCHEMAS",
            SectionKind::Security => "SECURITY",
        }
    }

    /// Label in the visibility menu
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Servers => "Servers",
            SectionKind::Paths => "Paths",
            SectionKind::Requests => "Requests",
            SectionKind::Responses => "Responses",
            SectionKind::Parameters => "Parameters",
            SectionKind::Headers => "Headers",
            SectionKind::Schemas => "Schemas",
            SectionKind::Security => "Security",
        }
    }

    /// First element of the item path reported when a row is activated
    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::Servers => "server",
            SectionKind::Paths => "path",
            SectionKind::Requests => "request",
            SectionKind::Responses => "response",
            SectionKind::Parameters => "parameter",
            SectionKind::Headers => "header",
            SectionKind::Schemas => "schema",
            SectionKind::Security => "security",
        }
    }

    /// Name used in the config file
    pub fn config_key(self) -> &'static str {
        match self {
            SectionKind::Servers => "servers",
            SectionKind::Paths => "paths",
            SectionKind::Requests => "requests",
            SectionKind::Responses => "responses",
            SectionKind::Parameters => "parameters",
            SectionKind::Headers => "headers",
            SectionKind::Schemas => "schemas",
            SectionKind::Security => "security",
        }
    }

    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.config_key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn icon(self) -> Icon {
        match self {
            SectionKind::Servers => Icon::Globe,
            SectionKind::Security => Icon::Key,
            _ => Icon::Indentation,
        }
    }

    /// Security rows show the scheme name only
    pub fn has_tooltips(self) -> bool {
        self != SectionKind::Security
    }

    /// The mapping backing this section, for every kind except servers
    pub fn entry_map(self, document: &Document) -> Option<&EntryMap> {
        let components = &document.components;
        match self {
            SectionKind::Servers => None,
            SectionKind::Paths => document.paths.as_ref(),
            SectionKind::Requests => components.request_bodies.as_ref(),
            SectionKind::Responses => components.responses.as_ref(),
            SectionKind::Parameters => components.parameters.as_ref(),
            SectionKind::Headers => components.headers.as_ref(),
            SectionKind::Schemas => components.schemas.as_ref(),
            SectionKind::Security => components.security_schemes.as_ref(),
        }
    }

    /// Whether the document carries this section's data at all. An empty
    /// mapping counts as present.
    pub fn is_present(self, document: &Document) -> bool {
        match self {
            SectionKind::Servers => document.servers.is_some(),
            _ => self.entry_map(document).is_some(),
        }
    }

    /// Number of entries before filtering
    pub fn entry_count(self, document: &Document) -> usize {
        match self {
            SectionKind::Servers => document.servers.as_ref().map_or(0, Vec::len),
            _ => self.entry_map(document).map_or(0, EntryMap::len),
        }
    }

    /// The rows whose key passes `filter`, in document order
    pub fn rows(self, document: &Document, filter: &str, mode: FilterMode) -> Vec<SidebarRow> {
        if self == SectionKind::Servers {
            let Some(servers) = &document.servers else {
                return Vec::new();
            };
            let entries = servers
                .iter()
                .enumerate()
                .map(|(position, server)| (server.url.as_str(), (position, server)));
            return filter_entries(entries, filter, mode)
                .into_iter()
                .map(|(url, (position, server))| SidebarRow {
                    tooltip: server.description.clone(),
                    ..SidebarRow::new(url, position)
                })
                .collect();
        }

        let Some(map) = self.entry_map(document) else {
            return Vec::new();
        };

        let entries = map
            .iter()
            .enumerate()
            .map(|(position, (key, descriptor))| (key.as_str(), (position, descriptor)));
        filter_entries(entries, filter, mode)
            .into_iter()
            .map(|(key, (position, descriptor))| self.row(key, position, descriptor))
            .collect()
    }

    /// The raw descriptor behind a row, for the details panel. Servers are
    /// looked up by position since several may share a URL.
    pub fn descriptor<'a>(self, document: &'a Document, row: &SidebarRow) -> Option<&'a Value> {
        match self {
            SectionKind::Servers => document
                .servers
                .as_ref()?
                .get(row.position)
                .map(|server| &server.raw),
            _ => self.entry_map(document)?.get(&row.key),
        }
    }

    fn row(self, key: &str, position: usize, descriptor: &Value) -> SidebarRow {
        let tooltip = if !self.has_tooltips() {
            None
        } else if self == SectionKind::Paths {
            text_field(descriptor, "summary").or_else(|| text_field(descriptor, "description"))
        } else {
            text_field(descriptor, "description")
        };

        let methods = if self == SectionKind::Paths {
            path_methods(descriptor)
        } else {
            Vec::new()
        };

        SidebarRow {
            tooltip,
            methods,
            ..SidebarRow::new(key, position)
        }
    }
}

fn text_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

/// Operations defined on a path item, in the order the document lists them
fn path_methods(item: &Value) -> Vec<String> {
    let Some(map) = item.as_object() else {
        return Vec::new();
    };
    map.keys()
        .filter(|key| HTTP_METHODS.contains(&key.as_str()))
        .map(|key| key.to_uppercase())
        .collect()
}

/// Runtime state of one mounted section: the shell around its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    pub expanded: bool,
    pub filter: String,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            expanded: true,
            filter: String::new(),
        }
    }
}

impl SectionState {
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn push_filter(&mut self, text: &str) {
        self.filter.push_str(text);
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }
}
