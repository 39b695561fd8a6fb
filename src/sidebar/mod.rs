//! Sidebar model
//!
//! This module owns everything the sidebar shows, independent of the terminal:
//! - `section`: the eight list section kinds and their shell state
//! - `filter`: key filtering and the per-section row cache
//! - `visibility`: per-section visibility flags and the INFO expand flag
//! - `mount`: which sections mount for a document
//! - `reporter`: where activated items are reported
//!
//! [`Sidebar`] composes them and flattens the result into [`SidebarLine`]s,
//! which is what the draw code renders and what the selection moves over.

pub mod filter;
pub mod mount;
pub mod reporter;
pub mod section;
pub mod visibility;

pub use filter::SidebarRow;
pub use mount::{mounted_sections, GuardPolicy};
pub use reporter::{ItemReporter, TracingReporter};
pub use section::{Icon, SectionKind, SectionState};
pub use visibility::Visibility;

use crate::types::Document;
use filter::RowCache;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One rendered line of the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarLine {
    InfoHeader {
        expanded: bool,
    },
    InfoField {
        label: &'static str,
        value: String,
    },
    SectionHeader {
        kind: SectionKind,
        expanded: bool,
        shown: usize,
        total: usize,
        filter: String,
    },
    Row {
        kind: SectionKind,
        row: SidebarRow,
    },
    /// Placeholder for an expanded section with nothing to list
    EmptyBody {
        kind: SectionKind,
        filtered: bool,
    },
}

impl SidebarLine {
    /// The section this line belongs to, if any
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            SidebarLine::InfoHeader { .. } | SidebarLine::InfoField { .. } => None,
            SidebarLine::SectionHeader { kind, .. }
            | SidebarLine::Row { kind, .. }
            | SidebarLine::EmptyBody { kind, .. } => Some(*kind),
        }
    }
}

/// What activating a line did
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    InfoToggled(bool),
    SectionToggled(SectionKind, bool),
    ItemReported(Vec<String>),
    Nothing,
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    visibility: Visibility,
    policy: GuardPolicy,
    sections: BTreeMap<SectionKind, SectionState>,
    caches: BTreeMap<SectionKind, RowCache>,
    lines: Vec<SidebarLine>,
    reporter: Arc<dyn ItemReporter>,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(
            Visibility::default(),
            GuardPolicy::default(),
            Arc::new(TracingReporter),
        )
    }
}

impl Sidebar {
    pub fn new(
        visibility: Visibility,
        policy: GuardPolicy,
        reporter: Arc<dyn ItemReporter>,
    ) -> Self {
        Self {
            visibility,
            policy,
            sections: BTreeMap::new(),
            caches: BTreeMap::new(),
            lines: Vec::new(),
            reporter,
        }
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    pub fn lines(&self) -> &[SidebarLine] {
        &self.lines
    }

    /// Shell state of a mounted section
    pub fn section(&self, kind: SectionKind) -> Option<&SectionState> {
        self.sections.get(&kind)
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> Option<&mut SectionState> {
        self.sections.get_mut(&kind)
    }

    pub fn is_mounted(&self, kind: SectionKind) -> bool {
        self.sections.contains_key(&kind)
    }

    /// Show or hide a section. Hiding unmounts it, which drops its filter.
    pub fn toggle_visibility(&mut self, kind: SectionKind) -> bool {
        let visible = self.visibility.toggle(kind);
        if !visible {
            self.sections.remove(&kind);
            self.caches.remove(&kind);
        }
        tracing::debug!(section = kind.config_key(), visible, "section visibility toggled");
        visible
    }

    pub fn toggle_info(&mut self) -> bool {
        let expanded = self.visibility.toggle_info();
        tracing::debug!(expanded, "info section toggled");
        expanded
    }

    /// Recompute mounts and the flattened line list for `document`.
    ///
    /// Sections that are no longer mounted lose their shell state; sections
    /// that just mounted start expanded with an empty filter.
    pub fn rebuild(&mut self, document: Option<&Arc<Document>>) {
        self.lines.clear();

        let mounted = mounted_sections(
            document.map(|d| d.as_ref()),
            &self.visibility,
            self.policy,
        );
        self.sections.retain(|kind, _| mounted.contains(kind));
        self.caches.retain(|kind, _| mounted.contains(kind));

        let Some(document) = document else {
            return;
        };

        let info_expanded = self.visibility.info_expanded();
        self.lines.push(SidebarLine::InfoHeader {
            expanded: info_expanded,
        });
        if info_expanded {
            let fields = document
                .info
                .as_ref()
                .map(|info| info.fields())
                .unwrap_or_default();
            if fields.is_empty() {
                self.lines.push(SidebarLine::InfoField {
                    label: "Info",
                    value: "No info in this document".to_string(),
                });
            }
            for (label, value) in fields {
                self.lines.push(SidebarLine::InfoField { label, value });
            }
        }

        for kind in mounted {
            let state = self.sections.entry(kind).or_default();
            let mode = self.policy.filter_mode(kind);
            let rows = self
                .caches
                .entry(kind)
                .or_default()
                .get_or_compute(document, &state.filter, mode, || {
                    kind.rows(document, &state.filter, mode)
                });

            self.lines.push(SidebarLine::SectionHeader {
                kind,
                expanded: state.expanded,
                shown: rows.len(),
                total: kind.entry_count(document),
                filter: state.filter.clone(),
            });

            if !state.expanded {
                continue;
            }
            if rows.is_empty() {
                self.lines.push(SidebarLine::EmptyBody {
                    kind,
                    filtered: !state.filter.is_empty(),
                });
            }
            for row in rows {
                self.lines.push(SidebarLine::Row {
                    kind,
                    row: row.clone(),
                });
            }
        }
    }

    /// Activate the line at `index`: headers toggle, rows are reported.
    ///
    /// Callers rebuild afterwards; the line list is stale after a toggle.
    pub fn activate(&mut self, index: usize) -> Activation {
        let Some(line) = self.lines.get(index).cloned() else {
            return Activation::Nothing;
        };

        match line {
            SidebarLine::InfoHeader { .. } | SidebarLine::InfoField { .. } => {
                Activation::InfoToggled(self.toggle_info())
            }
            SidebarLine::SectionHeader { kind, .. } => match self.sections.get_mut(&kind) {
                Some(state) => Activation::SectionToggled(kind, state.toggle_expanded()),
                None => Activation::Nothing,
            },
            SidebarLine::Row { kind, row } => {
                let path = [kind.slug(), row.key.as_str()];
                self.reporter.report(&path);
                Activation::ItemReported(path.iter().map(|p| p.to_string()).collect())
            }
            SidebarLine::EmptyBody { .. } => Activation::Nothing,
        }
    }

    /// Index of a section's header line in the current line list
    pub fn header_index(&self, kind: SectionKind) -> Option<usize> {
        self.lines.iter().position(|line| {
            matches!(line, SidebarLine::SectionHeader { kind: k, .. } if *k == kind)
        })
    }

    /// Keys of the rows currently listed for a section
    pub fn visible_keys(&self, kind: SectionKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                SidebarLine::Row { kind: k, row } if *k == kind => Some(row.key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Total row computations across all section caches
    pub fn computations(&self) -> usize {
        self.caches.values().map(RowCache::computations).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::reporter::RecordingReporter;
    use super::*;
    use crate::document::parse::document_from_value;
    use serde_json::json;

    fn document(value: serde_json::Value) -> Arc<Document> {
        Arc::new(document_from_value(value).unwrap().unwrap())
    }

    fn petstore() -> Arc<Document> {
        document(json!({
            "info": { "title": "Petstore", "version": "1.0.0" },
            "servers": [{ "url": "https://petstore.example.com" }],
            "paths": { "/pets": { "get": {} } },
            "components": {
                "responses": { "NotFound": { "description": "missing" } },
                "parameters": {
                    "Limit": { "description": "max items" },
                    "Offset": {}
                },
                "schemas": { "Pet": {} },
                "securitySchemes": { "api_key": {} }
            }
        }))
    }

    #[test]
    fn test_null_document_renders_nothing() {
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(None);
        assert!(sidebar.lines().is_empty());
    }

    #[test]
    fn test_initial_lines() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        assert_eq!(sidebar.lines()[0], SidebarLine::InfoHeader { expanded: false });
        assert_eq!(
            sidebar.lines()[1],
            SidebarLine::SectionHeader {
                kind: SectionKind::Servers,
                expanded: true,
                shown: 1,
                total: 1,
                filter: String::new(),
            }
        );
        assert_eq!(sidebar.visible_keys(SectionKind::Parameters), vec!["Limit", "Offset"]);
        assert!(!sidebar.is_mounted(SectionKind::Headers));
        assert!(!sidebar.is_mounted(SectionKind::Requests));
    }

    #[test]
    fn test_filter_scopes_rows() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        sidebar
            .section_mut(SectionKind::Parameters)
            .unwrap()
            .push_filter("lim");
        sidebar.rebuild(Some(&doc));

        assert_eq!(sidebar.visible_keys(SectionKind::Parameters), vec!["Limit"]);
        let header = &sidebar.lines()[sidebar.header_index(SectionKind::Parameters).unwrap()];
        assert_eq!(
            header,
            &SidebarLine::SectionHeader {
                kind: SectionKind::Parameters,
                expanded: true,
                shown: 1,
                total: 2,
                filter: "lim".to_string(),
            }
        );
    }

    #[test]
    fn test_filter_without_matches_shows_empty_body() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        sidebar
            .section_mut(SectionKind::Schemas)
            .unwrap()
            .push_filter("zzz");
        sidebar.rebuild(Some(&doc));

        assert!(sidebar.visible_keys(SectionKind::Schemas).is_empty());
        assert!(sidebar.lines().contains(&SidebarLine::EmptyBody {
            kind: SectionKind::Schemas,
            filtered: true,
        }));
    }

    #[test]
    fn test_collapse_keeps_filter() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        let state = sidebar.section_mut(SectionKind::Parameters).unwrap();
        state.push_filter("off");
        state.toggle_expanded();
        sidebar.rebuild(Some(&doc));

        assert!(sidebar.visible_keys(SectionKind::Parameters).is_empty());
        assert_eq!(sidebar.section(SectionKind::Parameters).unwrap().filter, "off");

        sidebar
            .section_mut(SectionKind::Parameters)
            .unwrap()
            .toggle_expanded();
        sidebar.rebuild(Some(&doc));
        assert_eq!(sidebar.visible_keys(SectionKind::Parameters), vec!["Offset"]);
    }

    #[test]
    fn test_hiding_resets_filter() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        sidebar
            .section_mut(SectionKind::Parameters)
            .unwrap()
            .push_filter("lim");
        assert!(!sidebar.toggle_visibility(SectionKind::Parameters));
        sidebar.rebuild(Some(&doc));
        assert!(!sidebar.is_mounted(SectionKind::Parameters));
        assert!(sidebar.header_index(SectionKind::Parameters).is_none());

        assert!(sidebar.toggle_visibility(SectionKind::Parameters));
        sidebar.rebuild(Some(&doc));
        assert_eq!(sidebar.section(SectionKind::Parameters).unwrap().filter, "");
        assert_eq!(sidebar.visible_keys(SectionKind::Parameters), vec!["Limit", "Offset"]);
    }

    #[test]
    fn test_info_expands_with_fields() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        assert_eq!(sidebar.activate(0), Activation::InfoToggled(true));
        sidebar.rebuild(Some(&doc));

        assert_eq!(sidebar.lines()[0], SidebarLine::InfoHeader { expanded: true });
        assert_eq!(
            sidebar.lines()[1],
            SidebarLine::InfoField {
                label: "Title",
                value: "Petstore".to_string(),
            }
        );
    }

    #[test]
    fn test_info_without_info_object() {
        let doc = document(json!({ "paths": {} }));
        let mut sidebar = Sidebar::default();
        sidebar.toggle_info();
        sidebar.rebuild(Some(&doc));

        assert!(matches!(
            sidebar.lines()[1],
            SidebarLine::InfoField { label: "Info", .. }
        ));
    }

    #[test]
    fn test_activate_header_collapses_section() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));

        let index = sidebar.header_index(SectionKind::Parameters).unwrap();
        assert_eq!(
            sidebar.activate(index),
            Activation::SectionToggled(SectionKind::Parameters, false)
        );
        sidebar.rebuild(Some(&doc));
        assert!(sidebar.visible_keys(SectionKind::Parameters).is_empty());
    }

    #[test]
    fn test_activate_row_reports_item_path() {
        let reporter = RecordingReporter::default();
        let doc = petstore();
        let mut sidebar = Sidebar::new(
            Visibility::default(),
            GuardPolicy::Corrected,
            Arc::new(reporter.clone()),
        );
        sidebar.rebuild(Some(&doc));

        let index = sidebar.header_index(SectionKind::Parameters).unwrap() + 1;
        assert_eq!(
            sidebar.activate(index),
            Activation::ItemReported(vec!["parameter".to_string(), "Limit".to_string()])
        );
        assert_eq!(
            reporter.paths(),
            vec![vec!["parameter".to_string(), "Limit".to_string()]]
        );
    }

    #[test]
    fn test_activate_out_of_range() {
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(None);
        assert_eq!(sidebar.activate(3), Activation::Nothing);
    }

    #[test]
    fn test_rows_are_memoized_between_rebuilds() {
        let doc = petstore();
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&doc));
        let first = sidebar.computations();

        sidebar.rebuild(Some(&doc));
        sidebar.toggle_info();
        sidebar.rebuild(Some(&doc));
        assert_eq!(sidebar.computations(), first);

        sidebar
            .section_mut(SectionKind::Paths)
            .unwrap()
            .push_filter("p");
        sidebar.rebuild(Some(&doc));
        assert_eq!(sidebar.computations(), first + 1);
    }

    #[test]
    fn test_new_document_recomputes_rows() {
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&petstore()));
        let first = sidebar.computations();

        sidebar.rebuild(Some(&petstore()));
        assert_eq!(sidebar.computations(), first * 2);
    }

    #[test]
    fn test_section_dropped_when_document_loses_data() {
        let mut sidebar = Sidebar::default();
        sidebar.rebuild(Some(&petstore()));
        sidebar
            .section_mut(SectionKind::Schemas)
            .unwrap()
            .push_filter("pet");

        sidebar.rebuild(Some(&document(json!({ "paths": {} }))));
        assert!(!sidebar.is_mounted(SectionKind::Schemas));

        sidebar.rebuild(Some(&petstore()));
        assert_eq!(sidebar.section(SectionKind::Schemas).unwrap().filter, "");
    }

    #[test]
    fn test_legacy_policy_quirks() {
        let doc = document(json!({
            "components": {
                "responses": { "NotFound": {} },
                "securitySchemes": { "api_key": {} }
            }
        }));
        let mut sidebar = Sidebar::new(
            Visibility::default(),
            GuardPolicy::Legacy,
            Arc::new(TracingReporter),
        );
        sidebar.rebuild(Some(&doc));

        assert!(!sidebar.is_mounted(SectionKind::Security));

        sidebar
            .section_mut(SectionKind::Responses)
            .unwrap()
            .push_filter("Not");
        sidebar.rebuild(Some(&doc));
        assert!(sidebar.visible_keys(SectionKind::Responses).is_empty());
    }

    #[test]
    fn test_security_filter_case_under_each_policy() {
        let doc = document(json!({
            "components": {
                "schemas": { "Pet": {} },
                "securitySchemes": { "api_key": {}, "oauth": {} }
            }
        }));

        let filtered_keys = |policy: GuardPolicy| {
            let mut sidebar =
                Sidebar::new(Visibility::default(), policy, Arc::new(TracingReporter));
            sidebar.rebuild(Some(&doc));
            sidebar
                .section_mut(SectionKind::Security)
                .unwrap()
                .push_filter("API");
            sidebar.rebuild(Some(&doc));
            sidebar
                .visible_keys(SectionKind::Security)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };

        assert!(filtered_keys(GuardPolicy::Legacy).is_empty());
        assert_eq!(filtered_keys(GuardPolicy::Corrected), vec!["api_key"]);
    }
}
