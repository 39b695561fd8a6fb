use super::section::SectionKind;
use std::collections::BTreeMap;

/// Which sections are mounted, plus the INFO expand flag.
///
/// Every list section starts visible. INFO cannot be hidden; it only
/// expands and collapses, starting collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    flags: BTreeMap<SectionKind, bool>,
    info_expanded: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            flags: SectionKind::ALL.into_iter().map(|kind| (kind, true)).collect(),
            info_expanded: false,
        }
    }
}

impl Visibility {
    /// Start with the given sections hidden
    pub fn with_hidden(hidden: impl IntoIterator<Item = SectionKind>) -> Self {
        let mut visibility = Self::default();
        for kind in hidden {
            visibility.flags.insert(kind, false);
        }
        visibility
    }

    pub fn is_visible(&self, kind: SectionKind) -> bool {
        self.flags.get(&kind).copied().unwrap_or(true)
    }

    /// Flip a section's flag and return the new value
    pub fn toggle(&mut self, kind: SectionKind) -> bool {
        let flag = self.flags.entry(kind).or_insert(true);
        *flag = !*flag;
        *flag
    }

    pub fn info_expanded(&self) -> bool {
        self.info_expanded
    }

    pub fn toggle_info(&mut self) -> bool {
        self.info_expanded = !self.info_expanded;
        self.info_expanded
    }
}
