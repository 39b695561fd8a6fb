//! Section filtering
//!
//! Filtering is a pure function of (entries, filter text). [`RowCache`]
//! memoizes the result per section so redraws that change neither the
//! document nor the filter do not walk the mapping again.

use crate::types::Document;
use std::sync::Arc;

/// How the filter text is compared against entry keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Both key and filter are lowercased
    #[default]
    CaseInsensitive,
    /// Only the key is lowercased; an upper-case filter never matches
    LowercaseKeyOnly,
}

/// One visible entry of a section
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarRow {
    pub key: String,
    /// Shown next to the row when the descriptor carries a `description`
    pub tooltip: Option<String>,
    /// HTTP methods of a path item, upper-cased, in document order
    pub methods: Vec<String>,
    /// Index of the entry in its section before filtering
    pub position: usize,
}

impl SidebarRow {
    pub fn new(key: impl Into<String>, position: usize) -> Self {
        Self {
            key: key.into(),
            tooltip: None,
            methods: Vec::new(),
            position,
        }
    }
}

/// Whether `key` passes `filter`. An empty filter matches everything.
pub fn matches(key: &str, filter: &str, mode: FilterMode) -> bool {
    let key = key.to_lowercase();
    match mode {
        FilterMode::CaseInsensitive => key.contains(&filter.to_lowercase()),
        FilterMode::LowercaseKeyOnly => key.contains(filter),
    }
}

/// Keep the entries whose key passes `filter`, preserving input order
pub fn filter_entries<'a, T>(
    entries: impl IntoIterator<Item = (&'a str, T)>,
    filter: &str,
    mode: FilterMode,
) -> Vec<(&'a str, T)> {
    entries
        .into_iter()
        .filter(|(key, _)| matches(key, filter, mode))
        .collect()
}

#[derive(Debug, Clone)]
struct CacheKey {
    document: Arc<Document>,
    filter: String,
    mode: FilterMode,
}

impl CacheKey {
    fn is_for(&self, document: &Arc<Document>, filter: &str, mode: FilterMode) -> bool {
        Arc::ptr_eq(&self.document, document) && self.filter == filter && self.mode == mode
    }
}

/// Memoized rows of one section, keyed on document identity and filter text
#[derive(Debug, Clone, Default)]
pub struct RowCache {
    key: Option<CacheKey>,
    rows: Vec<SidebarRow>,
    computations: usize,
}

impl RowCache {
    /// Return the cached rows, recomputing them with `compute` when the
    /// document (by pointer) or the filter changed since the last call
    pub fn get_or_compute(
        &mut self,
        document: &Arc<Document>,
        filter: &str,
        mode: FilterMode,
        compute: impl FnOnce() -> Vec<SidebarRow>,
    ) -> &[SidebarRow] {
        let fresh = self
            .key
            .as_ref()
            .is_some_and(|key| key.is_for(document, filter, mode));

        if !fresh {
            self.rows = compute();
            self.computations += 1;
            self.key = Some(CacheKey {
                document: Arc::clone(document),
                filter: filter.to_string(),
                mode,
            });
        }

        &self.rows
    }

    /// Number of times the rows were actually computed
    pub fn computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(entries: &[(&'a str, ())]) -> Vec<&'a str> {
        entries.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let entries = vec![("Offset", ()), ("Limit", ()), ("Cursor", ())];
        let kept = filter_entries(entries, "", FilterMode::CaseInsensitive);
        assert_eq!(keys(&kept), vec!["Offset", "Limit", "Cursor"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let entries = vec![("Limit", ()), ("Offset", ()), ("rateLIMIT", ())];
        let kept = filter_entries(entries, "LiM", FilterMode::CaseInsensitive);
        assert_eq!(keys(&kept), vec!["Limit", "rateLIMIT"]);
    }

    #[test]
    fn test_lowercase_key_only_mode() {
        assert!(matches("NotFound", "found", FilterMode::LowercaseKeyOnly));
        assert!(!matches("NotFound", "Found", FilterMode::LowercaseKeyOnly));
        assert!(matches("NotFound", "Found", FilterMode::CaseInsensitive));
    }

    #[test]
    fn test_no_match() {
        let entries = vec![("Limit", 1), ("Offset", 2)];
        let kept = filter_entries(entries, "zzz", FilterMode::CaseInsensitive);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_carries_values() {
        let entries = vec![("Limit", 1), ("Offset", 2)];
        let kept = filter_entries(entries, "off", FilterMode::CaseInsensitive);
        assert_eq!(kept, vec![("Offset", 2)]);
    }

    #[test]
    fn test_cache_reuses_rows_for_same_document_and_filter() {
        let document = Arc::new(Document::default());
        let mut cache = RowCache::default();

        let rows = cache.get_or_compute(&document, "li", FilterMode::CaseInsensitive, || {
            vec![SidebarRow::new("Limit", 0)]
        });
        assert_eq!(rows.len(), 1);

        let rows = cache.get_or_compute(&document, "li", FilterMode::CaseInsensitive, || {
            panic!("should not recompute")
        });
        assert_eq!(rows[0].key, "Limit");
        assert_eq!(cache.computations(), 1);
    }

    #[test]
    fn test_cache_recomputes_on_filter_change() {
        let document = Arc::new(Document::default());
        let mut cache = RowCache::default();

        cache.get_or_compute(&document, "", FilterMode::CaseInsensitive, Vec::new);
        cache.get_or_compute(&document, "a", FilterMode::CaseInsensitive, Vec::new);
        cache.get_or_compute(&document, "a", FilterMode::LowercaseKeyOnly, Vec::new);
        assert_eq!(cache.computations(), 3);
    }

    #[test]
    fn test_cache_recomputes_on_new_document_even_if_equal() {
        let first = Arc::new(Document::default());
        let second = Arc::new(Document::default());
        let mut cache = RowCache::default();

        cache.get_or_compute(&first, "", FilterMode::CaseInsensitive, Vec::new);
        cache.get_or_compute(&second, "", FilterMode::CaseInsensitive, Vec::new);
        assert_eq!(cache.computations(), 2);
    }
}
