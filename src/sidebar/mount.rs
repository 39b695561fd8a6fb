//! Which sections mount for a given document

use super::filter::FilterMode;
use super::section::SectionKind;
use super::visibility::Visibility;
use crate::types::Document;

/// Mount and filter rules.
///
/// `Legacy` keeps two older rules. The security section is guarded by the
/// presence of `schemas` rather than `securitySchemes`, and the responses and
/// security filters compare the query as typed instead of lowercasing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    #[default]
    Corrected,
    Legacy,
}

impl GuardPolicy {
    pub fn filter_mode(self, kind: SectionKind) -> FilterMode {
        match (self, kind) {
            (GuardPolicy::Legacy, SectionKind::Responses | SectionKind::Security) => {
                FilterMode::LowercaseKeyOnly
            }
            _ => FilterMode::CaseInsensitive,
        }
    }

    /// Whether the data guarding `kind` is present on the document
    pub fn data_present(self, document: &Document, kind: SectionKind) -> bool {
        match (self, kind) {
            (GuardPolicy::Legacy, SectionKind::Security) => {
                SectionKind::Schemas.is_present(document)
            }
            _ => kind.is_present(document),
        }
    }
}

/// Sections to render, in render order. A null document mounts nothing.
pub fn mounted_sections(
    document: Option<&Document>,
    visibility: &Visibility,
    policy: GuardPolicy,
) -> Vec<SectionKind> {
    let Some(document) = document else {
        return Vec::new();
    };

    SectionKind::ALL
        .into_iter()
        .filter(|&kind| visibility.is_visible(kind) && policy.data_present(document, kind))
        .collect()
}
