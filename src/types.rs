use serde::Deserialize;
use serde_json::Value;

/// Ordered mapping from entry name to descriptor, as found under `paths` and
/// each `components.*` key. Iteration follows document order.
pub type EntryMap = serde_json::Map<String, Value>;

/// The structured document driving the sidebar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub info: Option<Info>,
    pub servers: Option<Vec<Server>>,
    pub paths: Option<EntryMap>,
    pub components: Components,
}

/// Reusable component mappings. A `None` field means the key was absent (or
/// unusable) in the document, which is different from an empty mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub request_bodies: Option<EntryMap>,
    pub responses: Option<EntryMap>,
    pub parameters: Option<EntryMap>,
    pub headers: Option<EntryMap>,
    pub schemas: Option<EntryMap>,
    pub security_schemes: Option<EntryMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,

    #[serde(rename = "termsOfService")]
    pub terms_of_service: Option<String>,

    pub contact: Option<Contact>,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct License {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
    /// The server object as it appeared in the document
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    Fetching,
    Parsing,
    Complete,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing into the filter of the given section
    Filtering,
    /// The VISIBILITY dropdown is open
    VisibilityMenu,
    EnteringSource,
}

impl Info {
    /// Label/value pairs shown when the INFO section is expanded
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if let Some(title) = &self.title {
            fields.push(("Title", title.clone()));
        }
        if let Some(version) = &self.version {
            fields.push(("Version", version.clone()));
        }
        if let Some(description) = &self.description {
            fields.push(("Description", description.clone()));
        }
        if let Some(terms) = &self.terms_of_service {
            fields.push(("Terms", terms.clone()));
        }
        if let Some(contact) = &self.contact {
            let parts: Vec<&str> = [&contact.name, &contact.email, &contact.url]
                .into_iter()
                .filter_map(|p| p.as_deref())
                .collect();
            if !parts.is_empty() {
                fields.push(("Contact", parts.join(" | ")));
            }
        }
        if let Some(license) = &self.license {
            let parts: Vec<&str> = [&license.name, &license.url]
                .into_iter()
                .filter_map(|p| p.as_deref())
                .collect();
            if !parts.is_empty() {
                fields.push(("License", parts.join(" | ")));
            }
        }

        fields
    }
}
