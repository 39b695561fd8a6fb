use crate::types::{Components, Document, EntryMap, Info, Server};
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Parse document text. A JSON `null` yields `Ok(None)`: there is simply
/// nothing to show.
pub fn parse_document(text: &str) -> Result<Option<Document>> {
    let value: Value = serde_json::from_str(text).context("document is not valid JSON")?;
    document_from_value(value)
}

/// Build a document from an already-parsed JSON value.
///
/// Unusable fields are dropped (and logged) instead of failing the whole
/// document: a `parameters` array, a `servers` object, a server without a
/// `url`. Only a root that is neither an object nor null is an error.
pub fn document_from_value(value: Value) -> Result<Option<Document>> {
    let mut root = match value {
        Value::Null => return Ok(None),
        Value::Object(map) => map,
        other => bail!(
            "expected a JSON object at the document root, found {}",
            value_kind(&other)
        ),
    };

    let info = root.remove("info").and_then(take_info);
    let servers = root.remove("servers").and_then(take_servers);
    let paths = root.remove("paths").and_then(|v| take_map("paths", v));
    let components = root
        .remove("components")
        .map(take_components)
        .unwrap_or_default();

    Ok(Some(Document {
        info,
        servers,
        paths,
        components,
    }))
}

fn take_info(value: Value) -> Option<Info> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(info) => Some(info),
        Err(e) => {
            tracing::warn!("ignoring malformed info object: {e}");
            None
        }
    }
}

fn take_servers(value: Value) -> Option<Vec<Server>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return None,
        other => {
            tracing::warn!("ignoring servers: expected an array, found {}", value_kind(&other));
            return None;
        }
    };

    let servers = items
        .into_iter()
        .filter_map(|raw| {
            let Some(url) = raw.get("url").and_then(Value::as_str) else {
                tracing::warn!("skipping server entry without a url");
                return None;
            };
            Some(Server {
                url: url.to_string(),
                description: raw
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                raw,
            })
        })
        .collect();

    Some(servers)
}

fn take_components(value: Value) -> Components {
    let mut map = match value {
        Value::Object(map) => map,
        Value::Null => return Components::default(),
        other => {
            tracing::warn!(
                "ignoring components: expected an object, found {}",
                value_kind(&other)
            );
            return Components::default();
        }
    };

    let mut field = |name: &str| map.remove(name).and_then(|v| take_map(name, v));

    Components {
        request_bodies: field("requestBodies"),
        responses: field("responses"),
        parameters: field("parameters"),
        headers: field("headers"),
        schemas: field("schemas"),
        security_schemes: field("securitySchemes"),
    }
}

fn take_map(name: &str, value: Value) -> Option<EntryMap> {
    match value {
        Value::Object(map) => Some(map),
        Value::Null => None,
        other => {
            tracing::warn!(
                "ignoring {name}: expected an object, found {}",
                value_kind(&other)
            );
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
