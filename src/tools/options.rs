//! Send options and query parameters

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for sending a single API request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendOptions {
    /// The JSON body of the request.
    #[serde(default)]
    pub body: Option<serde_json::Value>,

    /// Query parameters appended to the request URL, passed through verbatim.
    #[serde(default)]
    pub query: BTreeMap<String, serde_json::Value>,
}

impl SendOptions {
    /// Creates new empty SendOptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the body of the request.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a query parameter.
    pub fn with_query(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.query.insert(key.to_string(), value.into());
        self
    }

    /// Returns the query parameters as string pairs ready for the URL.
    ///
    /// Strings are sent as-is, `null` values are dropped and every other
    /// value is sent as its JSON text.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter_map(|(key, value)| {
                prepare_query_param_value(value).map(|v| (key.clone(), v))
            })
            .collect()
    }
}

fn prepare_query_param_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Options for list, bulk update and bulk delete operations.
///
/// `fields` carries the service's filter/projection grammar, e.g.
/// `id(>"1"),name` or `sort_order(>="2")`. It is never interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Any other query parameter.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ListOptions {
    /// Creates new ListOptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `fields` expression.
    pub fn fields(mut self, fields: &str) -> Self {
        self.fields = Some(fields.to_string());
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of items to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets an arbitrary query parameter.
    pub fn param(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

impl From<ListOptions> for SendOptions {
    fn from(opts: ListOptions) -> Self {
        let mut send = SendOptions {
            body: None,
            query: opts.extra,
        };
        if let Some(fields) = opts.fields {
            send.query.insert("fields".to_string(), serde_json::json!(fields));
        }
        if let Some(limit) = opts.limit {
            send.query.insert("limit".to_string(), serde_json::json!(limit));
        }
        if let Some(offset) = opts.offset {
            send.query.insert("offset".to_string(), serde_json::json!(offset));
        }
        send
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_into_send_options() {
        let send: SendOptions = ListOptions::new()
            .fields(r#"id(>"1")"#)
            .limit(100)
            .offset(200)
            .param("subscribed", true)
            .into();

        assert!(send.body.is_none());
        assert_eq!(
            send.query_pairs(),
            vec![
                ("fields".to_string(), r#"id(>"1")"#.to_string()),
                ("limit".to_string(), "100".to_string()),
                ("offset".to_string(), "200".to_string()),
                ("subscribed".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_drop_null() {
        let send = SendOptions::new()
            .with_query("URL", "https://example.com/a.png")
            .with_query("skip", serde_json::Value::Null);

        assert_eq!(
            send.query_pairs(),
            vec![("URL".to_string(), "https://example.com/a.png".to_string())]
        );
    }

    #[test]
    fn test_with_body() {
        let send = SendOptions::new().with_body(json!({ "name": "x" }));
        assert_eq!(send.body, Some(json!({ "name": "x" })));
    }
}
