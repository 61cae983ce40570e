//! API Response types
//!
//! The booking API wraps payloads as `{ "data": ..., "message": ..., "meta": ... }`
//! but some endpoints return a bare value. Everything here unwraps defensively.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names under which list endpoints nest their array
const LIST_FIELDS: &[&str] = &["data", "items", "buildings", "results"];

/// Unified API response structure
///
/// ```json
/// {
///     "message": "Berhasil",
///     "data": { ... },
///     "meta": { "page": 1, "limit": 10, "total": 42, "totalPages": 5 }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Pagination metadata for list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            meta: None,
        }
    }

    /// Attach a message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page number (1-based)
    #[serde(alias = "currentPage")]
    pub page: u32,
    /// Items per page
    #[serde(alias = "perPage", alias = "per_page", default)]
    pub limit: u32,
    /// Total number of items
    #[serde(alias = "totalItems", alias = "total_items", default)]
    pub total: u64,
    /// Total number of pages
    #[serde(alias = "total_pages", default)]
    pub total_pages: u32,
}

impl PageMeta {
    /// Create pagination metadata, deriving the page count
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Paginated list
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// List of items
    pub items: Vec<T>,
    /// Pagination metadata
    pub meta: PageMeta,
}

impl<T: DeserializeOwned> Paginated<T> {
    /// Decode a list response, using `page`/`limit` from the request when
    /// the server omitted pagination metadata.
    pub fn from_value(value: Value, page: u32, limit: u32) -> Result<Self, serde_json::Error> {
        let meta = find_meta(&value);
        let items = decode_list::<T>(value)?;
        let meta = match meta {
            Some(meta) => meta,
            None => {
                tracing::debug!(count = items.len(), "list response without pagination meta");
                let mut meta = PageMeta::new(page, limit.max(items.len() as u32), items.len() as u64);
                meta.page = if items.is_empty() { 1 } else { page };
                meta
            }
        };
        Ok(Self { items, meta })
    }
}

fn find_meta(value: &Value) -> Option<PageMeta> {
    let obj = value.as_object()?;
    for key in ["meta", "pagination"] {
        if let Some(meta) = obj.get(key) {
            if let Ok(meta) = serde_json::from_value::<PageMeta>(meta.clone()) {
                return Some(meta);
            }
        }
    }
    // `{ data: { items: [...], meta: {...} } }`
    obj.get("data").filter(|d| d.is_object()).and_then(find_meta)
}

/// Extract the list payload from a response
///
/// - bare array → the array unchanged
/// - object with an array under `data` (or `items`, `buildings`, `results`) → that array,
///   one level of `data` nesting is followed
/// - anything else → empty list
pub fn extract_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => {
            for key in LIST_FIELDS {
                match obj.remove(*key) {
                    Some(Value::Array(items)) => return items,
                    Some(nested @ Value::Object(_)) if *key == "data" => {
                        return extract_list(nested);
                    }
                    _ => {}
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Extract and decode a list payload
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, serde_json::Error> {
    extract_list(value)
        .into_iter()
        .map(serde_json::from_value)
        .collect()
}

/// Unwrap a single-entity payload: `{ data: X }` → `X`, anything else as-is
pub fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut obj) if obj.contains_key("data") => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Server-supplied message, if any (`message` or `error` field)
pub fn message_of(value: &Value) -> Option<String> {
    let obj = value.as_object()?;
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
