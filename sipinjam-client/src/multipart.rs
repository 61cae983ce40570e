//! Multipart form payloads
//!
//! File-bearing create/update calls switch from JSON to multipart. Scalar
//! fields become text parts; arrays and objects are JSON-encoded into a
//! single text part (the server parses e.g. `facilities` back into a list).

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::{ClientError, ClientResult};

/// A file attached to a multipart form
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Transport-independent multipart payload
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable struct into text fields
    pub fn from_serializable<T: Serialize>(value: &T) -> ClientResult<Self> {
        let Value::Object(map) = serde_json::to_value(value)? else {
            return Err(ClientError::InvalidInput(
                "multipart payload must be an object".into(),
            ));
        };
        let mut payload = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => payload.fields.push((key, s)),
                Value::Bool(_) | Value::Number(_) => payload.fields.push((key, value.to_string())),
                Value::Array(_) | Value::Object(_) => {
                    payload.fields.push((key, serde_json::to_string(&value)?))
                }
            }
        }
        Ok(payload)
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn with_bytes(mut self, field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        self.files.push(FilePart {
            field: field.into(),
            file_name,
            mime,
            bytes,
        });
        self
    }

    /// Read a file from disk and attach it
    pub async fn with_file(self, field: impl Into<String>, path: &Path) -> ClientResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::InvalidInput(format!("invalid file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        tracing::debug!(file = %file_name, size = bytes.len(), "Attaching file");
        Ok(self.with_bytes(field, file_name, bytes))
    }

    pub(crate) fn into_reqwest(self) -> ClientResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}
