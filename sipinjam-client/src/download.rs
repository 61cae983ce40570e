//! Binary export downloads
//!
//! Export endpoints stream a spreadsheet. The file name comes from
//! `Content-Disposition` when present, otherwise from the caller's fallback.

use std::path::{Path, PathBuf};

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderMap};

/// Downloaded file held in memory
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Download {
    pub(crate) fn from_parts(headers: &HeaderMap, bytes: Vec<u8>, fallback_name: &str) -> Self {
        let file_name = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| sanitize_file_name(fallback_name));
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Write into `dir`, creating it if needed; returns the written path
    pub async fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes).await?;
        tracing::info!(path = %path.display(), size = self.bytes.len(), "Export saved");
        Ok(path)
    }
}

/// Default export name, e.g. `bookings-20241225.xlsx`
pub fn default_export_name(resource: &str) -> String {
    format!("{}-{}.xlsx", resource, chrono::Local::now().format("%Y%m%d"))
}

/// Extract the file name from a `Content-Disposition` header value.
/// `filename*=UTF-8''...` wins over `filename=...`.
pub fn filename_from_disposition(value: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;
    for part in value.split(';').map(str::trim) {
        let Some((key, raw)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let raw = raw.trim();
                let encoded = raw.split_once("''").map(|(_, v)| v).unwrap_or(raw);
                extended = Some(percent_decode(encoded));
            }
            "filename" => plain = Some(raw.trim().trim_matches('"').to_string()),
            _ => {}
        }
    }
    extended
        .or(plain)
        .map(|name| sanitize_file_name(&name))
        .filter(|name| !name.is_empty())
}

/// Invalid UTF-8 in the decoded bytes is replaced rather than rejected
fn percent_decode(input: &str) -> String {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(input.as_bytes())).into_owned(),
    }
}

/// Keep only the final path component, drop characters that are unsafe on disk
fn sanitize_file_name(name: &str) -> String {
    let last = name.rsplit(['/', '\\']).next().unwrap_or(name);
    last.chars()
        .filter(|c| !c.is_control() && !matches!(*c, ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect::<String>()
        .trim()
        .trim_start_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_filename() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="peminjaman.xlsx""#),
            Some("peminjaman.xlsx".into())
        );
    }

    #[test]
    fn test_extended_filename_wins() {
        assert_eq!(
            filename_from_disposition(
                "attachment; filename=\"fallback.xlsx\"; filename*=UTF-8''laporan%20transaksi.xlsx"
            ),
            Some("laporan transaksi.xlsx".into())
        );
    }

    #[test]
    fn test_extended_filename_utf8() {
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''Peminjaman%20Gedung%20%E2%80%93%20Mei.xlsx"),
            Some("Peminjaman Gedung \u{2013} Mei.xlsx".into())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename*=UTF-8''rusak%FF.xlsx"),
            Some("rusak\u{FFFD}.xlsx".into())
        );
    }

    #[test]
    fn test_path_components_stripped() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="../../etc/passwd""#),
            Some("passwd".into())
        );
        assert_eq!(filename_from_disposition("inline"), None);
    }

    #[test]
    fn test_fallback_name() {
        let download = Download::from_parts(&HeaderMap::new(), vec![1], "bookings-20241225.xlsx");
        assert_eq!(download.file_name, "bookings-20241225.xlsx");
        assert!(download.content_type.is_none());
        assert!(default_export_name("transactions").starts_with("transactions-"));
    }
}
