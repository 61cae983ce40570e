//! Client error types

use reqwest::StatusCode;
use shared::FormatError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error status not covered below
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Authentication required or token expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server-side validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid local input (dates, times, files)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File system error (uploads, downloads, session file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FormatError> for ClientError {
    fn from(err: FormatError) -> Self {
        ClientError::InvalidInput(err.to_string())
    }
}

impl ClientError {
    /// Map a non-success status and the server's message (if any)
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::CONFLICT => {
                ClientError::Validation(message)
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status behind this error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Validation(_) => Some(400),
            _ => None,
        }
    }

    /// Whether the session should be dropped and the user sent to login
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }

    /// String shown to the user (toast / CLI error line)
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Http(e) if e.is_timeout() => "Permintaan ke server melebihi batas waktu".into(),
            ClientError::Http(e) if e.is_connect() => "Tidak dapat terhubung ke server".into(),
            ClientError::Http(_) => "Permintaan ke server gagal".into(),
            ClientError::Api { message, .. }
            | ClientError::Unauthorized(message)
            | ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
            | ClientError::InvalidInput(message) => message.clone(),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                "Respons server tidak dikenali".into()
            }
            ClientError::Io(e) => format!("Gagal mengakses berkas: {}", e),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, None),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, Some("x".into())),
            ClientError::Validation(m) if m == "x"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None),
            ClientError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn test_display_message_prefers_server_message() {
        let err = ClientError::from_status(
            StatusCode::CONFLICT,
            Some("Gedung sudah dipinjam pada waktu tersebut".into()),
        );
        assert_eq!(err.display_message(), "Gedung sudah dipinjam pada waktu tersebut");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_generic_message_without_body() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, None);
        assert_eq!(err.display_message(), "Not Found");
    }

    #[test]
    fn test_format_error_is_invalid_input() {
        let err: ClientError = shared::util::parse_input_date("31-12-2024").unwrap_err().into();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
