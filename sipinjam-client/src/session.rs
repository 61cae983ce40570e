// sipinjam-client/src/session.rs
// 会话 - 显式传入 HTTP 客户端, 可选 JSON 文件持久化

use serde::{Deserialize, Serialize};
use shared::client::{LoginResponse, UserInfo};
use std::fs;
use std::path::{Path, PathBuf};

/// Authenticated session, passed explicitly to the HTTP client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for API authentication
    pub token: Option<String>,
    /// Current user information after login
    pub user: Option<UserInfo>,
}

impl Session {
    /// Creates a new empty (anonymous) session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session with a bare token (e.g. from `SIPINJAM_TOKEN`)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }

    /// Returns the token if available.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the current user info if available.
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}

impl From<LoginResponse> for Session {
    fn from(login: LoginResponse) -> Self {
        Self {
            token: Some(login.token),
            user: Some(login.user),
        }
    }
}

/// Session file storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub const FILE_NAME: &'static str = "session.json";

    /// Store under `base_path/session.json`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join(Self::FILE_NAME);
        Self { path }
    }

    /// 确保目录存在
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Save the session
    pub fn save(&self, session: &Session) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Load the session; a missing or unreadable file yields `None`
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session file");
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the session file
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
