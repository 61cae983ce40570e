//! Auth API

use serde_json::Value;
use shared::client::{LoginRequest, LoginResponse, UserInfo};

use super::{AUTH, decode_one};
use crate::{ClientResult, HttpClient, Session};

pub struct AuthApi<'a, C: HttpClient> {
    http: &'a C,
}

impl<'a, C: HttpClient> AuthApi<'a, C> {
    pub fn new(http: &'a C) -> Self {
        Self { http }
    }

    /// Login with email and password; the returned session is not stored anywhere
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let value: Value = self.http.post(&format!("{AUTH}/login"), &request).await?;
        let login: LoginResponse = decode_one(value)?;
        tracing::info!(user = %login.user.email, role = ?login.user.role, "Logged in");
        Ok(login.into())
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let value: Value = self.http.get(&format!("{AUTH}/me")).await?;
        decode_one(value)
    }

    /// Invalidate the token server-side
    pub async fn logout(&self) -> ClientResult<()> {
        let _: Value = self.http.post_empty(&format!("{AUTH}/logout")).await?;
        Ok(())
    }
}
