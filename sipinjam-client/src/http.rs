// sipinjam-client/src/http.rs
// HTTP 客户端 - 网络通信

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::download::Download;
use crate::multipart::FormPayload;
use crate::{ClientConfig, ClientError, ClientResult, Session};

/// HTTP client trait
///
/// Paths are relative to the configured base URL (`api/v1/...`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormPayload,
    ) -> ClientResult<T>;
    async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormPayload,
    ) -> ClientResult<T>;
    /// Binary download (spreadsheet exports)
    async fn download<Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
        fallback_name: &str,
    ) -> ClientResult<Download>;
    fn session(&self) -> &Session;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Same connection pool, different session
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session,
        }
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = self.session.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn send(&self, method: Method, path: &str, req: RequestBuilder) -> ClientResult<reqwest::Response> {
        let started = Instant::now();
        let response = req.send().await.inspect_err(|e| {
            tracing::warn!(%method, path, error = %e, "Request failed");
        })?;
        let status = response.status();
        tracing::debug!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API request"
        );
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .as_ref()
            .and_then(shared::response::message_of)
            .or_else(|| {
                let trimmed = text.trim();
                (!trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<'))
                    .then(|| trimmed.to_string())
            });
        let err = ClientError::from_status(status, message);
        tracing::warn!(%method, path, status = status.as_u16(), error = %err, "API error");
        Err(err)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        let response = self.send(method, path, req).await?;
        let bytes = response.bytes().await?;
        // 204 / empty body
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(path, error = %e, "Undecodable response body");
            ClientError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path);
        self.execute(Method::GET, path, req).await
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.request(Method::GET, path).query(query);
        self.execute(Method::GET, path, req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.execute(Method::POST, path, req).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::POST, path);
        self.execute(Method::POST, path, req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).json(body);
        self.execute(Method::PUT, path, req).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PATCH, path).json(body);
        self.execute(Method::PATCH, path, req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, req).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormPayload,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).multipart(form.into_reqwest()?);
        self.execute(Method::POST, path, req).await
    }

    async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormPayload,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).multipart(form.into_reqwest()?);
        self.execute(Method::PUT, path, req).await
    }

    async fn download<Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
        fallback_name: &str,
    ) -> ClientResult<Download> {
        let req = self.request(Method::GET, path).query(query);
        let response = self.send(Method::GET, path, req).await?;
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        Ok(Download::from_parts(&headers, bytes.to_vec(), fallback_name))
    }

    fn session(&self) -> &Session {
        &self.session
    }
}
