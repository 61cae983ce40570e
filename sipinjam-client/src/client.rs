//! SipinjamClient - 统一入口
//!
//! Owns the HTTP client and configuration and hands out per-resource API
//! wrappers. Generic over [`HttpClient`] so tests can swap the transport.

use crate::api::{
    AuthApi, BookingsApi, BuildingsApi, FacilitiesApi, ManagersApi, NotificationsApi,
    TransactionsApi,
};
use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient, Session};

#[derive(Debug, Clone)]
pub struct SipinjamClient<C: HttpClient = NetworkHttpClient> {
    http: C,
    config: ClientConfig,
}

impl SipinjamClient<NetworkHttpClient> {
    /// Build a networked client for `session` (anonymous before login)
    pub fn new(config: ClientConfig, session: Session) -> ClientResult<Self> {
        let http = config.build_http_client(session)?;
        tracing::debug!(base_url = %http.base_url(), "Client created");
        Ok(Self { http, config })
    }

    /// Same connection pool, different session (after login / logout)
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            http: self.http.with_session(session),
            config: self.config.clone(),
        }
    }
}

impl<C: HttpClient> SipinjamClient<C> {
    pub fn from_parts(http: C, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn auth(&self) -> AuthApi<'_, C> {
        AuthApi::new(&self.http)
    }

    pub fn buildings(&self) -> BuildingsApi<'_, C> {
        BuildingsApi::new(&self.http)
    }

    pub fn bookings(&self) -> BookingsApi<'_, C> {
        BookingsApi::new(&self.http)
    }

    pub fn transactions(&self) -> TransactionsApi<'_, C> {
        TransactionsApi::new(&self.http)
    }

    pub fn facilities(&self) -> FacilitiesApi<'_, C> {
        FacilitiesApi::new(&self.http)
    }

    pub fn notifications(&self) -> NotificationsApi<'_, C> {
        NotificationsApi::new(&self.http)
    }

    pub fn managers(&self) -> ManagersApi<'_, C> {
        ManagersApi::new(&self.http)
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Rows per page for list calls
    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }
}
