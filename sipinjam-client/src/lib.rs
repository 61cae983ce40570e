//! SIPINJAM Client - HTTP client for the facility booking API
//!
//! Provides the REST client, per-resource API wrappers, and the async
//! building blocks the screens share (debounced search with stale-response
//! discard, loading/error view state, session storage).

pub mod api;
pub mod client;
pub mod config;
pub mod debounce;
pub mod download;
pub mod error;
pub mod http;
pub mod multipart;
pub mod search;
pub mod session;
pub mod state;

pub use client::SipinjamClient;
pub use config::ClientConfig;
pub use debounce::Debouncer;
pub use download::Download;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use multipart::FormPayload;
pub use search::{BuildingFilter, RequestTracker, SearchController, SearchOutcome, SearchOutcomes, SearchPanel};
pub use session::{Session, SessionStore};
pub use state::{Loadable, Notice};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, UserInfo, UserRole};
pub use shared::response::{PageMeta, Paginated};
