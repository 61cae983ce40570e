//! View state for a remote resource
//!
//! Every screen follows the same shape: flip `loading`, run one request,
//! then store either the data or a user-facing error message.

use crate::ClientResult;

/// Transient message for the user (toast / status line)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Loading / data / error triple
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started; previous data stays visible
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of a request. Errors keep the previous data and
    /// produce a notice for the user.
    pub fn apply(&mut self, result: ClientResult<T>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Request failed");
                let message = e.display_message();
                self.error = Some(message.clone());
                Some(Notice::Error(message))
            }
        }
    }

    /// Run `fetch` and apply its result
    pub async fn load<F>(&mut self, fetch: F) -> Option<Notice>
    where
        F: std::future::Future<Output = ClientResult<T>>,
    {
        self.start();
        let result = fetch.await;
        self.apply(result)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn test_error_keeps_previous_data() {
        let mut state = Loadable::new();
        state.start();
        assert!(state.loading);
        assert!(state.apply(Ok(vec![1, 2, 3])).is_none());
        assert!(!state.loading);

        state.start();
        let notice = state
            .apply(Err(ClientError::Validation("Tanggal sudah dipesan".into())))
            .unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message(), "Tanggal sudah dipesan");
        assert_eq!(state.data, Some(vec![1, 2, 3]));
        assert_eq!(state.error.as_deref(), Some("Tanggal sudah dipesan"));
    }

    #[tokio::test]
    async fn test_load_runs_future() {
        let mut state: Loadable<u32> = Loadable::new();
        let notice = state.load(async { Ok(7) }).await;
        assert!(notice.is_none());
        assert_eq!(state.data, Some(7));
        assert!(state.error.is_none());
    }
}
