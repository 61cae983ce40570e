//! Per-invocation context: configured client + saved session

use anyhow::bail;
use shared::client::UserInfo;
use sipinjam_client::{ClientError, ClientResult, Session, SessionStore, SipinjamClient};

use crate::cli::GlobalArgs;

/// Overrides the saved session, e.g. for scripts
const TOKEN_ENV: &str = "SIPINJAM_TOKEN";

pub struct AppContext {
    pub client: SipinjamClient,
    pub store: SessionStore,
}

impl AppContext {
    pub fn new(args: &GlobalArgs) -> anyhow::Result<Self> {
        let store = SessionStore::new(&args.work_dir);
        let session = match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => {
                tracing::debug!("Using token from {TOKEN_ENV}");
                Session::with_token(token.trim())
            }
            _ => store.load().unwrap_or_default(),
        };
        let client = SipinjamClient::new(args.client_config(), session)?;
        Ok(Self { client, store })
    }

    pub fn page_size(&self) -> u32 {
        self.client.page_size()
    }

    pub fn require_login(&self) -> anyhow::Result<()> {
        if !self.client.session().is_authenticated() {
            bail!("Belum login. Jalankan `sipinjam login` terlebih dahulu");
        }
        Ok(())
    }

    /// Staff-only commands; role is only known for sessions created by `login`
    pub fn require_staff(&self) -> anyhow::Result<()> {
        self.require_login()?;
        if let Some(user) = self.client.session().user()
            && !user.role.is_staff()
        {
            bail!("Perintah ini hanya untuk admin atau pengelola gedung");
        }
        Ok(())
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.client.session().user()
    }

    /// Turn a client error into the message shown to the user. An expired
    /// token also clears the saved session.
    pub fn check<T>(&self, result: ClientResult<T>) -> anyhow::Result<T> {
        result.map_err(|e| self.fail(e))
    }

    fn fail(&self, err: ClientError) -> anyhow::Error {
        if err.is_auth_error() {
            if let Err(e) = self.store.delete() {
                tracing::warn!(error = %e, "Failed to remove session file");
            }
            return anyhow::anyhow!("{} (sesi dihapus, silakan login ulang)", err.display_message());
        }
        anyhow::anyhow!(err.display_message())
    }
}
