use crate::credentials::TokenStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared authenticated/anonymous flag. The session controller owns the
/// authoritative transitions; the request dispatcher flips it to anonymous
/// when the backend rejects the credential. Consumers subscribe instead of
/// polling so a forced logout propagates immediately.
#[derive(Clone)]
pub struct SessionSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl SessionSignal {
    pub fn new(authenticated: bool) -> Self {
        let (tx, _rx) = watch::channel(authenticated);
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, authenticated: bool) {
        self.tx.send_replace(authenticated);
    }

    pub fn is_authenticated(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Owns the login/logout lifecycle. Session state is derived, not stored:
/// authenticated simply means the token store holds a credential.
pub struct SessionController {
    tokens: Arc<dyn TokenStore>,
    signal: SessionSignal,
}

impl SessionController {
    /// Probes the token store so a previously persisted session is restored
    /// at process start.
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        let restored = tokens.get().is_some();
        if restored {
            log::info!("Restored a persisted session token");
        }
        Self {
            tokens,
            signal: SessionSignal::new(restored),
        }
    }

    /// Handle shared with the dispatcher and any UI consumer.
    pub fn signal(&self) -> SessionSignal {
        self.signal.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.signal.is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.signal.subscribe()
    }

    pub fn login(&self, token: &str) -> Result<()> {
        self.tokens.set(token)?;
        self.signal.set(true);
        log::info!("Session established");
        Ok(())
    }

    /// Clears the credential and signals anonymous. Idempotent; callers treat
    /// this as a hard reset and reload whatever state depended on the session.
    pub fn logout(&self) -> Result<()> {
        self.tokens.clear()?;
        self.signal.set(false);
        log::info!("Session cleared");
        Ok(())
    }
}
