use anyhow::{Context, Result};
use keyring::Entry;
use std::sync::Mutex;

// --- Bearer token persistence ---

const KEYRING_SERVICE: &str = "draftly";
const KEYRING_ACCOUNT: &str = "access_token";

/// Key-value persistence port for the session credential. Exactly one token
/// is live per process; `get` is synchronous so the dispatcher can consult it
/// on every outgoing request.
pub trait TokenStore: Send + Sync {
    /// Stores the token in memory and in durable storage. The token is an
    /// opaque string; no shape validation happens here.
    fn set(&self, token: &str) -> Result<()>;
    /// Returns the current token, if any.
    fn get(&self) -> Option<String>;
    /// Removes the token from memory and durable storage. Safe to call when
    /// no token is stored.
    fn clear(&self) -> Result<()>;
}

/// Token store backed by the OS keychain under a fixed service/account pair,
/// so a session survives process restarts. The keychain is read once at
/// construction; afterwards reads are served from the in-process copy.
pub struct KeyringTokenStore {
    cached: Mutex<Option<String>>,
}

impl KeyringTokenStore {
    pub fn new() -> Result<Self> {
        let cached = match Self::entry()?.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                // A broken keychain should not prevent startup; the user can
                // still log in and work with an in-memory session.
                log::warn!("Could not restore session token from keyring: {}", e);
                None
            }
        };
        Ok(Self {
            cached: Mutex::new(cached),
        })
    }

    fn entry() -> Result<Entry> {
        Entry::new(KEYRING_SERVICE, KEYRING_ACCOUNT).context("Failed to create keyring entry")
    }
}

impl TokenStore for KeyringTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .context("Failed to store session token in keyring")?;
        *self.cached.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.cached.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn clear(&self) -> Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => return Err(e).context("Failed to remove session token from keyring"),
        }
        *self.cached.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

/// Process-local token store. Used by the test suites and wherever a durable
/// session is not wanted.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
