//! Operator session state and the credential verification capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page and the dashboard shell share one `SessionStore` through a
//! Leptos context. The login page is the only writer of the authenticated
//! flag; the shell reads it on every navigation and clears it on confirmed
//! logout.
//!
//! DESIGN
//! ======
//! Verification sits behind the `Authenticator` trait so a real backend can
//! replace `StaticCredentials` without touching the shell state machine.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use uuid::Uuid;

/// Username used by the default authorized credential pair.
pub const DEFAULT_USERNAME: &str = "admin";
/// Access key used by the default authorized credential pair.
pub const DEFAULT_ACCESS_KEY: &str = "admin123";

/// Username / access-key pair entered on the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { username: username.into(), secret: secret.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Credential mismatch. The only error kind the console core produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid credentials! Please use correct admin username and access key.")]
pub struct AuthFailure;

/// Proof of a successful `authenticate` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
}

/// Pluggable credential verification.
pub trait Authenticator: Send + Sync {
    /// Check `credentials` against the authorized set.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailure` when the pair is not authorized.
    fn verify(&self, credentials: &Credentials) -> Result<(), AuthFailure>;
}

/// Fixed in-memory set of authorized credential pairs. Comparison is exact.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    accounts: Vec<Credentials>,
}

impl StaticCredentials {
    #[must_use]
    pub fn new(accounts: Vec<Credentials>) -> Self {
        Self { accounts }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(vec![Credentials::new(DEFAULT_USERNAME, DEFAULT_ACCESS_KEY)])
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> Result<(), AuthFailure> {
        if self.accounts.iter().any(|account| account == credentials) {
            Ok(())
        } else {
            Err(AuthFailure)
        }
    }
}

/// Shared handle to the active `Authenticator`, provided via context.
#[derive(Clone)]
pub struct AuthenticatorHandle(Arc<dyn Authenticator>);

impl AuthenticatorHandle {
    pub fn new(authenticator: impl Authenticator + 'static) -> Self {
        Self(Arc::new(authenticator))
    }

    #[must_use]
    pub fn get(&self) -> &dyn Authenticator {
        self.0.as_ref()
    }
}

impl Default for AuthenticatorHandle {
    fn default() -> Self {
        Self::new(StaticCredentials::default())
    }
}

/// Process-wide session context. Created unauthenticated at app start.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    /// Fresh, unauthenticated store.
    #[must_use]
    pub fn init() -> Self {
        Self::default()
    }

    /// Verify `credentials` and, on success, mark the store authenticated.
    ///
    /// A failed attempt leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailure` when `authenticator` rejects the pair.
    pub fn authenticate(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<Session, AuthFailure> {
        if let Err(e) = authenticator.verify(credentials) {
            log::warn!("login rejected");
            return Err(e);
        }
        let session = Session { id: Uuid::new_v4(), username: credentials.username.clone() };
        log::info!("session {} opened", session.id);
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Mark the store unauthenticated. Idempotent.
    pub fn terminate(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("session {} terminated", session.id);
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}
