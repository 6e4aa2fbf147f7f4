//! Identity collaborator seam.
//!
//! Authentication is delegated wholesale to an external provider; this crate
//! only defines the contract it is consumed through plus an in-memory stand-in
//! for tests and demos. No session or token handling lives here.

use crate::auth::error::AuthError;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{info, warn};

/// Minimum password length the stub provider accepts.
const MIN_PASSWORD_LEN: usize = 6;

/// A credential returned by a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub user_id: String,
    pub email: String,
}

/// Contract for the external identity provider.
///
/// Consumed once, at sign-up; everything past that point is the provider's
/// business.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserCredential, AuthError>;
}

/// In-memory identity provider for tests and demos.
///
/// Applies the shape checks a hosted provider would (plausible email,
/// minimum password length, unique email) and mints sequential user ids.
pub struct StubIdentity {
    registered: Mutex<HashSet<String>>,
    next_id: AtomicU64,
}

impl StubIdentity {
    pub fn new() -> Self {
        Self {
            registered: Mutex::new(HashSet::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for StubIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserCredential, AuthError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            warn!(%email, "Sign-up with malformed email");
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            warn!(%email, "Sign-up with short password");
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LEN));
        }

        let mut registered = self
            .registered
            .lock()
            .map_err(|_| AuthError::Unavailable("identity state poisoned".to_string()))?;
        if !registered.insert(email.to_lowercase()) {
            return Err(AuthError::Rejected(format!("email already in use: {email}")));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user_id = format!("user_{id}");
        info!(%email, %user_id, "User signed up");
        Ok(UserCredential {
            user_id,
            email: email.to_string(),
        })
    }
}
