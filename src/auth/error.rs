//! Error types for the identity collaborator.

use thiserror::Error;

/// Errors a sign-up attempt can surface.
///
/// These come back to the caller as a `Result` so the view can display
/// something; sign-up failures are never swallowed into a log line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// The email address is not plausibly shaped.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The password does not meet the provider's minimum length.
    #[error("password too weak: must be at least {0} characters")]
    WeakPassword(usize),

    /// The provider refused the sign-up (e.g. the email is already taken).
    #[error("sign-up rejected: {0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
