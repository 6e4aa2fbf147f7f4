//! Identity collaborator: the sign-up contract and a test stand-in.

pub mod error;
pub mod provider;

pub use error::*;
pub use provider::*;
