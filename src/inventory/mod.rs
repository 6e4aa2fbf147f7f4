//! Inventory domain: name canonicalization, snapshot sync, and errors.

pub mod error;
pub mod name;
pub mod sync;

pub use error::*;
pub use name::*;
pub use sync::*;
