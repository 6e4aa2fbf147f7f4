//! Keyed document store: the engine actor, its client handle, and errors.
//!
//! The store exposes exactly four calls per collection — `list`, `get`,
//! `set`, `delete` — each atomic on its own, nothing more. Consumers that
//! compose a read with a later write (the inventory sync does) inherit the
//! resulting race window; see [`crate::inventory`].
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that answers requests from an
//! expectation queue without a running engine.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
