//! Error types for the inventory sync component.

use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by inventory operations.
///
/// This is the discriminated result the view layer consumes; nothing in the
/// component panics the caller, worst case is a stale snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The raw item name contains no usable letters (empty names included).
    #[error("invalid item name: {0:?}")]
    InvalidName(String),

    /// A remote store call failed. The in-memory snapshot is left unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
