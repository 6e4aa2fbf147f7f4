//! Pure data structures shared across the crate.

pub mod item;

pub use item::*;
