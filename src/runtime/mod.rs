//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`InventorySystem`] - Spawns the database engine and wires per-session
//!   sync components over it
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use tracing::*;
